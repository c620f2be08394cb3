//! Data models for the TripPlanner application
//!
//! This module contains the core domain models organized by concern:
//! - Trip: catalog packages, budgets and day-by-day itineraries
//! - Criteria: the traveler's search parameters

pub mod criteria;
pub mod trip;

// Re-export all public types for convenient access
pub use criteria::SearchCriteria;
pub use trip::{BudgetRange, Category, DayItinerary, Difficulty, TripPackage};
