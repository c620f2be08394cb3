//! `TripPlanner` - Curated trip package search and planning
//!
//! This library provides the trip catalog, the matcher that filters it
//! against a traveler's criteria, and the planner front end (form, views,
//! rendering and booking confirmations) used by the CLI and HTTP API.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod planner;
pub mod web;

// Re-export core types for public API
pub use catalog::{Catalog, CatalogLoader};
pub use config::TripPlannerConfig;
pub use error::TripPlannerError;
pub use matcher::{TripMatcher, search_trips};
pub use models::{BudgetRange, Category, DayItinerary, Difficulty, SearchCriteria, TripPackage};
pub use planner::{Notification, Notifier, PlannerSession, SearchForm, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripPlannerError>;
