//! Trip matching
//!
//! A package matches a search when all four predicates hold: destination
//! text, budget, party size and duration. Results keep catalog order; there
//! is no scoring.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{SearchCriteria, TripPackage};

/// Default +/- window, in days, between requested and actual trip length
pub const DEFAULT_DURATION_TOLERANCE_DAYS: u32 = 2;

/// Filters a catalog against search criteria
#[derive(Debug, Clone)]
pub struct TripMatcher {
    catalog: Arc<Catalog>,
    duration_tolerance_days: u32,
}

impl TripMatcher {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            duration_tolerance_days: DEFAULT_DURATION_TOLERANCE_DAYS,
        }
    }

    #[must_use]
    pub fn with_duration_tolerance(mut self, days: u32) -> Self {
        self.duration_tolerance_days = days;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All packages matching `criteria`, in catalog order
    #[must_use]
    #[tracing::instrument(level = "debug", skip(self), fields(destination = %criteria.destination))]
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&TripPackage> {
        let matches: Vec<&TripPackage> = self
            .catalog
            .trips()
            .iter()
            .filter(|trip| self.is_match(trip, criteria))
            .collect();

        debug!(
            "{} of {} trips match",
            matches.len(),
            self.catalog.len()
        );
        matches
    }

    /// Owned variant of [`TripMatcher::search`]
    #[must_use]
    pub fn search_trips(&self, criteria: &SearchCriteria) -> Vec<TripPackage> {
        self.search(criteria).into_iter().cloned().collect()
    }

    #[must_use]
    pub fn is_match(&self, trip: &TripPackage, criteria: &SearchCriteria) -> bool {
        trip_matches(trip, criteria, self.duration_tolerance_days)
    }
}

fn trip_matches(trip: &TripPackage, criteria: &SearchCriteria, tolerance_days: u32) -> bool {
    destination_matches(trip, &criteria.destination)
        && budget_matches(trip, criteria.budget)
        && capacity_matches(trip, criteria.people)
        && duration_matches(trip, criteria.duration, tolerance_days)
}

/// Case-insensitive substring match against destination or title.
/// An empty query matches everything.
#[must_use]
pub fn destination_matches(trip: &TripPackage, query: &str) -> bool {
    let query = query.to_lowercase();
    trip.destination.to_lowercase().contains(&query) || trip.title.to_lowercase().contains(&query)
}

#[must_use]
pub fn budget_matches(trip: &TripPackage, budget: u32) -> bool {
    trip.budget.contains(budget)
}

#[must_use]
pub fn capacity_matches(trip: &TripPackage, people: u32) -> bool {
    people <= trip.max_people
}

#[must_use]
pub fn duration_matches(trip: &TripPackage, duration: u32, tolerance_days: u32) -> bool {
    duration.abs_diff(trip.duration) <= tolerance_days
}

/// Search the catalog with the default tolerance
#[must_use]
pub fn search_trips(catalog: &Catalog, criteria: &SearchCriteria) -> Vec<TripPackage> {
    catalog
        .trips()
        .iter()
        .filter(|trip| trip_matches(trip, criteria, DEFAULT_DURATION_TOLERANCE_DAYS))
        .cloned()
        .collect()
}
