//! Which screen the traveler is looking at
//!
//! Search -> Results -> Details, with explicit back transitions. A transition
//! that is not allowed from the current screen returns an error and leaves
//! the view untouched.

use crate::error::TripPlannerError;
use crate::models::TripPackage;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Search,
    Results {
        trips: Vec<TripPackage>,
    },
    /// One selected trip; the result list is kept for "back to results"
    Details {
        trip: TripPackage,
        results: Vec<TripPackage>,
    },
}

impl ViewState {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Search => "search",
            ViewState::Results { .. } => "results",
            ViewState::Details { .. } => "details",
        }
    }

    #[must_use]
    pub fn is_search(&self) -> bool {
        matches!(self, ViewState::Search)
    }

    /// Current result list, on both the results and the details screen
    #[must_use]
    pub fn results(&self) -> Option<&[TripPackage]> {
        match self {
            ViewState::Search => None,
            ViewState::Results { trips } => Some(trips.as_slice()),
            ViewState::Details { results, .. } => Some(results.as_slice()),
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&TripPackage> {
        match self {
            ViewState::Details { trip, .. } => Some(trip),
            _ => None,
        }
    }

    /// Search -> Results
    pub fn show_results(&mut self, trips: Vec<TripPackage>) -> Result<()> {
        if !self.is_search() {
            return Err(self.rejected("show results"));
        }
        *self = ViewState::Results { trips };
        Ok(())
    }

    /// Results -> Details for the trip with `id`
    pub fn select_trip(&mut self, id: &str) -> Result<()> {
        let ViewState::Results { trips } = self else {
            return Err(self.rejected("select a trip"));
        };
        let trip = trips
            .iter()
            .find(|trip| trip.id == id)
            .cloned()
            .ok_or_else(|| TripPlannerError::not_found(id))?;
        let results = std::mem::take(trips);
        *self = ViewState::Details { trip, results };
        Ok(())
    }

    /// Details -> Results
    pub fn back_to_results(&mut self) -> Result<()> {
        let ViewState::Details { results, .. } = self else {
            return Err(self.rejected("go back to results"));
        };
        let trips = std::mem::take(results);
        *self = ViewState::Results { trips };
        Ok(())
    }

    /// Any screen -> Search, discarding results
    pub fn back_to_search(&mut self) {
        *self = ViewState::Search;
    }

    fn rejected(&self, action: &str) -> TripPlannerError {
        TripPlannerError::validation(format!("Cannot {action} from the {} view", self.name()))
    }
}
