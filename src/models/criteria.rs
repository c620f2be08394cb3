//! Search criteria supplied by the traveler

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated search parameters handed to the matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Free-text destination query
    pub destination: String,
    /// The traveler's budget per person in USD
    pub budget: u32,
    /// Party size
    pub people: u32,
    /// Desired trip length in days
    pub duration: u32,
    /// Intended departure, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl SearchCriteria {
    #[must_use]
    pub fn new<S: Into<String>>(destination: S, budget: u32, people: u32, duration: u32) -> Self {
        Self {
            destination: destination.into(),
            budget,
            people,
            duration,
            start_date: None,
        }
    }

    #[must_use]
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }
}
