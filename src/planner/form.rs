//! Search form input and validation
//!
//! Fields arrive as raw text (CLI flags, JSON bodies) and are only turned into
//! [`SearchCriteria`] once every required field is present and well formed.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::TripPlannerError;
use crate::models::SearchCriteria;
use crate::Result;

pub const BUDGET_MIN_USD: u32 = 100;
pub const BUDGET_MAX_USD: u32 = 5000;
pub const MAX_TRAVELERS: u32 = 8;
/// Trip lengths offered by the duration picker
pub const DURATION_CHOICES: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 10, 12, 14];

/// Raw search form as filled in by the traveler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchForm {
    #[serde(default)]
    pub destination: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub budget: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub people: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub duration: String,
    /// Optional departure date, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Accept `"1000"` as well as `1000` for numeric fields
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

impl SearchForm {
    #[must_use]
    pub fn new<S: Into<String>>(destination: S, budget: S, people: S, duration: S) -> Self {
        Self {
            destination: destination.into(),
            budget: budget.into(),
            people: people.into(),
            duration: duration.into(),
            start_date: None,
        }
    }

    #[must_use]
    pub fn with_start_date<S: Into<String>>(mut self, date: S) -> Self {
        self.start_date = Some(date.into());
        self
    }

    /// True when all four required fields have a value
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("destination", &self.destination),
            ("budget", &self.budget),
            ("people", &self.people),
            ("duration", &self.duration),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Turn the form into search criteria.
    ///
    /// `today` bounds the optional departure date from below.
    pub fn validate(&self, today: NaiveDate) -> Result<SearchCriteria> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(TripPlannerError::validation(format!(
                "Please fill in: {}",
                missing.join(", ")
            )));
        }

        let budget = parse_number("Budget", &self.budget)?;
        if !(BUDGET_MIN_USD..=BUDGET_MAX_USD).contains(&budget) {
            return Err(TripPlannerError::validation(format!(
                "Budget must be between ${BUDGET_MIN_USD} and ${BUDGET_MAX_USD}"
            )));
        }

        let people = parse_number("Travelers", &self.people)?;
        if !(1..=MAX_TRAVELERS).contains(&people) {
            return Err(TripPlannerError::validation(format!(
                "Travelers must be between 1 and {MAX_TRAVELERS}"
            )));
        }

        let duration = parse_number("Duration", &self.duration)?;
        if !DURATION_CHOICES.contains(&duration) {
            let choices: Vec<String> = DURATION_CHOICES.iter().map(u32::to_string).collect();
            return Err(TripPlannerError::validation(format!(
                "Duration must be one of: {} days",
                choices.join(", ")
            )));
        }

        let mut criteria = SearchCriteria::new(self.destination.trim(), budget, people, duration);

        if let Some(raw) = self.start_date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                TripPlannerError::validation(format!("Departure date '{raw}' is not a YYYY-MM-DD date"))
            })?;
            if date <= today {
                return Err(TripPlannerError::validation(
                    "Departure date must be after today",
                ));
            }
            criteria = criteria.with_start_date(date);
        }

        Ok(criteria)
    }
}

fn parse_number(field: &str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| TripPlannerError::validation(format!("{field} must be a whole number, got '{raw}'")))
}
