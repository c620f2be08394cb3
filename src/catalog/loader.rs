use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::Catalog;
use crate::error::TripPlannerError;
use crate::models::TripPackage;
use crate::Result;

/// JSON catalog parser and loader
pub struct CatalogLoader;

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    destinations: Vec<String>,
    trips: Vec<Value>,
}

impl CatalogLoader {
    /// Load and parse a catalog JSON file
    pub fn load_catalog<P: AsRef<Path>>(json_path: P) -> Result<Catalog> {
        let json_path = json_path.as_ref();
        info!("Loading trip catalog from: {:?}", json_path);

        if !json_path.exists() {
            return Err(TripPlannerError::catalog(format!(
                "Catalog file not found: {}",
                json_path.display()
            )));
        }

        let content = fs::read_to_string(json_path)?;
        Self::parse_json(&content)
    }

    /// Parse catalog JSON content
    ///
    /// Packages that fail to deserialize or break a catalog invariant are
    /// skipped with a warning. When no destination list is present it is
    /// derived from the packages.
    pub fn parse_json(content: &str) -> Result<Catalog> {
        let file: CatalogFile = serde_json::from_str(content)
            .map_err(|e| TripPlannerError::catalog(format!("Failed to parse catalog JSON: {e}")))?;

        let mut trips = Vec::new();
        let mut parse_errors = 0;

        for (index, raw) in file.trips.into_iter().enumerate() {
            let parsed = serde_json::from_value::<TripPackage>(raw)
                .map_err(|e| TripPlannerError::catalog(e.to_string()))
                .and_then(|trip| Self::validate_trip(&trip).map(|()| trip));

            match parsed {
                Ok(trip) => trips.push(trip),
                Err(e) => {
                    warn!("Skipping catalog entry #{}: {}", index, e);
                    parse_errors += 1;
                }
            }
        }

        info!(
            "Loaded {} trips from catalog ({} rejected)",
            trips.len(),
            parse_errors
        );

        if trips.is_empty() {
            return Err(TripPlannerError::catalog(
                "No valid trips could be parsed from catalog",
            ));
        }

        let destinations = if file.destinations.is_empty() {
            let mut derived: Vec<String> = Vec::new();
            for trip in &trips {
                if !derived.contains(&trip.destination) {
                    derived.push(trip.destination.clone());
                }
            }
            derived
        } else {
            file.destinations
        };

        Catalog::new(trips, destinations)
    }

    /// Check a single package against the catalog invariants
    pub fn validate_trip(trip: &TripPackage) -> Result<()> {
        let fail = |reason: String| Err(TripPlannerError::catalog(format!("{}: {reason}", trip.id)));

        if trip.id.trim().is_empty() {
            return Err(TripPlannerError::catalog("Trip id cannot be empty"));
        }
        if trip.duration == 0 {
            return fail("duration must be positive".to_string());
        }
        if trip.max_people == 0 {
            return fail("maxPeople must be positive".to_string());
        }
        if trip.budget.min == 0 || trip.budget.min > trip.budget.max {
            return fail(format!(
                "invalid budget range {}-{}",
                trip.budget.min, trip.budget.max
            ));
        }
        if !(0.0..=5.0).contains(&trip.rating) {
            return fail(format!("rating {} outside 0-5", trip.rating));
        }
        if !trip.has_sequential_itinerary() {
            return fail("itinerary days must run 1, 2, 3, ... without gaps".to_string());
        }
        Ok(())
    }
}
