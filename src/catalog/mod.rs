//! Trip catalog
//!
//! The catalog is the read-only reference dataset the matcher searches. It is
//! built once (from the embedded seed fixture or a JSON file) and handed to
//! the matcher explicitly; nothing mutates it afterwards.

pub mod loader;

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::TripPlannerError;
use crate::models::TripPackage;
use crate::Result;

pub use loader::CatalogLoader;

/// Embedded seed dataset shipped with the binary
const SEED_CATALOG: &str = include_str!("seed.json");

/// Immutable collection of trip packages plus the destination choices
/// offered by the search form
#[derive(Debug, Clone)]
pub struct Catalog {
    trips: Vec<TripPackage>,
    destinations: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate trip ids
    pub fn new(trips: Vec<TripPackage>, destinations: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::new();
        for trip in &trips {
            if !seen.insert(trip.id.as_str()) {
                return Err(TripPlannerError::catalog(format!(
                    "Duplicate trip id '{}'",
                    trip.id
                )));
            }
        }

        Ok(Self {
            trips,
            destinations,
        })
    }

    /// The built-in fixture catalog
    ///
    /// # Panics
    /// Panics if the embedded `seed.json` is malformed, which the unit tests guard against.
    #[must_use]
    pub fn seed() -> Self {
        CatalogLoader::parse_json(SEED_CATALOG).expect("embedded seed catalog must be valid")
    }

    /// Load the catalog from `path` when given, otherwise fall back to the seed
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => CatalogLoader::load_catalog(path)?,
            None => Self::seed(),
        };
        info!(
            "Catalog ready with {} trips and {} destinations",
            catalog.trips.len(),
            catalog.destinations.len()
        );
        Ok(catalog)
    }

    /// All packages in insertion order
    #[must_use]
    pub fn trips(&self) -> &[TripPackage] {
        &self.trips
    }

    /// Destination names offered by the search form
    #[must_use]
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TripPackage> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_contents() {
        let catalog = Catalog::seed();
        let ids: Vec<&str> = catalog.trips().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "bali-paradise",
                "paris-romance",
                "tokyo-adventure",
                "iceland-nature",
                "thailand-budget"
            ]
        );
        assert_eq!(catalog.destinations().len(), 10);
        assert_eq!(catalog.destinations()[0], "Bali, Indonesia");
    }

    #[test]
    fn test_seed_itineraries_are_sequential() {
        for trip in Catalog::seed().trips() {
            assert!(trip.has_sequential_itinerary(), "{} has gaps", trip.id);
            assert_eq!(trip.itinerary.len() as u32, trip.duration);
            assert!(trip.budget.min <= trip.budget.max);
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seed();
        let paris = catalog.get("paris-romance").unwrap();
        assert_eq!(paris.max_people, 2);
        assert!(catalog.get("moon-base").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let bali = Catalog::seed().trips()[0].clone();
        let result = Catalog::new(vec![bali.clone(), bali], vec![]);
        assert!(matches!(result, Err(TripPlannerError::Catalog { .. })));
    }

    #[test]
    fn test_load_without_path_uses_seed() {
        let catalog = Catalog::load(None).unwrap();
        assert_eq!(catalog.len(), 5);
    }
}
