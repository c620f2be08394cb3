//! Trip package model and its nested itinerary

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A curated travel package from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPackage {
    /// Unique catalog key, e.g. "bali-paradise"
    pub id: String,
    pub destination: String,
    pub title: String,
    pub description: String,
    /// Length of the trip in days
    pub duration: u32,
    /// Price per person in USD
    pub budget: BudgetRange,
    pub max_people: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Average rating (0.0-5.0)
    pub rating: f32,
    pub total_reviews: u32,
    pub highlights: Vec<String>,
    pub itinerary: Vec<DayItinerary>,
    pub included: Vec<String>,
    pub not_included: Vec<String>,
    pub best_time: String,
    pub difficulty: Difficulty,
    pub category: Category,
}

/// Inclusive per-person price range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

impl BudgetRange {
    #[must_use]
    pub fn contains(&self, amount: u32) -> bool {
        amount >= self.min && amount <= self.max
    }
}

impl Display for BudgetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}-${}", self.min, self.max)
    }
}

/// One day of a trip's itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayItinerary {
    /// 1-based day number
    pub day: u32,
    pub title: String,
    pub description: String,
    pub activities: Vec<String>,
    pub meals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Adventure,
    Relaxation,
    Culture,
    Nature,
    City,
    Beach,
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Challenging => "Challenging",
        };
        f.write_str(label)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Adventure => "Adventure",
            Category::Relaxation => "Relaxation",
            Category::Culture => "Culture",
            Category::Nature => "Nature",
            Category::City => "City",
            Category::Beach => "Beach",
        };
        f.write_str(label)
    }
}

impl TripPackage {
    /// Check that day numbers run 1, 2, 3, ... without gaps or repeats
    #[must_use]
    pub fn has_sequential_itinerary(&self) -> bool {
        self.itinerary
            .iter()
            .zip(1u32..)
            .all(|(day, expected)| day.day == expected)
    }

    /// Whole stars for display, rounded down like the rating badges
    #[must_use]
    pub fn full_stars(&self) -> usize {
        self.rating.clamp(0.0, 5.0).floor() as usize
    }
}
