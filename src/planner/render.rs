//! Terminal rendering of search results and trip details

use std::fmt::Display;

use crate::models::TripPackage;

/// Result list; the first card carries the "Best Match" badge
pub struct ResultsView<'a> {
    trips: &'a [TripPackage],
}

impl<'a> ResultsView<'a> {
    #[must_use]
    pub fn new(trips: &'a [TripPackage]) -> Self {
        Self { trips }
    }

    /// First result, by position only
    #[must_use]
    pub fn best_match(&self) -> Option<&'a TripPackage> {
        self.trips.first()
    }
}

/// Full page for one trip
pub struct TripDetailsView<'a> {
    trip: &'a TripPackage,
}

impl<'a> TripDetailsView<'a> {
    #[must_use]
    pub fn new(trip: &'a TripPackage) -> Self {
        Self { trip }
    }
}

#[must_use]
pub fn destination_emoji(destination: &str) -> &'static str {
    const EMOJI: [(&str, &str); 5] = [
        ("Bali", "🏝️"),
        ("Paris", "🗼"),
        ("Tokyo", "🏯"),
        ("Iceland", "🏔️"),
        ("Thailand", "🏛️"),
    ];
    EMOJI
        .iter()
        .find(|(place, _)| destination.contains(*place))
        .map_or("✈️", |(_, emoji)| *emoji)
}

fn stars(trip: &TripPackage) -> String {
    let full = trip.full_stars();
    "★".repeat(full) + &"☆".repeat(5 - full)
}

impl Display for ResultsView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.trips.is_empty() {
            writeln!(f, "🔍 No trips found")?;
            writeln!(
                f,
                "   We couldn't find any trips matching your criteria. Try a different destination, budget or duration."
            )?;
            return Ok(());
        }

        let noun = if self.trips.len() == 1 { "trip" } else { "trips" };
        writeln!(
            f,
            "Found {} amazing {} matching your preferences\n",
            self.trips.len(),
            noun
        )?;

        for (index, trip) in self.trips.iter().enumerate() {
            if index == 0 {
                writeln!(f, "✨ Best Match")?;
            }
            writeln!(f, "{} {} [{}]", destination_emoji(&trip.destination), trip.title, trip.id)?;
            writeln!(f, "   📍 {}", trip.destination)?;
            writeln!(f, "   {}", trip.description)?;
            writeln!(
                f,
                "   ⏰ {} days | 👥 Up to {} | {}",
                trip.duration, trip.max_people, trip.category
            )?;
            writeln!(f, "   {} {} ({})", stars(trip), trip.rating, trip.total_reviews)?;
            writeln!(f, "   💵 {} per person\n", trip.budget)?;
        }
        Ok(())
    }
}

impl Display for TripDetailsView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let trip = self.trip;

        writeln!(f, "{} {}", destination_emoji(&trip.destination), trip.destination)?;
        writeln!(f, "{}", trip.title)?;
        writeln!(f, "{}\n", trip.description)?;
        writeln!(f, "   ⏰ {} days", trip.duration)?;
        writeln!(f, "   👥 Up to {} people", trip.max_people)?;
        writeln!(f, "   📅 {}", trip.best_time)?;
        writeln!(f, "   🥾 {}", trip.difficulty)?;
        writeln!(
            f,
            "   {} {}/5 ({} reviews) | {}",
            stars(trip),
            trip.rating,
            trip.total_reviews,
            trip.category
        )?;
        writeln!(f, "   💵 {} per person\n", trip.budget)?;

        writeln!(f, "Trip Highlights")?;
        for highlight in &trip.highlights {
            writeln!(f, "   ✓ {highlight}")?;
        }

        writeln!(f, "\nItinerary")?;
        for day in &trip.itinerary {
            writeln!(f, "   Day {}: {}", day.day, day.title)?;
            writeln!(f, "      {}", day.description)?;
            writeln!(f, "      Activities: {}", day.activities.join(", "))?;
            writeln!(f, "      Meals: {}", day.meals.join(", "))?;
            if let Some(accommodation) = &day.accommodation {
                writeln!(f, "      🏨 {accommodation}")?;
            }
        }

        writeln!(f, "\nWhat's Included")?;
        for item in &trip.included {
            writeln!(f, "   ✓ {item}")?;
        }
        writeln!(f, "\nNot Included")?;
        for item in &trip.not_included {
            writeln!(f, "   ✗ {item}")?;
        }

        writeln!(f, "\nReviews")?;
        writeln!(
            f,
            "   This trip has received {} reviews with an average rating of {}/5 stars.",
            trip.total_reviews, trip.rating
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_best_match_is_first_card_only() {
        let catalog = Catalog::seed();
        let trips = &catalog.trips()[1..3];
        let view = ResultsView::new(trips);
        let text = view.to_string();

        assert_eq!(view.best_match().unwrap().id, "paris-romance");
        assert!(text.starts_with("Found 2 amazing trips"));
        assert_eq!(text.matches("Best Match").count(), 1);
        let badge = text.find("Best Match").unwrap();
        assert!(badge < text.find("Romantic Paris Escape").unwrap());
        assert!(text.contains("$1200-$1800 per person"));
    }

    #[test]
    fn test_single_result_wording() {
        let catalog = Catalog::seed();
        let text = ResultsView::new(&catalog.trips()[..1]).to_string();
        assert!(text.contains("Found 1 amazing trip matching"));
        assert!(text.contains("🏝️ Tropical Paradise Getaway"));
        assert!(text.contains("★★★★☆ 4.8 (234)"));
    }

    #[test]
    fn test_empty_results_message() {
        let view = ResultsView::new(&[]);
        assert!(view.best_match().is_none());
        let text = view.to_string();
        assert!(text.contains("No trips found"));
        assert!(!text.contains("Best Match"));
    }

    #[test]
    fn test_details_page() {
        let catalog = Catalog::seed();
        let iceland = catalog.get("iceland-nature").unwrap();
        let text = TripDetailsView::new(iceland).to_string();

        assert!(text.contains("Iceland Natural Wonders"));
        assert!(text.contains("Challenging"));
        assert!(text.contains("Day 8: Farewell Iceland"));
        assert!(text.contains("🏨 Boutique Hotel in Reykjavik"));
        assert!(text.contains("✗ Optional helicopter tours"));
        assert!(text.contains("98 reviews"));
    }

    #[test]
    fn test_destination_emoji_fallback() {
        assert_eq!(destination_emoji("Tokyo, Japan"), "🏯");
        assert_eq!(destination_emoji("Rome, Italy"), "✈️");
    }
}
