//! One traveler's planning session
//!
//! Ties the form, matcher, view selector and notifier together. Submitting a
//! search waits a fixed, configurable latency before the results appear.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use super::booking::{book_trip, Notification, Notifier};
use super::form::SearchForm;
use super::view::ViewState;
use crate::error::TripPlannerError;
use crate::matcher::TripMatcher;
use crate::models::TripPackage;
use crate::Result;

pub struct PlannerSession {
    matcher: TripMatcher,
    notifier: Arc<dyn Notifier>,
    latency: Duration,
    view: ViewState,
}

impl PlannerSession {
    #[must_use]
    pub fn new(matcher: TripMatcher, notifier: Arc<dyn Notifier>, latency: Duration) -> Self {
        Self {
            matcher,
            notifier,
            latency,
            view: ViewState::Search,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Validate the form, run the search and move to the results view
    pub async fn submit(&mut self, form: &SearchForm) -> Result<&[TripPackage]> {
        self.submit_on(form, Local::now().date_naive()).await
    }

    #[tracing::instrument(level = "info", skip(self, form), fields(destination = %form.destination))]
    pub async fn submit_on(&mut self, form: &SearchForm, today: NaiveDate) -> Result<&[TripPackage]> {
        if !self.view.is_search() {
            return Err(TripPlannerError::validation(format!(
                "Cannot search from the {} view",
                self.view.name()
            )));
        }

        let criteria = form.validate(today)?;

        if !self.latency.is_zero() {
            debug!("Simulating {}ms search latency", self.latency.as_millis());
            tokio::time::sleep(self.latency).await;
        }

        let results = self.matcher.search_trips(&criteria);
        info!("Search returned {} trips", results.len());
        self.view.show_results(results)?;

        Ok(self.view.results().unwrap_or_default())
    }

    pub fn select(&mut self, id: &str) -> Result<&TripPackage> {
        self.view.select_trip(id)?;
        self.view
            .selected()
            .ok_or_else(|| TripPlannerError::not_found(id))
    }

    pub fn back_to_results(&mut self) -> Result<()> {
        self.view.back_to_results()
    }

    pub fn back_to_search(&mut self) {
        self.view.back_to_search();
    }

    /// Book the trip on the details screen
    pub fn book(&self) -> Result<Notification> {
        let trip = self.view.selected().ok_or_else(|| {
            TripPlannerError::validation(format!("Cannot book from the {} view", self.view.name()))
        })?;
        Ok(book_trip(trip, self.notifier.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::planner::booking::tests::RecordingNotifier;

    fn session(notifier: Arc<RecordingNotifier>, latency: Duration) -> PlannerSession {
        let matcher = TripMatcher::new(Arc::new(Catalog::seed()));
        PlannerSession::new(matcher, notifier, latency)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[tokio::test]
    async fn test_full_flow() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session(notifier.clone(), Duration::ZERO);

        let results = session
            .submit_on(&SearchForm::new("Bali", "1000", "2", "7"), today())
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(session.view().name(), "results");

        let trip = session.select("bali-paradise").unwrap();
        assert_eq!(trip.title, "Tropical Paradise Getaway");

        let notification = session.book().unwrap();
        assert!(notification.description.contains("Tropical Paradise Getaway"));
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
        assert_eq!(session.view().name(), "details");

        session.back_to_results().unwrap();
        assert_eq!(session.view().results().unwrap().len(), 1);

        session.back_to_search();
        assert!(session.view().is_search());
    }

    #[tokio::test]
    async fn test_incomplete_form_never_searches() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session(notifier, Duration::ZERO);

        let err = session
            .submit_on(&SearchForm::new("Bali", "", "2", "7"), today())
            .await
            .unwrap_err();
        assert!(matches!(err, TripPlannerError::Validation { .. }));
        assert!(session.view().is_search());
    }

    #[tokio::test]
    async fn test_no_matches_is_not_an_error() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session(notifier, Duration::ZERO);

        let results = session
            .submit_on(&SearchForm::new("Nonexistent", "1000", "2", "7"), today())
            .await
            .unwrap();
        assert!(results.is_empty());
        assert_eq!(session.view().name(), "results");
        assert!(session.book().is_err());
    }

    #[tokio::test]
    async fn test_search_waits_for_latency() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session(notifier, Duration::from_millis(50));

        let started = std::time::Instant::now();
        session
            .submit_on(&SearchForm::new("Tokyo", "1200", "4", "6"), today())
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_second_search_requires_new_search_view() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = session(notifier, Duration::ZERO);
        let form = SearchForm::new("Paris", "1500", "2", "5");

        session.submit_on(&form, today()).await.unwrap();
        assert!(session.submit_on(&form, today()).await.is_err());

        session.back_to_search();
        assert_eq!(session.submit_on(&form, today()).await.unwrap().len(), 1);
    }
}
