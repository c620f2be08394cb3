//! Booking confirmations
//!
//! Booking does not reserve anything; it only tells the traveler that the
//! trip was booked through whatever notifier the front end supplies.

use serde::Serialize;
use tracing::info;

use crate::models::TripPackage;

/// A toast-style message shown to the traveler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    #[must_use]
    pub fn booking_confirmation(trip: &TripPackage) -> Self {
        Self {
            title: "Trip Booked Successfully! 🎉".to_string(),
            description: format!(
                "Your {} adventure has been reserved. Check your email for confirmation.",
                trip.title
            ),
        }
    }
}

/// Fire-and-forget sink for notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Writes notifications to the application log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        info!(title = %notification.title, "{}", notification.description);
    }
}

/// Prints notifications to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        println!("\n{}\n{}", notification.title, notification.description);
    }
}

/// Emit the booking confirmation for `trip` and hand it back
pub fn book_trip(trip: &TripPackage, notifier: &dyn Notifier) -> Notification {
    info!("Booking requested for {}", trip.id);
    let notification = Notification::booking_confirmation(trip);
    notifier.notify(&notification);
    notification
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Mutex;

    /// Keeps every notification for assertions
    #[derive(Default)]
    pub(crate) struct RecordingNotifier {
        pub(crate) sent: Mutex<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: &Notification) {
            self.sent.lock().unwrap().push(notification.clone());
        }
    }

    #[test]
    fn test_booking_notification_text() {
        let catalog = Catalog::seed();
        let tokyo = catalog.get("tokyo-adventure").unwrap();
        let notifier = RecordingNotifier::default();

        let notification = book_trip(tokyo, &notifier);

        assert_eq!(notification.title, "Trip Booked Successfully! 🎉");
        assert_eq!(
            notification.description,
            "Your Tokyo Urban Adventure adventure has been reserved. Check your email for confirmation."
        );
        assert_eq!(*notifier.sent.lock().unwrap(), vec![notification]);
    }

    #[test]
    fn test_booking_does_not_touch_catalog() {
        let catalog = Catalog::seed();
        let before = catalog.trips().to_vec();
        book_trip(catalog.get("bali-paradise").unwrap(), &LogNotifier);
        assert_eq!(catalog.trips(), before.as_slice());
    }
}
