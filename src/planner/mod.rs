//! Trip planner front end
//!
//! Everything the traveler interacts with around the matcher:
//! - Form: raw search input and its validation
//! - View: the Search / Results / Details selector
//! - Render: text output for result lists and trip pages
//! - Booking: confirmation notifications
//! - Session: one traveler's walk through the screens

pub mod booking;
pub mod form;
pub mod render;
pub mod session;
pub mod view;

pub use booking::{book_trip, ConsoleNotifier, LogNotifier, Notification, Notifier};
pub use form::SearchForm;
pub use render::{ResultsView, TripDetailsView};
pub use session::PlannerSession;
pub use view::ViewState;
