//! Clients for external services.

pub mod calendar;

pub use calendar::{CalendarClient, CalendarConfig, GoogleCalendar, MockCalendar};
