//! ICS file generation.
//!
//! Birthday events are written as a single VCALENDAR document according to
//! RFC 5545.

mod generate;

pub use generate::{BirthdayCalendar, DEFAULT_PRODID, generate_event};
