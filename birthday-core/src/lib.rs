//! Core library for birthday-liberator.
//!
//! Turns a contacts CSV export into a yearly birthday calendar:
//! - `filter` drops contacts without a birthday
//! - `calendar` parses birthdays and writes an .ics document
//! - `backup` preserves the original export before it is overwritten

pub mod backup;
pub mod birthday;
pub mod calendar;
pub mod contact;
pub mod error;
pub mod event;
pub mod filter;
pub mod ics;

pub use backup::backup_file;
pub use calendar::{BuildOptions, BuildReport, SkippedContact, build_calendar, render_calendar};
pub use error::{BirthdayError, BirthdayResult};
pub use filter::{FilterStats, filter_contacts, filter_records};
