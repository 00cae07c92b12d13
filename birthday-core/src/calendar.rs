//! Birthday calendar building.
//!
//! Reads a contacts CSV export and emits one yearly all-day event per
//! contact with a usable name and a valid birthday. Invalid birthdays are
//! logged and reported, never fatal.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Datelike, Local, Utc};
use log::{debug, info, warn};

use crate::birthday::Birthday;
use crate::contact::{Contact, ContactColumns};
use crate::error::BirthdayResult;
use crate::event::BirthdayEvent;
use crate::ics::{BirthdayCalendar, DEFAULT_PRODID};

/// Settings for a calendar build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub prodid: String,
    /// Year used for birthdays given as `--MM-DD`
    pub placeholder_year: i32,
    /// DTSTAMP for every generated event
    pub created: DateTime<Utc>,
    pub reminder_minutes_before: i64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            prodid: DEFAULT_PRODID.to_string(),
            placeholder_year: Local::now().year(),
            created: Utc::now(),
            reminder_minutes_before: 0,
        }
    }
}

/// A contact skipped because its birthday could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedContact {
    pub name: String,
    pub birthday: String,
}

/// Outcome of a calendar build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub events: usize,
    pub skipped: Vec<SkippedContact>,
}

/// Build the calendar for the CSV at `source` and write it to `dest`,
/// overwriting it.
pub fn build_calendar(
    source: &Path,
    dest: &Path,
    options: &BuildOptions,
) -> BirthdayResult<BuildReport> {
    let file = std::fs::File::open(source)?;
    let (ics, report) = render_calendar(file, options)?;
    std::fs::write(dest, ics)?;

    info!(
        "Created birthday calendar with {} events at {}",
        report.events,
        dest.display()
    );
    Ok(report)
}

/// Build the calendar from CSV data, returning the .ics text.
pub fn render_calendar<R: Read>(
    reader: R,
    options: &BuildOptions,
) -> BirthdayResult<(String, BuildReport)> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = ContactColumns::from_headers(reader.headers()?)?;

    let mut cal = BirthdayCalendar::new(options.prodid.clone());
    let mut report = BuildReport::default();

    for result in reader.records() {
        let record = result?;
        let contact = Contact::from_record(&record, &columns);

        let full_name = contact.full_name();
        if full_name.is_empty() || contact.birthday.is_empty() {
            continue;
        }

        let birthday = match Birthday::parse(contact.birthday, options.placeholder_year) {
            Ok(birthday) => birthday,
            Err(_) => {
                warn!(
                    "Skipping {} - invalid birthday format: {}",
                    full_name, contact.birthday
                );
                report.skipped.push(SkippedContact {
                    name: full_name,
                    birthday: contact.birthday.to_string(),
                });
                continue;
            }
        };

        if birthday.year_known {
            debug!("Adding birthday for {} on {}", full_name, birthday.date);
        } else {
            debug!(
                "Adding birthday for {} on {} (year unknown, using {})",
                full_name,
                birthday.date.format("%m-%d"),
                options.placeholder_year
            );
        }
        let event = BirthdayEvent::new(
            full_name,
            birthday,
            options.created,
            options.reminder_minutes_before,
        );
        cal.push(&event);
    }

    report.events = cal.event_count();
    Ok((cal.render(), report))
}
