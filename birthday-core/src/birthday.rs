//! Birthday field parsing.
//!
//! Two shapes are recognized: a full `YYYY-MM-DD` date, and `--MM-DD` for
//! contacts whose birth year is unknown. The latter is resolved against a
//! placeholder year supplied by the caller. Dates are validated against the
//! real calendar, so `2024-02-30` or `--02-29` in a non-leap year are
//! rejected.

use chrono::NaiveDate;

use crate::error::{BirthdayError, BirthdayResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A resolved birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday {
    pub date: NaiveDate,
    /// False when the source omitted the year and the placeholder was used
    pub year_known: bool,
}

impl Birthday {
    /// Parse a trimmed, non-empty birthday string.
    pub fn parse(raw: &str, placeholder_year: i32) -> BirthdayResult<Self> {
        if has_shape(raw, "dddd-dd-dd") {
            let date = parse_date(raw)?;
            return Ok(Self {
                date,
                year_known: true,
            });
        }

        if has_shape(raw, "--dd-dd") {
            let date = parse_date(&format!("{}-{}", placeholder_year, &raw[2..]))
                .map_err(|_| BirthdayError::InvalidBirthday(raw.to_string()))?;
            return Ok(Self {
                date,
                year_known: false,
            });
        }

        Err(BirthdayError::InvalidBirthday(raw.to_string()))
    }

    /// The date as an iCalendar `DATE` value (`YYYYMMDD`).
    pub fn ics_date(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }
}

/// Match `raw` byte for byte against `pattern`, where `d` stands for an ASCII
/// digit and every other byte must appear literally.
fn has_shape(raw: &str, pattern: &str) -> bool {
    raw.len() == pattern.len()
        && raw
            .bytes()
            .zip(pattern.bytes())
            .all(|(b, p)| if p == b'd' { b.is_ascii_digit() } else { b == p })
}

fn parse_date(s: &str) -> BirthdayResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| BirthdayError::InvalidBirthday(s.to_string()))
}
