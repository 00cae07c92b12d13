//! Contact records read from a contacts CSV export.
//!
//! Column positions are resolved once from the header row and reused for
//! every data row. Rows may be shorter than the header; missing trailing
//! fields read as empty strings.

use csv::StringRecord;

use crate::error::{BirthdayError, BirthdayResult};

pub const FIRST_NAME: &str = "First Name";
pub const MIDDLE_NAME: &str = "Middle Name";
pub const LAST_NAME: &str = "Last Name";
pub const BIRTHDAY: &str = "Birthday";

/// Index of the birthday column in a header row.
pub fn birthday_index(headers: &StringRecord) -> BirthdayResult<usize> {
    column_index(headers, BIRTHDAY)
}

fn column_index(headers: &StringRecord, name: &str) -> BirthdayResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| BirthdayError::MissingColumn(name.to_string()))
}

/// Read a field, treating columns past the end of a short row as empty.
pub fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

/// Positions of the columns the calendar builder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactColumns {
    pub first_name: usize,
    pub middle_name: usize,
    pub last_name: usize,
    pub birthday: usize,
}

impl ContactColumns {
    pub fn from_headers(headers: &StringRecord) -> BirthdayResult<Self> {
        Ok(Self {
            first_name: column_index(headers, FIRST_NAME)?,
            middle_name: column_index(headers, MIDDLE_NAME)?,
            last_name: column_index(headers, LAST_NAME)?,
            birthday: column_index(headers, BIRTHDAY)?,
        })
    }
}

/// The trimmed name parts and raw birthday of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact<'a> {
    pub first_name: &'a str,
    pub middle_name: &'a str,
    pub last_name: &'a str,
    pub birthday: &'a str,
}

impl<'a> Contact<'a> {
    pub fn from_record(record: &'a StringRecord, columns: &ContactColumns) -> Self {
        Self {
            first_name: field(record, columns.first_name).trim(),
            middle_name: field(record, columns.middle_name).trim(),
            last_name: field(record, columns.last_name).trim(),
            birthday: field(record, columns.birthday).trim(),
        }
    }

    /// Non-empty name parts joined by single spaces, first/middle/last.
    pub fn full_name(&self) -> String {
        [self.first_name, self.middle_name, self.last_name]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
