//! Birthday calendar events.
//!
//! A `BirthdayEvent` is one yearly all-day entry for a single contact,
//! carrying an email reminder and a display reminder.

use chrono::{DateTime, Utc};

use crate::birthday::Birthday;

/// Reminder delivery kind (VALARM ACTION)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Email,
    Display,
}

impl ReminderKind {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            ReminderKind::Email => "EMAIL",
            ReminderKind::Display => "DISPLAY",
        }
    }
}

/// A reminder attached to a birthday event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub kind: ReminderKind,
    /// Minutes before the start of the event; 0 fires at event time
    pub minutes_before: i64,
    pub summary: String,
    pub description: String,
}

impl Reminder {
    /// The TRIGGER value, a duration relative to the event start.
    pub fn trigger(&self) -> String {
        let minutes = self.minutes_before;
        if minutes == 0 {
            "PT0S".to_string()
        } else if minutes % 60 == 0 {
            format!("{}PT{}H", sign(minutes), (minutes / 60).abs())
        } else {
            format!("{}PT{}M", sign(minutes), minutes.abs())
        }
    }
}

fn sign(minutes_before: i64) -> &'static str {
    if minutes_before > 0 { "-" } else { "" }
}

/// A yearly birthday event for one contact
#[derive(Debug, Clone, PartialEq)]
pub struct BirthdayEvent {
    pub uid: String,
    pub full_name: String,
    pub birthday: Birthday,
    /// DTSTAMP
    pub created: DateTime<Utc>,
    pub reminders: Vec<Reminder>,
}

impl BirthdayEvent {
    pub fn new(
        full_name: impl Into<String>,
        birthday: Birthday,
        created: DateTime<Utc>,
        minutes_before: i64,
    ) -> Self {
        let full_name = full_name.into();
        let reminders = vec![
            Reminder {
                kind: ReminderKind::Email,
                minutes_before,
                summary: format!("Today is {}'s Birthday! 🎂", full_name),
                description: call_reminder(&full_name),
            },
            Reminder {
                kind: ReminderKind::Display,
                minutes_before,
                summary: format!("🎂 {}'s Birthday!", full_name),
                description: call_reminder(&full_name),
            },
        ];

        Self {
            uid: uuid::Uuid::new_v4().to_string(),
            full_name,
            birthday,
            created,
            reminders,
        }
    }

    pub fn summary(&self) -> String {
        format!("🎂 {}'s Birthday", self.full_name)
    }

    pub fn description(&self) -> String {
        format!(
            "Birthday of {} - Remember to call and congratulate!",
            self.full_name
        )
    }
}

fn call_reminder(full_name: &str) -> String {
    format!(
        "Don't forget to call {} today to wish them a happy birthday! 🎂",
        full_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn make_event(minutes_before: i64) -> BirthdayEvent {
        let birthday = Birthday {
            date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            year_known: true,
        };
        let created = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        BirthdayEvent::new("John Doe", birthday, created, minutes_before)
    }

    #[test]
    fn event_has_email_and_display_reminders() {
        let event = make_event(0);
        let kinds: Vec<_> = event.reminders.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ReminderKind::Email, ReminderKind::Display]);
        assert_eq!(event.reminders[0].summary, "Today is John Doe's Birthday! 🎂");
        assert_eq!(event.reminders[1].summary, "🎂 John Doe's Birthday!");
        for reminder in &event.reminders {
            assert!(reminder.description.contains("call John Doe today"));
        }
    }

    #[test]
    fn event_summary_and_description() {
        let event = make_event(0);
        assert_eq!(event.summary(), "🎂 John Doe's Birthday");
        assert_eq!(
            event.description(),
            "Birthday of John Doe - Remember to call and congratulate!"
        );
    }

    #[test]
    fn uids_are_unique() {
        assert_ne!(make_event(0).uid, make_event(0).uid);
    }

    #[test]
    fn trigger_formats() {
        assert_eq!(make_event(0).reminders[0].trigger(), "PT0S");
        assert_eq!(make_event(360).reminders[0].trigger(), "-PT6H");
        assert_eq!(make_event(90).reminders[0].trigger(), "-PT90M");
        assert_eq!(make_event(-30).reminders[0].trigger(), "PT30M");
    }
}
