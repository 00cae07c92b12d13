//! ICS calendar generation.

use crate::event::{BirthdayEvent, Reminder};
use icalendar::{Alarm, Calendar, Component, EventLike, Property, ValueType};

/// Product identifier written when none is configured
pub const DEFAULT_PRODID: &str = "-//Google Birthday Liberator//Birthday Events//EN";

/// Accumulates birthday events into a single VCALENDAR document.
pub struct BirthdayCalendar {
    prodid: String,
    cal: Calendar,
    event_count: usize,
}

impl BirthdayCalendar {
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut cal = Calendar::new();
        cal.append_property(Property::new("METHOD", "PUBLISH"));

        Self {
            prodid: prodid.into(),
            cal,
            event_count: 0,
        }
    }

    pub fn push(&mut self, event: &BirthdayEvent) {
        self.cal.push(generate_event(event));
        self.event_count += 1;
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// Render the calendar as .ics text.
    pub fn render(&self) -> String {
        clean_ics(&self.cal.to_string(), &self.prodid)
    }
}

impl Default for BirthdayCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_PRODID)
    }
}

/// Build the VEVENT for one birthday
pub fn generate_event(event: &BirthdayEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.summary());
    ics_event.description(&event.description());

    // All-day: DTSTART and DTEND both carry the birthday as a DATE value
    let date = event.birthday.ics_date();
    for name in ["DTSTART", "DTEND"] {
        let mut prop = Property::new(name, &date);
        prop.append_parameter(ValueType::Date);
        ics_event.append_property(prop);
    }

    ics_event.add_property("RRULE", "FREQ=YEARLY");
    ics_event.add_property("TRANSP", "TRANSPARENT");
    ics_event.add_property("CLASS", "PUBLIC");
    ics_event.add_property(
        "DTSTAMP",
        event.created.format("%Y%m%dT%H%M%SZ").to_string(),
    );

    for reminder in &event.reminders {
        ics_event.alarm(generate_alarm(reminder));
    }

    ics_event.done()
}

fn generate_alarm(reminder: &Reminder) -> Alarm {
    // `Alarm::default()` is private in icalendar 0.17; start from a public
    // constructor; TRIGGER and ACTION are overwritten by key below.
    let mut alarm = Alarm::audio(chrono::Duration::zero());
    alarm.add_property("TRIGGER", reminder.trigger());
    alarm.add_property("ACTION", reminder.kind.as_ics_str());
    alarm.add_property("SUMMARY", &reminder.summary);
    alarm.add_property("DESCRIPTION", &reminder.description);
    alarm
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with the configured product identifier
/// - Remove DTSTAMP and UID inside VALARM sections (not required by RFC 5545)
fn clean_ics(ics: &str, prodid: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_valarm = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&fold_line(&format!("PRODID:{}", prodid)));
            continue;
        }

        if line == "BEGIN:VALARM" {
            in_valarm = true;
        } else if line == "END:VALARM" {
            in_valarm = false;
        }

        if in_valarm && (line.starts_with("DTSTAMP:") || line.starts_with("UID:")) {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Maximum line length in octets, excluding the CRLF (RFC 5545 3.1)
const MAX_LINE_OCTETS: usize = 75;

/// Fold a content line into CRLF-terminated chunks of at most 75 octets,
/// continuation lines starting with a single space. Never splits a UTF-8
/// character.
fn fold_line(line: &str) -> String {
    let mut result = String::with_capacity(line.len() + 8);
    let mut width = 0;

    for c in line.chars() {
        if width + c.len_utf8() > MAX_LINE_OCTETS {
            result.push_str("\r\n ");
            width = 1;
        }
        result.push(c);
        width += c.len_utf8();
    }

    result.push_str("\r\n");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birthday::Birthday;
    use chrono::{NaiveDate, TimeZone, Utc};
    use icalendar::parser::unfold;

    fn make_test_event(name: &str) -> BirthdayEvent {
        let birthday = Birthday {
            date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            year_known: true,
        };
        let created = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        BirthdayEvent::new(name, birthday, created, 0)
    }

    fn render(events: &[BirthdayEvent]) -> String {
        let mut cal = BirthdayCalendar::default();
        for event in events {
            cal.push(event);
        }
        unfold(&cal.render())
    }

    #[test]
    fn empty_calendar_has_preamble_and_closing() {
        let ics = render(&[]);
        for line in [
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            "PRODID:-//Google Birthday Liberator//Birthday Events//EN",
            "CALSCALE:GREGORIAN",
            "METHOD:PUBLISH",
            "END:VCALENDAR",
        ] {
            assert!(ics.contains(line), "Missing {:?}. ICS:\n{}", line, ics);
        }
        assert!(!ics.contains("BEGIN:VEVENT"));
        assert!(!ics.contains("ICALENDAR-RS"));
    }

    #[test]
    fn event_has_required_lines() {
        let event = make_test_event("John Doe");
        let ics = render(std::slice::from_ref(&event));

        for line in [
            format!("UID:{}", event.uid),
            "DTSTART;VALUE=DATE:19900515".to_string(),
            "DTEND;VALUE=DATE:19900515".to_string(),
            "SUMMARY:🎂 John Doe's Birthday".to_string(),
            "DESCRIPTION:Birthday of John Doe - Remember to call and congratulate!".to_string(),
            "RRULE:FREQ=YEARLY".to_string(),
            "TRANSP:TRANSPARENT".to_string(),
            "CLASS:PUBLIC".to_string(),
            "DTSTAMP:20261019T083000Z".to_string(),
        ] {
            assert!(ics.contains(&line), "Missing {:?}. ICS:\n{}", line, ics);
        }
    }

    #[test]
    fn event_has_email_and_display_alarms() {
        let ics = render(&[make_test_event("John Doe")]);

        assert_eq!(ics.matches("BEGIN:VALARM").count(), 2);
        assert_eq!(ics.matches("END:VALARM").count(), 2);
        assert_eq!(ics.matches("TRIGGER:PT0S").count(), 2);
        assert_eq!(ics.matches("ACTION:EMAIL").count(), 1);
        assert_eq!(ics.matches("ACTION:DISPLAY").count(), 1);
        assert!(ics.contains("SUMMARY:Today is John Doe's Birthday! 🎂"));
        assert!(ics.contains("SUMMARY:🎂 John Doe's Birthday!"));
        assert_eq!(
            ics.matches(
                "DESCRIPTION:Don't forget to call John Doe today to wish them a happy birthday! 🎂"
            )
            .count(),
            2
        );
    }

    #[test]
    fn alarm_is_minimal() {
        let ics = render(&[make_test_event("John Doe")]);

        for section in ics.split("BEGIN:VALARM").skip(1) {
            let section = section.split("END:VALARM").next().unwrap();
            assert!(
                !section.contains("UID:"),
                "VALARM should not have UID. Got:\n{}",
                section
            );
            assert!(
                !section.contains("DTSTAMP:"),
                "VALARM should not have DTSTAMP. Got:\n{}",
                section
            );
        }
    }

    #[test]
    fn long_prodid_is_folded() {
        let prodid = format!("-//{}//Birthday Events//EN", "Very Long Organisation Name ".repeat(4));
        let cal = BirthdayCalendar::new(prodid.clone());
        let raw = cal.render();

        for line in raw.split("\r\n") {
            assert!(
                line.len() <= MAX_LINE_OCTETS,
                "Line longer than {} octets: {:?}",
                MAX_LINE_OCTETS,
                line
            );
        }
        assert!(unfold(&raw).contains(&format!("PRODID:{}", prodid)));
    }

    #[test]
    fn fold_line_keeps_short_lines_and_utf8() {
        assert_eq!(fold_line("PRODID:short"), "PRODID:short\r\n");

        let long = "🎂".repeat(30);
        let folded = fold_line(&long);
        for line in folded.split("\r\n") {
            assert!(line.len() <= MAX_LINE_OCTETS);
        }
        assert_eq!(folded.replace("\r\n ", "").trim_end(), long);
    }

    #[test]
    fn custom_prodid_and_count() {
        let mut cal = BirthdayCalendar::new("-//Example//Test//EN");
        cal.push(&make_test_event("John Doe"));
        cal.push(&make_test_event("Jane Marie Smith"));

        assert_eq!(cal.event_count(), 2);
        let ics = unfold(&cal.render());
        assert!(ics.contains("PRODID:-//Example//Test//EN"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert!(ics.contains("🎂 Jane Marie Smith's Birthday"));
    }
}
