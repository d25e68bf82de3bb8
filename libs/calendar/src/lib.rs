//! Calendar export for single events.
//!
//! Pure functions: an event snapshot in, a Google Calendar deep link or an
//! iCalendar document out. Event times are floating local times, no
//! timezone conversion happens here.

use chrono::{DateTime, NaiveDateTime, Utc};
use icalendar::{Calendar, Component, EventLike};

/// Snapshot of one event, ready for export.
#[derive(Debug, Clone)]
pub struct CalendarEntry {
    /// Stable identifier, carried into the ICS `UID`
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// `DTSTAMP` value, normally the record's update time
    pub stamp: DateTime<Utc>,
}

/// Floating local time in the iCalendar basic format.
fn ics_local(dt: &NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Build a Google Calendar "render" deep link for the entry.
///
/// Opens Google Calendar's event creation form pre-filled with the
/// entry's details.
pub fn google_calendar_url(entry: &CalendarEntry) -> String {
    format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
        urlencoding::encode(&entry.summary),
        ics_local(&entry.start),
        ics_local(&entry.end),
        urlencoding::encode(&entry.description),
        urlencoding::encode(&entry.location),
    )
}

/// Render the entry as a single-event iCalendar document.
pub fn to_ics(entry: &CalendarEntry) -> String {
    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&entry.uid);
    ics_event.summary(&entry.summary);

    // DTSTAMP is required by RFC 5545
    let dtstamp = entry.stamp.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    // Floating local times, matching how the events store them
    ics_event.add_property("DTSTART", ics_local(&entry.start));
    ics_event.add_property("DTEND", ics_local(&entry.end));

    if !entry.description.is_empty() {
        ics_event.description(&entry.description);
    }
    if !entry.location.is_empty() {
        ics_event.location(&entry.location);
    }

    cal.push(ics_event.done());
    cal.done().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry() -> CalendarEntry {
        CalendarEntry {
            uid: "0192aa3e-0000-7000-8000-000000000001".to_string(),
            summary: "Jazz Night".to_string(),
            description: "Late set with special guests".to_string(),
            location: "Make It Up Club".to_string(),
            start: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(20, 30, 0)
                .unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(23, 0, 0)
                .unwrap(),
            stamp: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_ics_contains_times_and_uid() {
        let ics = to_ics(&entry());

        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("BEGIN:VEVENT"));
        assert!(ics.contains("UID:0192aa3e-0000-7000-8000-000000000001"));
        assert!(ics.contains("DTSTART:20250314T203000"));
        assert!(ics.contains("DTEND:20250314T230000"));
        assert!(ics.contains("SUMMARY:Jazz Night"));
        assert!(ics.contains("LOCATION:Make It Up Club"));
    }

    #[test]
    fn test_ics_skips_empty_optional_fields() {
        let mut e = entry();
        e.description = String::new();
        e.location = String::new();

        let ics = to_ics(&e);
        assert!(!ics.contains("DESCRIPTION"));
        assert!(!ics.contains("LOCATION"));
    }

    #[test]
    fn test_google_url_encodes_fields() {
        let url = google_calendar_url(&entry());

        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("text=Jazz%20Night"));
        assert!(url.contains("dates=20250314T203000/20250314T230000"));
        assert!(url.contains("location=Make%20It%20Up%20Club"));
    }
}
