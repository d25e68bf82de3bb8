//! Visibility windowing: which events count as "current" vs "past".
//!
//! The split is a pure function of a cutoff instant, so listings stay
//! deterministic and testable. The cutoff is local community time minus a
//! grace window: a gig that started late last night should still show on
//! the front page this morning.

use crate::error::EventError;
use crate::models::Event;
use chrono::{Duration, NaiveDateTime, Utc};
use chrono_tz::Tz;
use core_config::{ConfigError, env_or_default};
use std::str::FromStr;

/// Which event timestamp the cutoff compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutoffField {
    /// An event is current while its start is inside the window
    #[default]
    Start,
    /// An event is current until its end leaves the window
    End,
}

impl FromStr for CutoffField {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            other => Err(EventError::Validation(format!(
                "Unknown cutoff field: {}",
                other
            ))),
        }
    }
}

/// Policy for the current/past split.
#[derive(Debug, Clone)]
pub struct VisibilityPolicy {
    /// Community timezone used to resolve "now"
    pub timezone: Tz,
    /// Grace window subtracted from now before comparing
    pub window: Duration,
    pub cutoff: CutoffField,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Australia::Melbourne,
            window: Duration::hours(12),
            cutoff: CutoffField::Start,
        }
    }
}

impl VisibilityPolicy {
    /// Load from `EVENTS_TIMEZONE`, `EVENTS_WINDOW_HOURS`, and
    /// `EVENTS_CUTOFF_FIELD`, defaulting to Melbourne, 12 hours, start.
    pub fn from_env() -> Result<Self, ConfigError> {
        let tz_name = env_or_default("EVENTS_TIMEZONE", "Australia/Melbourne");
        let timezone: Tz = tz_name.parse().map_err(|_| ConfigError::ParseError {
            key: "EVENTS_TIMEZONE".to_string(),
            details: format!("Unknown timezone: {}", tz_name),
        })?;

        let hours_raw = env_or_default("EVENTS_WINDOW_HOURS", "12");
        let hours: i64 = hours_raw.parse().map_err(|e| ConfigError::ParseError {
            key: "EVENTS_WINDOW_HOURS".to_string(),
            details: format!("{}", e),
        })?;

        let cutoff_raw = env_or_default("EVENTS_CUTOFF_FIELD", "start");
        let cutoff = cutoff_raw
            .parse()
            .map_err(|_| ConfigError::ParseError {
                key: "EVENTS_CUTOFF_FIELD".to_string(),
                details: format!("Expected 'start' or 'end', got: {}", cutoff_raw),
            })?;

        Ok(Self {
            timezone,
            window: Duration::hours(hours),
            cutoff,
        })
    }

    /// Wall-clock "now" in the community timezone, without offset.
    pub fn now_local(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }

    /// The instant events are compared against.
    pub fn cutoff_instant(&self, now_local: NaiveDateTime) -> NaiveDateTime {
        now_local - self.window
    }

    fn cutoff_value<'a>(&self, event: &'a Event) -> &'a NaiveDateTime {
        match self.cutoff {
            CutoffField::Start => &event.start,
            CutoffField::End => &event.end,
        }
    }

    /// Whether an event still belongs on the current listing.
    pub fn is_current(&self, event: &Event, cutoff: NaiveDateTime) -> bool {
        *self.cutoff_value(event) >= cutoff
    }

    /// Split into (current ascending by start, past descending by start).
    ///
    /// Every input event lands in exactly one half.
    pub fn partition(&self, events: Vec<Event>, cutoff: NaiveDateTime) -> (Vec<Event>, Vec<Event>) {
        let (mut current, mut past): (Vec<Event>, Vec<Event>) =
            events.into_iter().partition(|e| self.is_current(e, cutoff));

        current.sort_by(|a, b| a.start.cmp(&b.start));
        past.sort_by(|a, b| b.start.cmp(&a.start));
        (current, past)
    }
}
