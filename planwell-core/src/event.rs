//! A single scheduled session of a recurring event series.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::Serialize;
use url::Url;

/// One dated occurrence in a catalog.
///
/// The display labels are authored alongside `date` and are not derived from
/// it; see [`crate::present::label_drift`] for the consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Unique within its catalog; also the local part of the calendar UID.
    pub id: String,
    /// Start instant, keeping the offset it was authored with.
    pub date: DateTime<FixedOffset>,
    pub title: String,
    /// Authored start label, e.g. "11:00 AM"
    pub start_time: String,
    /// Authored end label, e.g. "2:00 PM"
    pub end_time: String,
    /// Authored zone abbreviation, e.g. "EST"
    pub timezone: String,
    /// Presenter name (required by some series)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Meeting link, once one has been issued
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_link: Option<Url>,
}

impl Event {
    /// Start instant on the UTC timeline.
    pub fn start_utc(&self) -> DateTime<Utc> {
        self.date.with_timezone(&Utc)
    }

    /// End instant for a session lasting `hours`.
    pub fn end_utc(&self, hours: u32) -> DateTime<Utc> {
        self.start_utc() + Duration::hours(i64::from(hours))
    }

    /// Whether the session starts strictly after `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_utc() > now
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}
