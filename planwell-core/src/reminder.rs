//! Nurture reminder windows.
//!
//! Registrants get up to four mails before a session. An hourly job asks which
//! one is due; the answer depends only on how many calendar days remain in the
//! series timezone and, on the day itself, whether it's still morning there.

use std::collections::BTreeSet;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::series::EventSeries;

/// Local hour before which the day-of reminder may still go out.
const DAY_OF_CUTOFF_HOUR: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reminder {
    SevenDay,
    ThreeDay,
    OneDay,
    DayOf,
}

impl Reminder {
    pub fn as_str(self) -> &'static str {
        match self {
            Reminder::SevenDay => "7-day",
            Reminder::ThreeDay => "3-day",
            Reminder::OneDay => "1-day",
            Reminder::DayOf => "day-of",
        }
    }

    /// Which reminder covers a given calendar-day distance.
    pub fn for_days(days: i64, morning: bool) -> Option<Self> {
        match days {
            6..=8 => Some(Reminder::SevenDay),
            2..=4 => Some(Reminder::ThreeDay),
            1 => Some(Reminder::OneDay),
            0 if morning => Some(Reminder::DayOf),
            _ => None,
        }
    }
}

impl std::fmt::Display for Reminder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar days between `now` and the event, both read in the series zone.
pub fn calendar_days_until(event: &Event, series: &EventSeries, now: DateTime<Utc>) -> i64 {
    let event_day = event.date.with_timezone(&series.timezone).date_naive();
    let today = now.with_timezone(&series.timezone).date_naive();
    (event_day - today).num_days()
}

/// The reminder to send now, if its window is open and it hasn't gone out yet.
pub fn due_reminder(
    event: &Event,
    series: &EventSeries,
    now: DateTime<Utc>,
    sent: &BTreeSet<Reminder>,
) -> Option<Reminder> {
    let days = calendar_days_until(event, series, now);
    let morning = now.with_timezone(&series.timezone).hour() < DAY_OF_CUTOFF_HOUR;

    let reminder = Reminder::for_days(days, morning)?;
    if sent.contains(&reminder) {
        tracing::debug!(id = %event.id, %reminder, "reminder already sent");
        return None;
    }
    Some(reminder)
}
