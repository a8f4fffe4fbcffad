//! Terminal rendering for planwell-core types.
//!
//! Extension traits that add colored output with owo_colors.

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use planwell_core::present::{self, LabelDrift};
use planwell_core::reminder::{self, Reminder};
use planwell_core::{CatalogValidationError, Event, EventSeries};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Reminder {
    fn render(&self) -> String {
        match self {
            Reminder::DayOf => self.as_str().red().to_string(),
            Reminder::OneDay => self.as_str().yellow().to_string(),
            _ => self.as_str().green().to_string(),
        }
    }
}

impl Render for LabelDrift {
    fn render(&self) -> String {
        format!(
            "{} {} {}: authored {} but the date gives {}",
            "~".yellow(),
            self.id,
            self.field.as_str().dimmed(),
            format!("{:?}", self.authored).yellow(),
            format!("{:?}", self.derived).green()
        )
    }
}

impl Render for CatalogValidationError {
    fn render(&self) -> String {
        format!("{} {}", "x".red(), self.to_string().red())
    }
}

/// "in 3 days" / "tomorrow" style countdown.
pub fn countdown(days: i64) -> String {
    match days {
        i64::MIN..=0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {} days", n),
    }
}

/// One line per event: date, authored time labels, title and countdown.
///
/// The countdown counts calendar days in the series zone, so a session later
/// the same day reads "today".
pub fn render_event(event: &Event, series: &EventSeries, now: DateTime<Utc>) -> String {
    let date = present::format_date(event);
    let time = format!("{} - {} {}", event.start_time, event.end_time, event.timezone);
    let days = reminder::calendar_days_until(event, series, now);

    format!(
        "{}  {}  {} {}",
        date.bold(),
        time,
        event.title,
        format!("({}, {})", event.id, countdown(days)).dimmed()
    )
}

/// Longer block for a single event.
pub fn render_event_detail(event: &Event, series: &EventSeries, now: DateTime<Utc>) -> String {
    let mut lines = vec![render_event(event, series, now)];
    if let Some(ref host) = event.host {
        lines.push(format!("   Hosted by {}", host));
    }
    lines.push(format!("   {}", series.location.dimmed()));
    if let Some(ref link) = event.zoom_link {
        lines.push(format!("   {}", link.underline()));
    }
    lines.join("\n")
}
