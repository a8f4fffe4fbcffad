//! ICS document generation.

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike};

use crate::constants::{ICS_UTC_FORMAT, UID_DOMAIN};
use crate::event::Event;
use crate::series::EventSeries;

/// Property order inside the VEVENT; anything else follows in crate order.
const VEVENT_ORDER: [&str; 9] = [
    "UID",
    "DTSTAMP",
    "DTSTART",
    "DTEND",
    "SUMMARY",
    "DESCRIPTION",
    "LOCATION",
    "URL",
    "STATUS",
];

/// Render a one-event calendar for `event`.
///
/// `dtstamp` is the generation time; everything else comes from the event and
/// its series, so two calls with the same stamp give identical output.
/// The id is not checked here; catalogs reject ids that would break the UID.
pub fn to_calendar_document(
    event: &Event,
    series: &EventSeries,
    dtstamp: DateTime<Utc>,
) -> String {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@{}", event.id, UID_DOMAIN));
    ics_event.add_property("DTSTAMP", dtstamp.format(ICS_UTC_FORMAT).to_string());
    ics_event.add_property("DTSTART", event.start_utc().format(ICS_UTC_FORMAT).to_string());
    ics_event.add_property(
        "DTEND",
        event
            .end_utc(series.duration_hours)
            .format(ICS_UTC_FORMAT)
            .to_string(),
    );
    ics_event.summary(&series.summary_for(&event.title));
    ics_event.description(&series.description_for(event.host.as_deref()));
    ics_event.location(&series.location);

    if let Some(ref link) = event.zoom_link {
        ics_event.add_property("URL", link.as_str());
    }

    ics_event.add_property("STATUS", "CONFIRMED");

    let mut cal = Calendar::new();
    cal.push(ics_event.done());
    let cal = cal.done();

    let output = tidy_ics_output(&cal.to_string(), &series.product_id);

    tracing::debug!(id = %event.id, series = %series.name, "generated ics document");
    output
}

/// Download name for an event's calendar file.
pub fn ics_filename(event: &Event) -> String {
    format!("{}.ics", event.id)
}

/// Clean up ICS output from the icalendar crate
/// - Write our own PRODID instead of the crate's
/// - Drop CALSCALE:GREGORIAN (it's the default)
/// - Put the VEVENT properties in a fixed order
fn tidy_ics_output(ics: &str, product_id: &str) -> String {
    let mut properties: Vec<String> = Vec::new();
    let mut in_vevent = false;

    for line in logical_lines(ics) {
        if line == "BEGIN:VEVENT" {
            in_vevent = true;
        } else if line == "END:VEVENT" {
            in_vevent = false;
        } else if in_vevent {
            properties.push(line);
        }
    }

    properties.sort_by_key(|line| {
        let name = line.split([':', ';']).next().unwrap_or_default();
        VEVENT_ORDER
            .iter()
            .position(|n| *n == name)
            .unwrap_or(VEVENT_ORDER.len())
    });

    let mut result = String::with_capacity(ics.len());
    let header = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", product_id),
        "BEGIN:VEVENT".to_string(),
    ];
    let footer = ["END:VEVENT".to_string(), "END:VCALENDAR".to_string()];

    for line in header.iter().chain(&properties).chain(&footer) {
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Content lines with their folded continuations kept attached.
fn logical_lines(ics: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in ics.lines() {
        if let (Some(rest), Some(last)) = (line.strip_prefix(' '), lines.last_mut()) {
            last.push_str("\r\n ");
            last.push_str(rest);
            continue;
        }
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    lines
}
