//! Display helpers: long dates, countdowns and time labels.

use chrono::{DateTime, Duration, Offset, Utc};

use crate::catalog::Catalog;
use crate::constants::MILLIS_PER_DAY;
use crate::event::Event;
use crate::series::EventSeries;

/// Long-form date in the event's own offset, e.g. "Tuesday, December 30".
pub fn format_date(event: &Event) -> String {
    event.date.format("%A, %B %-d").to_string()
}

/// Whole days until the event, rounded up.
///
/// 23 hours away is 1 day; exactly 24 hours is still 1; a millisecond more is 2.
/// Past events give zero or a negative count.
pub fn days_until(event: &Event, now: DateTime<Utc>) -> i64 {
    let diff = (event.start_utc() - now).num_milliseconds();
    -(-diff).div_euclid(MILLIS_PER_DAY)
}

/// Wall-clock labels computed from an event's instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLabels {
    pub start_time: String,
    pub end_time: String,
    pub timezone: String,
    /// UTC offset of the series zone at the event instant, in seconds
    pub offset_seconds: i32,
}

/// Derive start/end labels and the zone abbreviation from `date` and the
/// series timezone, instead of trusting the authored strings.
pub fn derived_labels(event: &Event, series: &EventSeries) -> TimeLabels {
    let start = event.date.with_timezone(&series.timezone);
    let end = start + Duration::hours(i64::from(series.duration_hours));

    TimeLabels {
        start_time: start.format("%-I:%M %p").to_string(),
        end_time: end.format("%-I:%M %p").to_string(),
        timezone: start.format("%Z").to_string(),
        offset_seconds: start.offset().fix().local_minus_utc(),
    }
}

/// Which authored field disagrees with its derived value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftField {
    StartTime,
    EndTime,
    Timezone,
    /// The authored UTC offset isn't the one the series zone uses that day
    Offset,
}

impl DriftField {
    pub fn as_str(self) -> &'static str {
        match self {
            DriftField::StartTime => "start_time",
            DriftField::EndTime => "end_time",
            DriftField::Timezone => "timezone",
            DriftField::Offset => "offset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDrift {
    pub id: String,
    pub field: DriftField,
    pub authored: String,
    pub derived: String,
}

/// Every place where a catalog's authored labels disagree with `date`.
pub fn label_drift(catalog: &Catalog) -> Vec<LabelDrift> {
    let series = catalog.series();
    let mut drift = Vec::new();

    for event in catalog.events() {
        let labels = derived_labels(event, series);

        let authored_offset = event.date.offset().local_minus_utc();
        if authored_offset != labels.offset_seconds {
            drift.push(LabelDrift {
                id: event.id.clone(),
                field: DriftField::Offset,
                authored: format_offset(authored_offset),
                derived: format_offset(labels.offset_seconds),
            });
        }

        let pairs = [
            (DriftField::StartTime, &event.start_time, labels.start_time),
            (DriftField::EndTime, &event.end_time, labels.end_time),
            (DriftField::Timezone, &event.timezone, labels.timezone),
        ];
        for (field, authored, derived) in pairs {
            if authored.trim() != derived {
                drift.push(LabelDrift {
                    id: event.id.clone(),
                    field,
                    authored: authored.clone(),
                    derived,
                });
            }
        }
    }

    for d in &drift {
        tracing::warn!(
            id = %d.id,
            field = d.field.as_str(),
            authored = %d.authored,
            derived = %d.derived,
            "authored label disagrees with event date"
        );
    }

    drift
}

fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::make_event;
    use crate::series::SeriesKind;

    #[test]
    fn test_format_date_uses_event_offset() {
        let event = make_event("dec-30-2025", "2025-12-30T11:00:00-05:00");
        assert_eq!(format_date(&event), "Tuesday, December 30");

        // 22:00 EST on the 30th is already the 31st in UTC; the label follows the offset
        let late = make_event("late", "2025-12-30T22:00:00-05:00");
        assert_eq!(format_date(&late), "Tuesday, December 30");
    }

    #[test]
    fn test_days_until_rounds_up() {
        let event = make_event("dec-30-2025", "2025-12-30T11:00:00-05:00");
        let start = event.start_utc();

        assert_eq!(days_until(&event, start - Duration::hours(23)), 1);
        assert_eq!(days_until(&event, start - Duration::hours(24)), 1);
        assert_eq!(
            days_until(&event, start - Duration::hours(24) - Duration::milliseconds(1)),
            2
        );
        assert_eq!(days_until(&event, start - Duration::milliseconds(1)), 1);
    }

    #[test]
    fn test_days_until_past_events() {
        let event = make_event("dec-30-2025", "2025-12-30T11:00:00-05:00");
        let start = event.start_utc();

        assert_eq!(days_until(&event, start), 0);
        assert_eq!(days_until(&event, start + Duration::hours(1)), 0);
        assert_eq!(days_until(&event, start + Duration::hours(24)), -1);
        assert_eq!(days_until(&event, start + Duration::hours(25)), -1);
        assert_eq!(days_until(&event, start + Duration::hours(48)), -2);
    }

    #[test]
    fn test_derived_labels_across_dst() {
        let series = EventSeries::workshop();

        let winter = make_event("feb-27-2026", "2026-02-27T11:00:00-05:00");
        let labels = derived_labels(&winter, &series);
        assert_eq!(labels.start_time, "11:00 AM");
        assert_eq!(labels.end_time, "2:00 PM");
        assert_eq!(labels.timezone, "EST");
        assert_eq!(labels.offset_seconds, -5 * 3600);

        let spring = make_event("mar-20-2026", "2026-03-20T11:00:00-04:00");
        let labels = derived_labels(&spring, &series);
        assert_eq!(labels.start_time, "11:00 AM");
        assert_eq!(labels.timezone, "EDT");
    }

    #[test]
    fn test_builtin_catalogs_have_no_drift() {
        for kind in SeriesKind::ALL {
            let catalog = Catalog::builtin(kind).unwrap();
            assert_eq!(label_drift(&catalog), vec![], "{} catalog drifted", kind);
        }
    }

    #[test]
    fn test_drift_reports_wrong_offset_after_dst() {
        // Authored with the winter offset after the March change
        let mut event = make_event("mar-20-2026", "2026-03-20T11:00:00-05:00");
        event.timezone = "EST".to_string();
        let catalog = Catalog::new(EventSeries::workshop(), vec![event]).unwrap();

        let drift = label_drift(&catalog);
        let fields: Vec<_> = drift.iter().map(|d| d.field).collect();
        assert!(fields.contains(&DriftField::Offset));
        assert!(fields.contains(&DriftField::Timezone));
        assert!(fields.contains(&DriftField::StartTime));

        let offset = drift.iter().find(|d| d.field == DriftField::Offset).unwrap();
        assert_eq!(offset.authored, "-05:00");
        assert_eq!(offset.derived, "-04:00");
    }

    #[test]
    fn test_drift_reports_stale_end_label() {
        let mut event = make_event("jan-16-2026", "2026-01-16T11:00:00-05:00");
        event.end_time = "1:00 PM".to_string();
        let catalog = Catalog::new(EventSeries::workshop(), vec![event]).unwrap();

        let drift = label_drift(&catalog);
        assert_eq!(drift.len(), 1);
        assert_eq!(drift[0].field, DriftField::EndTime);
        assert_eq!(drift[0].derived, "2:00 PM");
    }
}
