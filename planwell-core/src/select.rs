//! Picking the next session(s) out of a catalog.

use chrono::{DateTime, Utc};

use crate::event::Event;

pub use crate::constants::DEFAULT_UPCOMING_COUNT;

/// The soonest event starting strictly after `now`.
pub fn next_event(events: &[Event], now: DateTime<Utc>) -> Option<&Event> {
    upcoming_events(events, now, 1).into_iter().next()
}

/// Up to `count` events starting strictly after `now`, soonest first.
///
/// Catalogs are not required to be sorted. Events sharing an instant keep
/// their authored order.
pub fn upcoming_events(events: &[Event], now: DateTime<Utc>, count: usize) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events.iter().filter(|e| e.is_upcoming(now)).collect();
    upcoming.sort_by_key(|e| e.start_utc());
    upcoming.truncate(count);

    tracing::debug!(%now, count, found = upcoming.len(), "selected upcoming events");
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::make_event;
    use chrono::{Duration, TimeZone};

    fn unsorted_catalog() -> Vec<Event> {
        vec![
            make_event("feb-06-2026", "2026-02-06T11:00:00-05:00"),
            make_event("dec-30-2025", "2025-12-30T11:00:00-05:00"),
            make_event("mar-20-2026", "2026-03-20T11:00:00-04:00"),
            make_event("jan-16-2026", "2026-01-16T11:00:00-05:00"),
        ]
    }

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_next_event_excludes_exact_now() {
        let events = vec![make_event("dec-30-2025", "2025-12-30T11:00:00-05:00")];
        let at = Utc.with_ymd_and_hms(2025, 12, 30, 16, 0, 0).unwrap();

        assert!(next_event(&events, at).is_none());

        let just_before = at - Duration::milliseconds(1);
        assert_eq!(next_event(&events, just_before).unwrap().id, "dec-30-2025");
    }

    #[test]
    fn test_upcoming_sorted_and_truncated() {
        let events = unsorted_catalog();
        let now = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();

        let got = upcoming_events(&events, now, DEFAULT_UPCOMING_COUNT);
        assert_eq!(ids(&got), vec!["dec-30-2025", "jan-16-2026", "feb-06-2026"]);
    }

    #[test]
    fn test_upcoming_returns_fewer_when_exhausted() {
        let events = unsorted_catalog();
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

        let got = upcoming_events(&events, now, 10);
        assert_eq!(ids(&got), vec!["feb-06-2026", "mar-20-2026"]);
    }

    #[test]
    fn test_all_past_or_empty() {
        let now = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        assert!(upcoming_events(&unsorted_catalog(), now, 3).is_empty());
        assert!(next_event(&unsorted_catalog(), now).is_none());
        assert!(upcoming_events(&[], now, 3).is_empty());
    }

    #[test]
    fn test_zero_count() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(upcoming_events(&unsorted_catalog(), now, 0).is_empty());
    }

    #[test]
    fn test_compares_instants_across_offsets() {
        // 10:30 EST is 15:30Z; 11:00 EDT is 15:00Z, so the EDT session comes first.
        let events = vec![
            make_event("est", "2026-03-20T10:30:00-05:00"),
            make_event("edt", "2026-03-20T11:00:00-04:00"),
        ];
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(ids(&upcoming_events(&events, now, 2)), vec!["edt", "est"]);
    }

    #[test]
    fn test_next_matches_head_of_upcoming() {
        let events = unsorted_catalog();
        let start = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();

        for step in 0..150 {
            let now = start + Duration::days(step);
            let all = upcoming_events(&events, now, usize::MAX);
            assert_eq!(next_event(&events, now).map(|e| &e.id), all.first().map(|e| &e.id));
            assert!(all.windows(2).all(|w| w[0].start_utc() < w[1].start_utc()));
        }
    }
}
