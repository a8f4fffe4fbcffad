use std::collections::BTreeSet;

use anyhow::Result;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use planwell_core::Catalog;
use planwell_core::reminder::due_reminder;

use crate::render::{Render, render_event};

/// Show which reminder window is open for each upcoming session.
pub fn run(catalog: &Catalog, now: DateTime<Utc>) -> Result<()> {
    let events = catalog.upcoming_events(now, usize::MAX);

    if events.is_empty() {
        println!(
            "{}",
            format!("No upcoming {} sessions", catalog.series().name).dimmed()
        );
        return Ok(());
    }

    let nothing_sent = BTreeSet::new();
    for event in events {
        let due = due_reminder(event, catalog.series(), now, &nothing_sent)
            .map(|r| r.render())
            .unwrap_or_else(|| "-".dimmed().to_string());
        println!("{}  {}", due, render_event(event, catalog.series(), now));
    }

    Ok(())
}
