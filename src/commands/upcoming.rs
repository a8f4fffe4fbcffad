use anyhow::Result;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use planwell_core::Catalog;

use crate::render::render_event;

pub fn run(catalog: &Catalog, now: DateTime<Utc>, count: usize) -> Result<()> {
    let events = catalog.upcoming_events(now, count);

    if events.is_empty() {
        println!(
            "{}",
            format!("No upcoming {} sessions", catalog.series().name).dimmed()
        );
        return Ok(());
    }

    for event in events {
        println!("{}", render_event(event, catalog.series(), now));
    }

    Ok(())
}
