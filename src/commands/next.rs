use anyhow::Result;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use planwell_core::Catalog;

use crate::render::render_event_detail;

pub fn run(catalog: &Catalog, now: DateTime<Utc>) -> Result<()> {
    match catalog.next_event(now) {
        Some(event) => println!("{}", render_event_detail(event, catalog.series(), now)),
        None => println!(
            "{}",
            format!("No upcoming {} sessions", catalog.series().name).dimmed()
        ),
    }

    Ok(())
}
