use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use planwell_core::Catalog;
use planwell_core::ics::{ics_filename, to_calendar_document};

/// Export one event as .ics: the given id, or the next session after `now`.
///
/// DTSTAMP always reads the real clock, even when `now` is overridden.
pub fn run(
    catalog: &Catalog,
    id: Option<&str>,
    output: Option<&Path>,
    now: DateTime<Utc>,
) -> Result<()> {
    let event = match id {
        Some(id) => catalog.require(id)?,
        None => catalog.next_event(now).with_context(|| {
            format!("No upcoming {} sessions to export", catalog.series().name)
        })?,
    };

    let ics = to_calendar_document(event, catalog.series(), Utc::now());

    match output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(ics_filename(event))
            } else {
                path.to_path_buf()
            };
            std::fs::write(&path, ics)
                .with_context(|| format!("Could not write {}", path.display()))?;
            eprintln!("{}", format!("  Created: {}", path.display()).green());
        }
        None => print!("{}", ics),
    }

    Ok(())
}
