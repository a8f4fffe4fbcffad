//! Event catalogs: the authored schedule for one series.
//!
//! Catalogs are plain TOML files with one `[[event]]` table per session. The
//! built-in catalogs are compiled into the crate; a config entry can point a
//! series at a file on disk instead.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::error::{CatalogValidationError, PlanwellError, PlanwellResult};
use crate::event::Event;
use crate::select;
use crate::series::{EventSeries, SeriesKind};

static WORKSHOPS_TOML: &str = include_str!("../catalogs/workshops.toml");
static TSP_WEBINARS_TOML: &str = include_str!("../catalogs/tsp-webinars.toml");

/// On-disk layout of a catalog file.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "event")]
    events: Vec<EventEntry>,
}

/// A catalog entry before its date has been checked.
#[derive(Deserialize)]
struct EventEntry {
    id: String,
    date: String,
    title: String,
    start_time: String,
    end_time: String,
    timezone: String,
    host: Option<String>,
    zoom_link: Option<String>,
}

impl EventEntry {
    fn into_event(self) -> Result<Event, CatalogValidationError> {
        let date = DateTime::parse_from_rfc3339(&self.date).map_err(|e| {
            CatalogValidationError::InvalidDate {
                id: self.id.clone(),
                value: self.date.clone(),
                reason: e.to_string(),
            }
        })?;
        let zoom_link = self
            .zoom_link
            .as_deref()
            .map(|raw| parse_link(&self.id, raw))
            .transpose()?;

        Ok(Event {
            id: self.id,
            date,
            title: self.title,
            start_time: self.start_time,
            end_time: self.end_time,
            timezone: self.timezone,
            host: self.host,
            zoom_link,
        })
    }
}

/// The validated schedule of one series, in authored order.
#[derive(Debug, Clone)]
pub struct Catalog {
    series: EventSeries,
    events: Vec<Event>,
}

impl Catalog {
    /// Build a catalog, rejecting entries that would produce broken output.
    pub fn new(series: EventSeries, events: Vec<Event>) -> Result<Self, CatalogValidationError> {
        let mut seen = HashSet::new();

        for event in &events {
            if !is_valid_id(&event.id) {
                return Err(CatalogValidationError::InvalidId(event.id.clone()));
            }
            if !seen.insert(event.id.as_str()) {
                return Err(CatalogValidationError::DuplicateId(event.id.clone()));
            }
            if series.requires_host && event.host.as_deref().is_none_or(|h| h.trim().is_empty()) {
                return Err(CatalogValidationError::MissingHost(event.id.clone()));
            }
        }

        Ok(Catalog { series, events })
    }

    /// Parse and validate catalog TOML.
    pub fn from_toml_str(series: EventSeries, content: &str) -> PlanwellResult<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| PlanwellError::CatalogParse(e.to_string()))?;

        let events = file
            .events
            .into_iter()
            .map(EventEntry::into_event)
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Catalog::new(series, events)?;
        tracing::debug!(
            series = %catalog.series.name,
            events = catalog.events.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog file from disk.
    pub fn load(series: EventSeries, path: &Path) -> PlanwellResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(series, &content)
    }

    /// The catalog bundled with the crate for a series.
    pub fn builtin(kind: SeriesKind) -> PlanwellResult<Self> {
        let content = match kind {
            SeriesKind::Workshop => WORKSHOPS_TOML,
            SeriesKind::Tsp => TSP_WEBINARS_TOML,
        };
        Self::from_toml_str(kind.series(), content)
    }

    pub fn series(&self) -> &EventSeries {
        &self.series
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> PlanwellResult<&Event> {
        self.get(id).ok_or_else(|| PlanwellError::UnknownEvent {
            series: self.series.name.clone(),
            id: id.to_string(),
        })
    }

    pub fn next_event(&self, now: DateTime<Utc>) -> Option<&Event> {
        select::next_event(&self.events, now)
    }

    pub fn upcoming_events(&self, now: DateTime<Utc>, count: usize) -> Vec<&Event> {
        select::upcoming_events(&self.events, now, count)
    }
}

/// Ids end up as `<id>@domain` in UID lines; keep them to visible characters
/// that need no escaping.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '@' | ',' | ';'))
}

/// Meeting links are written verbatim into URL lines.
///
/// `Url::parse` silently drops tabs and newlines, so the raw text is checked first.
fn parse_link(id: &str, raw: &str) -> Result<Url, CatalogValidationError> {
    let invalid = |reason: String| CatalogValidationError::InvalidLink {
        id: id.to_string(),
        value: raw.to_string(),
        reason,
    };

    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid("contains whitespace or control characters".to_string()));
    }
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}
