//! Event series: what differs between the workshop and the TSP webinar.
//!
//! Selection, presentation and export are the same for every series; only the
//! session length and the fixed copy change. An `EventSeries` carries those.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::ONLINE_LOCATION;

/// Placeholder in `EventSeries::description` replaced by the session host.
pub const HOST_PLACEHOLDER: &str = "{host}";

/// The built-in series, as named on the command line and in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Workshop,
    Tsp,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 2] = [SeriesKind::Workshop, SeriesKind::Tsp];

    pub fn series(self) -> EventSeries {
        match self {
            SeriesKind::Workshop => EventSeries::workshop(),
            SeriesKind::Tsp => EventSeries::tsp_webinar(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeriesKind::Workshop => "workshop",
            SeriesKind::Tsp => "tsp",
        }
    }
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SeriesKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "workshop" => Ok(SeriesKind::Workshop),
            "tsp" => Ok(SeriesKind::Tsp),
            other => Err(format!(
                "Unknown series '{}'. Expected one of: workshop, tsp",
                other
            )),
        }
    }
}

/// Per-series duration, copy and home timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSeries {
    pub name: String,
    /// Session length used for DTEND and the derived end label
    pub duration_hours: u32,
    /// PRODID of exported documents
    pub product_id: String,
    /// Appended to the event title in SUMMARY
    pub summary_suffix: String,
    /// DESCRIPTION text; may contain [`HOST_PLACEHOLDER`]
    pub description: String,
    pub location: String,
    /// Reject catalog entries without a host
    pub requires_host: bool,
    /// Zone the sessions are scheduled in
    pub timezone: Tz,
}

impl EventSeries {
    /// The three-hour FERS retirement workshop.
    pub fn workshop() -> Self {
        EventSeries {
            name: "workshop".to_string(),
            duration_hours: 3,
            product_id: "-//PlanWell//Webinar//EN".to_string(),
            summary_suffix: " - PlanWell Financial Planning".to_string(),
            description: "Free 3-hour FERS retirement workshop covering pension, TSP, FEHB, \
                          Medicare, and survivor benefits.\n\n\
                          Hosted by Certified Financial Planners who specialize in \
                          federal benefits."
                .to_string(),
            location: ONLINE_LOCATION.to_string(),
            requires_host: false,
            timezone: chrono_tz::America::New_York,
        }
    }

    /// The one-hour TSP strategy webinar.
    pub fn tsp_webinar() -> Self {
        EventSeries {
            name: "tsp".to_string(),
            duration_hours: 1,
            product_id: "-//PlanWell//TSP Webinar//EN".to_string(),
            summary_suffix: " - PlanWell TSP Webinar".to_string(),
            description: "1-hour TSP training covering investment strategies, fund allocation, \
                          and withdrawal planning.\n\n\
                          Hosted by {host}\n\n\
                          Topics: Traditional vs Roth TSP, C/S/I/F/G funds, withdrawal strategies, \
                          and live Q&A."
                .to_string(),
            location: ONLINE_LOCATION.to_string(),
            requires_host: true,
            timezone: chrono_tz::America::New_York,
        }
    }

    /// Description with the host filled in.
    pub fn description_for(&self, host: Option<&str>) -> String {
        self.description
            .replace(HOST_PLACEHOLDER, host.unwrap_or_default())
    }

    /// Summary line for an event title.
    pub fn summary_for(&self, title: &str) -> String {
        format!("{}{}", title, self.summary_suffix)
    }
}
