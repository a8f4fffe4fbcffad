//! Core types for the PlanWell event pages.
//!
//! This crate holds everything the site needs to decide what to show for a
//! recurring event series:
//! - `Event`, `EventSeries` and `Catalog` for the authored schedules
//! - `select` / `present` for "what's next" and how to display it
//! - `ics` for the downloadable calendar file
//! - `reminder` for the nurture mail windows
//!
//! Every function here takes "now" as an argument; reading the wall clock is
//! left to the caller.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ics;
pub mod present;
pub mod reminder;
pub mod select;
pub mod series;

pub use catalog::Catalog;
pub use error::{CatalogValidationError, PlanwellError, PlanwellResult};
pub use event::Event;
pub use series::{EventSeries, SeriesKind};
