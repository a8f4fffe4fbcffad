//! Calendar export.
//!
//! Builds single-event .ics documents (RFC 5545) for the "Add to calendar"
//! download and mail attachments.

mod generate;

pub use generate::{ics_filename, to_calendar_document};
