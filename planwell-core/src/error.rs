//! Error types for the PlanWell crates.

use thiserror::Error;

/// Errors that can occur while loading configuration or catalogs.
#[derive(Error, Debug)]
pub enum PlanwellError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    #[error(transparent)]
    Validation(#[from] CatalogValidationError),

    #[error("No event '{id}' in the {series} catalog")]
    UnknownEvent { series: String, id: String },
}

/// Authoring mistakes rejected when a catalog is loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogValidationError {
    #[error("Duplicate event id '{0}'")]
    DuplicateId(String),

    #[error("Event id '{0}' is not usable in a calendar UID")]
    InvalidId(String),

    #[error("Event '{id}' has an unparseable date '{value}': {reason}")]
    InvalidDate {
        id: String,
        value: String,
        reason: String,
    },

    #[error("Event '{id}' has an unusable meeting link '{value}': {reason}")]
    InvalidLink {
        id: String,
        value: String,
        reason: String,
    },

    #[error("Event '{0}' needs a host for this series")]
    MissingHost(String),
}

/// Result type alias for PlanWell operations.
pub type PlanwellResult<T> = Result<T, PlanwellError>;
