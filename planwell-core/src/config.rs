//! PlanWell configuration.
//!
//! Read from `~/.config/planwell/config.toml`, with `PLANWELL_*` environment
//! variables taking precedence (e.g. `PLANWELL_CONTACT_WEBHOOK`).

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::Catalog;
use crate::error::{PlanwellError, PlanwellResult};
use crate::series::SeriesKind;

static ENV_PREFIX: &str = "PLANWELL";
static DEFAULT_LOG_FILTER: &str = "warn";

fn default_log() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn is_default_log(s: &String) -> bool {
    s == DEFAULT_LOG_FILTER
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlanwellConfig {
    /// Catalog file for the workshop series; the bundled one when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workshop_catalog: Option<PathBuf>,

    /// Catalog file for the TSP webinar series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsp_catalog: Option<PathBuf>,

    /// Where contact-form submissions are relayed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_webhook: Option<Url>,

    /// Where webinar registrations are relayed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webinar_webhook: Option<Url>,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log", skip_serializing_if = "is_default_log")]
    pub log: String,
}

impl Default for PlanwellConfig {
    fn default() -> Self {
        PlanwellConfig {
            workshop_catalog: None,
            tsp_catalog: None,
            contact_webhook: None,
            webinar_webhook: None,
            log: default_log(),
        }
    }
}

impl PlanwellConfig {
    pub fn config_path() -> PlanwellResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlanwellError::Config("Could not determine config directory".into()))?
            .join("planwell");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, writing a commented default file on first run.
    pub fn load() -> PlanwellResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
        }

        Self::load_from(&path)
    }

    /// Load a specific config file layered with the process environment.
    pub fn load_from(path: &Path) -> PlanwellResult<Self> {
        Self::build(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn build(path: &Path, env: Environment) -> PlanwellResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(env)
            .build()
            .map_err(|e| PlanwellError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlanwellError::Config(e.to_string()))
    }

    /// Save the current config to `path`.
    pub fn save(&self, path: &Path) -> PlanwellResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| PlanwellError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| PlanwellError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlanwellResult<()> {
        let contents = format!(
            "\
# planwell configuration

# Catalog files (defaults to the bundled schedules):
# workshop_catalog = \"~/planwell/workshops.toml\"
# tsp_catalog = \"~/planwell/tsp-webinars.toml\"

# Form relay webhooks:
# contact_webhook = \"https://n8n.example.com/webhook/contact\"
# webinar_webhook = \"https://n8n.example.com/webhook/webinar\"

# Log filter when RUST_LOG is unset:
# log = \"{}\"
",
            DEFAULT_LOG_FILTER
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlanwellError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlanwellError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Configured catalog path for a series, with `~` expanded.
    pub fn catalog_path(&self, kind: SeriesKind) -> Option<PathBuf> {
        let path = match kind {
            SeriesKind::Workshop => self.workshop_catalog.as_ref(),
            SeriesKind::Tsp => self.tsp_catalog.as_ref(),
        }?;

        Some(PathBuf::from(
            shellexpand::tilde(&path.to_string_lossy()).into_owned(),
        ))
    }

    /// The catalog for a series: the configured file, or the bundled one.
    pub fn catalog(&self, kind: SeriesKind) -> PlanwellResult<Catalog> {
        match self.catalog_path(kind) {
            Some(path) => {
                tracing::debug!(series = %kind, path = %path.display(), "loading catalog file");
                Catalog::load(kind.series(), &path)
            }
            None => Catalog::builtin(kind),
        }
    }
}
