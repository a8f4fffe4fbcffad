use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use planwell_core::config::PlanwellConfig;

use crate::relay::{FormKind, Submission, WebhookRelay};

pub async fn run(
    config: &PlanwellConfig,
    kind: FormKind,
    fields: Vec<(String, String)>,
) -> Result<()> {
    let relay = WebhookRelay::from_config(config);
    let submission = Submission::new(kind, fields.into_iter().collect(), Utc::now());

    relay
        .submit(&submission)
        .await
        .with_context(|| format!("Could not relay {} submission", kind))?;

    println!("{}", format!("  Submitted {} form", kind).green());
    Ok(())
}
