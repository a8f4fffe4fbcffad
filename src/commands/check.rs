use anyhow::Result;
use owo_colors::OwoColorize;
use planwell_core::config::PlanwellConfig;
use planwell_core::present::label_drift;
use planwell_core::{PlanwellError, SeriesKind};

use crate::render::Render;

/// Validate catalogs and list label drift. Drift is reported but only
/// validation failures make the command fail.
pub fn run(config: &PlanwellConfig, kinds: &[SeriesKind]) -> Result<()> {
    let mut failed = 0;

    for &kind in kinds {
        let source = config
            .catalog_path(kind)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string());

        match config.catalog(kind) {
            Ok(catalog) => {
                println!(
                    "{} {} {}",
                    "✓".green(),
                    kind.to_string().bold(),
                    format!("({} events, {})", catalog.len(), source).dimmed()
                );
                for drift in label_drift(&catalog) {
                    println!("   {}", drift.render());
                }
            }
            Err(PlanwellError::Validation(e)) => {
                failed += 1;
                println!("{} {}", kind.to_string().bold(), source.dimmed());
                println!("   {}", e.render());
            }
            Err(e) => {
                failed += 1;
                println!("{} {}", kind.to_string().bold(), source.dimmed());
                println!("   {} {}", "x".red(), e.to_string().red());
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} catalog(s) failed validation", failed);
    }

    Ok(())
}
