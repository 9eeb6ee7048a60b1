//! The `roster stats` command.

use std::path::PathBuf;

use anyhow::Result;

use roster_core::config::load_config_from;
use roster_core::statistics::compute_statistics;
use roster_core::store::Roster;
use roster_report::text::{render_statistics, statistics_markdown};

pub fn execute(config_path: Option<PathBuf>, format: String) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let classifier = config.classifier();
    let roster = Roster::with_samples(&classifier);
    let stats = compute_statistics(roster.records(), &classifier)?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        "markdown" | "md" => println!("{}", statistics_markdown(&stats)),
        "text" => println!("{}", render_statistics(&stats)),
        other => anyhow::bail!("unknown format: {other} (expected text, json, or markdown)"),
    }

    Ok(())
}
