//! The `roster range` command.

use std::path::PathBuf;

use anyhow::Result;

use roster_core::config::load_config_from;
use roster_core::store::Roster;

use crate::terminal::records_table;

pub fn execute(min: i64, max: i64, format: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let roster = Roster::with_samples(&config.classifier());
    let found: Vec<_> = roster.find_by_range(min, max).into_iter().cloned().collect();

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&found)?),
        "text" => {
            if found.is_empty() {
                println!("No students scored between {min} and {max}.");
            } else {
                println!("{}", records_table(&found));
                println!("{} student(s) scored between {min} and {max}.", found.len());
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
