//! The `roster render` command.

use std::path::PathBuf;

use anyhow::Result;

use roster_core::config::load_config_from;
use roster_core::statistics::compute_statistics;
use roster_core::store::Roster;
use roster_core::view::RosterView;
use roster_report::html::{write_html_page, Page};

pub fn execute(output: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let classifier = config.classifier();
    let roster = Roster::with_samples(&classifier);
    let stats = compute_statistics(roster.records(), &classifier)?;
    let view = RosterView::from_records(roster.records());

    write_html_page(&Page::new(&view).with_statistics(&stats), &output)?;
    println!("Page written to: {}", output.display());

    Ok(())
}
