//! Plain-text and markdown rendering of the statistics panel.

use roster_core::classifier::Classifier;
use roster_core::model::Band;
use roster_core::statistics::Statistics;

/// Format the mean without trailing zeros: `70`, `70.5`, `70.25`.
pub fn format_average(average: f64) -> String {
    let fixed = format!("{average:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `Excellent (90-100)`, `Good (60-89)`, `Needs Improvement (0-59)`.
pub fn band_heading(band: Band, pass_threshold: u8) -> String {
    match Classifier::new(pass_threshold).range(band) {
        Some((min, max)) => format!("{} ({min}-{max})", band.label()),
        None => format!("{} (none)", band.label()),
    }
}

/// The statistics panel as lines of text.
pub fn statistics_lines(stats: &Statistics) -> Vec<String> {
    let mut lines = vec![
        format!("Total Students: {}", stats.total),
        format!("Class Average: {}%", format_average(stats.average)),
        format!("Highest Grade: {}%", stats.highest),
        format!("Lowest Grade: {}%", stats.lowest),
        format!(
            "Passing Students: {} ({}%)",
            stats.passing, stats.pass_percentage
        ),
        "Grade Distribution:".to_string(),
    ];
    for band in Band::ALL {
        lines.push(format!(
            "  {}: {} students",
            band_heading(band, stats.pass_threshold),
            stats.distribution.get(band)
        ));
    }
    lines
}

/// The statistics panel as a single block of text.
pub fn render_statistics(stats: &Statistics) -> String {
    statistics_lines(stats).join("\n")
}

/// The statistics panel as markdown.
pub fn statistics_markdown(stats: &Statistics) -> String {
    let mut md = String::new();

    md.push_str("### Class Statistics\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Total Students | {} |\n", stats.total));
    md.push_str(&format!(
        "| Class Average | {}% |\n",
        format_average(stats.average)
    ));
    md.push_str(&format!("| Highest Grade | {}% |\n", stats.highest));
    md.push_str(&format!("| Lowest Grade | {}% |\n", stats.lowest));
    md.push_str(&format!(
        "| Passing Students | {} ({}%) |\n",
        stats.passing, stats.pass_percentage
    ));
    md.push('\n');

    md.push_str("### Grade Distribution\n\n");
    md.push_str("| Band | Students |\n");
    md.push_str("|------|----------|\n");
    for band in Band::ALL {
        md.push_str(&format!(
            "| {} | {} |\n",
            band_heading(band, stats.pass_threshold),
            stats.distribution.get(band)
        ));
    }

    md
}
