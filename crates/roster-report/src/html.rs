//! HTML page generator.
//!
//! Produces a self-contained page with all CSS inlined: the record list, the
//! optional statistics panel, and an optional notice banner.

use anyhow::{Context, Result};
use std::path::Path;

use roster_core::model::Band;
use roster_core::notice::Notice;
use roster_core::statistics::Statistics;
use roster_core::view::{RecordView, RosterView, EMPTY_PLACEHOLDER};

use crate::text::{band_heading, format_average};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Everything a page shows.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub roster: &'a RosterView,
    pub statistics: Option<&'a Statistics>,
    pub notice: Option<&'a Notice>,
}

impl<'a> Page<'a> {
    pub fn new(roster: &'a RosterView) -> Self {
        Self {
            roster,
            statistics: None,
            notice: None,
        }
    }

    pub fn with_statistics(mut self, stats: &'a Statistics) -> Self {
        self.statistics = Some(stats);
        self
    }

    pub fn with_notice(mut self, notice: Option<&'a Notice>) -> Self {
        self.notice = notice;
        self
    }
}

/// Render the record list section body.
pub fn render_list(view: &RosterView) -> String {
    match view {
        RosterView::Empty => format!("<p>{}</p>\n", html_escape(EMPTY_PLACEHOLDER)),
        RosterView::Records(items) => items.iter().map(render_item).collect(),
    }
}

fn render_item(item: &RecordView) -> String {
    format!(
        "<div class=\"student-item {}\">\n  <h4>{}</h4>\n  <div class=\"grade-display\">{}</div>\n  <button class=\"danger\" data-position=\"{}\">Remove Student</button>\n</div>\n",
        item.band.as_str(),
        html_escape(&item.name),
        html_escape(&item.grade_line()),
        item.position,
    )
}

/// Render the statistics panel body.
pub fn render_statistics(stats: &Statistics) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<p><strong>Total Students:</strong> {}</p>\n",
        stats.total
    ));
    html.push_str(&format!(
        "<p><strong>Class Average:</strong> {}%</p>\n",
        format_average(stats.average)
    ));
    html.push_str(&format!(
        "<p><strong>Highest Grade:</strong> {}%</p>\n",
        stats.highest
    ));
    html.push_str(&format!(
        "<p><strong>Lowest Grade:</strong> {}%</p>\n",
        stats.lowest
    ));
    html.push_str(&format!(
        "<p><strong>Passing Students:</strong> {} ({}%)</p>\n",
        stats.passing, stats.pass_percentage
    ));
    html.push_str("<p><strong>Grade Distribution:</strong></p>\n<ul>\n");
    for band in Band::ALL {
        html.push_str(&format!(
            "  <li>{}: {} students</li>\n",
            html_escape(&band_heading(band, stats.pass_threshold)),
            stats.distribution.get(band)
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Generate a complete HTML page.
pub fn generate_html(page: &Page<'_>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Student Roster</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n<h1>Student Roster</h1>\n</header>\n");

    match page.notice {
        Some(notice) => html.push_str(&format!(
            "<div id=\"message\" class=\"{}\">{}</div>\n",
            notice.kind.css_class(),
            html_escape(&notice.text)
        )),
        None => html.push_str("<div id=\"message\"></div>\n"),
    }

    html.push_str("<section id=\"studentDisplay\">\n");
    html.push_str(&render_list(page.roster));
    html.push_str("</section>\n");

    match page.statistics {
        Some(stats) => {
            html.push_str("<section id=\"statisticsDisplay\">\n<h2>Class Statistics</h2>\n");
            html.push_str("<div id=\"statsContent\">\n");
            html.push_str(&render_statistics(stats));
            html.push_str("</div>\n</section>\n");
        }
        None => html.push_str("<section id=\"statisticsDisplay\" hidden></section>\n"),
    }

    html.push_str(&format!(
        "<footer class=\"meta\">Generated {}</footer>\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML page to a file.
pub fn write_html_page(page: &Page<'_>, path: &Path) -> Result<()> {
    let html = generate_html(page);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write page to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --excellent: #dcfce7; --good: #dbeafe; --needs: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --excellent: #064e3b; --good: #1e3a8a; --needs: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; margin-top: 2rem; }
.student-item { border: 1px solid var(--border); border-radius: 8px; padding: 0.5rem 1rem; margin: 0.5rem 0; }
.student-item.excellent { background: var(--excellent); }
.student-item.good { background: var(--good); }
.student-item.needs-improvement { background: var(--needs); }
.success-message { color: #15803d; font-weight: bold; }
.error-message { color: #b91c1c; font-weight: bold; }
button.danger { background: #ef4444; color: #fff; border: none; border-radius: 4px; padding: 0.25rem 0.75rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::classifier::Classifier;
    use roster_core::statistics::compute_statistics;
    use roster_core::store::Roster;

    fn sample() -> (RosterView, Statistics) {
        let classifier = Classifier::default();
        let roster = Roster::with_samples(&classifier);
        let stats = compute_statistics(roster.records(), &classifier).unwrap();
        (RosterView::from_records(roster.records()), stats)
    }

    #[test]
    fn page_contains_records_and_statistics() {
        let (view, stats) = sample();
        let html = generate_html(&Page::new(&view).with_statistics(&stats));

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<h4>Alice Johnson</h4>"));
        assert!(html.contains("student-item needs-improvement"));
        assert!(html.contains("Grade: 78% - Good work! ✓"));
        assert!(html.contains("data-position=\"3\""));
        assert!(html.contains("<strong>Class Average:</strong> 70%"));
        assert!(html.contains("Good (60-89): 2 students"));
    }

    #[test]
    fn empty_page_shows_placeholder_and_hides_statistics() {
        let html = generate_html(&Page::new(&RosterView::Empty));
        assert!(html.contains(EMPTY_PLACEHOLDER));
        assert!(html.contains("<section id=\"statisticsDisplay\" hidden>"));
    }

    #[test]
    fn names_are_escaped() {
        let classifier = Classifier::default();
        let mut roster = Roster::new();
        roster.add("<b>Mallory</b>", "50", &classifier).unwrap();
        let view = RosterView::from_records(roster.records());
        let html = render_list(&view);
        assert!(html.contains("&lt;b&gt;Mallory&lt;/b&gt;"));
        assert!(!html.contains("<b>Mallory"));
    }

    #[test]
    fn notice_banner() {
        let notice = Notice::error("No students to clear!");
        let html = generate_html(&Page::new(&RosterView::Empty).with_notice(Some(&notice)));
        assert!(html.contains("<div id=\"message\" class=\"error-message\">No students to clear!</div>"));
    }

    #[test]
    fn write_page_to_file() {
        let (view, _) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("roster.html");

        write_html_page(&Page::new(&view), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Bob Smith"));
    }
}
