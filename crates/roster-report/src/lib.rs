//! roster-report — Page and text rendering for roster.
//!
//! Turns the core view-model and statistics into a self-contained HTML page,
//! plain-text panels, and markdown summaries.

pub mod html;
pub mod text;
