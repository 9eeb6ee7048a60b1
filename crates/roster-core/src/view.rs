//! View-model handed to presentation surfaces.
//!
//! Surfaces never see the store itself. Each render gets a fresh
//! [`RosterView`] whose positions are taken from the current sequence.

use serde::Serialize;

use crate::model::{Band, Record};
use crate::notice::Notice;
use crate::statistics::Statistics;

/// Text shown when the roster has no records.
pub const EMPTY_PLACEHOLDER: &str = "No students added yet. Add some students to get started!";

/// One rendered record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    /// Current position; passing it to removal removes this record.
    pub position: usize,
    pub name: String,
    pub score: u8,
    pub band: Band,
    pub message: String,
}

impl RecordView {
    pub fn from_record(position: usize, record: &Record) -> Self {
        Self {
            position,
            name: record.name().to_string(),
            score: record.score(),
            band: record.band(),
            message: record.message().to_string(),
        }
    }

    /// `Grade: 92% - Outstanding work! 🌟`
    pub fn grade_line(&self) -> String {
        format!("Grade: {}% - {}", self.score, self.message)
    }
}

/// The full list as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "records", rename_all = "lowercase")]
pub enum RosterView {
    Empty,
    Records(Vec<RecordView>),
}

impl RosterView {
    pub fn from_records(records: &[Record]) -> Self {
        if records.is_empty() {
            return RosterView::Empty;
        }
        RosterView::Records(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| RecordView::from_record(i, r))
                .collect(),
        )
    }

    pub fn items(&self) -> &[RecordView] {
        match self {
            RosterView::Empty => &[],
            RosterView::Records(items) => items.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// A presentation target driven by a session.
pub trait Surface {
    /// Replace the displayed list.
    fn render_list(&mut self, view: &RosterView);

    /// Show the statistics panel.
    fn show_statistics(&mut self, stats: &Statistics);

    /// Hide the statistics panel.
    fn hide_statistics(&mut self);

    /// Display a transient notice.
    fn notify(&mut self, notice: Notice);

    /// Reset the name and score inputs.
    fn clear_inputs(&mut self);
}

/// A surface event, as captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Render(RosterView),
    ShowStatistics(Statistics),
    HideStatistics,
    Notify(Notice),
    ClearInputs,
}

/// Surface that keeps every call, for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Forget all captured events.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    /// The most recent rendered list.
    pub fn last_render(&self) -> Option<&RosterView> {
        self.events.iter().rev().find_map(|e| match e {
            SurfaceEvent::Render(view) => Some(view),
            _ => None,
        })
    }

    /// The most recent notice.
    pub fn last_notice(&self) -> Option<&Notice> {
        self.events.iter().rev().find_map(|e| match e {
            SurfaceEvent::Notify(notice) => Some(notice),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn render_list(&mut self, view: &RosterView) {
        self.events.push(SurfaceEvent::Render(view.clone()));
    }

    fn show_statistics(&mut self, stats: &Statistics) {
        self.events.push(SurfaceEvent::ShowStatistics(stats.clone()));
    }

    fn hide_statistics(&mut self) {
        self.events.push(SurfaceEvent::HideStatistics);
    }

    fn notify(&mut self, notice: Notice) {
        self.events.push(SurfaceEvent::Notify(notice));
    }

    fn clear_inputs(&mut self) {
        self.events.push(SurfaceEvent::ClearInputs);
    }
}
