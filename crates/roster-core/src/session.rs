//! Session controller.
//!
//! A [`Session`] owns the roster and drives a [`Surface`]: every mutating
//! operation ends with a full re-render, and every rejection is reported as
//! an error notice before it is returned.

use tracing::{debug, warn};

use crate::classifier::Classifier;
use crate::config::RosterConfig;
use crate::error::{EmptyAction, Result, RosterError};
use crate::model::Record;
use crate::notice::Notice;
use crate::statistics::{compute_statistics, Statistics};
use crate::store::Roster;
use crate::view::{RosterView, Surface};

/// Roster state plus the surface it is shown on.
pub struct Session<S: Surface> {
    roster: Roster,
    classifier: Classifier,
    surface: S,
}

impl<S: Surface> Session<S> {
    /// Start a session, seeding the roster when the config asks for it, and
    /// render the initial list.
    pub fn new(config: &RosterConfig, surface: S) -> Self {
        let classifier = config.classifier();
        let roster = if config.seed_on_start {
            Roster::with_samples(&classifier)
        } else {
            Roster::new()
        };
        Self::with_roster(roster, classifier, surface)
    }

    /// Start a session over an existing roster.
    pub fn with_roster(roster: Roster, classifier: Classifier, surface: S) -> Self {
        let mut session = Self {
            roster,
            classifier,
            surface,
        };
        session.render();
        session
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The list as it would be rendered now.
    pub fn view(&self) -> RosterView {
        RosterView::from_records(self.roster.records())
    }

    /// Add a record from raw name and score input.
    pub fn add_student(&mut self, name: &str, score_text: &str) -> Result<()> {
        let added = self
            .roster
            .add(name, score_text, &self.classifier)
            .map(|record| (record.name().to_string(), record.score()));
        let (name, score) = match added {
            Ok(added) => added,
            Err(e) => return Err(self.reject(e)),
        };

        self.surface.clear_inputs();
        self.surface.notify(Notice::success(format!(
            "{name} added successfully with grade {score}!"
        )));
        self.render();
        Ok(())
    }

    /// Remove the record at `index`. Out-of-range indices are ignored silently.
    pub fn remove_student(&mut self, index: i64) -> Option<Record> {
        let Some(removed) = self.roster.remove(index) else {
            debug!(index, "ignoring out-of-range removal");
            return None;
        };

        self.surface.notify(Notice::success(format!(
            "{} removed successfully!",
            removed.name()
        )));
        self.render();
        if self.roster.is_empty() {
            self.surface.hide_statistics();
        }
        Some(removed)
    }

    /// The confirmation question for clearing, or `None` when there is
    /// nothing to clear.
    pub fn clear_prompt(&self) -> Option<String> {
        (!self.roster.is_empty()).then(|| {
            format!(
                "Are you sure you want to remove all {} students?",
                self.roster.len()
            )
        })
    }

    /// Remove every record if `confirmed`.
    ///
    /// Returns `Ok(false)` when the caller declined.
    pub fn clear_all_students(&mut self, confirmed: bool) -> Result<bool> {
        if self.roster.is_empty() {
            return Err(self.reject(RosterError::EmptyStore(EmptyAction::Clear)));
        }
        if !confirmed {
            debug!("clear declined");
            return Ok(false);
        }

        self.roster.clear();
        self.render();
        self.surface.hide_statistics();
        self.surface
            .notify(Notice::success("All students cleared successfully!"));
        Ok(true)
    }

    /// Compute statistics from the current records and show them.
    pub fn calculate_statistics(&mut self) -> Result<Statistics> {
        let stats = match compute_statistics(self.roster.records(), &self.classifier) {
            Ok(stats) => stats,
            Err(e) => return Err(self.reject(e)),
        };

        self.surface.show_statistics(&stats);
        self.surface
            .notify(Notice::success("Statistics calculated successfully!"));
        Ok(stats)
    }

    /// Records scored within `min..=max`, in roster order.
    pub fn find_students_by_range(&self, min: i64, max: i64) -> Vec<Record> {
        self.roster
            .find_by_range(min, max)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Load the sample records if seeding is currently allowed.
    pub fn seed(&mut self) -> bool {
        let seeded = self.roster.seed(&self.classifier);
        if seeded {
            self.render();
        }
        seeded
    }

    fn render(&mut self) {
        let view = self.view();
        self.surface.render_list(&view);
    }

    fn reject(&mut self, err: RosterError) -> RosterError {
        warn!(error = %err, "operation rejected");
        self.surface.notify(Notice::error(err.to_string()));
        err
    }
}
