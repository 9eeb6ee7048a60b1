//! Transient user notices.
//!
//! A [`NoticeBoard`] shows at most one notice. Posting replaces whatever is
//! shown and schedules a timer that blanks the board after a fixed delay.
//! Timers are never cancelled, so an older timer may blank a newer notice.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;

/// Kind of notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class used when rendering the notice.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success-message",
            NoticeKind::Error => "error-message",
        }
    }
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoticeKind::Success => write!(f, "{}", self.text),
            NoticeKind::Error => write!(f, "error: {}", self.text),
        }
    }
}

/// Single-slot notice display with timed auto-clear.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    slot: Arc<Mutex<Option<Notice>>>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            ttl,
        }
    }

    /// Show `notice` and schedule the board to be blanked after the delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn post(&self, notice: Notice) {
        *self.lock() = Some(notice);

        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            *slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
        });
    }

    /// The notice currently shown, if any.
    pub fn current(&self) -> Option<Notice> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Notice>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}
