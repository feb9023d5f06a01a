use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::markup::Markup;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How the citation dialog was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
}

/// Transient result of the last copy, reverted by [`CiteModal::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyFeedback {
    Idle,
    Copied { until: Instant },
    Failed { message: String, until: Instant },
}

/// Citation dialog for one publication at a time.
#[derive(Debug, Clone)]
pub struct CiteModal {
    open: Option<usize>,
    feedback: CopyFeedback,
    feedback_for: Duration,
}

impl CiteModal {
    pub fn new(feedback_for: Duration) -> Self {
        Self {
            open: None,
            feedback: CopyFeedback::Idle,
            feedback_for,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Index of the publication the dialog shows.
    pub fn record(&self) -> Option<usize> {
        self.open
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    pub fn open(&mut self, record: usize) {
        self.open = Some(record);
        self.feedback = CopyFeedback::Idle;
    }

    /// Returns whether the dialog was open. Pending feedback is discarded.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let was_open = self.open.take().is_some();
        self.feedback = CopyFeedback::Idle;
        if was_open {
            tracing::debug!(?reason, "Closed citation dialog");
        }
        was_open
    }

    /// Clicks on the dialog content never reach the backdrop handler.
    pub fn click_inside(&mut self) {}

    /// Copy the plain-text citation. Does nothing while closed.
    ///
    /// Failure is recorded as visible feedback and returned to the caller.
    pub fn copy(
        &mut self,
        citation: &Markup,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<Option<String>> {
        if self.open.is_none() {
            return Ok(None);
        }
        let text = citation.to_plain_text();
        let until = now + self.feedback_for;
        match clipboard.set_text(&text) {
            Ok(()) => {
                info!(record = ?self.open, "Copied citation");
                self.feedback = CopyFeedback::Copied { until };
                Ok(Some(text))
            }
            Err(e) => {
                warn!(error = %e, "Citation copy failed");
                self.feedback = CopyFeedback::Failed {
                    message: e.to_string(),
                    until,
                };
                Err(e)
            }
        }
    }

    /// Revert expired feedback to idle.
    pub fn tick(&mut self, now: Instant) {
        let expired = match &self.feedback {
            CopyFeedback::Idle => false,
            CopyFeedback::Copied { until } | CopyFeedback::Failed { until, .. } => now >= *until,
        };
        if expired {
            self.feedback = CopyFeedback::Idle;
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.feedback {
            CopyFeedback::Idle => "Copy",
            CopyFeedback::Copied { .. } => "Copied!",
            CopyFeedback::Failed { .. } => "Copy failed",
        }
    }
}
