//! Session state machine for a processing run.
//!
//! Models the review-session lifecycle: pick a file, optionally select
//! pages, process, review, export. Transitions outside the allowed edges
//! are rejected; in particular a session never re-enters Processing from
//! Viewing (a new run starts from Landing).

use scandoc_core::{Result, ScandocError};

/// Session state during a processing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for an input file
    #[default]
    Landing,
    /// Multi-page source loaded, choosing which pages to process
    PageSelection,
    /// Pipeline running
    Processing,
    /// Reviewing the processed document
    Viewing,
    /// Export view over the processed document
    Export,
}

impl SessionState {
    /// Whether moving to `next` is an allowed transition.
    #[must_use = "returns the transition check without using it"]
    pub fn can_transition_to(self, next: SessionState) -> bool {
        use SessionState::{Export, Landing, PageSelection, Processing, Viewing};
        matches!(
            (self, next),
            (Landing, PageSelection)
                | (Landing, Processing)
                | (PageSelection, Processing)
                | (Processing, Viewing)
                | (Processing, Landing)
                | (Viewing, Export)
                | (Export, Viewing)
                | (Viewing, Landing)
        )
    }

    /// Move to `next`, rejecting disallowed transitions.
    ///
    /// # Errors
    /// Returns [`ScandocError::InvalidTransition`] for any edge not in the
    /// state machine.
    pub fn transition_to(self, next: SessionState) -> Result<SessionState> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(ScandocError::InvalidTransition(format!(
                "{self:?} -> {next:?}"
            )))
        }
    }
}
