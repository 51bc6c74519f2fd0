//! State machine for listing editor sessions
//!
//! Session states: Idle → Drafting → Saving → Idle (success) | Drafting
//! (failure, fields retained). Submitting while a save is in flight is an
//! invalid transition; that is the gate that keeps one session from running
//! overlapping save chains.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot apply '{event}' from '{from}'")]
    InvalidTransition { from: String, event: String },

    #[error("Guard condition failed: {0}")]
    GuardFailed(String),
}

/// Editor session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Idle,
    Drafting,
    Saving,
}

impl SessionState {
    /// Get all valid next states from the current state
    pub fn valid_transitions(&self) -> &'static [SessionState] {
        match self {
            Self::Idle => &[Self::Drafting],
            Self::Drafting => &[Self::Drafting, Self::Saving],
            Self::Saving => &[Self::Idle, Self::Drafting],
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Drafting => write!(f, "drafting"),
            Self::Saving => write!(f, "saving"),
        }
    }
}

/// Events that trigger session state transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// User populates (or keeps editing) the draft fields
    Edit,
    /// User submits the draft; the remote save chain starts
    Submit,
    /// Save chain finished successfully
    Complete,
    /// Save chain failed; the draft is kept for another attempt
    Fail,
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Edit => write!(f, "edit"),
            Self::Submit => write!(f, "submit"),
            Self::Complete => write!(f, "complete"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Editor session state machine
pub struct SessionStateMachine;

impl SessionStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: SessionState,
        event: SessionEvent,
    ) -> Result<SessionState, StateError> {
        let next = match (&current, &event) {
            (SessionState::Idle, SessionEvent::Edit) => SessionState::Drafting,
            (SessionState::Drafting, SessionEvent::Edit) => SessionState::Drafting,
            (SessionState::Drafting, SessionEvent::Submit) => SessionState::Saving,
            (SessionState::Saving, SessionEvent::Complete) => SessionState::Idle,
            (SessionState::Saving, SessionEvent::Fail) => SessionState::Drafting,
            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: SessionState, event: &SessionEvent) -> bool {
        Self::transition(current, *event).is_ok()
    }
}
