//! Editor session: draft fields plus the save state machine
//!
//! One session backs one editor screen. The draft survives a failed save so
//! the user's input is never lost; a successful save clears it.

use crate::domain::entities::ListingDraft;
use crate::domain::state::{SessionEvent, SessionState, SessionStateMachine, StateError};

#[derive(Debug, Default)]
pub struct EditorSession {
    state: SessionState,
    draft: Option<ListingDraft>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn draft(&self) -> Option<&ListingDraft> {
        self.draft.as_ref()
    }

    /// Record the user editing the draft fields
    pub fn edit(&mut self, draft: ListingDraft) -> Result<(), StateError> {
        self.state = SessionStateMachine::transition(self.state, SessionEvent::Edit)?;
        self.draft = Some(draft);

        Ok(())
    }

    /// Start the save chain, handing back the draft to submit. Rejected while
    /// a save is already in flight, so double-taps cannot start two chains.
    pub fn begin_save(&mut self) -> Result<ListingDraft, StateError> {
        let next = SessionStateMachine::transition(self.state, SessionEvent::Submit)?;
        let draft = self
            .draft
            .clone()
            .ok_or_else(|| StateError::GuardFailed("no draft to save".to_string()))?;
        self.state = next;

        Ok(draft)
    }

    /// Mark the in-flight save as succeeded; the session returns to idle.
    pub fn complete_save(&mut self) -> Result<(), StateError> {
        self.state = SessionStateMachine::transition(self.state, SessionEvent::Complete)?;
        self.draft = None;

        Ok(())
    }

    /// Mark the in-flight save as failed; the draft is retained for retry.
    pub fn fail_save(&mut self) -> Result<(), StateError> {
        self.state = SessionStateMachine::transition(self.state, SessionEvent::Fail)?;

        Ok(())
    }
}
