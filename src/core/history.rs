//! One-level undo/redo bookkeeping.
//!
//! The history remembers at most one state to go back to and one state to
//! go forward to, plus the kind of the last mutating operation. Redo is only
//! possible directly after an undo, and the marker that allows it is
//! consumed by the redo attempt whether or not it succeeds.

/// Kind of the last mutating operation performed on a machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LastAction {
    /// Nothing recorded, or the marker was consumed
    #[default]
    None,
    /// A state change (direct or via an event)
    Changed,
    /// A successful undo
    Undone,
    /// A successful redo
    Redone,
}

/// Undo slot, redo slot and last action marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoHistory {
    undo: Option<String>,
    redo: Option<String>,
    last_action: LastAction,
}

impl UndoHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// State the next undo would return to, if any.
    pub fn undo_slot(&self) -> Option<&str> {
        self.undo.as_deref()
    }

    /// State the next redo would re-apply, if any.
    pub fn redo_slot(&self) -> Option<&str> {
        self.redo.as_deref()
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    /// Record a state change away from `left`.
    ///
    /// Overwrites the undo slot, so only the immediately preceding state
    /// stays recoverable.
    pub fn record_change(&mut self, left: &str) {
        self.undo = Some(left.to_string());
        self.last_action = LastAction::Changed;
    }

    /// Target of an undo from `current`, or `None` when the slot is empty or
    /// already equal to `current`.
    pub fn undo_target(&self, current: &str) -> Option<&str> {
        self.undo.as_deref().filter(|target| *target != current)
    }

    /// Record a successful undo that left `current`.
    ///
    /// The undo slot is kept as is.
    pub fn record_undo(&mut self, current: &str) {
        self.redo = Some(current.to_string());
        self.last_action = LastAction::Undone;
    }

    /// Check whether a redo from `current` would succeed.
    pub fn can_redo(&self, current: &str) -> bool {
        self.last_action == LastAction::Undone
            && self.redo.as_deref().is_some_and(|target| target != current)
    }

    /// Consume the last action marker and, if it allows a redo from
    /// `current`, return the state to re-apply and record the redo.
    pub fn take_redo(&mut self, current: &str) -> Option<String> {
        let allowed = self.can_redo(current);
        self.last_action = LastAction::None;
        if !allowed {
            return None;
        }

        self.last_action = LastAction::Redone;
        self.redo.clone()
    }

    /// Forget the undo slot only.
    pub fn clear_undo(&mut self) {
        self.undo = None;
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
