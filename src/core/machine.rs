//! Configuration-driven state machine with one-level undo and redo.

use super::config::MachineConfig;
use super::error::{ConfigError, FsmError};
use super::history::UndoHistory;
use std::collections::BTreeSet;
use tracing::debug;

/// Finite state machine over a static [`MachineConfig`].
///
/// The machine tracks the current state, moves between states either
/// directly ([`change_state`](Self::change_state)) or by firing events
/// ([`trigger`](Self::trigger)), and can step one change back and forth
/// with [`undo`](Self::undo) and [`redo`](Self::redo).
///
/// # Example
///
/// ```rust
/// use waypoint::machine_config;
/// use waypoint::core::FiniteStateMachine;
///
/// let config = machine_config! {
///     initial: hungry,
///     hungry { eat => full },
///     full { rest => sleeping },
///     sleeping {},
/// }
/// .unwrap();
///
/// let mut fsm = FiniteStateMachine::new(config).unwrap();
/// fsm.trigger("eat").unwrap();
/// fsm.trigger("rest").unwrap();
/// assert_eq!(fsm.current_state(), "sleeping");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.current_state(), "full");
/// assert!(fsm.redo());
/// assert_eq!(fsm.current_state(), "sleeping");
/// ```
#[derive(Clone, Debug)]
pub struct FiniteStateMachine {
    config: MachineConfig,
    current: String,
    history: UndoHistory,
}

impl FiniteStateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// The configuration is validated up front, so every transition target
    /// is known to exist before the first event fires.
    pub fn new(config: MachineConfig) -> Result<Self, FsmError> {
        config.validate()?;

        let current = config.initial.clone();
        debug!(initial = %current, states = config.states.len(), "state machine created");

        Ok(Self {
            config,
            current,
            history: UndoHistory::new(),
        })
    }

    /// Load a configuration from JSON and create a machine from it.
    ///
    /// A `null` document fails with [`ConfigError::Missing`].
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let config = MachineConfig::from_json(json)?;
        Self::new(config)
    }

    /// Create a machine from an optional configuration.
    pub fn try_from_config(config: Option<MachineConfig>) -> Result<Self, FsmError> {
        Self::new(config.ok_or(ConfigError::Missing)?)
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Name of the active state.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    pub fn initial_state(&self) -> &str {
        self.config.initial()
    }

    /// Events defined on the active state, in name order.
    pub fn available_events(&self) -> Vec<&str> {
        self.config.events(&self.current)
    }

    /// Go directly to `target`.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is empty or not a
    /// configured state. On success the state being left becomes the undo
    /// target, replacing any previous one.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if target.is_empty() || !self.config.contains_state(target) {
            debug!(state = %target, current = %self.current, "rejected unknown state");
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }

        self.history.record_change(&self.current);
        debug!(from = %self.current, to = %target, "state changed");
        self.current = target.to_string();
        Ok(())
    }

    /// Fire `event` from the active state.
    ///
    /// Fails with [`FsmError::InvalidEvent`] if `event` is empty or the
    /// active state has no transition for it.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let target = match self.config.transition(&self.current, event) {
            Some(target) if !event.is_empty() => target.to_string(),
            _ => {
                debug!(event = %event, current = %self.current, "rejected unknown event");
                return Err(FsmError::InvalidEvent {
                    event: event.to_string(),
                    state: self.current.clone(),
                });
            }
        };

        debug!(event = %event, from = %self.current, to = %target, "event fired");
        self.change_state(&target)
    }

    /// Return to the initial state.
    ///
    /// Clears the undo target but leaves the redo target and the last
    /// action marker in place.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial, "state machine reset");
        self.current = self.config.initial.clone();
        self.history.clear_undo();
    }

    /// Configured state names.
    ///
    /// With `Some(event)`, only the states that define a transition for
    /// `event`. An empty event name is treated like `None`.
    pub fn get_states(&self, event: Option<&str>) -> BTreeSet<&str> {
        let states = self.config.states.iter();
        match event.filter(|e| !e.is_empty()) {
            Some(event) => states
                .filter(|(_, definition)| definition.handles(event))
                .map(|(name, _)| name.as_str())
                .collect(),
            None => states.map(|(name, _)| name.as_str()).collect(),
        }
    }

    /// Check whether [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.undo_target(&self.current).is_some()
    }

    /// Check whether [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo(&self.current)
    }

    /// Step back to the state left by the last change.
    ///
    /// Returns `false` if there is nothing to undo or the machine is already
    /// in the undo target.
    pub fn undo(&mut self) -> bool {
        let Some(target) = self.history.undo_target(&self.current).map(str::to_string) else {
            return false;
        };

        self.history.record_undo(&self.current);
        debug!(from = %self.current, to = %target, "undo");
        self.current = target;
        true
    }

    /// Re-apply the state left by the last undo.
    ///
    /// Only valid directly after an undo. The attempt consumes the undo
    /// marker, so a second consecutive redo returns `false`.
    pub fn redo(&mut self) -> bool {
        let Some(target) = self.history.take_redo(&self.current) else {
            return false;
        };

        debug!(from = %self.current, to = %target, "redo");
        self.current = target;
        true
    }

    /// Forget the undo target, the redo target and the last action.
    pub fn clear_history(&mut self) {
        debug!(current = %self.current, "history cleared");
        self.history.clear();
    }
}
