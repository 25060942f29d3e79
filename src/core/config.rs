//! Static machine configuration.
//!
//! A configuration names the initial state and, for every state, the
//! events it reacts to and the state each event leads to. It is plain data:
//! it can be deserialized from JSON, assembled with
//! [`ConfigBuilder`](crate::builder::ConfigBuilder), or written out by hand.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outgoing transitions of a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event name -> target state name
    #[serde(default)]
    pub transitions: BTreeMap<String, String>,
}

impl StateDefinition {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Check whether this state reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Complete machine configuration.
///
/// # Example
///
/// ```rust
/// use waypoint::core::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "start": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.transition("idle", "start"), Some("running"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Name of the state the machine starts (and resets) in
    pub initial: String,
    /// State name -> definition
    pub states: BTreeMap<String, StateDefinition>,
}

impl MachineConfig {
    /// Create a configuration from its parts. Not validated.
    pub fn new(initial: impl Into<String>, states: BTreeMap<String, StateDefinition>) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// A `null` document is treated as an absent configuration and yields
    /// [`ConfigError::Missing`]. The result is not validated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let parsed: Option<Self> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        parsed.ok_or(ConfigError::Missing)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check the configuration is internally consistent.
    ///
    /// The initial state and every transition target must be configured
    /// states, and no state or event name may be empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial.is_empty() {
            return Err(ConfigError::EmptyInitial);
        }
        if !self.contains_state(&self.initial) {
            return Err(ConfigError::UnknownInitial(self.initial.clone()));
        }

        for (name, definition) in &self.states {
            if name.is_empty() {
                return Err(ConfigError::EmptyStateName);
            }
            for (event, target) in &definition.transitions {
                if event.is_empty() {
                    return Err(ConfigError::EmptyEventName {
                        state: name.clone(),
                    });
                }
                if !self.contains_state(target) {
                    return Err(ConfigError::UnknownTarget {
                        state: name.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Name of the initial state.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Check whether `name` is a configured state.
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Look up a state definition.
    pub fn state(&self, name: &str) -> Option<&StateDefinition> {
        self.states.get(name)
    }

    /// Resolve the target of `event` when fired from `state`.
    pub fn transition(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state)?.transitions.get(event).map(String::as_str)
    }

    /// Events defined on `state`, in name order. Empty for unknown states.
    pub fn events(&self, state: &str) -> Vec<&str> {
        self.state(state)
            .map(|s| s.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
