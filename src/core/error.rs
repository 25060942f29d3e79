//! Error types for configuration and state machine operations.

use thiserror::Error;

/// Errors raised while loading or validating a machine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration is missing")]
    Missing,

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),

    #[error("Initial state is empty")]
    EmptyInitial,

    #[error("Initial state '{0}' is not a configured state")]
    UnknownInitial(String),

    #[error("State names must not be empty")]
    EmptyStateName,

    #[error("State '{state}' declares a transition with an empty event name")]
    EmptyEventName { state: String },

    #[error("Transition '{state}' --{event}--> '{target}' targets an unknown state")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },
}

/// Errors raised by [`FiniteStateMachine`](super::FiniteStateMachine) operations.
///
/// Every failing operation leaves the machine untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid state '{state}'")]
    InvalidState { state: String },

    #[error("Invalid event '{event}' for state '{state}'")]
    InvalidEvent { event: String, state: String },
}
