//! Core state machine types and logic.
//!
//! This module contains everything a running machine needs:
//! - The static configuration and its validation
//! - One-level undo/redo bookkeeping
//! - The machine itself and its error types

mod config;
mod error;
mod history;
mod machine;

pub use config::{MachineConfig, StateDefinition};
pub use error::{ConfigError, FsmError};
pub use history::{LastAction, UndoHistory};
pub use machine::FiniteStateMachine;
