//! Waypoint: a small configuration-driven finite state machine
//!
//! A machine is described by static data: an initial state and, for every
//! state, the events it reacts to and where they lead. The running machine
//! tracks the current state and can step one change back ([`undo`]) and one
//! forward again ([`redo`]).
//!
//! # Core Concepts
//!
//! - **Configuration**: `MachineConfig`, loadable from JSON or built with
//!   `ConfigBuilder` / `machine_config!`, validated before use
//! - **Machine**: `FiniteStateMachine`, moves between states directly or by
//!   firing events
//! - **History**: one undo slot, one redo slot, and the last action marker
//!
//! # Example
//!
//! ```rust
//! use waypoint::{FiniteStateMachine, FsmError, MachineConfig};
//!
//! let config = MachineConfig::from_json(
//!     r#"{
//!         "initial": "draft",
//!         "states": {
//!             "draft": { "transitions": { "submit": "review" } },
//!             "review": { "transitions": { "approve": "published", "reject": "draft" } },
//!             "published": {}
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut fsm = FiniteStateMachine::new(config).unwrap();
//! fsm.trigger("submit").unwrap();
//! assert_eq!(fsm.current_state(), "review");
//!
//! assert!(matches!(fsm.trigger("submit"), Err(FsmError::InvalidEvent { .. })));
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.current_state(), "draft");
//! ```
//!
//! [`undo`]: crate::core::FiniteStateMachine::undo
//! [`redo`]: crate::core::FiniteStateMachine::redo

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use self::core::{ConfigError, FiniteStateMachine, FsmError, MachineConfig, StateDefinition};
