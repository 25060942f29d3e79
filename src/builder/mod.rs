//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a declarative macro for
//! assembling machine configurations without writing maps by hand. Both
//! validate the result before handing it out.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;
