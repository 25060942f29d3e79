//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, StateDefinition};
use std::collections::BTreeMap;

/// Builder for [`MachineConfig`] with a fluent API.
///
/// # Example
///
/// ```
/// use waypoint::builder::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("locked")
///     .transition("locked", "coin", "unlocked")
///     .transition("unlocked", "push", "locked")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.transition("locked", "coin"), Some("unlocked"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: BTreeMap<String, StateDefinition>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring a state twice keeps its transitions.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name.into()).or_default();
        self
    }

    /// Declare a state together with its `(event, target)` transitions.
    pub fn with_state(mut self, name: impl Into<String>, transitions: &[(&str, &str)]) -> Self {
        let definition = self.states.entry(name.into()).or_default();
        for (event, target) in transitions {
            definition
                .transitions
                .insert(event.to_string(), target.to_string());
        }
        self
    }

    /// Add a transition from `from` on `event` to `to`.
    ///
    /// The source state is declared implicitly; the target must be declared
    /// somewhere, or [`build`](Self::build) fails.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let config = MachineConfig::new(initial, self.states);
        config.validate()?;
        Ok(config)
    }
}
