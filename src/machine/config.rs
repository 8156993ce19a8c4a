//! Construction input for a [`StateMachine`](super::StateMachine).

use crate::builder::BuildError;
use crate::core::{HistoryMode, StateName, StateTable};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Tunables that do not affect the state table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineOptions {
    #[serde(default)]
    pub history_mode: HistoryMode,
}

/// Everything a machine needs at construction time.
///
/// The table sits behind an `Arc` so any number of machines can share one
/// read-only definition.
///
/// # Example
///
/// ```rust
/// use retrace::core::{StateDefinition, StateTable};
/// use retrace::machine::{MachineConfig, StateMachine};
///
/// let states: StateTable = [
///     ("off", StateDefinition::new().on("turnOn", "on")),
///     ("on", StateDefinition::new().on("turnOff", "off")),
/// ]
/// .into_iter()
/// .collect();
///
/// let config = MachineConfig::new(states, "off");
/// assert!(config.validate().is_ok());
///
/// let machine = StateMachine::new(config);
/// assert_eq!(machine.current_state(), "off");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub states: Arc<StateTable>,
    pub initial: StateName,
    #[serde(default)]
    pub options: MachineOptions,
}

impl MachineConfig {
    pub fn new(states: impl Into<Arc<StateTable>>, initial: impl Into<StateName>) -> Self {
        Self {
            states: states.into(),
            initial: initial.into(),
            options: MachineOptions::default(),
        }
    }

    /// Select how the history cursor is maintained.
    pub fn with_mode(mut self, mode: HistoryMode) -> Self {
        self.options.history_mode = mode;
        self
    }

    /// Opt-in consistency check of the initial state and every transition target.
    pub fn validate(&self) -> Result<(), BuildError> {
        self.states.validate(self.initial.as_str())
    }
}
