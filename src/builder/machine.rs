//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{HistoryMode, StateName, StateTable};
use crate::machine::{MachineConfig, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use retrace::builder::StateMachineBuilder;
///
/// let machine = StateMachineBuilder::new()
///     .initial("off")
///     .transition("off", "turnOn", "on")
///     .transition("on", "turnOff", "off")
///     .validate(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), "off");
/// ```
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<StateName>,
    table: StateTable,
    mode: HistoryMode,
    validate: bool,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, with or without transitions.
    pub fn state(mut self, name: impl Into<StateName>) -> Self {
        self.table.declare(name);
        self
    }

    /// Add a transition, declaring `from` if needed.
    ///
    /// `to` is not declared; dangling targets are only caught with
    /// [`StateMachineBuilder::validate`].
    pub fn transition(
        mut self,
        from: impl Into<StateName>,
        event: &str,
        to: impl Into<StateName>,
    ) -> Self {
        self.table.declare(from).insert(event, to);
        self
    }

    /// Start from an existing table. Replaces anything declared so far.
    pub fn table(mut self, table: StateTable) -> Self {
        self.table = table;
        self
    }

    pub fn history_mode(mut self, mode: HistoryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check the initial state and every target against the table on build.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Build the configuration without creating a machine.
    pub fn build_config(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.validate {
            self.table.validate(initial.as_str())?;
        }

        Ok(MachineConfig::new(self.table, initial).with_mode(self.mode))
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        self.build_config().map(StateMachine::new)
    }
}
