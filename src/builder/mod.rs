//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a table macro for creating
//! state machines with minimal boilerplate, plus the errors raised by the
//! opt-in validation pass.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;

use crate::core::StateTable;
use crate::machine::{MachineConfig, StateMachine};

/// Create a machine from a table, checking the table first.
///
/// # Example
///
/// ```
/// use retrace::builder::validated_machine;
/// use retrace::state_table;
///
/// let table = state_table! {
///     locked => { coin => unlocked },
///     unlocked => { push => locked },
/// };
///
/// let machine = validated_machine(table, "locked").unwrap();
/// assert_eq!(machine.current_state(), "locked");
/// ```
pub fn validated_machine(table: StateTable, initial: &str) -> Result<StateMachine, BuildError> {
    let config = MachineConfig::new(table, initial);
    config.validate()?;
    Ok(StateMachine::new(config))
}
