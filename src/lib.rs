//! Retrace: a table-driven finite state machine with undo/redo history.
//!
//! A machine is built from a static table of states and their
//! event-triggered transitions. It tracks the current state, applies
//! transitions by event name and records every visited state so callers
//! can step backward and forward through them.
//!
//! # Core Concepts
//!
//! - **State table**: immutable mapping of state names to event -> target maps
//! - **State machine**: current state plus transition and jump operations
//! - **History**: visited states with an undo/redo cursor
//!
//! Construction is lenient by default. Unknown initial states and dangling
//! transition targets are only reported by the opt-in validation pass
//! ([`MachineConfig::validate`], [`StateMachineBuilder::validate`]).
//!
//! # Example
//!
//! ```rust
//! use retrace::{state_table, MachineConfig, StateMachine};
//!
//! let states = state_table! {
//!     off => { turnOn => on },
//!     on => { turnOff => off },
//! };
//!
//! let mut machine = StateMachine::new(MachineConfig::new(states, "off"));
//! machine.trigger("turnOn").unwrap();
//! assert_eq!(machine.current_state(), "on");
//! assert_eq!(machine.history_index(), 1);
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "off");
//! assert!(!machine.undo());
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{EventName, History, HistoryMode, StateDefinition, StateName, StateTable};
pub use crate::machine::{ErrorKind, MachineConfig, MachineError, MachineOptions, StateMachine};
