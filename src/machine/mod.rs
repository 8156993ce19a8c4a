//! The state machine engine and its construction input.
//!
//! # Key Concepts
//!
//! - **Config**: a shared state table, an initial state and history options
//! - **State Machine**: applies transitions and navigates the history
//! - **Errors**: every failure is an [`ErrorKind::InvalidOperation`]

mod config;
mod error;
#[allow(clippy::module_inception)]
mod machine;

pub use config::{MachineConfig, MachineOptions};
pub use error::{ErrorKind, MachineError};
pub use machine::StateMachine;
