//! Errors raised by state machine operations.

use thiserror::Error;

/// Classification shared by every [`MachineError`].
///
/// All failures are programmer errors of the same kind; the variants only
/// add context for diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidOperation,
}

/// Errors that can occur when constructing or driving a state machine.
///
/// Every operation validates before mutating, so a returned error means
/// the machine is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("Invalid operation: no configuration supplied")]
    MissingConfig,

    #[error("Invalid operation: state '{state}' is not in the state table")]
    UnknownState { state: String },

    #[error("Invalid operation: state '{state}' has no transition for event '{event}'")]
    UndefinedTransition { state: String, event: String },
}

impl MachineError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidOperation
    }
}
