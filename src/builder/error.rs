//! Build and validation errors for state tables and machines.

use thiserror::Error;

/// Errors that can occur when building a machine or validating a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{state}' is not in the state table")]
    UnknownInitialState { state: String },

    #[error("Transition '{event}' from '{from}' targets unknown state '{target}'")]
    UnknownTarget {
        from: String,
        event: String,
        target: String,
    },
}
