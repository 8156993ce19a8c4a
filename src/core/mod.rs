//! Core data types of the state machine.
//!
//! This module contains the passive building blocks the engine operates on:
//! - State and event names
//! - The immutable state table and per-state transition maps
//! - The visited-state history with its undo/redo cursor

mod history;
mod names;
mod ordered;
mod table;

pub use history::{History, HistoryMode};
pub use names::{EventName, StateName};
pub use table::{StateDefinition, StateTable};
