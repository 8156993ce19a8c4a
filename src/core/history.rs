//! Visited-state history and the undo/redo cursor.
//!
//! The history is a list of state names plus a cursor. In
//! [`HistoryMode::Compatible`] the bookkeeping follows the long-standing
//! arithmetic exactly, including its quirks:
//!
//! - `reset` appends without moving the cursor,
//! - `clear` empties the list without moving the cursor,
//! - `trigger` skips the append only when the cursor sits one before the
//!   last entry and the target equals that last entry.
//!
//! [`HistoryMode::Strict`] keeps `entries[index]` equal to the current state
//! after every mutation and discards redo entries when a new branch is taken.

use super::names::StateName;
use serde::{Deserialize, Serialize};

/// How the history cursor is maintained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    /// Reproduce the original index arithmetic, quirks included.
    #[default]
    Compatible,
    /// Cursor always points at the current state; new branches drop redo entries.
    Strict,
}

/// Ordered record of visited states with a navigation cursor.
///
/// # Example
///
/// ```rust
/// use retrace::core::{History, HistoryMode};
///
/// let history = History::new(HistoryMode::Compatible);
/// assert!(history.is_empty());
/// assert_eq!(history.index(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<StateName>,
    index: usize,
    mode: HistoryMode,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HistoryMode::default())
    }
}

impl History {
    pub fn new(mode: HistoryMode) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            mode,
        }
    }

    /// Visited states, oldest first.
    pub fn entries(&self) -> &[StateName] {
        &self.entries
    }

    /// Cursor position. May point past the end in compatible mode.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// True when [`History::step_back`] would move the cursor.
    pub fn can_step_back(&self) -> bool {
        self.back_index().is_some()
    }

    /// True when [`History::step_forward`] would move the cursor.
    pub fn can_step_forward(&self) -> bool {
        self.forward_index().is_some()
    }

    /// Push `current` when the history is empty.
    pub(crate) fn seed(&mut self, current: &StateName) {
        if self.entries.is_empty() {
            self.entries.push(current.clone());
            if self.mode == HistoryMode::Strict {
                self.index = 0;
            }
        }
    }

    /// Record an unconditional move to `target`.
    ///
    /// The caller has already seeded the history and ruled out `target`
    /// being the current state.
    pub(crate) fn record_change(&mut self, target: &StateName) {
        match self.mode {
            HistoryMode::Compatible => {
                self.entries.push(target.clone());
                self.index += 1;
            }
            HistoryMode::Strict => self.advance_to(target),
        }
    }

    /// Record an event-driven move to `target`. The history must be seeded.
    pub(crate) fn record_trigger(&mut self, target: &StateName) {
        match self.mode {
            HistoryMode::Compatible => {
                let replaying = self.entries.len().checked_sub(2) == Some(self.index)
                    && self.entries.last() == Some(target);
                if !replaying {
                    self.entries.push(target.clone());
                }
                self.index += 1;
            }
            HistoryMode::Strict => self.advance_to(target),
        }
    }

    /// Record a return to the initial state from `current`.
    pub(crate) fn record_reset(&mut self, current: &StateName, initial: &StateName) {
        match self.mode {
            HistoryMode::Compatible => self.entries.push(initial.clone()),
            HistoryMode::Strict => {
                self.seed(current);
                if current != initial {
                    self.advance_to(initial);
                }
            }
        }
    }

    /// Entry under the cursor, if the cursor is inside the history.
    pub fn cursor_entry(&self) -> Option<&StateName> {
        self.entries.get(self.index)
    }

    /// Move the cursor back one entry. Returns `false` when it cannot move.
    ///
    /// A cursor left past the end by `clear`/`reset` still steps back one
    /// position at a time; check [`History::cursor_entry`] for the state
    /// found there.
    pub(crate) fn step_back(&mut self) -> bool {
        match self.back_index() {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Move the cursor forward one entry. Returns `false` when it cannot move.
    pub(crate) fn step_forward(&mut self) -> bool {
        match self.forward_index() {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Drop every entry. The cursor is only rewound in strict mode.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        if self.mode == HistoryMode::Strict {
            self.index = 0;
        }
    }

    fn back_index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        self.index.checked_sub(1)
    }

    fn forward_index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.index + 1).filter(|&index| index < self.entries.len())
    }

    fn advance_to(&mut self, target: &StateName) {
        let next = self.index + 1;
        if self.entries.get(next) == Some(target) {
            self.index = next;
            return;
        }
        self.entries.truncate(next);
        self.entries.push(target.clone());
        self.index = self.entries.len() - 1;
    }
}
