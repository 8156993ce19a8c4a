//! The state machine engine.

use crate::core::{History, HistoryMode, StateName, StateTable};
use crate::machine::config::MachineConfig;
use crate::machine::error::MachineError;
use std::sync::Arc;
use tracing::{debug, trace};

/// Finite state machine over a shared, immutable [`StateTable`].
///
/// Tracks the current state and an undo/redo history of visited states.
/// Construction is lenient: neither the initial state nor transition
/// targets are checked against the table (see [`MachineConfig::validate`]).
///
/// The machine is a plain owned value. Wrap it in a `Mutex` when several
/// threads need to drive the same instance.
///
/// # Example
///
/// ```rust
/// use retrace::state_table;
/// use retrace::machine::{MachineConfig, StateMachine};
///
/// let states = state_table! {
///     off => { turnOn => on },
///     on => { turnOff => off },
/// };
/// let mut machine = StateMachine::new(MachineConfig::new(states, "off"));
///
/// machine.trigger("turnOn").unwrap();
/// assert_eq!(machine.current_state(), "on");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "off");
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "on");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    table: Arc<StateTable>,
    initial: StateName,
    current: StateName,
    history: History,
}

impl StateMachine {
    /// Create a machine positioned at the configured initial state.
    pub fn new(config: MachineConfig) -> Self {
        let MachineConfig {
            states,
            initial,
            options,
        } = config;

        debug!(
            initial = %initial,
            states = states.len(),
            mode = ?options.history_mode,
            "state machine created"
        );

        Self {
            table: states,
            current: initial.clone(),
            initial,
            history: History::new(options.history_mode),
        }
    }

    /// Create a machine from a configuration that may be absent.
    pub fn from_config(config: Option<MachineConfig>) -> Result<Self, MachineError> {
        config.map(Self::new).ok_or(MachineError::MissingConfig)
    }

    /// Current state (pure).
    pub fn current_state(&self) -> &StateName {
        &self.current
    }

    /// State the machine started in and returns to on [`StateMachine::reset`].
    pub fn initial_state(&self) -> &StateName {
        &self.initial
    }

    /// The shared state table.
    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// Visited states, oldest first.
    pub fn history(&self) -> &[StateName] {
        self.history.entries()
    }

    /// Position of the undo/redo cursor within [`StateMachine::history`].
    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    pub fn mode(&self) -> HistoryMode {
        self.history.mode()
    }

    /// State names of the table (pure).
    ///
    /// Without an event, every state in table order. With an event, the
    /// states that have a transition for it; empty when no state mentions
    /// the event at all.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateName> {
        match event {
            None => self.table.names().collect(),
            Some(event) => self.table.states_for(event),
        }
    }

    /// True when the current state has a transition for `event`.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.target_for(event).is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Jump to `state`, ignoring transition rules.
    ///
    /// Fails when `state` is not in the table. Changing to the current
    /// state only seeds an empty history.
    pub fn change_state(&mut self, state: &str) -> Result<(), MachineError> {
        if !self.table.contains(state) {
            debug!(state, current = %self.current, "change to unknown state rejected");
            return Err(MachineError::UnknownState {
                state: state.to_string(),
            });
        }

        self.history.seed(&self.current);

        if self.current.as_str() == state {
            trace!(state, "change to current state ignored");
            return Ok(());
        }

        let target = StateName::from(state);
        self.history.record_change(&target);
        debug!(
            from = %self.current,
            to = %target,
            index = self.history.index(),
            "state changed"
        );
        self.current = target;
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let Some(target) = self.target_for(event).cloned() else {
            debug!(event, current = %self.current, "undefined transition rejected");
            return Err(MachineError::UndefinedTransition {
                state: self.current.to_string(),
                event: event.to_string(),
            });
        };

        self.history.seed(&self.current);
        self.history.record_trigger(&target);
        debug!(
            event,
            from = %self.current,
            to = %target,
            index = self.history.index(),
            "transition taken"
        );
        self.current = target;
        Ok(())
    }

    /// Return to the initial state, recording it in the history.
    pub fn reset(&mut self) {
        self.history.record_reset(&self.current, &self.initial);
        debug!(
            from = %self.current,
            to = %self.initial,
            index = self.history.index(),
            "state machine reset"
        );
        self.current = self.initial.clone();
    }

    /// Step back one history entry. Returns `false` when there is nothing to undo.
    ///
    /// When a stale cursor lands past the end of the history the cursor
    /// still moves but the current state is kept.
    pub fn undo(&mut self) -> bool {
        if !self.history.step_back() {
            return false;
        }
        self.adopt_cursor_entry("undo");
        true
    }

    /// Step forward one history entry. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.step_forward() {
            return false;
        }
        self.adopt_cursor_entry("redo");
        true
    }

    /// Forget every history entry. The current state is kept.
    pub fn clear_history(&mut self) {
        trace!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }

    fn adopt_cursor_entry(&mut self, direction: &str) {
        match self.history.cursor_entry() {
            Some(state) => {
                trace!(to = %state, index = self.history.index(), "{}", direction);
                self.current = state.clone();
            }
            None => {
                trace!(index = self.history.index(), "{} past end of history", direction);
            }
        }
    }

    fn target_for(&self, event: &str) -> Option<&StateName> {
        self.table
            .get(self.current.as_str())
            .and_then(|definition| definition.target(event))
    }
}
