//! The static state table: states and their event-labelled transitions.
//!
//! Tables are built once and never change afterwards. Iteration always
//! follows insertion (or document) order, which is the order reported by
//! [`StateTable::names`] and [`StateTable::states_for`].

use super::names::{EventName, StateName};
use super::ordered::OrderedMap;
use crate::builder::BuildError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outgoing transitions of a single state.
///
/// Serializes as `{ "transitions": { "<event>": "<target>" } }`.
///
/// # Example
///
/// ```rust
/// use retrace::core::StateDefinition;
///
/// let off = StateDefinition::new().on("turnOn", "on");
/// assert_eq!(off.target("turnOn").map(|t| t.as_str()), Some("on"));
/// assert!(off.target("turnOff").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    transitions: OrderedMap<EventName, StateName>,
}

impl StateDefinition {
    /// A state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn on(mut self, event: impl Into<EventName>, target: impl Into<StateName>) -> Self {
        self.insert(event, target);
        self
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn insert(&mut self, event: impl Into<EventName>, target: impl Into<StateName>) {
        self.transitions.insert(event.into(), target.into());
    }

    /// Target reached on `event`.
    ///
    /// An entry whose target is the empty name counts as absent.
    pub fn target(&self, event: &str) -> Option<&StateName> {
        self.transitions
            .get(event)
            .filter(|target| !target.is_empty())
    }

    /// True when `event` appears as a key, whatever its target.
    pub fn has_event(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Events handled by this state, in insertion order.
    pub fn events(&self) -> impl Iterator<Item = &EventName> {
        self.transitions.keys()
    }

    /// `(event, target)` pairs in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (&EventName, &StateName)> {
        self.transitions.iter()
    }
}

/// Mapping from state name to its [`StateDefinition`].
///
/// Transition targets and the machine's initial state are not checked
/// against the table unless [`StateTable::validate`] is called.
///
/// # Example
///
/// ```rust
/// use retrace::core::{StateDefinition, StateTable};
///
/// let table: StateTable = [
///     ("off", StateDefinition::new().on("turnOn", "on")),
///     ("on", StateDefinition::new().on("turnOff", "off")),
/// ]
/// .into_iter()
/// .collect();
///
/// let names: Vec<_> = table.names().map(|n| n.as_str()).collect();
/// assert_eq!(names, vec!["off", "on"]);
/// assert!(table.validate("off").is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateTable {
    states: OrderedMap<StateName, StateDefinition>,
}

impl StateTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a state definition.
    pub fn insert(&mut self, name: impl Into<StateName>, definition: StateDefinition) {
        self.states.insert(name.into(), definition);
    }

    /// Declare `name` if it is not already present.
    pub fn declare(&mut self, name: impl Into<StateName>) -> &mut StateDefinition {
        self.states
            .get_or_insert_with(name.into(), StateDefinition::new)
    }

    pub fn get(&self, name: &str) -> Option<&StateDefinition> {
        self.states.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All state names, in table order.
    pub fn names(&self) -> impl Iterator<Item = &StateName> {
        self.states.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StateName, &StateDefinition)> {
        self.states.iter()
    }

    /// Every event named by any state, deduplicated, in first-seen order.
    pub fn events(&self) -> Vec<&EventName> {
        let mut seen = HashSet::new();
        self.states
            .iter()
            .flat_map(|(_, definition)| definition.events())
            .filter(|event| seen.insert(*event))
            .collect()
    }

    /// States that have a transition for `event`, in table order.
    ///
    /// Returns nothing when no state mentions `event` at all.
    pub fn states_for(&self, event: &str) -> Vec<&StateName> {
        let known = self
            .states
            .iter()
            .any(|(_, definition)| definition.has_event(event));
        if !known {
            return Vec::new();
        }

        self.states
            .iter()
            .filter(|(_, definition)| definition.target(event).is_some())
            .map(|(name, _)| name)
            .collect()
    }

    /// Strict consistency check, never run implicitly.
    ///
    /// Fails when `initial` is not a state of the table or when any
    /// transition points at a state that does not exist.
    pub fn validate(&self, initial: &str) -> Result<(), BuildError> {
        if !self.contains(initial) {
            return Err(BuildError::UnknownInitialState {
                state: initial.to_string(),
            });
        }

        for (from, definition) in self.states.iter() {
            for (event, target) in definition.transitions() {
                if !self.contains(target.as_str()) {
                    return Err(BuildError::UnknownTarget {
                        from: from.to_string(),
                        event: event.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl<N: Into<StateName>> FromIterator<(N, StateDefinition)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (N, StateDefinition)>>(iter: I) -> Self {
        let mut table = StateTable::new();
        for (name, definition) in iter {
            table.insert(name, definition);
        }
        table
    }
}
