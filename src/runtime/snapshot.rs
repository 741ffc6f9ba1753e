//! Serializable point-in-time view of a machine.
//!
//! A snapshot captures what a machine looks like right now: its label, the
//! registered state names in insertion order, and the active state if it is
//! running. Hooks are host closures and are never serialized, and the
//! machine keeps no transition history to capture.

use serde::{Deserialize, Serialize};

/// Diagnostic view of a [`StateMachine`](crate::StateMachine).
///
/// Useful for dashboards, logs, and bug reports: it serializes cleanly
/// because it carries names only, never behavior.
///
/// # Example
///
/// ```rust
/// use tickover::{State, StateMachine};
///
/// let mut machine = StateMachine::new("Game State Machine");
/// machine.add_state(State::new("Idle")).unwrap();
/// machine.add_state(State::new("Play")).unwrap();
/// machine.go_to_state("Play").unwrap();
///
/// let snapshot = machine.snapshot();
/// assert_eq!(snapshot.machine, "Game State Machine");
/// assert_eq!(snapshot.states, vec!["Idle", "Play"]);
/// assert_eq!(snapshot.active.as_deref(), Some("Play"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// The machine's diagnostic label.
    pub machine: String,

    /// Registered state names, in registration order.
    pub states: Vec<String>,

    /// The active state's name, or `None` if the machine has never started.
    pub active: Option<String>,
}

impl MachineSnapshot {
    /// Render the snapshot as a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
