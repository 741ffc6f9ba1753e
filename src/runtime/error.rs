//! Machine errors for registration and transition failures.

use thiserror::Error;

/// Errors reported by [`StateMachine`](crate::StateMachine) operations.
///
/// All variants are non-fatal: the machine preserves its last valid state on
/// every error path, so a failed call leaves registry, active state, and
/// running status exactly as they were.
#[derive(Debug, Error)]
pub enum MachineError {
    /// A state with this name is already registered; the new entry was
    /// rejected and the registry is unchanged.
    #[error("machine {machine:?} already has a state named {state:?}")]
    DuplicateState { machine: String, state: String },

    /// No registered state has this name; the active state is unaffected and
    /// no hook has run.
    #[error("machine {machine:?} has no state named {state:?}")]
    StateNotFound { machine: String, state: String },
}
