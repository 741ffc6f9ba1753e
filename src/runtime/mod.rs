//! The state machine controller and its diagnostics.
//!
//! This module is the imperative half of the crate: it owns registered
//! states, tracks which one is active, and serializes exit/enter pairs
//! around every host-requested transition.
//!
//! # Key Concepts
//!
//! - **Registry**: states are stored in registration order and resolved by
//!   name; duplicate names are rejected at registration.
//! - **Transitions**: always host-initiated via
//!   [`go_to_state`](StateMachine::go_to_state); the machine never
//!   transitions itself.
//! - **Ticks**: the host calls [`update`](StateMachine::update) once per
//!   tick to run the active state's execute hook.

mod error;
mod machine;
mod snapshot;

pub use error::MachineError;
pub use machine::StateMachine;
pub use snapshot::MachineSnapshot;
