//! Core state types.
//!
//! This module contains the building blocks the machine operates on:
//! - Named states with optional lifecycle behavior via [`State`]
//! - Opaque host-supplied callables via [`Hook`]
//!
//! Nothing here owns control flow. States are inert values until a
//! [`StateMachine`](crate::StateMachine) takes ownership of them and starts
//! dispatching their hooks.

mod hook;
mod state;

pub use hook::Hook;
pub use state::State;
