//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder for creating machines with minimal
//! boilerplate: collect states, name the initial one, and `build()` hands
//! back a machine that is already running it.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
