//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("state {0:?} was added twice. State names must be unique within one machine")]
    DuplicateState(String),

    #[error("initial state {0:?} is not registered. Add it with .state() before .initial()")]
    UnknownInitialState(String),
}
