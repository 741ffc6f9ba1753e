//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::runtime::{MachineError, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// Collects states, validates name uniqueness, and optionally performs the
/// start transition in one step, so a machine comes out of `build()` already
/// ticking its initial state.
///
/// # Example
///
/// ```rust
/// use tickover::{State, StateMachineBuilder};
///
/// let machine = StateMachineBuilder::new("Game State Machine")
///     .state(State::new("Idle"))
///     .state(State::new("Play"))
///     .initial("Idle")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state_name(), Some("Idle"));
/// ```
pub struct StateMachineBuilder {
    label: String,
    states: Vec<State>,
    initial: Option<String>,
}

impl StateMachineBuilder {
    /// Create a new builder for a machine with the given diagnostic label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            states: Vec::new(),
            initial: None,
        }
    }

    /// Add a state.
    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = State>) -> Self {
        self.states.extend(states);
        self
    }

    /// Set the state to start in (optional).
    ///
    /// When set, `build()` performs the start transition, running the
    /// initial state's enter hook.
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Build the state machine.
    ///
    /// Returns an error on duplicate state names or an unregistered initial
    /// state. A machine with no states is valid; it just has nothing to
    /// transition to yet.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        let mut machine = StateMachine::new(self.label);

        for state in self.states {
            machine.add_state(state).map_err(|err| match err {
                MachineError::DuplicateState { state, .. } => BuildError::DuplicateState(state),
                MachineError::StateNotFound { state, .. } => {
                    BuildError::UnknownInitialState(state)
                }
            })?;
        }

        if let Some(initial) = self.initial {
            machine
                .go_to_state(&initial)
                .map_err(|_| BuildError::UnknownInitialState(initial))?;
        }

        Ok(machine)
    }
}
