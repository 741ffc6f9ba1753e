//! The state machine controller.

use crate::core::State;
use crate::runtime::error::MachineError;
use crate::runtime::snapshot::MachineSnapshot;
use log::debug;

/// Owns a registry of named [`State`]s and tracks the single active one.
///
/// The machine never transitions by itself: the host drives it by calling
/// [`go_to_state`](StateMachine::go_to_state) for transitions and
/// [`update`](StateMachine::update) once per tick. Hooks communicate with
/// the host through captured context, so a typical loop reads a flag an
/// execute hook has set and then requests the next transition:
///
/// ```rust
/// use tickover::{State, StateMachine};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let done = Rc::new(Cell::new(false));
/// let poll = Rc::clone(&done);
///
/// let mut machine = StateMachine::new("Scene Load State Machine");
/// machine.add_state(State::new("Idle")).unwrap();
/// machine
///     .add_state(State::new("Load").on_execute(move || poll.set(true)))
///     .unwrap();
///
/// machine.go_to_state("Load").unwrap();
/// loop {
///     machine.update();
///     if done.get() {
///         machine.go_to_state("Idle").unwrap();
///         break;
///     }
/// }
///
/// assert_eq!(machine.current_state_name(), Some("Idle"));
/// ```
///
/// Machines are single-threaded. Instances share nothing, so a host may
/// freely drive several independent machines in the same tick loop.
#[derive(Debug)]
pub struct StateMachine {
    label: String,
    states: Vec<State>,
    active: Option<usize>,
}

impl StateMachine {
    /// Create an empty machine with a diagnostic label.
    ///
    /// The label identifies the machine in errors, logs, and snapshots; it
    /// plays no part in state lookup.
    pub fn new(label: impl Into<String>) -> Self {
        StateMachine {
            label: label.into(),
            states: Vec::new(),
            active: None,
        }
    }

    /// The machine's diagnostic label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Register a state.
    ///
    /// Names must be unique within one machine. A duplicate name is rejected
    /// with [`MachineError::DuplicateState`] and the registry is left
    /// unchanged, so lookups keep finding the originally registered
    /// behaviors.
    pub fn add_state(&mut self, state: State) -> Result<(), MachineError> {
        if self.position_of(state.name()).is_some() {
            return Err(MachineError::DuplicateState {
                machine: self.label.clone(),
                state: state.name().to_string(),
            });
        }

        self.states.push(state);
        Ok(())
    }

    /// Transition to the named state.
    ///
    /// The name is resolved *before* any hook runs: requesting an unknown
    /// name returns [`MachineError::StateNotFound`] with the machine
    /// provably untouched: no exit has fired and the active state is
    /// unchanged.
    ///
    /// On the first successful call the machine starts: the target becomes
    /// active and its enter hook runs. On later calls the current state's
    /// exit hook runs, then the target becomes active and its enter hook
    /// runs. Requesting the state that is already active is a no-op that
    /// runs no hooks.
    pub fn go_to_state(&mut self, name: &str) -> Result<(), MachineError> {
        let target = self
            .position_of(name)
            .ok_or_else(|| MachineError::StateNotFound {
                machine: self.label.clone(),
                state: name.to_string(),
            })?;

        match self.active {
            None => {
                self.active = Some(target);
                self.states[target].enter();
                debug!("{}: started in state {:?}", self.label, name);
            }
            Some(current) if current == target => {}
            Some(current) => {
                self.states[current].exit();
                self.active = Some(target);
                self.states[target].enter();
                debug!(
                    "{}: {:?} -> {:?}",
                    self.label,
                    self.states[current].name(),
                    name
                );
            }
        }

        Ok(())
    }

    /// Run one tick: the active state's execute hook.
    ///
    /// Calling this on a machine that has never started is valid and
    /// silently does nothing.
    pub fn update(&mut self) {
        if let Some(current) = self.active {
            self.states[current].execute();
        }
    }

    /// Whether any transition has succeeded yet.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The active state's name, or `None` if the machine has never started.
    pub fn current_state_name(&self) -> Option<&str> {
        self.active.map(|current| self.states[current].name())
    }

    /// Registered state names, in registration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(State::name)
    }

    /// Capture a serializable view of the machine's current shape.
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            machine: self.label.clone(),
            states: self.state_names().map(str::to_string).collect(),
            active: self.current_state_name().map(str::to_string),
        }
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.states.iter().position(|state| state.name() == name)
    }
}
