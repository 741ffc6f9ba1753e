//! Property-based tests for the state machine runtime.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated transition/tick sequences.

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use tickover::{MachineError, State, StateMachine};

const NAMES: [&str; 4] = ["Idle", "Load", "Play", "Pause"];

/// Per-state hook counters, shared with the hooks through `Rc`.
#[derive(Clone, Default)]
struct Counters {
    enters: Rc<Cell<u32>>,
    executes: Rc<Cell<u32>>,
    exits: Rc<Cell<u32>>,
}

fn counted_state(name: &str, counters: &Counters) -> State {
    let enters = Rc::clone(&counters.enters);
    let executes = Rc::clone(&counters.executes);
    let exits = Rc::clone(&counters.exits);

    State::new(name)
        .on_enter(move || enters.set(enters.get() + 1))
        .on_execute(move || executes.set(executes.get() + 1))
        .on_exit(move || exits.set(exits.get() + 1))
}

fn counted_machine() -> (StateMachine, Vec<Counters>) {
    let mut machine = StateMachine::new("Property Machine");
    let mut all_counters = Vec::new();

    for name in NAMES {
        let counters = Counters::default();
        machine
            .add_state(counted_state(name, &counters))
            .expect("fixed names are unique");
        all_counters.push(counters);
    }

    (machine, all_counters)
}

/// One host action against the machine.
#[derive(Clone, Debug)]
enum Action {
    GoTo(usize),
    GoToUnknown,
    Update,
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..NAMES.len()).prop_map(Action::GoTo),
        Just(Action::GoToUnknown),
        Just(Action::Update),
    ]
}

proptest! {
    #[test]
    fn successful_transition_reports_target_name(target in 0..NAMES.len()) {
        let (mut machine, _) = counted_machine();

        machine.go_to_state(NAMES[target]).unwrap();

        prop_assert_eq!(machine.current_state_name(), Some(NAMES[target]));
        prop_assert!(machine.is_running());
    }

    #[test]
    fn active_state_is_always_a_registry_member(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let (mut machine, _) = counted_machine();

        for action in actions {
            match action {
                Action::GoTo(target) => {
                    machine.go_to_state(NAMES[target]).unwrap();
                }
                Action::GoToUnknown => {
                    let err = machine.go_to_state("No Such State").unwrap_err();
                    let is_state_not_found = matches!(err, MachineError::StateNotFound { .. });
                    prop_assert!(is_state_not_found);
                }
                Action::Update => machine.update(),
            }

            match machine.current_state_name() {
                Some(name) => prop_assert!(NAMES.contains(&name)),
                None => prop_assert!(!machine.is_running()),
            }
        }
    }

    #[test]
    fn failed_transitions_never_change_the_active_state(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let (mut machine, _) = counted_machine();

        for action in actions {
            let before = machine.current_state_name().map(str::to_string);

            match action {
                Action::GoTo(target) => {
                    machine.go_to_state(NAMES[target]).unwrap();
                }
                Action::GoToUnknown => {
                    machine.go_to_state("No Such State").unwrap_err();
                    let after = machine.current_state_name().map(str::to_string);
                    prop_assert_eq!(before, after);
                }
                Action::Update => {
                    machine.update();
                    let after = machine.current_state_name().map(str::to_string);
                    prop_assert_eq!(before, after);
                }
            }
        }
    }

    #[test]
    fn enter_and_exit_counts_stay_paired(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let (mut machine, counters) = counted_machine();

        for action in actions {
            match action {
                Action::GoTo(target) => {
                    machine.go_to_state(NAMES[target]).unwrap();
                }
                Action::GoToUnknown => {
                    machine.go_to_state("No Such State").unwrap_err();
                }
                Action::Update => machine.update(),
            }

            // Every state's exits trail its enters by exactly one while it
            // is active and match exactly otherwise.
            for (index, name) in NAMES.iter().enumerate() {
                let active = machine.current_state_name() == Some(name);
                let enters = counters[index].enters.get();
                let exits = counters[index].exits.get();

                if active {
                    prop_assert_eq!(enters, exits + 1);
                } else {
                    prop_assert_eq!(enters, exits);
                }
            }
        }
    }

    #[test]
    fn updates_only_tick_the_active_state(
        target in 0..NAMES.len(),
        ticks in 0..20u32,
    ) {
        let (mut machine, counters) = counted_machine();

        machine.go_to_state(NAMES[target]).unwrap();
        for _ in 0..ticks {
            machine.update();
        }

        for (index, _) in NAMES.iter().enumerate() {
            let expected = if index == target { ticks } else { 0 };
            prop_assert_eq!(counters[index].executes.get(), expected);
        }
    }

    #[test]
    fn reentry_requests_run_no_hooks(
        target in 0..NAMES.len(),
        repeats in 1..10usize,
    ) {
        let (mut machine, counters) = counted_machine();

        for _ in 0..repeats {
            machine.go_to_state(NAMES[target]).unwrap();
        }

        prop_assert_eq!(counters[target].enters.get(), 1);
        prop_assert_eq!(counters[target].exits.get(), 0);
        prop_assert_eq!(machine.current_state_name(), Some(NAMES[target]));
    }

    #[test]
    fn update_before_start_never_fires_hooks(ticks in 0..20u32) {
        let (mut machine, counters) = counted_machine();

        for _ in 0..ticks {
            machine.update();
        }

        prop_assert!(!machine.is_running());
        for state_counters in &counters {
            prop_assert_eq!(state_counters.enters.get(), 0);
            prop_assert_eq!(state_counters.executes.get(), 0);
            prop_assert_eq!(state_counters.exits.get(), 0);
        }
    }
}
