//! Scene Loading State Machine
//!
//! This example demonstrates the classic scene-loading flow: a machine that
//! idles until the host asks it to load, shows a loading screen while a
//! simulated async load completes, and returns to idle.
//!
//! Key concepts:
//! - A hookless state used purely for idling
//! - Enter/exit hooks toggling host UI context
//! - An execute hook polling work and signalling completion through a flag
//! - Host-initiated transitions driven by that flag
//!
//! Run with: cargo run --example scene_flow

use std::cell::Cell;
use std::rc::Rc;
use tickover::{State, StateMachineBuilder};

const STATE_IDLE: &str = "State Idle";
const STATE_LOAD_SCENE: &str = "State Load Scene";

fn main() {
    env_logger::init();

    println!("=== Scene Loading State Machine ===\n");

    // Shared context the hooks close over. The machine never sees any of
    // this; data flows around it.
    let loading_screen = Rc::new(Cell::new(false));
    let frames_remaining = Rc::new(Cell::new(5u32));
    let load_done = Rc::new(Cell::new(false));

    let show_screen = Rc::clone(&loading_screen);
    let hide_screen = Rc::clone(&loading_screen);
    let frames = Rc::clone(&frames_remaining);
    let done = Rc::clone(&load_done);

    let mut machine = StateMachineBuilder::new("Scene Load State Machine")
        .state(State::new(STATE_IDLE))
        .state(
            State::new(STATE_LOAD_SCENE)
                .on_enter(move || {
                    println!("  [enter] showing loading screen");
                    show_screen.set(true);
                })
                .on_execute(move || {
                    let left = frames.get();
                    if left > 0 {
                        println!("  [execute] loading... {left} frames to go");
                        frames.set(left - 1);
                    } else {
                        println!("  [execute] load complete");
                        done.set(true);
                    }
                })
                .on_exit(move || {
                    println!("  [exit] hiding loading screen");
                    hide_screen.set(false);
                }),
        )
        .initial(STATE_IDLE)
        .build()
        .expect("states are unique and the initial state is registered");

    println!("Machine starts idle: {:?}\n", machine.current_state_name());

    println!("Host requests a scene load:");
    machine
        .go_to_state(STATE_LOAD_SCENE)
        .expect("load state is registered");

    // The host tick loop. The execute hook signals completion through the
    // shared flag, and the host requests the transition back to idle.
    while !load_done.get() {
        machine.update();
    }
    machine
        .go_to_state(STATE_IDLE)
        .expect("idle state is registered");

    println!("\nBack to idle: {:?}", machine.current_state_name());
    println!("Loading screen visible: {}", loading_screen.get());

    println!("\nSnapshot: {}", machine.snapshot().to_json().unwrap());

    println!("\n=== Example Complete ===");
}
