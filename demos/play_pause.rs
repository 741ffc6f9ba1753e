//! Play/Pause State Machine
//!
//! This example demonstrates a game-loop machine toggling between playing
//! and paused, with menu visibility owned entirely by the host and flipped
//! from enter/exit hooks.
//!
//! Key concepts:
//! - Enter/exit pairs around every transition
//! - A state with no execute hook (paused: nothing runs per tick)
//! - Re-entering the active state is a no-op
//!
//! Run with: cargo run --example play_pause

use std::cell::Cell;
use std::rc::Rc;
use tickover::{State, StateMachineBuilder};

const STATE_IDLE: &str = "State Idle";
const STATE_PLAY: &str = "Play Game State";
const STATE_PAUSE: &str = "Pause Game State";

fn main() {
    env_logger::init();

    println!("=== Play/Pause State Machine ===\n");

    let playing_menu = Rc::new(Cell::new(false));
    let pause_menu = Rc::new(Cell::new(false));
    let score = Rc::new(Cell::new(0u32));

    let show_playing = Rc::clone(&playing_menu);
    let hide_playing = Rc::clone(&playing_menu);
    let show_pause = Rc::clone(&pause_menu);
    let hide_pause = Rc::clone(&pause_menu);
    let scorer = Rc::clone(&score);

    let mut machine = StateMachineBuilder::new("Game State Machine")
        .state(State::new(STATE_IDLE))
        .state(
            State::new(STATE_PLAY)
                .on_enter(move || {
                    println!("  [enter] play: showing playing menu");
                    show_playing.set(true);
                })
                .on_execute(move || scorer.set(scorer.get() + 10))
                .on_exit(move || {
                    println!("  [exit] play: hiding playing menu");
                    hide_playing.set(false);
                }),
        )
        .state(
            State::new(STATE_PAUSE)
                .on_enter(move || {
                    println!("  [enter] pause: showing pause menu");
                    show_pause.set(true);
                })
                .on_exit(move || {
                    println!("  [exit] pause: hiding pause menu");
                    hide_pause.set(false);
                }),
        )
        .initial(STATE_IDLE)
        .build()
        .expect("states are unique and the initial state is registered");

    println!("Player hits start:");
    machine.go_to_state(STATE_PLAY).expect("play is registered");
    for _ in 0..3 {
        machine.update();
    }
    println!("  score after 3 ticks: {}", score.get());

    println!("\nPause button pressed:");
    machine.go_to_state(STATE_PAUSE).expect("pause is registered");
    for _ in 0..3 {
        machine.update(); // paused: no execute hook, score holds still
    }
    println!("  score while paused: {}", score.get());

    println!("\nPause button pressed again (already paused, no-op):");
    machine.go_to_state(STATE_PAUSE).expect("pause is registered");

    println!("\nContinue button pressed:");
    machine.go_to_state(STATE_PLAY).expect("play is registered");
    machine.update();
    println!("  score after resuming: {}", score.get());

    println!(
        "\nFinal state: {:?}, playing menu: {}, pause menu: {}",
        machine.current_state_name(),
        playing_menu.get(),
        pause_menu.get()
    );

    println!("\n=== Example Complete ===");
}
