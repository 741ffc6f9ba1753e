//! Tickover: a minimal tick-driven state machine.
//!
//! Tickover replaces ad-hoc conditional branching or coroutine-style control
//! flow with explicit, inspectable state. A [`StateMachine`] owns a registry
//! of named [`State`]s, each carrying up to three optional zero-argument
//! behaviors (enter, execute, exit), and the host drives everything: it
//! requests transitions with [`go_to_state`](StateMachine::go_to_state) and
//! calls [`update`](StateMachine::update) once per tick.
//!
//! # Core Concepts
//!
//! - **State**: a named unit of behavior; any hook left unset is a no-op
//! - **Hook**: an opaque host-supplied callable; data flows through captured
//!   context, never through the machine
//! - **Transition**: host-initiated exit/enter pair; the machine never
//!   transitions itself
//! - **Tick**: one `update()` call, running the active state's execute hook
//!
//! # Example
//!
//! ```rust
//! use tickover::{State, StateMachineBuilder};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let paused = Rc::new(Cell::new(false));
//! let on_pause = Rc::clone(&paused);
//! let on_resume = Rc::clone(&paused);
//!
//! let mut machine = StateMachineBuilder::new("Game State Machine")
//!     .state(State::new("Play"))
//!     .state(
//!         State::new("Pause")
//!             .on_enter(move || on_pause.set(true))
//!             .on_exit(move || on_resume.set(false)),
//!     )
//!     .initial("Play")
//!     .build()
//!     .unwrap();
//!
//! machine.update();
//! machine.go_to_state("Pause").unwrap();
//! assert!(paused.get());
//!
//! machine.go_to_state("Play").unwrap();
//! assert!(!paused.get());
//! assert_eq!(machine.current_state_name(), Some("Play"));
//! ```
//!
//! Machines are single-threaded and synchronous: no internal timers,
//! callbacks, or background tasks. Independent instances share nothing, so
//! a host can drive several machines in the same tick loop.

pub mod builder;
pub mod core;
pub mod runtime;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use core::{Hook, State};
pub use runtime::{MachineError, MachineSnapshot, StateMachine};
