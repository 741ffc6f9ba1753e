//! Host-supplied lifecycle hooks.
//!
//! A hook is a zero-argument behavior the host attaches to one phase of a
//! state's lifecycle (enter, execute, or exit). The machine treats it as an
//! opaque callable: no data flows in or out through the hook signature, and
//! the machine never inspects what the closure has captured.

use std::fmt;

/// Opaque zero-argument behavior attached to a state lifecycle phase.
///
/// Hooks carry no parameters and return nothing. All communication between
/// a hook and its host happens through state the closure captures (an
/// `Rc<Cell<_>>` flag, a channel sender, a struct field), never through the
/// machine's interfaces. The machine is a control-flow primitive; data flows
/// around it.
///
/// Hooks are `FnMut` and require no `Send` or `Sync`: machines are
/// single-threaded, and hooks routinely close over non-thread-safe host
/// context.
///
/// # Example
///
/// ```rust
/// use tickover::core::Hook;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let fired = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&fired);
///
/// let mut hook = Hook::new(move || counter.set(counter.get() + 1));
/// hook.call();
/// hook.call();
///
/// assert_eq!(fired.get(), 2);
/// ```
pub struct Hook {
    behavior: Box<dyn FnMut()>,
}

impl Hook {
    /// Wrap a zero-argument closure as a hook.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tickover::core::Hook;
    ///
    /// let hook = Hook::new(|| println!("entered"));
    /// ```
    pub fn new<F>(behavior: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Hook {
            behavior: Box::new(behavior),
        }
    }

    /// Invoke the wrapped behavior.
    ///
    /// A panic inside the behavior propagates to the caller; the machine
    /// neither catches nor suppresses host failures.
    pub fn call(&mut self) {
        (self.behavior)()
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook")
    }
}
