//! Trailing-edge debounce for search inputs.
//!
//! Each call arms a new generation and schedules the callback after `wait`
//! milliseconds; a scheduled callback fires only if no later call re-armed
//! the gate in the meantime. Without a browser (SSR) calls run immediately.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;

/// Generation counter deciding which scheduled call is the latest.
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    generation: Rc<Cell<u64>>,
}

impl DebounceGate {
    /// Start a new generation; any earlier ticket becomes stale.
    pub fn arm(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel(&self) {
        self.arm();
    }
}

/// Debounced wrapper around `callback`.
pub struct Debouncer<A> {
    gate: DebounceGate,
    wait_ms: u32,
    callback: Rc<dyn Fn(A)>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self { gate: self.gate.clone(), wait_ms: self.wait_ms, callback: Rc::clone(&self.callback) }
    }
}

impl<A: 'static> Debouncer<A> {
    pub fn new(wait_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self { gate: DebounceGate::default(), wait_ms, callback: Rc::new(callback) }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Schedule `callback(args)` after the quiet period, superseding any
    /// call still waiting.
    pub fn call(&self, args: A) {
        let ticket = self.gate.arm();
        #[cfg(feature = "hydrate")]
        {
            let gate = self.gate.clone();
            let callback = Rc::clone(&self.callback);
            gloo_timers::callback::Timeout::new(self.wait_ms, move || {
                if gate.is_current(ticket) {
                    callback(args);
                }
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            if self.gate.is_current(ticket) {
                (self.callback)(args);
            }
        }
    }

    /// Drop any call that has not fired yet.
    pub fn cancel(&self) {
        self.gate.cancel();
    }
}
