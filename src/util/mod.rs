//! Utility helpers shared across the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic.
//! Formatting, slot generation, and validation are pure; toast, loading,
//! and debounce touch the DOM or timers only under `hydrate`.

pub mod auth;
pub mod debounce;
pub mod errors;
pub mod format;
pub mod loading;
pub mod time_slots;
pub mod toast;
pub mod validate;
