//! Client-side state.

pub mod session;
