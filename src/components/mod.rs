//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome from the session state held in Leptos
//! context, or imperatively into static page markup.

pub mod navbar;
