//! Networking and persistence for the clinic API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes the endpoint methods, `request` builds and interprets HTTP
//! exchanges, `transport` performs them, `storage` persists the session, and
//! `types` defines the wire schema.

pub mod api;
pub mod request;
pub mod storage;
pub mod transport;
pub mod types;
