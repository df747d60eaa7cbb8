//! Storage primitives for the service layer
//!
//! Process-local containers reused by the concrete stores.

pub mod append_log;
