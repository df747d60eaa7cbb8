//! Shared helpers for the usuarios workspace.

pub mod utils;
