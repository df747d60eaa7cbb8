//! Service layer for the usuarios API.
//! - `users` defines the record type and the `UserStore` seam.
//! - `memory` holds the process-lifetime implementation.
//! - `storage` holds the generic containers those stores are built on.

pub mod errors;
pub mod memory;
pub mod storage;
pub mod users;
