//! User records and the storage seam the HTTP layer talks to.

pub mod store;

pub use store::{UserRecord, UserStore};
