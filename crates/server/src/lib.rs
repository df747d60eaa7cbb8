pub mod errors;
pub mod routes;
pub mod startup;
pub mod state;

pub use routes::build_router;
pub use startup::{run, run_with};
pub use state::AppState;
