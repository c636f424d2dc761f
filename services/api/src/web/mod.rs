pub mod rest;
pub mod router;
pub mod state;

// Re-export the pieces the binaries and integration tests need.
pub use rest::{analyze_handler, health_handler, ApiDoc};
pub use router::build_router;
pub use state::AppState;
