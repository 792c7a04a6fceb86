//! Caller Service
//!
//! Resolves the greeter by logical name, calls it, and answers with the
//! greeting prefixed by the local time.

pub mod config;
pub mod handlers;
pub mod router;
pub mod server;
pub mod timestamp;
pub mod upstream;

pub use config::CallerConfig;
pub use handlers::{create_router, ApiError, CallerState, HealthResponse};
pub use router::ServiceRouter;
pub use server::{build_state, serve, serve_on, shutdown_signal};
pub use upstream::UpstreamClient;
