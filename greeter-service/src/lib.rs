//! Greeter Service
//!
//! Serves one configured greeting string on `GET /`.

pub mod config;
pub mod handlers;
pub mod server;

pub use config::GreeterConfig;
pub use handlers::{create_router, GreeterState, HealthResponse};
pub use server::{serve, serve_on, shutdown_signal};
