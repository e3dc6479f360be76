//! HTTP API server for GEAR license verification.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::create_router as build_app;
pub use server::serve;
pub use state::AppState;
