//! Axum HTTP API server for the Job Portal.
//!
//! This crate provides:
//! - Signed session tokens carried in an HTTP-only cookie
//! - Job posting and bid REST endpoints over the MongoDB gateways
//! - A uniform authorization guard on mutating and owner-scoped routes

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use auth::{AuthUser, TokenService};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
