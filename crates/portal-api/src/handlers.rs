//! Route handlers.

pub mod bids;
pub mod health;
pub mod jobs;
pub mod session;

pub use health::{health, liveness};
