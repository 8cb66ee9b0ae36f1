//! Shared data models for the Job Portal backend.
//!
//! This crate provides Serde-serializable types for:
//! - Job postings and the fields an owner may edit
//! - Bids and the bid status state machine
//! - The identity payload carried in the session token

pub mod bid;
pub mod bid_status;
pub mod identity;
pub mod job;

// Re-export common types
pub use bid::Bid;
pub use bid_status::{BidStatus, TransitionError};
pub use identity::Identity;
pub use job::{JobPosting, JobPostingPatch};
