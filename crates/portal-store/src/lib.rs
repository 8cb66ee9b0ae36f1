//! MongoDB store gateways for the Job Portal backend.
//!
//! This crate wraps the hosted MongoDB cluster behind two small
//! repositories, one per collection. Every operation is a single
//! round trip; the only business rule living here is the bid status
//! state machine, which `BidRepository::transition` enforces centrally
//! so no route handler can write an illegal status.

pub mod bids;
pub mod client;
pub mod error;
pub mod jobs;

pub use bids::{BidRepository, BidSort};
pub use client::{StoreClient, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use jobs::JobRepository;

/// Outcome of an update operation, mirroring the driver's counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateReport {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Outcome of a delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted_count: u64,
}
