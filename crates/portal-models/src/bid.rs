//! Bid entity.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::bid_status::BidStatus;

/// A bid placed on a posted job, stored in the `bidedJobs` collection.
///
/// `job_id` is an opaque reference to the posting; nothing enforces it
/// at the store level. `job_owner_email` is denormalized onto the bid
/// so inbound bid requests can be listed with a single query.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Bidder email.
    #[validate(email)]
    pub email: String,
    /// Email of the user who posted the job being bid on.
    #[validate(email)]
    pub job_owner_email: String,
    /// Hex id of the posting this bid targets.
    #[validate(length(min = 1))]
    pub job_id: String,
    #[validate(length(min = 1, max = 200))]
    pub job_title: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub deadline: String,
    /// Status is ignored on create requests; every new bid starts pending.
    #[serde(default)]
    pub status: BidStatus,
}
