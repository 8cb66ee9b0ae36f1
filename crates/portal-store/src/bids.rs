//! Bid repository, including status transitions.

use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::Collection;
use tracing::{debug, info};

use portal_models::{Bid, BidStatus};

use crate::client::StoreClient;
use crate::error::{StoreError, StoreResult};
use crate::jobs::id_filter;
use crate::UpdateReport;

/// Optional sort order for bidder listings.
///
/// Sorting is on the stored status label, so the order is lexicographic
/// (accept < complete < pending < reject ascending). That matches the
/// `sort=asc|desc` query parameter behavior the frontend relies on; it
/// is a product decision, not an ordering of the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidSort {
    StatusAscending,
    StatusDescending,
}

impl BidSort {
    /// Parse the `sort` query parameter; anything unrecognized means
    /// no sorting, same as omitting the parameter.
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        match param {
            Some("asc") => Some(Self::StatusAscending),
            Some("desc") => Some(Self::StatusDescending),
            _ => None,
        }
    }

    fn sort_document(&self) -> Document {
        match self {
            Self::StatusAscending => doc! { "status": 1 },
            Self::StatusDescending => doc! { "status": -1 },
        }
    }
}

/// Repository for the `bidedJobs` collection.
#[derive(Clone)]
pub struct BidRepository {
    bids: Collection<Bid>,
}

impl BidRepository {
    /// Create a repository over the given store handle.
    pub fn new(store: &StoreClient) -> Self {
        Self { bids: store.bids() }
    }

    /// Insert a new bid. Whatever status the caller supplied is
    /// discarded; every bid starts pending.
    pub async fn create(&self, bid: &Bid) -> StoreResult<ObjectId> {
        let mut bid = bid.clone();
        bid.status = BidStatus::Pending;

        let result = self.bids.insert_one(&bid).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Unexpected("insert returned a non-ObjectId".to_string()))?;
        debug!(bid_id = %id, bidder = %bid.email, "bid created");
        Ok(id)
    }

    /// All bids placed by `email`, optionally sorted by status label.
    pub async fn list_by_bidder(
        &self,
        email: &str,
        sort: Option<BidSort>,
    ) -> StoreResult<Vec<Bid>> {
        let mut find = self.bids.find(doc! { "email": email });
        if let Some(sort) = sort {
            find = find.sort(sort.sort_document());
        }
        let bids = find.await?.try_collect().await?;
        Ok(bids)
    }

    /// All bids targeting postings owned by `email`.
    pub async fn list_by_job_owner(&self, email: &str) -> StoreResult<Vec<Bid>> {
        let bids = self
            .bids
            .find(doc! { "jobOwnerEmail": email })
            .await?
            .try_collect()
            .await?;
        Ok(bids)
    }

    /// One bid by id, `None` if absent.
    pub async fn get(&self, id: &str) -> StoreResult<Option<Bid>> {
        let bid = self.bids.find_one(id_filter(id)?).await?;
        Ok(bid)
    }

    /// Move a bid to `target`, enforcing the state machine.
    ///
    /// Loads the bid, checks the transition against its current status
    /// and only then writes. The write filters on the observed status,
    /// so a concurrent transition that got there first simply matches
    /// zero records instead of clobbering it.
    pub async fn transition(&self, id: &str, target: BidStatus) -> StoreResult<UpdateReport> {
        let oid = ObjectId::parse_str(id).map_err(|_| StoreError::invalid_id(id))?;
        let bid = self
            .bids
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(|| StoreError::not_found(format!("bid {id}")))?;

        bid.status.transition_to(target)?;

        let result = self
            .bids
            .update_one(
                doc! { "_id": oid, "status": bid.status.as_str() },
                status_update(target),
            )
            .await?;

        info!(bid_id = %id, from = %bid.status, to = %target, "bid status transition");
        Ok(UpdateReport {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }
}

fn status_update(target: BidStatus) -> Document {
    doc! { "$set": { "status": target.as_str() } }
}
