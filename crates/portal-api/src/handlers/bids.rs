//! Bid handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use portal_models::{Bid, BidStatus};
use portal_store::BidSort;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::jobs::{InsertResponse, UpdateResponse};
use crate::state::AppState;

/// Bidder listing query: owner email plus optional status sort.
#[derive(Debug, Deserialize)]
pub struct BidListQuery {
    pub email: String,
    pub sort: Option<String>,
}

/// Place a bid on a posting.
pub async fn create_bid(
    State(state): State<AppState>,
    user: AuthUser,
    Json(mut bid): Json<Bid>,
) -> ApiResult<Json<InsertResponse>> {
    bid.validate()?;
    // The bid belongs to whoever holds the session.
    user.require_owner(&bid.email)?;
    bid.id = None;

    let id = state.bids.create(&bid).await?;
    Ok(Json(InsertResponse {
        inserted_id: id.to_hex(),
    }))
}

/// List the requester's own bids, optionally sorted by status label.
pub async fn my_bid_jobs(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<BidListQuery>,
) -> ApiResult<Json<Vec<Bid>>> {
    user.require_owner(&query.email)?;

    let sort = BidSort::from_param(query.sort.as_deref());
    let bids = state.bids.list_by_bidder(&query.email, sort).await?;
    Ok(Json(bids))
}

/// List inbound bids on the requester's postings.
pub async fn bid_requests(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<BidListQuery>,
) -> ApiResult<Json<Vec<Bid>>> {
    user.require_owner(&query.email)?;

    let bids = state.bids.list_by_job_owner(&query.email).await?;
    Ok(Json(bids))
}

/// Fetch one bid by id.
pub async fn get_bid(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Bid>> {
    let bid = state
        .bids
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("bid {id}")))?;
    Ok(Json(bid))
}

/// Cancel a pending bid (transition to `reject`).
pub async fn cancel_bid(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UpdateResponse>> {
    transition(&state, &id, BidStatus::Reject).await
}

/// Accept a pending bid.
pub async fn accept_bid(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UpdateResponse>> {
    transition(&state, &id, BidStatus::Accept).await
}

/// Mark an accepted bid's project complete.
pub async fn complete_project(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UpdateResponse>> {
    transition(&state, &id, BidStatus::Complete).await
}

async fn transition(
    state: &AppState,
    id: &str,
    target: BidStatus,
) -> ApiResult<Json<UpdateResponse>> {
    let report = state.bids.transition(id, target).await?;
    Ok(Json(UpdateResponse {
        matched_count: report.matched_count,
        modified_count: report.modified_count,
    }))
}
