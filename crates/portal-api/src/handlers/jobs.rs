//! Job posting handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use portal_models::{JobPosting, JobPostingPatch};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Response for inserts, mirroring the driver's result shape.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub inserted_id: String,
}

/// Response for updates.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Response for deletes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_count: u64,
}

/// Owner-scoped listing query.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: String,
}

/// Create a job posting.
pub async fn create_job(
    State(state): State<AppState>,
    user: AuthUser,
    Json(mut job): Json<JobPosting>,
) -> ApiResult<Json<InsertResponse>> {
    job.validate()?;
    // The posting belongs to whoever holds the session, whatever the
    // body claims.
    user.require_owner(&job.email)?;
    job.id = None;

    let id = state.jobs.create(&job).await?;
    Ok(Json(InsertResponse {
        inserted_id: id.to_hex(),
    }))
}

/// List every posting.
pub async fn list_all_jobs(State(state): State<AppState>) -> ApiResult<Json<Vec<JobPosting>>> {
    let jobs = state.jobs.list_all().await?;
    Ok(Json(jobs))
}

/// Fetch one posting by id.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<JobPosting>> {
    let job = state
        .jobs
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("job {id}")))?;
    Ok(Json(job))
}

/// List the requester's own postings.
pub async fn my_posted_jobs(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OwnerQuery>,
) -> ApiResult<Json<Vec<JobPosting>>> {
    user.require_owner(&query.email)?;

    let jobs = state.jobs.list_by_owner(&query.email).await?;
    Ok(Json(jobs))
}

/// Update the mutable fields of one of the requester's postings.
///
/// The store filters on the session identity, so someone else's
/// posting comes back as zero matched rather than being mutated.
pub async fn update_job(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(patch): Json<JobPostingPatch>,
) -> ApiResult<Json<UpdateResponse>> {
    patch.validate()?;

    let report = state.jobs.update(&id, &user.email, &patch).await?;
    Ok(Json(UpdateResponse {
        matched_count: report.matched_count,
        modified_count: report.modified_count,
    }))
}

/// Delete one of the requester's postings.
pub async fn delete_job(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let report = state.jobs.delete(&id, &user.email).await?;
    Ok(Json(DeleteResponse {
        deleted_count: report.deleted_count,
    }))
}
