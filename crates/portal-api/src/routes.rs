//! API routes.

use axum::middleware;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::bids::{
    accept_bid, bid_requests, cancel_bid, complete_project, create_bid, get_bid, my_bid_jobs,
};
use crate::handlers::jobs::{
    create_job, delete_job, get_job, list_all_jobs, my_posted_jobs, update_job,
};
use crate::handlers::session::{clear_cookie, issue_token};
use crate::handlers::{health, liveness};
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
///
/// Paths are kept exactly as the frontend expects them. The guard is
/// applied through the `AuthUser` extractor in handlers, uniformly on
/// every mutating and owner-scoped route.
pub fn create_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route("/jwt", post(issue_token))
        .route("/clearCookie", post(clear_cookie));

    let job_routes = Router::new()
        .route("/usersPostedJobs", post(create_job))
        .route("/allUsersJobs", get(list_all_jobs))
        .route("/allUsersJobs/:id", get(get_job))
        .route("/myPostedJobs", get(my_posted_jobs))
        .route("/myPostedJobs/:id", get(get_job))
        .route("/myPostedJobs/:id", patch(update_job))
        .route("/myPostedJobs/:id", delete(delete_job));

    let bid_routes = Router::new()
        .route("/bidedJobs", post(create_bid))
        .route("/myBidJobs", get(my_bid_jobs))
        .route("/bidRequests", get(bid_requests))
        .route("/bidRequests/:id", get(get_bid))
        .route("/cancelBidRequest/:id", patch(cancel_bid))
        .route("/acceptBidRequest/:id", patch(accept_bid))
        .route("/completeProject/:id", patch(complete_project));

    let health_routes = Router::new()
        .route("/", get(liveness))
        .route("/health", get(health));

    Router::new()
        .merge(session_routes)
        .merge(job_routes)
        .merge(bid_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
