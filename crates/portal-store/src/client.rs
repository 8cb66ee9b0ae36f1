//! MongoDB client wrapper.

use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database};
use tracing::info;

use portal_models::{Bid, JobPosting};

use crate::error::{StoreError, StoreResult};

/// Collection holding user job postings.
pub const JOBS_COLLECTION: &str = "usersPostedJobs";

/// Collection holding bids placed on postings.
pub const BIDS_COLLECTION: &str = "bidedJobs";

/// Store connection configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string (hosted cluster URI).
    pub uri: String,
    /// Logical database name.
    pub database: String,
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        let uri = std::env::var("MONGODB_URI").map_err(|_| {
            StoreError::Config("MONGODB_URI must be set to reach the cluster".to_string())
        })?;
        Ok(Self {
            uri,
            database: std::env::var("MONGODB_DB").unwrap_or_else(|_| "jobPortal".to_string()),
        })
    }
}

/// Long-lived handle to the job portal database.
///
/// The driver's `Client` is internally pooled and cheap to clone; one
/// instance is created at startup and shared by every request.
#[derive(Clone)]
pub struct StoreClient {
    db: Database,
}

impl StoreClient {
    /// Connect to the cluster described by `config`.
    ///
    /// The driver connects lazily, so this succeeds without a reachable
    /// server; failures surface on the first operation.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options)?;
        info!(database = %config.database, "connected to MongoDB");

        Ok(Self {
            db: client.database(&config.database),
        })
    }

    /// Typed handle to the job postings collection.
    pub fn jobs(&self) -> Collection<JobPosting> {
        self.db.collection(JOBS_COLLECTION)
    }

    /// Typed handle to the bids collection.
    pub fn bids(&self) -> Collection<Bid> {
        self.db.collection(BIDS_COLLECTION)
    }
}
