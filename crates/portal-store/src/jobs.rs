//! Job posting repository.

use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::Collection;
use tracing::debug;

use portal_models::{JobPosting, JobPostingPatch};

use crate::client::StoreClient;
use crate::error::{StoreError, StoreResult};
use crate::{DeleteReport, UpdateReport};

/// Repository for the `usersPostedJobs` collection.
///
/// Every method is one store round trip. Absent records are reported
/// through counts or `None`, never invented.
#[derive(Clone)]
pub struct JobRepository {
    jobs: Collection<JobPosting>,
}

impl JobRepository {
    /// Create a repository over the given store handle.
    pub fn new(store: &StoreClient) -> Self {
        Self { jobs: store.jobs() }
    }

    /// Insert a new posting and return its generated id.
    pub async fn create(&self, job: &JobPosting) -> StoreResult<ObjectId> {
        let result = self.jobs.insert_one(job).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Unexpected("insert returned a non-ObjectId".to_string()))?;
        debug!(job_id = %id, owner = %job.email, "job posting created");
        Ok(id)
    }

    /// Every posting, unfiltered and unpaginated.
    pub async fn list_all(&self) -> StoreResult<Vec<JobPosting>> {
        let postings = self.jobs.find(doc! {}).await?.try_collect().await?;
        Ok(postings)
    }

    /// One posting by id, `None` if absent.
    pub async fn get(&self, id: &str) -> StoreResult<Option<JobPosting>> {
        let posting = self.jobs.find_one(id_filter(id)?).await?;
        Ok(posting)
    }

    /// All postings owned by `email`.
    pub async fn list_by_owner(&self, email: &str) -> StoreResult<Vec<JobPosting>> {
        let postings = self
            .jobs
            .find(owner_filter(email))
            .await?
            .try_collect()
            .await?;
        Ok(postings)
    }

    /// Replace the six owner-editable fields on the posting, provided
    /// `owner` posted it.
    ///
    /// A missing id or someone else's posting matches zero records;
    /// nothing is upserted.
    pub async fn update(
        &self,
        id: &str,
        owner: &str,
        patch: &JobPostingPatch,
    ) -> StoreResult<UpdateReport> {
        let result = self
            .jobs
            .update_one(owned_filter(id, owner)?, patch_document(patch))
            .await?;
        Ok(UpdateReport {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    /// Delete the posting, provided `owner` posted it; zero deleted if
    /// absent or owned by someone else.
    pub async fn delete(&self, id: &str, owner: &str) -> StoreResult<DeleteReport> {
        let result = self.jobs.delete_one(owned_filter(id, owner)?).await?;
        Ok(DeleteReport {
            deleted_count: result.deleted_count,
        })
    }
}

/// Filter matching one record by its hex id.
pub(crate) fn id_filter(id: &str) -> StoreResult<Document> {
    let oid = ObjectId::parse_str(id).map_err(|_| StoreError::invalid_id(id))?;
    Ok(doc! { "_id": oid })
}

fn owner_filter(email: &str) -> Document {
    doc! { "email": email }
}

/// Filter matching one record by id only when `owner` posted it, so a
/// mutation by anyone else is a zero-matched no-op within the same
/// single round trip.
fn owned_filter(id: &str, owner: &str) -> StoreResult<Document> {
    let oid = ObjectId::parse_str(id).map_err(|_| StoreError::invalid_id(id))?;
    Ok(doc! { "_id": oid, "email": owner })
}

/// `$set` document replacing exactly the mutable posting fields.
fn patch_document(patch: &JobPostingPatch) -> Document {
    doc! {
        "$set": {
            "jobTitle": &patch.job_title,
            "deadline": &patch.deadline,
            "description": &patch.description,
            "category": &patch.category,
            "minimumPrice": patch.minimum_price,
            "maximumPrice": patch.maximum_price,
        }
    }
}
