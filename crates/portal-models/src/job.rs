//! Job posting entity and its owner-editable fields.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A job posted by a user, stored in the `usersPostedJobs` collection.
///
/// Field names are camelCase on the wire and in the database. The id is
/// absent on incoming create requests and filled in by the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_price_range))]
pub struct JobPosting {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Owner email, taken from the verified session identity.
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub job_title: String,
    /// Deadline as supplied by the client (date string, not parsed).
    #[validate(length(min = 1))]
    pub deadline: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub minimum_price: f64,
    #[validate(range(min = 0.0))]
    pub maximum_price: f64,
}

/// The subset of posting fields the owner may edit.
///
/// An update replaces exactly these six fields and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_patch_price_range))]
pub struct JobPostingPatch {
    #[validate(length(min = 1, max = 200))]
    pub job_title: String,
    #[validate(length(min = 1))]
    pub deadline: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub minimum_price: f64,
    #[validate(range(min = 0.0))]
    pub maximum_price: f64,
}

fn price_range_error() -> ValidationError {
    let mut err = ValidationError::new("price_range");
    err.message = Some("minimumPrice must not exceed maximumPrice".into());
    err
}

fn validate_price_range(job: &JobPosting) -> Result<(), ValidationError> {
    if job.minimum_price > job.maximum_price {
        return Err(price_range_error());
    }
    Ok(())
}

fn validate_patch_price_range(patch: &JobPostingPatch) -> Result<(), ValidationError> {
    if patch.minimum_price > patch.maximum_price {
        return Err(price_range_error());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> JobPosting {
        JobPosting {
            id: None,
            email: "owner@example.com".to_string(),
            job_title: "Build a landing page".to_string(),
            deadline: "2026-10-01".to_string(),
            description: "Responsive marketing page".to_string(),
            category: "web-development".to_string(),
            minimum_price: 100.0,
            maximum_price: 250.0,
        }
    }

    #[test]
    fn test_valid_job_passes_validation() {
        assert!(sample_job().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut job = sample_job();
        job.job_title.clear();
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut job = sample_job();
        job.email = "not-an-email".to_string();
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let mut job = sample_job();
        job.minimum_price = 500.0;
        job.maximum_price = 100.0;
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample_job()).unwrap();
        assert!(json.get("jobTitle").is_some());
        assert!(json.get("minimumPrice").is_some());
        assert!(json.get("maximumPrice").is_some());
        // Id is skipped when absent so inserts do not write a null _id.
        assert!(json.get("_id").is_none());
    }
}
