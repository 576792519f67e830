//! Status and type vocabularies for jobs, applications, inquiries and
//! vacancies.
//!
//! These are plain string flags stored in `TEXT` columns. Any value in the
//! vocabulary may be set at any time; only membership is checked.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Jobs
   -------------------------------------------------------------------------- */

pub const JOB_STATUS_DRAFT: &str = "draft";
pub const JOB_STATUS_PUBLISHED: &str = "published";
pub const JOB_STATUS_CLOSED: &str = "closed";

pub const JOB_STATUSES: &[&str] = &[JOB_STATUS_DRAFT, JOB_STATUS_PUBLISHED, JOB_STATUS_CLOSED];

pub const JOB_TYPE_FULL_TIME: &str = "full_time";

pub const JOB_TYPES: &[&str] = &[
    JOB_TYPE_FULL_TIME,
    "part_time",
    "contract",
    "temporary",
    "internship",
];

/* --------------------------------------------------------------------------
   Applications
   -------------------------------------------------------------------------- */

pub const APPLICATION_STATUS_PENDING: &str = "pending";
pub const APPLICATION_STATUS_REVIEWED: &str = "reviewed";
pub const APPLICATION_STATUS_SHORTLISTED: &str = "shortlisted";
pub const APPLICATION_STATUS_REJECTED: &str = "rejected";
pub const APPLICATION_STATUS_HIRED: &str = "hired";

pub const APPLICATION_STATUSES: &[&str] = &[
    APPLICATION_STATUS_PENDING,
    APPLICATION_STATUS_REVIEWED,
    APPLICATION_STATUS_SHORTLISTED,
    APPLICATION_STATUS_REJECTED,
    APPLICATION_STATUS_HIRED,
];

/* --------------------------------------------------------------------------
   Staffing inquiries
   -------------------------------------------------------------------------- */

pub const INQUIRY_STATUS_NEW: &str = "new";

pub const INQUIRY_STATUSES: &[&str] = &[
    INQUIRY_STATUS_NEW,
    "contacted",
    "in_progress",
    "completed",
    "cancelled",
];

/* --------------------------------------------------------------------------
   Vacancies
   -------------------------------------------------------------------------- */

pub const VACANCY_STATUS_PENDING: &str = "pending";
pub const VACANCY_STATUS_APPROVED: &str = "approved";
pub const VACANCY_STATUS_REJECTED: &str = "rejected";

pub const VACANCY_STATUSES: &[&str] = &[
    VACANCY_STATUS_PENDING,
    VACANCY_STATUS_APPROVED,
    VACANCY_STATUS_REJECTED,
];

/* --------------------------------------------------------------------------
   Validation
   -------------------------------------------------------------------------- */

fn validate_member(kind: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {kind} '{value}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

pub fn validate_job_status(value: &str) -> Result<(), CoreError> {
    validate_member("job status", value, JOB_STATUSES)
}

pub fn validate_job_type(value: &str) -> Result<(), CoreError> {
    validate_member("job type", value, JOB_TYPES)
}

pub fn validate_application_status(value: &str) -> Result<(), CoreError> {
    validate_member("application status", value, APPLICATION_STATUSES)
}

pub fn validate_inquiry_status(value: &str) -> Result<(), CoreError> {
    validate_member("inquiry status", value, INQUIRY_STATUSES)
}

pub fn validate_vacancy_status(value: &str) -> Result<(), CoreError> {
    validate_member("vacancy status", value, VACANCY_STATUSES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn every_inquiry_status_is_accepted() {
        for status in ["new", "contacted", "in_progress", "completed", "cancelled"] {
            assert!(validate_inquiry_status(status).is_ok(), "{status} should be valid");
        }
    }

    #[test]
    fn unknown_inquiry_status_is_rejected() {
        assert_matches!(
            validate_inquiry_status("archived"),
            Err(CoreError::Validation(msg)) if msg.contains("archived")
        );
    }

    #[test]
    fn application_status_is_case_sensitive() {
        assert!(validate_application_status("hired").is_ok());
        assert!(validate_application_status("Hired").is_err());
    }

    #[test]
    fn job_type_lists_allowed_values_in_error() {
        let err = validate_job_type("freelance").unwrap_err();
        assert!(err.to_string().contains("full_time"));
    }

    #[test]
    fn vacancy_and_job_statuses() {
        assert!(validate_vacancy_status("approved").is_ok());
        assert!(validate_vacancy_status("published").is_err());
        assert!(validate_job_status("closed").is_ok());
        assert!(validate_job_status("pending").is_err());
    }
}
