use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

use crate::models::{ApplicationRecord, JobId, JobPosting, JobSeekerProfile, MentorProfile, UserId};

/// Errors raised by a job store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read accessors over the marketplace data owned by the web application
///
/// Implementations never write; the matching engine only reads.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Job seeker profile of a user, if the user has one
    async fn fetch_profile(&self, user_id: UserId) -> Result<Option<JobSeekerProfile>, StoreError>;

    /// Active postings in corpus order (newest first), at most `limit` when given
    async fn fetch_active_jobs(&self, limit: Option<usize>) -> Result<Vec<JobPosting>, StoreError>;

    async fn fetch_job(&self, job_id: JobId) -> Result<Option<JobPosting>, StoreError>;

    /// Applications submitted by the user, newest first
    async fn fetch_applications(&self, user_id: UserId) -> Result<Vec<ApplicationRecord>, StoreError>;

    /// Union of the job ids the user applied to and saved
    async fn fetch_excluded_ids(&self, user_id: UserId) -> Result<HashSet<JobId>, StoreError>;

    /// Active, verified mentors ordered by rating (best first)
    async fn fetch_active_mentors(&self) -> Result<Vec<MentorProfile>, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
