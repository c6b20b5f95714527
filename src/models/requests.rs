use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{JobId, UserId};

/// Request for job recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: UserId,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a single job for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: UserId,
    #[validate(range(min = 1))]
    #[serde(alias = "job_id", rename = "jobId")]
    pub job_id: JobId,
}

/// Request for mentor suggestions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MentorRecommendationsRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: UserId,
    #[serde(default)]
    pub limit: Option<u16>,
    /// Only mentors whose expertise areas contain this term
    #[validate(length(max = 100))]
    #[serde(default)]
    pub expertise: Option<String>,
    /// Free-text match on name, expertise and industry
    #[validate(length(max = 100))]
    #[serde(default)]
    pub search: Option<String>,
}
