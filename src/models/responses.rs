use serde::{Deserialize, Serialize};
use crate::models::domain::{FrequencyEntry, JobId, RecommendedJob, RecommendedMentor, ScoreBreakdown, UserId};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub user_id: UserId,
    pub jobs: Vec<RecommendedJob>,
    pub total: usize,
}

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub user_id: UserId,
    pub job_id: JobId,
    pub match_score: f64,
    pub breakdown: Option<ScoreBreakdown>,
}

/// Frequency table response (skill demand, regional insights)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyResponse {
    pub entries: Vec<FrequencyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorRecommendationsResponse {
    pub user_id: UserId,
    pub mentors: Vec<RecommendedMentor>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
