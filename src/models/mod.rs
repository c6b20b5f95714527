// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ApplicationRecord, ExperienceLevel, FrequencyEntry, JobId, JobPosting, JobSeekerProfile, JobStatus,
    MentorProfile, MentorStatus, RecommendedJob, RecommendedMentor, ScoreBreakdown, ScoringWeights, UserId,
};
pub use requests::{MentorRecommendationsRequest, RecommendationsRequest, ScoreRequest};
pub use responses::{
    ErrorResponse, FrequencyResponse, HealthResponse, MentorRecommendationsResponse, RecommendationsResponse,
    ScoreResponse,
};
