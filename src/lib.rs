//! JobNix Match - job recommendation and matching service for the JobNix marketplace
//!
//! This library provides the matching engine behind the job seeker dashboard
//! and the admin analytics page: a weighted match scorer, a job recommender,
//! skill/region demand aggregates and mentor suggestions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchError, Recommender, Scorer, NEUTRAL_SCORE};
pub use crate::models::{JobPosting, JobSeekerProfile, RecommendedJob, ScoringWeights};
pub use crate::services::{JobStore, MatchEngine, MemoryStore};
