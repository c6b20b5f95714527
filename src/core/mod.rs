// Core algorithm exports
pub mod aggregator;
pub mod error;
pub mod filters;
pub mod matcher;
pub mod mentor;
pub mod scoring;
pub mod text;

pub use aggregator::{regional_insights, skill_demand, REGIONAL_TOP, SKILL_DEMAND_TOP};
pub use error::MatchError;
pub use filters::{is_available_mentor, is_recommendable};
pub use matcher::{RecommendationResult, Recommender, DEFAULT_CANDIDATE_POOL, DEFAULT_RECOMMENDATION_LIMIT};
pub use mentor::{mentor_score, rank_mentors, MentorFilter};
pub use scoring::{combine_signals, Scorer, NEUTRAL_SCORE};
