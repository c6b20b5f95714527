use chrono::Utc;
use std::collections::HashSet;

use crate::core::{error::MatchError, filters::is_recommendable, scoring::Scorer};
use crate::models::{ApplicationRecord, JobId, JobPosting, JobSeekerProfile, RecommendedJob, ScoringWeights};

/// Number of active postings scored per recommendation request
///
/// The pool is the first postings in corpus order, not a top-K over the whole
/// corpus, so a strong match further down the corpus can be missed.
pub const DEFAULT_CANDIDATE_POOL: usize = 50;

/// Default number of recommendations returned
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// Result of the recommendation process
#[derive(Debug)]
pub struct RecommendationResult {
    pub jobs: Vec<RecommendedJob>,
    pub total_candidates: usize,
}

/// Ranks open postings for a job seeker
///
/// # Pipeline Stages
/// 1. Drop excluded (applied/saved), non-active and optionally expired postings
/// 2. Score the remaining postings
/// 3. Stable sort by score, descending
/// 4. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct Recommender {
    scorer: Scorer,
    skip_expired: bool,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            scorer: Scorer::new(weights),
            skip_expired: false,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Also drop postings whose application deadline has passed
    pub fn skip_expired(mut self, skip: bool) -> Self {
        self.skip_expired = skip;
        self
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Rank candidate postings for a profile
    ///
    /// # Arguments
    /// * `profile` - The job seeker's profile, if they have one
    /// * `candidates` - Postings in corpus order (ties keep this order)
    /// * `excluded` - Job ids the user already applied to or saved
    /// * `history` - The user's past applications
    /// * `limit` - Maximum number of postings to return
    pub fn try_recommend(
        &self,
        profile: Option<&JobSeekerProfile>,
        candidates: Vec<JobPosting>,
        excluded: &HashSet<JobId>,
        history: &[ApplicationRecord],
        limit: usize,
    ) -> Result<RecommendationResult, MatchError> {
        self.scorer.validate()?;
        let profile = profile.ok_or(MatchError::ProfileMissing)?;
        let total_candidates = candidates.len();
        let now = Utc::now();

        let mut ranked = candidates
            .into_iter()
            .filter(|job| is_recommendable(job, excluded, self.skip_expired, now))
            .map(|job| -> Result<RecommendedJob, MatchError> {
                let match_score = self.scorer.try_score(Some(profile), &job, history)?;
                Ok(RecommendedJob { job, match_score })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // sort_by is stable: equal scores keep corpus order
        ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        ranked.truncate(limit);

        Ok(RecommendationResult {
            jobs: ranked,
            total_candidates,
        })
    }

    /// Rank candidate postings; any failure yields an empty list
    pub fn recommend(
        &self,
        profile: Option<&JobSeekerProfile>,
        candidates: Vec<JobPosting>,
        excluded: &HashSet<JobId>,
        history: &[ApplicationRecord],
        limit: usize,
    ) -> Vec<RecommendedJob> {
        match self.try_recommend(profile, candidates, excluded, history, limit) {
            Ok(result) => result.jobs,
            Err(e) => {
                tracing::debug!("Recommendation fell back to empty list: {}", e);
                Vec::new()
            }
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, JobStatus};

    fn create_candidate(id: JobId, title: &str, skills: &str, status: JobStatus) -> JobPosting {
        JobPosting {
            id,
            title: title.to_string(),
            company_name: format!("Company {}", id),
            skills_required: skills.to_string(),
            experience_level: Some(ExperienceLevel::Entry),
            location: "Nairobi, Kenya".to_string(),
            is_remote: false,
            status,
            application_deadline: None,
        }
    }

    fn create_profile() -> JobSeekerProfile {
        JobSeekerProfile {
            user_id: 5,
            skills: "python, sql, excel".to_string(),
            interests: "data".to_string(),
            education_level: "degree".to_string(),
            location: "Nairobi".to_string(),
            bio: String::new(),
        }
    }

    #[test]
    fn test_recommend_basic() {
        let recommender = Recommender::with_default_weights();
        let candidates = vec![
            create_candidate(1, "Data Analyst", "python, sql", JobStatus::Active),
            create_candidate(2, "Chef", "cooking", JobStatus::Active),
            create_candidate(3, "Data Engineer", "python, spark", JobStatus::Closed),
        ];

        let result = recommender
            .try_recommend(Some(&create_profile()), candidates, &HashSet::new(), &[], 10)
            .unwrap();

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.jobs.len(), 2);
        assert_eq!(result.jobs[0].job.id, 1);
    }

    #[test]
    fn test_recommend_sorted_by_score() {
        let recommender = Recommender::with_default_weights();
        let candidates = vec![
            create_candidate(1, "Chef", "cooking, baking", JobStatus::Active),
            create_candidate(2, "Data Clerk", "excel", JobStatus::Active),
            create_candidate(3, "Analyst", "python, sql, tableau", JobStatus::Active),
        ];

        let jobs = recommender.recommend(Some(&create_profile()), candidates, &HashSet::new(), &[], 10);

        assert_eq!(jobs.len(), 3);
        for pair in jobs.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let recommender = Recommender::with_default_weights();
        let candidates = (1..=4)
            .map(|id| create_candidate(id, "Cook", "knife skills", JobStatus::Active))
            .collect();

        let jobs = recommender.recommend(Some(&create_profile()), candidates, &HashSet::new(), &[], 10);
        let ids: Vec<JobId> = jobs.iter().map(|r| r.job.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_excluded_never_recommended() {
        let recommender = Recommender::with_default_weights();
        let candidates = vec![
            create_candidate(1, "Data Analyst", "python, sql", JobStatus::Active),
            create_candidate(2, "Data Scientist", "python", JobStatus::Active),
        ];
        let excluded: HashSet<JobId> = [1].into_iter().collect();

        let jobs = recommender.recommend(Some(&create_profile()), candidates, &excluded, &[], 10);

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job.id, 2);
    }

    #[test]
    fn test_respects_limit() {
        let recommender = Recommender::with_default_weights();
        let candidates = (0..20)
            .map(|id| create_candidate(id, "Data Analyst", "python", JobStatus::Active))
            .collect();

        let jobs = recommender.recommend(Some(&create_profile()), candidates, &HashSet::new(), &[], 5);

        assert_eq!(jobs.len(), 5);
    }

    #[test]
    fn test_missing_profile_returns_empty() {
        let recommender = Recommender::with_default_weights();
        let candidates = vec![create_candidate(1, "Data Analyst", "python", JobStatus::Active)];

        assert!(matches!(
            recommender.try_recommend(None, candidates.clone(), &HashSet::new(), &[], 10),
            Err(MatchError::ProfileMissing)
        ));
        assert!(recommender.recommend(None, candidates, &HashSet::new(), &[], 10).is_empty());
    }
}
