use std::sync::Arc;

use crate::core::{
    aggregator::{regional_insights, skill_demand, REGIONAL_TOP, SKILL_DEMAND_TOP},
    matcher::{RecommendationResult, Recommender, DEFAULT_CANDIDATE_POOL},
    mentor::{rank_mentors, MentorFilter},
    scoring::{combine_signals, NEUTRAL_SCORE},
    MatchError,
};
use crate::models::{FrequencyEntry, JobId, JobPosting, RecommendedJob, RecommendedMentor, ScoreBreakdown, UserId};
use crate::services::cache::{AnalyticsCache, CacheKey};
use crate::services::store::JobStore;

/// Tunables for the engine, usually taken from `[matching]` settings
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Active postings fetched and scored per recommendation
    pub candidate_pool: usize,
    pub skill_demand_top: usize,
    pub regional_top: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            candidate_pool: DEFAULT_CANDIDATE_POOL,
            skill_demand_top: SKILL_DEMAND_TOP,
            regional_top: REGIONAL_TOP,
        }
    }
}

/// Score of one job for one user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobScore {
    pub match_score: f64,
    /// Absent when the score is the neutral fallback
    pub breakdown: Option<ScoreBreakdown>,
}

impl JobScore {
    pub fn neutral() -> Self {
        Self {
            match_score: NEUTRAL_SCORE,
            breakdown: None,
        }
    }
}

/// Matching engine bound to a job store
///
/// The `try_*` methods report failures; the plain methods are the advisory
/// surface used by handlers and collapse every failure into the neutral score
/// or an empty list.
#[derive(Clone)]
pub struct MatchEngine {
    store: Arc<dyn JobStore>,
    recommender: Recommender,
    cache: AnalyticsCache,
    options: EngineOptions,
}

impl MatchEngine {
    pub fn new(
        store: Arc<dyn JobStore>,
        recommender: Recommender,
        cache: AnalyticsCache,
        options: EngineOptions,
    ) -> Self {
        Self {
            store,
            recommender,
            cache,
            options,
        }
    }

    pub async fn health_check(&self) -> bool {
        self.store.health_check().await.unwrap_or(false)
    }

    pub async fn try_recommend(&self, user_id: UserId, limit: usize) -> Result<RecommendationResult, MatchError> {
        let excluded = self.store.fetch_excluded_ids(user_id).await?;
        let profile = self.store.fetch_profile(user_id).await?;
        let profile = profile.ok_or(MatchError::ProfileMissing)?;
        let candidates = self
            .store
            .fetch_active_jobs(Some(self.options.candidate_pool))
            .await?;
        let history = self.store.fetch_applications(user_id).await?;

        tracing::debug!(
            "Scoring {} candidates for user {} ({} excluded)",
            candidates.len(),
            user_id,
            excluded.len()
        );

        self.recommender
            .try_recommend(Some(&profile), candidates, &excluded, &history, limit)
    }

    /// Ranked job recommendations for a user; empty on any failure
    pub async fn recommend(&self, user_id: UserId, limit: usize) -> Vec<RecommendedJob> {
        match self.try_recommend(user_id, limit).await {
            Ok(result) => {
                tracing::info!(
                    "Returning {} recommendations for user {} (from {} candidates)",
                    result.jobs.len(),
                    user_id,
                    result.total_candidates
                );
                result.jobs
            }
            Err(MatchError::ProfileMissing) => {
                tracing::debug!("User {} has no job seeker profile, no recommendations", user_id);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Recommendations for user {} failed: {}", user_id, e);
                Vec::new()
            }
        }
    }

    pub async fn try_score_job(&self, user_id: UserId, job_id: JobId) -> Result<JobScore, MatchError> {
        let job = self
            .store
            .fetch_job(job_id)
            .await?
            .ok_or(MatchError::JobNotFound(job_id))?;
        let profile = self.store.fetch_profile(user_id).await?;
        let history = self.store.fetch_applications(user_id).await?;

        let scorer = self.recommender.scorer();
        scorer.validate()?;
        let profile = profile.ok_or(MatchError::ProfileMissing)?;
        let breakdown = scorer.breakdown(&profile, &job, &history);

        Ok(JobScore {
            match_score: combine_signals(&breakdown, scorer.weights()),
            breakdown: Some(breakdown),
        })
    }

    /// Score one job for a user
    ///
    /// Returns `None` only when the job does not exist; every other failure
    /// yields the neutral score.
    pub async fn score_job(&self, user_id: UserId, job_id: JobId) -> Option<JobScore> {
        match self.try_score_job(user_id, job_id).await {
            Ok(score) => Some(score),
            Err(MatchError::JobNotFound(_)) => None,
            Err(e) => {
                tracing::debug!("Score for user {} / job {} is neutral: {}", user_id, job_id, e);
                Some(JobScore::neutral())
            }
        }
    }

    /// Most requested skills across active postings (cached)
    pub async fn skill_demand(&self) -> Arc<Vec<FrequencyEntry>> {
        let top = self.options.skill_demand_top;
        self.cached_aggregate(CacheKey::skill_demand(top), |jobs| skill_demand(jobs, top))
            .await
    }

    /// Postings per region across active postings (cached)
    pub async fn regional_insights(&self) -> Arc<Vec<FrequencyEntry>> {
        let top = self.options.regional_top;
        self.cached_aggregate(CacheKey::regional_insights(top), |jobs| regional_insights(jobs, top))
            .await
    }

    async fn cached_aggregate<F>(&self, key: String, reduce: F) -> Arc<Vec<FrequencyEntry>>
    where
        F: FnOnce(&[JobPosting]) -> Vec<FrequencyEntry>,
    {
        if let Some(hit) = self.cache.get(&key).await {
            return hit;
        }

        match self.store.fetch_active_jobs(None).await {
            Ok(jobs) => self.cache.set(&key, reduce(&jobs)).await,
            Err(e) => {
                // Failures are not cached so the next request retries
                tracing::warn!("Aggregate {} failed: {}", key, e);
                Arc::new(Vec::new())
            }
        }
    }

    pub async fn try_recommend_mentors(
        &self,
        user_id: UserId,
        filter: &MentorFilter,
        limit: usize,
    ) -> Result<Vec<RecommendedMentor>, MatchError> {
        let profile = self.store.fetch_profile(user_id).await?;
        let mentors = self.store.fetch_active_mentors().await?;
        Ok(rank_mentors(profile.as_ref(), mentors, filter, limit))
    }

    /// Mentors ranked by skill overlap; empty on store failure
    pub async fn recommend_mentors(
        &self,
        user_id: UserId,
        filter: &MentorFilter,
        limit: usize,
    ) -> Vec<RecommendedMentor> {
        self.try_recommend_mentors(user_id, filter, limit)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Mentor suggestions for user {} failed: {}", user_id, e);
                Vec::new()
            })
    }
}
