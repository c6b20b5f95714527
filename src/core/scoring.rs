use crate::core::error::MatchError;
use crate::core::text::{first_word, is_blank, split_tokens, token_set};
use crate::models::{ApplicationRecord, ExperienceLevel, JobPosting, JobSeekerProfile, ScoreBreakdown, ScoringWeights};

/// Score returned when nothing can be evaluated
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Computes the 0-100 compatibility score between a job seeker and a posting
///
/// Scoring formula:
/// score = Σ(signal * weight) / Σ(weight of contributing signals)
///
/// | signal    | weight | contributes when                          |
/// |-----------|--------|-------------------------------------------|
/// | skills    | 0.40   | both skill fields non-empty               |
/// | education | 0.20   | education level and experience level set  |
/// | location  | 0.15   | both locations non-empty                  |
/// | interests | 0.15   | an interest matches the job title         |
/// | history   | 0.10   | always                                    |
///
/// Signals without data drop out of the denominator, so an incomplete profile
/// is not penalized for what it leaves blank.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        match self.weights.first_invalid() {
            Some(name) => Err(MatchError::InvalidWeights(name)),
            None => Ok(()),
        }
    }

    /// Evaluate every signal for a profile/job pair
    pub fn breakdown(
        &self,
        profile: &JobSeekerProfile,
        job: &JobPosting,
        history: &[ApplicationRecord],
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            skills: skills_signal(&profile.skills, &job.skills_required),
            education: education_signal(&profile.education_level, job.experience_level),
            location: location_signal(&profile.location, &job.location, job.is_remote),
            interests: interest_signal(&profile.interests, &job.title),
            history: history_signal(history, &job.title),
        }
    }

    /// Score a pair, reporting why it could not be scored
    pub fn try_score(
        &self,
        profile: Option<&JobSeekerProfile>,
        job: &JobPosting,
        history: &[ApplicationRecord],
    ) -> Result<f64, MatchError> {
        self.validate()?;
        let profile = profile.ok_or(MatchError::ProfileMissing)?;
        let breakdown = self.breakdown(profile, job, history);
        Ok(combine_signals(&breakdown, &self.weights))
    }

    /// Score a pair; any failure yields [`NEUTRAL_SCORE`]
    pub fn score(
        &self,
        profile: Option<&JobSeekerProfile>,
        job: &JobPosting,
        history: &[ApplicationRecord],
    ) -> f64 {
        self.try_score(profile, job, history).unwrap_or_else(|e| {
            tracing::debug!("Scoring job {} fell back to neutral score: {}", job.id, e);
            NEUTRAL_SCORE
        })
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Weighted average of the contributing signals, clamped to [0, 100]
pub fn combine_signals(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> f64 {
    let optional = [
        (breakdown.skills, weights.skills),
        (breakdown.education, weights.education),
        (breakdown.location, weights.location),
        (breakdown.interests, weights.interests),
    ];

    let (mut total, mut applied) = optional
        .iter()
        .filter_map(|(signal, weight)| signal.map(|s| (s * weight, *weight)))
        .fold((0.0, 0.0), |(t, w), (s, weight)| (t + s, w + weight));

    total += breakdown.history * weights.history;
    applied += weights.history;

    if applied <= 0.0 {
        return NEUTRAL_SCORE;
    }

    (total / applied).clamp(0.0, 100.0)
}

/// Share of the job's required skills the candidate has (0-100)
pub fn skills_signal(profile_skills: &str, job_skills: &str) -> Option<f64> {
    let job_set = token_set(job_skills);
    let profile_set = token_set(profile_skills);
    if job_set.is_empty() || profile_set.is_empty() {
        return None;
    }

    let shared = job_set.intersection(&profile_set).count();
    Some(shared as f64 / job_set.len() as f64 * 100.0)
}

/// Education tier against the posting's experience level
pub fn education_signal(education_level: &str, wanted: Option<ExperienceLevel>) -> Option<f64> {
    let wanted = wanted?;
    if is_blank(education_level) {
        return None;
    }

    let tier = ExperienceLevel::from_education(education_level);
    let score = if tier == wanted {
        100.0
    } else if tier >= ExperienceLevel::Mid && wanted == ExperienceLevel::Entry {
        80.0
    } else {
        0.0
    };
    Some(score)
}

/// Substring match in either direction, with partial credit for remote postings
pub fn location_signal(profile_location: &str, job_location: &str, is_remote: bool) -> Option<f64> {
    if is_blank(profile_location) || is_blank(job_location) {
        return None;
    }

    let ours = profile_location.trim().to_lowercase();
    let theirs = job_location.trim().to_lowercase();
    let score = if ours.contains(&theirs) || theirs.contains(&ours) {
        100.0
    } else if is_remote {
        90.0
    } else {
        0.0
    };
    Some(score)
}

/// 100 when an interest (or one of its words) occurs in the title, otherwise no signal
pub fn interest_signal(interests: &str, title: &str) -> Option<f64> {
    if is_blank(interests) || is_blank(title) {
        return None;
    }

    let title = title.to_lowercase();
    split_tokens(interests)
        .iter()
        .any(|interest| {
            title.contains(interest.as_str())
                || interest.split_whitespace().any(|word| title.contains(word))
        })
        .then_some(100.0)
}

/// 10 points per earlier application to a job with the same leading title word, capped at 100
pub fn history_signal(history: &[ApplicationRecord], title: &str) -> f64 {
    let Some(word) = first_word(title) else {
        return 0.0;
    };

    let similar = history
        .iter()
        .filter(|application| first_word(&application.job_title).as_deref() == Some(word.as_str()))
        .count();

    (similar as f64 * 10.0).min(100.0)
}
