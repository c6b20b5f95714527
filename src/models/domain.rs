use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = i64;
pub type JobId = i64;

/// Job seeker profile as stored by the web application
///
/// Free-text fields are blank (not absent) when the user never filled them in;
/// the scorer treats a blank field as "signal not applicable".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekerProfile {
    pub user_id: UserId,
    /// Comma-separated skills
    #[serde(default)]
    pub skills: String,
    /// Comma-separated career interests
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
}

/// Experience tier requested by a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "entry" => Some(Self::Entry),
            "mid" => Some(Self::Mid),
            "senior" => Some(Self::Senior),
            "executive" => Some(Self::Executive),
            _ => None,
        }
    }

    /// Map a free-text education level onto an experience tier.
    ///
    /// Unknown or unlisted levels fall back to `Entry`.
    pub fn from_education(education_level: &str) -> Self {
        match education_level.trim().to_lowercase().as_str() {
            "primary" | "secondary" => Self::Entry,
            "diploma" | "degree" => Self::Mid,
            "masters" => Self::Senior,
            "phd" => Self::Executive,
            _ => Self::Entry,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Draft,
    Pending,
    Active,
    Closed,
    Expired,
}

impl JobStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "closed" => Some(Self::Closed),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }
}

/// Job posting as seen by the matching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    /// Comma-separated required skills
    #[serde(default)]
    pub skills_required: String,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_remote: bool,
    pub status: JobStatus,
    #[serde(default)]
    pub application_deadline: Option<DateTime<Utc>>,
}

impl JobPosting {
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }

    /// True once the application deadline has passed
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.application_deadline
            .map(|deadline| now > deadline)
            .unwrap_or(false)
    }
}

/// A past application, joined with the title of the job applied to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub job_id: JobId,
    pub job_title: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentorStatus {
    Pending,
    Active,
    Inactive,
    Suspended,
}

impl MentorStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "suspended" => Some(Self::Suspended),
            _ => None,
        }
    }
}

/// Mentor available through the mentorship program
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorProfile {
    pub id: i64,
    pub user_id: UserId,
    pub display_name: String,
    /// Comma-separated areas of expertise
    #[serde(default)]
    pub expertise_areas: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub years_of_experience: i32,
    pub status: MentorStatus,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub rating: f64,
}

/// A job recommended to a user, with its match score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedJob {
    pub job: JobPosting,
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedMentor {
    pub mentor: MentorProfile,
    pub match_score: f64,
}

/// One row of a frequency table (skill or region with its posting count)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub label: String,
    pub count: usize,
}

/// Per-signal scores behind a match score
///
/// `None` means the signal had no data on one side (or, for interests, found
/// no match) and was left out of the weighted average entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skills: Option<f64>,
    pub education: Option<f64>,
    pub location: Option<f64>,
    pub interests: Option<f64>,
    pub history: f64,
}

/// Signal weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub education: f64,
    pub location: f64,
    pub interests: f64,
    pub history: f64,
}

impl ScoringWeights {
    fn all(&self) -> [(&'static str, f64); 5] {
        [
            ("skills", self.skills),
            ("education", self.education),
            ("location", self.location),
            ("interests", self.interests),
            ("history", self.history),
        ]
    }

    /// Name of the first weight that is negative or not finite
    pub fn first_invalid(&self) -> Option<&'static str> {
        self.all()
            .into_iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
            .map(|(name, _)| name)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            education: 0.20,
            location: 0.15,
            interests: 0.15,
            history: 0.10,
        }
    }
}
