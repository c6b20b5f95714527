use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::collections::HashSet;
use std::time::Duration;

use crate::models::{
    ApplicationRecord, ExperienceLevel, JobId, JobPosting, JobSeekerProfile, JobStatus, MentorProfile,
    MentorStatus, UserId,
};
use crate::services::store::{JobStore, StoreError};

const JOB_COLUMNS: &str = r#"
    id, job_title, company_name, skills_required, experience_level,
    location, is_remote, status, application_deadline
"#;

// job_seeker_profiles has no location column, so stored profiles never
// contribute a location signal
const PROFILE_QUERY: &str = r#"
    SELECT user_id,
           COALESCE(skills, '') AS skills,
           COALESCE(interests, '') AS interests,
           COALESCE(education_level, '') AS education_level,
           ''::text AS location,
           COALESCE(bio, '') AS bio
    FROM job_seeker_profiles
    WHERE user_id = $1
"#;

/// Postings that are both published (`status`) and not switched off by their employer (`is_active`)
const OPEN_JOBS_FILTER: &str = "status = 'active' AND is_active";

fn active_jobs_query() -> String {
    // LIMIT NULL means no limit
    format!(
        "SELECT {} FROM jobs WHERE {} ORDER BY date_posted DESC, created_at DESC LIMIT $1",
        JOB_COLUMNS, OPEN_JOBS_FILTER
    )
}

fn job_query() -> String {
    format!("SELECT {} FROM jobs WHERE id = $1 AND is_active", JOB_COLUMNS)
}

/// PostgreSQL-backed job store
///
/// Reads the tables owned by the JobNix web application (`jobs`,
/// `applications`, `saved_jobs`, `job_seeker_profiles`, `mentors`, `users`).
/// Nothing here writes; schema and migrations belong to the web application.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

fn job_from_row(row: &PgRow) -> Result<JobPosting, StoreError> {
    let status: String = row.try_get("status")?;
    let status = JobStatus::parse(&status)
        .ok_or_else(|| StoreError::Decode(format!("unknown job status '{}'", status)))?;
    let experience_level: Option<String> = row.try_get("experience_level")?;

    Ok(JobPosting {
        id: row.try_get("id")?,
        title: row.try_get("job_title")?,
        company_name: row.try_get("company_name")?,
        skills_required: row.try_get("skills_required")?,
        // Unknown tiers disable the education signal rather than failing the row
        experience_level: experience_level.as_deref().and_then(ExperienceLevel::parse),
        location: row.try_get("location")?,
        is_remote: row.try_get("is_remote")?,
        status,
        application_deadline: row.try_get("application_deadline")?,
    })
}

fn mentor_from_row(row: &PgRow) -> Result<MentorProfile, StoreError> {
    let status: String = row.try_get("status")?;
    let status = MentorStatus::parse(&status)
        .ok_or_else(|| StoreError::Decode(format!("unknown mentor status '{}'", status)))?;

    Ok(MentorProfile {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        display_name: row.try_get("display_name")?,
        expertise_areas: row.try_get("expertise_areas")?,
        industry: row.try_get("industry")?,
        years_of_experience: row.try_get("years_of_experience")?,
        status,
        is_verified: row.try_get("is_verified")?,
        rating: row.try_get("rating")?,
    })
}

#[async_trait]
impl JobStore for PostgresStore {
    async fn fetch_profile(&self, user_id: UserId) -> Result<Option<JobSeekerProfile>, StoreError> {
        let row = sqlx::query(PROFILE_QUERY)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| -> Result<JobSeekerProfile, StoreError> {
            Ok(JobSeekerProfile {
                user_id: row.try_get("user_id")?,
                skills: row.try_get("skills")?,
                interests: row.try_get("interests")?,
                education_level: row.try_get("education_level")?,
                location: row.try_get("location")?,
                bio: row.try_get("bio")?,
            })
        })
        .transpose()
    }

    async fn fetch_active_jobs(&self, limit: Option<usize>) -> Result<Vec<JobPosting>, StoreError> {
        let query = active_jobs_query();

        let rows = sqlx::query(&query)
            .bind(limit.map(|l| l as i64))
            .fetch_all(&self.pool)
            .await?;

        let jobs = rows.iter().map(job_from_row).collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Fetched {} active jobs (limit {:?})", jobs.len(), limit);

        Ok(jobs)
    }

    async fn fetch_job(&self, job_id: JobId) -> Result<Option<JobPosting>, StoreError> {
        let query = job_query();

        let row = sqlx::query(&query)
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(job_from_row).transpose()
    }

    async fn fetch_applications(&self, user_id: UserId) -> Result<Vec<ApplicationRecord>, StoreError> {
        let query = r#"
            SELECT a.job_id, j.job_title, a.applied_at
            FROM applications a
            JOIN jobs j ON j.id = a.job_id
            WHERE a.applicant_id = $1
            ORDER BY a.applied_at DESC
        "#;

        let rows = sqlx::query(query).bind(user_id).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| -> Result<ApplicationRecord, StoreError> {
                Ok(ApplicationRecord {
                    job_id: row.try_get("job_id")?,
                    job_title: row.try_get("job_title")?,
                    applied_at: row.try_get("applied_at")?,
                })
            })
            .collect()
    }

    async fn fetch_excluded_ids(&self, user_id: UserId) -> Result<HashSet<JobId>, StoreError> {
        let query = r#"
            SELECT job_id FROM applications WHERE applicant_id = $1
            UNION
            SELECT job_id FROM saved_jobs WHERE user_id = $1
        "#;

        let rows = sqlx::query(query).bind(user_id).fetch_all(&self.pool).await?;

        let excluded = rows
            .iter()
            .map(|row| row.try_get::<JobId, _>("job_id"))
            .collect::<Result<HashSet<_>, _>>()?;

        tracing::debug!("User {} has {} excluded jobs", user_id, excluded.len());

        Ok(excluded)
    }

    async fn fetch_active_mentors(&self) -> Result<Vec<MentorProfile>, StoreError> {
        let query = r#"
            SELECT m.id,
                   m.user_id,
                   COALESCE(NULLIF(TRIM(u.first_name || ' ' || u.last_name), ''), u.username) AS display_name,
                   m.expertise_areas,
                   m.industry,
                   m.years_of_experience,
                   m.status,
                   m.is_verified,
                   m.rating::float8 AS rating
            FROM mentors m
            JOIN users u ON u.id = m.user_id
            WHERE m.status = 'active' AND m.is_verified
            ORDER BY m.rating DESC, m.created_at DESC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        rows.iter().map(mentor_from_row).collect()
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
