use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

use crate::models::{ApplicationRecord, JobId, JobPosting, JobSeekerProfile, MentorProfile, UserId};
use crate::services::store::{JobStore, StoreError};

/// In-process job store
///
/// Postings keep insertion order, which stands in for the database's
/// newest-first corpus order. Used by tests, benchmarks and local demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profiles: HashMap<UserId, JobSeekerProfile>,
    jobs: Vec<JobPosting>,
    applications: HashMap<UserId, Vec<ApplicationRecord>>,
    saved: HashMap<UserId, HashSet<JobId>>,
    mentors: Vec<MentorProfile>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, for exercising fallback paths
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_profile(mut self, profile: JobSeekerProfile) -> Self {
        self.profiles.insert(profile.user_id, profile);
        self
    }

    pub fn with_job(mut self, job: JobPosting) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_jobs<I: IntoIterator<Item = JobPosting>>(mut self, jobs: I) -> Self {
        self.jobs.extend(jobs);
        self
    }

    pub fn with_application(mut self, user_id: UserId, application: ApplicationRecord) -> Self {
        self.applications.entry(user_id).or_default().push(application);
        self
    }

    pub fn with_saved_job(mut self, user_id: UserId, job_id: JobId) -> Self {
        self.saved.entry(user_id).or_default().insert(job_id);
        self
    }

    pub fn with_mentor(mut self, mentor: MentorProfile) -> Self {
        self.mentors.push(mentor);
        self
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory store marked unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn fetch_profile(&self, user_id: UserId) -> Result<Option<JobSeekerProfile>, StoreError> {
        self.check()?;
        Ok(self.profiles.get(&user_id).cloned())
    }

    async fn fetch_active_jobs(&self, limit: Option<usize>) -> Result<Vec<JobPosting>, StoreError> {
        self.check()?;
        let active = self.jobs.iter().filter(|job| job.is_active()).cloned();
        Ok(match limit {
            Some(limit) => active.take(limit).collect(),
            None => active.collect(),
        })
    }

    async fn fetch_job(&self, job_id: JobId) -> Result<Option<JobPosting>, StoreError> {
        self.check()?;
        Ok(self.jobs.iter().find(|job| job.id == job_id).cloned())
    }

    async fn fetch_applications(&self, user_id: UserId) -> Result<Vec<ApplicationRecord>, StoreError> {
        self.check()?;
        let mut applications = self.applications.get(&user_id).cloned().unwrap_or_default();
        applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(applications)
    }

    async fn fetch_excluded_ids(&self, user_id: UserId) -> Result<HashSet<JobId>, StoreError> {
        self.check()?;
        let applied = self
            .applications
            .get(&user_id)
            .into_iter()
            .flatten()
            .map(|application| application.job_id);
        let saved = self.saved.get(&user_id).into_iter().flatten().copied();
        Ok(applied.chain(saved).collect())
    }

    async fn fetch_active_mentors(&self) -> Result<Vec<MentorProfile>, StoreError> {
        self.check()?;
        let mut mentors: Vec<MentorProfile> = self
            .mentors
            .iter()
            .filter(|mentor| crate::core::is_available_mentor(mentor))
            .cloned()
            .collect();
        mentors.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        Ok(mentors)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(!self.unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobStatus;
    use chrono::Utc;

    fn create_job(id: JobId, status: JobStatus) -> JobPosting {
        JobPosting {
            id,
            title: format!("Job {}", id),
            company_name: String::new(),
            skills_required: String::new(),
            experience_level: None,
            location: String::new(),
            is_remote: false,
            status,
            application_deadline: None,
        }
    }

    #[tokio::test]
    async fn test_active_jobs_bounded_in_order() {
        let store = MemoryStore::new()
            .with_job(create_job(1, JobStatus::Active))
            .with_job(create_job(2, JobStatus::Closed))
            .with_job(create_job(3, JobStatus::Active))
            .with_job(create_job(4, JobStatus::Active));

        let ids: Vec<JobId> = store
            .fetch_active_jobs(Some(2))
            .await
            .unwrap()
            .iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(store.fetch_active_jobs(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_excluded_is_union_of_applied_and_saved() {
        let store = MemoryStore::new()
            .with_application(
                7,
                ApplicationRecord { job_id: 1, job_title: "Job 1".to_string(), applied_at: Utc::now() },
            )
            .with_saved_job(7, 2)
            .with_saved_job(7, 1)
            .with_saved_job(8, 3);

        let excluded = store.fetch_excluded_ids(7).await.unwrap();
        assert_eq!(excluded, [1, 2].into_iter().collect::<HashSet<JobId>>());
    }

    #[test]
    fn test_unavailable_store_errors() {
        let store = MemoryStore::unavailable();
        assert!(tokio_test::block_on(store.fetch_profile(1)).is_err());
        assert!(!tokio_test::block_on(store.health_check()).unwrap());
    }
}
