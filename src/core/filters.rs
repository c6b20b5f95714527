use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::models::{JobId, JobPosting, MentorProfile, MentorStatus};

/// Check if a posting may be recommended to a user
///
/// Excluded postings (already applied to or saved) and anything not active are
/// dropped. With `skip_expired`, postings past their deadline are dropped too.
#[inline]
pub fn is_recommendable(
    job: &JobPosting,
    excluded: &HashSet<JobId>,
    skip_expired: bool,
    now: DateTime<Utc>,
) -> bool {
    if excluded.contains(&job.id) {
        return false;
    }

    if !job.is_active() {
        return false;
    }

    if skip_expired && job.is_expired_at(now) {
        return false;
    }

    true
}

/// Mentors shown to job seekers must be active and verified
#[inline]
pub fn is_available_mentor(mentor: &MentorProfile) -> bool {
    mentor.status == MentorStatus::Active && mentor.is_verified
}
