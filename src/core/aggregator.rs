use std::collections::HashMap;

use crate::core::text::{region_of, split_tokens};
use crate::models::{FrequencyEntry, JobPosting};

/// Number of skills reported by [`skill_demand`] by default
pub const SKILL_DEMAND_TOP: usize = 20;

/// Number of regions reported by [`regional_insights`] by default
pub const REGIONAL_TOP: usize = 15;

/// Most requested skills across active postings
pub fn skill_demand(jobs: &[JobPosting], top: usize) -> Vec<FrequencyEntry> {
    let skills = jobs
        .iter()
        .filter(|job| job.is_active())
        .flat_map(|job| split_tokens(&job.skills_required));

    most_common(skills, top)
}

/// Postings per region (text before the first comma of the location)
pub fn regional_insights(jobs: &[JobPosting], top: usize) -> Vec<FrequencyEntry> {
    let regions = jobs
        .iter()
        .filter(|job| job.is_active())
        .map(|job| region_of(&job.location))
        .filter(|region| !region.is_empty())
        .map(str::to_string);

    most_common(regions, top)
}

/// Count labels and keep the `top` most frequent
///
/// Descending by count; labels with equal counts keep first-seen order.
fn most_common<I>(labels: I, top: usize) -> Vec<FrequencyEntry>
where
    I: Iterator<Item = String>,
{
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, label) in labels.enumerate() {
        counts.entry(label).or_insert((0, position)).0 += 1;
    }

    let mut entries: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(label, (count, first_seen))| (label, count, first_seen))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));
    entries.truncate(top);

    entries
        .into_iter()
        .map(|(label, count, _)| FrequencyEntry { label, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobStatus;

    fn create_job(skills: &str, location: &str, status: JobStatus) -> JobPosting {
        JobPosting {
            id: 0,
            title: "Role".to_string(),
            company_name: String::new(),
            skills_required: skills.to_string(),
            experience_level: None,
            location: location.to_string(),
            is_remote: false,
            status,
            application_deadline: None,
        }
    }

    fn entry(label: &str, count: usize) -> FrequencyEntry {
        FrequencyEntry { label: label.to_string(), count }
    }

    #[test]
    fn test_skill_demand_counts_active_only() {
        let jobs = vec![
            create_job("Python, SQL", "Nairobi", JobStatus::Active),
            create_job("python, docker", "Nairobi", JobStatus::Active),
            create_job("cobol, python", "Nairobi", JobStatus::Closed),
        ];

        let demand = skill_demand(&jobs, SKILL_DEMAND_TOP);

        assert_eq!(demand, vec![entry("python", 2), entry("sql", 1), entry("docker", 1)]);
        assert!(demand.iter().all(|e| e.label != "cobol"));
    }

    #[test]
    fn test_skill_demand_truncates() {
        let skills: Vec<String> = (0..30).map(|i| format!("skill{}", i)).collect();
        let jobs = vec![create_job(&skills.join(","), "Nairobi", JobStatus::Active)];

        assert_eq!(skill_demand(&jobs, SKILL_DEMAND_TOP).len(), SKILL_DEMAND_TOP);
    }

    #[test]
    fn test_regional_insights() {
        let jobs = vec![
            create_job("", "Nairobi, Kenya", JobStatus::Active),
            create_job("", " Nairobi ", JobStatus::Active),
            create_job("", "Mombasa, Kenya", JobStatus::Active),
            create_job("", "", JobStatus::Active),
            create_job("", "Kisumu", JobStatus::Pending),
        ];

        let regions = regional_insights(&jobs, REGIONAL_TOP);

        assert_eq!(regions, vec![entry("Nairobi", 2), entry("Mombasa", 1)]);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(skill_demand(&[], SKILL_DEMAND_TOP).is_empty());
        assert!(regional_insights(&[], REGIONAL_TOP).is_empty());
    }
}
