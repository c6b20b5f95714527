use crate::core::{filters::is_available_mentor, text::split_tokens};
use crate::models::{JobSeekerProfile, MentorProfile, RecommendedMentor};

/// Share of the mentee's skills covered by a mentor's expertise (0-100, one decimal)
///
/// A skill counts as covered when it contains, or is contained in, any of the
/// mentor's expertise areas.
pub fn mentor_score(mentee_skills: &str, mentor: &MentorProfile) -> f64 {
    let skills = split_tokens(mentee_skills);
    if skills.is_empty() {
        return 0.0;
    }

    let expertise = split_tokens(&mentor.expertise_areas);
    let covered = skills
        .iter()
        .filter(|skill| {
            expertise
                .iter()
                .any(|area| area.contains(skill.as_str()) || skill.contains(area.as_str()))
        })
        .count();

    let score = covered as f64 / skills.len() as f64 * 100.0;
    // Halves round to even: 1 of 16 is 6.2, not 6.3
    (score * 10.0).round_ties_even() / 10.0
}

/// Optional narrowing of the mentor list
///
/// Both terms are case-insensitive substring matches; an empty term is ignored.
#[derive(Debug, Clone, Default)]
pub struct MentorFilter {
    /// Matched against the expertise areas
    pub expertise: Option<String>,
    /// Matched against name, expertise areas and industry
    pub search: Option<String>,
}

impl MentorFilter {
    pub fn matches(&self, mentor: &MentorProfile) -> bool {
        let expertise_ok = match non_empty(&self.expertise) {
            Some(term) => contains_ignore_case(&mentor.expertise_areas, &term),
            None => true,
        };

        let search_ok = match non_empty(&self.search) {
            Some(term) => [&mentor.display_name, &mentor.expertise_areas, &mentor.industry]
                .iter()
                .any(|field| contains_ignore_case(field, &term)),
            None => true,
        };

        expertise_ok && search_ok
    }
}

fn non_empty(term: &Option<String>) -> Option<String> {
    term.as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Rank available mentors for a job seeker
///
/// Without a profile every mentor scores 0 and the input order is kept.
pub fn rank_mentors(
    profile: Option<&JobSeekerProfile>,
    mentors: Vec<MentorProfile>,
    filter: &MentorFilter,
    limit: usize,
) -> Vec<RecommendedMentor> {
    let skills = profile.map(|p| p.skills.as_str()).unwrap_or("");

    let mut ranked: Vec<RecommendedMentor> = mentors
        .into_iter()
        .filter(|mentor| is_available_mentor(mentor) && filter.matches(mentor))
        .map(|mentor| RecommendedMentor {
            match_score: mentor_score(skills, &mentor),
            mentor,
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    ranked.truncate(limit);
    ranked
}
