// Criterion benchmarks for JobNix Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jobnix_match::core::{aggregator::skill_demand, matcher::Recommender, scoring::Scorer};
use jobnix_match::models::{ApplicationRecord, ExperienceLevel, JobPosting, JobSeekerProfile, JobStatus};
use std::collections::HashSet;

const SKILLS: [&str; 8] = ["python", "sql", "excel", "docker", "java", "sales", "design", "accounting"];
const TOWNS: [&str; 4] = ["Nairobi, Kenya", "Mombasa", "Kisumu, Kenya", "Nakuru"];

fn create_job(id: usize) -> JobPosting {
    let skills: Vec<&str> = (0..3).map(|k| SKILLS[(id + k) % SKILLS.len()]).collect();
    JobPosting {
        id: id as i64,
        title: if id % 2 == 0 { "Data Analyst" } else { "Sales Associate" }.to_string(),
        company_name: format!("Company {}", id),
        skills_required: skills.join(", "),
        experience_level: Some(ExperienceLevel::Entry),
        location: TOWNS[id % TOWNS.len()].to_string(),
        is_remote: id % 3 == 0,
        status: JobStatus::Active,
        application_deadline: None,
    }
}

fn create_profile() -> JobSeekerProfile {
    JobSeekerProfile {
        user_id: 1,
        skills: "python, sql, excel, tableau".to_string(),
        interests: "data, analytics".to_string(),
        education_level: "degree".to_string(),
        location: "Nairobi".to_string(),
        bio: String::new(),
    }
}

fn create_history() -> Vec<ApplicationRecord> {
    (0..5)
        .map(|i| ApplicationRecord {
            job_id: 10_000 + i,
            job_title: "Data Engineer".to_string(),
            applied_at: chrono::Utc::now(),
        })
        .collect()
}

fn bench_score(c: &mut Criterion) {
    let scorer = Scorer::with_default_weights();
    let profile = create_profile();
    let job = create_job(0);
    let history = create_history();

    c.bench_function("score", |b| {
        b.iter(|| scorer.score(black_box(Some(&profile)), black_box(&job), black_box(&history)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_default_weights();
    let profile = create_profile();
    let history = create_history();
    let excluded: HashSet<i64> = (0..10).collect();

    let mut group = c.benchmark_group("recommend");

    for candidate_count in [10, 50, 100, 500].iter() {
        let candidates: Vec<JobPosting> = (0..*candidate_count).map(create_job).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            &candidates,
            |b, candidates| {
                b.iter(|| {
                    recommender.recommend(
                        black_box(Some(&profile)),
                        black_box(candidates.clone()),
                        &excluded,
                        &history,
                        10,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_skill_demand(c: &mut Criterion) {
    let jobs: Vec<JobPosting> = (0..1000).map(create_job).collect();

    c.bench_function("skill_demand_1000", |b| {
        b.iter(|| skill_demand(black_box(&jobs), 20));
    });
}

criterion_group!(benches, bench_score, bench_recommend, bench_skill_demand);
criterion_main!(benches);
