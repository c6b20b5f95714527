// HTTP tests for JobNix Match

use actix_web::{http::header::ContentType, http::StatusCode, test, web, App};
use jobnix_match::config::MatchingSettings;
use jobnix_match::core::Recommender;
use jobnix_match::models::{
    ExperienceLevel, JobId, JobPosting, JobSeekerProfile, JobStatus, MentorProfile, MentorStatus,
};
use jobnix_match::routes::{configure_routes, handle_json_payload_error, AppState};
use jobnix_match::services::{AnalyticsCache, EngineOptions, MatchEngine, MemoryStore};
use serde_json::{json, Value};
use std::sync::Arc;

const SEEKER: i64 = 42;

fn create_profile() -> JobSeekerProfile {
    JobSeekerProfile {
        user_id: SEEKER,
        skills: "python, sql".to_string(),
        interests: "data".to_string(),
        education_level: "degree".to_string(),
        location: "Nairobi".to_string(),
        bio: String::new(),
    }
}

fn create_job(id: JobId) -> JobPosting {
    JobPosting {
        id,
        title: "Data Analyst".to_string(),
        company_name: format!("Company {}", id),
        skills_required: "python, sql".to_string(),
        experience_level: Some(ExperienceLevel::Entry),
        location: "Nairobi, Kenya".to_string(),
        is_remote: false,
        status: JobStatus::Active,
        application_deadline: None,
    }
}

fn create_mentor(id: i64, expertise: &str) -> MentorProfile {
    MentorProfile {
        id,
        user_id: 900 + id,
        display_name: format!("Mentor {}", id),
        expertise_areas: expertise.to_string(),
        industry: "Finance".to_string(),
        years_of_experience: 10,
        status: MentorStatus::Active,
        is_verified: true,
        rating: 4.5,
    }
}

fn app_state(store: MemoryStore, matching: MatchingSettings) -> web::Data<AppState> {
    web::Data::new(AppState {
        engine: MatchEngine::new(
            Arc::new(store),
            Recommender::with_default_weights(),
            AnalyticsCache::new(16, 60),
            EngineOptions::default(),
        ),
        matching,
    })
}

fn seeded_store(job_count: JobId) -> MemoryStore {
    MemoryStore::new()
        .with_profile(create_profile())
        .with_jobs((1..=job_count).map(create_job))
}

#[actix_web::test]
async fn test_zero_user_id_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(seeded_store(2), MatchingSettings::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "userId": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["status_code"], 400);
}

#[actix_web::test]
async fn test_malformed_json_gets_json_error() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(seeded_store(2), MatchingSettings::default()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .insert_header(ContentType::json())
        .set_payload(r#"{"userId": 42, "jobId": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
    assert_eq!(body["status_code"], 400);
}

#[actix_web::test]
async fn test_score_unknown_job_is_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(seeded_store(1), MatchingSettings::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({ "userId": SEEKER, "jobId": 999 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({ "userId": SEEKER, "jobId": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["jobId"], 1);
    let score = body["matchScore"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
    assert_eq!(body["breakdown"]["skills"], 100.0);
}

#[actix_web::test]
async fn test_limit_is_capped_and_defaulted() {
    let matching = MatchingSettings {
        default_limit: 4,
        max_limit: 6,
        ..MatchingSettings::default()
    };
    let app = test::init_service(
        App::new()
            .app_data(app_state(seeded_store(10), matching))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "userId": SEEKER, "limit": 500 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 6);
    assert_eq!(body["jobs"].as_array().map(Vec::len), Some(6));

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "userId": SEEKER }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 4);
    assert_eq!(body["userId"], SEEKER);
}

#[actix_web::test]
async fn test_mentor_expertise_filter() {
    let store = seeded_store(0)
        .with_mentor(create_mentor(1, "Python, Data Science"))
        .with_mentor(create_mentor(2, "Accounting"));
    let app = test::init_service(
        App::new()
            .app_data(app_state(store, MatchingSettings::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/mentors/recommended")
        .set_json(json!({ "userId": SEEKER, "expertise": "accounting" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let mentors = body["mentors"].as_array().unwrap();
    assert_eq!(mentors.len(), 1);
    assert_eq!(mentors[0]["mentor"]["id"], 2);
}

#[actix_web::test]
async fn test_health_reports_store_state() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(MemoryStore::unavailable(), MatchingSettings::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "degraded");
}
