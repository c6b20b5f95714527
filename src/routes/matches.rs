use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::models::{
    ErrorResponse, HealthResponse, RecommendationsRequest, RecommendationsResponse, ScoreRequest, ScoreResponse,
};
use crate::services::MatchEngine;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: MatchEngine,
    pub matching: MatchingSettings,
}

/// Configure health, recommendation and score routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommendations))
        .route("/matches/score", web::post().to(score_job));
}

pub(crate) fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.engine.health_check().await { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Job recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "userId": 42,
///   "limit": 10
/// }
/// ```
///
/// A user without a job seeker profile gets an empty list, not an error.
async fn recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return validation_error(errors);
    }

    let limit = state.matching.clamp_limit(req.limit);
    tracing::info!("Recommending jobs for user: {}, limit: {}", req.user_id, limit);

    let jobs = state.engine.recommend(req.user_id, limit).await;

    HttpResponse::Ok().json(RecommendationsResponse {
        user_id: req.user_id,
        total: jobs.len(),
        jobs,
    })
}

/// Match score endpoint
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "userId": 42,
///   "jobId": 7
/// }
/// ```
async fn score_job(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.engine.score_job(req.user_id, req.job_id).await {
        Some(score) => HttpResponse::Ok().json(ScoreResponse {
            user_id: req.user_id,
            job_id: req.job_id,
            match_score: score.match_score,
            breakdown: score.breakdown,
        }),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Job not found".to_string(),
            message: format!("No job with id {}", req.job_id),
            status_code: 404,
        }),
    }
}
