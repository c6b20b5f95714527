use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::MentorFilter;
use crate::models::{MentorRecommendationsRequest, MentorRecommendationsResponse};
use crate::routes::matches::{validation_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/mentors/recommended", web::post().to(recommended_mentors));
}

/// POST /api/v1/mentors/recommended
///
/// Request body:
/// ```json
/// {
///   "userId": 42,
///   "limit": 10,
///   "expertise": "finance"
/// }
/// ```
async fn recommended_mentors(
    state: web::Data<AppState>,
    req: web::Json<MentorRecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let limit = state.matching.clamp_limit(req.limit);
    let filter = MentorFilter {
        expertise: req.expertise.clone(),
        search: req.search.clone(),
    };
    let mentors = state.engine.recommend_mentors(req.user_id, &filter, limit).await;

    tracing::debug!("Suggesting {} mentors to user {}", mentors.len(), req.user_id);

    HttpResponse::Ok().json(MentorRecommendationsResponse {
        user_id: req.user_id,
        mentors,
    })
}
