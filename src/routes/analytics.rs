use actix_web::{web, HttpResponse, Responder};

use crate::models::FrequencyResponse;
use crate::routes::matches::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/analytics/skills", web::get().to(skill_demand))
        .route("/analytics/regions", web::get().to(regional_insights));
}

/// GET /api/v1/analytics/skills
async fn skill_demand(state: web::Data<AppState>) -> impl Responder {
    let entries = state.engine.skill_demand().await;
    HttpResponse::Ok().json(FrequencyResponse {
        entries: entries.as_ref().clone(),
    })
}

/// GET /api/v1/analytics/regions
async fn regional_insights(state: web::Data<AppState>) -> impl Responder {
    let entries = state.engine.regional_insights().await;
    HttpResponse::Ok().json(FrequencyResponse {
        entries: entries.as_ref().clone(),
    })
}
