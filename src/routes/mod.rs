// Route exports
pub mod analytics;
pub mod errors;
pub mod matches;
pub mod mentors;

use actix_web::web;

pub use errors::{handle_json_payload_error, handle_query_payload_error, JsonError};
pub use matches::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(analytics::configure)
            .configure(mentors::configure),
    );
}
