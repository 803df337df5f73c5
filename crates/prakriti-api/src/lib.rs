//! prakriti-api
//!
//! HTTP surface for the Prakriti assessment: the questionnaire, scoring and
//! per-session progress, completion and hand-off records.

pub mod blocking;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router with audit logging and permissive CORS.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Questionnaire (static data)
        .route("/questionnaire", get(routes::questionnaire::get_questionnaire))
        .route(
            "/questionnaire/sections/{id}",
            get(routes::questionnaire::get_section_detail),
        )
        .route(
            "/questionnaire/questions/{id}",
            get(routes::questionnaire::get_question),
        )
        // Stateless scoring
        .route("/score", post(routes::scoring::score))
        .route("/classify", post(routes::scoring::classify_scores))
        .route("/guidance/{primary}", get(routes::scoring::guidance))
        // Sessions
        .route(
            "/sessions/{id}/progress",
            get(routes::sessions::get_progress)
                .put(routes::sessions::save_progress)
                .delete(routes::sessions::clear_progress),
        )
        .route("/sessions/{id}/answers", post(routes::sessions::record_answer))
        .route("/sessions/{id}/complete", post(routes::assessments::complete))
        .route(
            "/sessions/{id}/assessment",
            get(routes::assessments::get_assessment),
        )
        .route(
            "/sessions/{id}/recent-patient",
            get(routes::assessments::take_recent_patient),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
