//! sportsmind-api
//!
//! HTTP surface of the questionnaire service. Runs under AWS Lambda or as a
//! local axum server.

pub mod audit;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::http::HeaderValue;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub use config::Config;
pub use state::AppState;

fn cors(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = cors(&state.config.cors_origins);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/subscales", get(routes::subscales::list_subscales))
        // Question catalog
        .route(
            "/questions",
            get(routes::questions::list_questions).post(routes::questions::create_question),
        )
        .route(
            "/questions/for/{target}",
            get(routes::questions::questions_for_target),
        )
        .route(
            "/questions/{id}",
            get(routes::questions::get_question)
                .put(routes::questions::update_question)
                .delete(routes::questions::deactivate_question),
        )
        // Tests and results
        .route("/tests", post(routes::test_results::submit_test))
        .route("/tests/{id}", get(routes::test_results::get_test_result))
        .route(
            "/tests/{id}/analysis",
            post(routes::test_results::recompute_analysis),
        )
        .route(
            "/users/{user_id}/results",
            get(routes::history::list_user_results),
        )
        .route(
            "/users/{user_id}/results/latest",
            get(routes::history::latest_user_result),
        )
        // Athlete types
        .route("/athlete-types", get(routes::athlete_types::list_athlete_types))
        .route(
            "/athlete-types/analyze",
            post(routes::athlete_types::analyze_scores),
        )
        // Comparisons
        .route("/comparisons", post(routes::comparisons::create_comparison))
        .route(
            "/comparisons/history",
            get(routes::comparisons::comparison_history),
        )
        .route("/comparisons/{id}", get(routes::comparisons::get_comparison))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
