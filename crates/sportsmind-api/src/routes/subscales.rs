use axum::Json;

use sportsmind_scoring::scoring::{self, Domain};

/// The questionnaire schema: categories, sub-scales and their ranges.
pub async fn list_subscales() -> Json<&'static [Domain]> {
    Json(scoring::domains())
}
