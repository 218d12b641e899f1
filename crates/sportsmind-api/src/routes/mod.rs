pub mod athlete_types;
pub mod comparisons;
pub mod health;
pub mod history;
pub mod questions;
pub mod subscales;
pub mod test_results;

use sportsmind_scoring::error::ScoringError;

/// Upper bound on `limit` for result and comparison listings.
pub const MAX_PAGE_LIMIT: usize = 100;

/// Resolve a `limit` query parameter, rejecting zero and anything above `max`.
pub fn page_limit(
    requested: Option<usize>,
    default: usize,
    max: usize,
) -> Result<usize, ScoringError> {
    let limit = requested.unwrap_or(default);
    if limit == 0 || limit > max {
        return Err(ScoringError::InvalidParameter {
            field: "limit",
            value: limit.to_string(),
        });
    }
    Ok(limit)
}
