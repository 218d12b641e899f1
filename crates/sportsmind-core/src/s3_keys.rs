//! Object key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of JSON documents in the SportsMind bucket.

use uuid::Uuid;

pub const QUESTIONS_PREFIX: &str = "questions/";

pub const RESULTS_PREFIX: &str = "results/";

pub const COMPARISONS_PREFIX: &str = "comparisons/";

pub fn question(id: Uuid) -> String {
    format!("{QUESTIONS_PREFIX}{id}.json")
}

pub fn test_result(id: Uuid) -> String {
    format!("{RESULTS_PREFIX}{id}.json")
}

pub fn comparison(id: Uuid) -> String {
    format!("{COMPARISONS_PREFIX}{id}.json")
}
