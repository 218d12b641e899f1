use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::subscale::Subcategory;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityDifference {
    pub subcategory: Subcategory,
    /// `first - second`, rounded to one decimal.
    pub difference: f64,
    pub first: f64,
    pub second: f64,
}

/// Side-by-side comparison of two test results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comparison {
    pub id: Uuid,
    pub result_ids: [Uuid; 2],
    /// Sorted by absolute difference, largest first.
    pub differences: Vec<QualityDifference>,
    pub mutual_understanding: String,
    pub good_interactions: Vec<String>,
    pub bad_interactions: Vec<String>,
    pub created_at: jiff::Timestamp,
}

/// A page of comparisons, newest first, plus the unpaginated count.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonHistory {
    pub comparisons: Vec<Comparison>,
    pub total_count: usize,
}
