//! Side-by-side comparison of two test results.

use uuid::Uuid;

use sportsmind_core::models::comparison::{Comparison, ComparisonHistory, QualityDifference};
use sportsmind_core::models::subscale::{Subcategory, SubscaleScores};
use sportsmind_core::models::test_result::TestResult;

use crate::scoring::round1;

/// Absolute gap above which a difference is flagged as a likely source of
/// friction.
pub const CONFLICT_THRESHOLD: f64 = 20.0;

const MAX_SUGGESTIONS: usize = 5;

/// How many of the largest differences get a dedicated suggestion.
const HIGHLIGHTED: usize = 3;

const GENERIC_GOOD: [&str; 2] = [
    "Hold regular one-on-one conversations to deepen mutual understanding.",
    "Recognize each other's strengths and praise them openly.",
];

const GENERIC_BAD: [&str; 3] = [
    "Avoid one-sided instructions or criticism.",
    "Do not point out each other's weaknesses in a negative way.",
    "Do not treat differences in values as mistakes.",
];

/// Per-sub-scale `first - second`, largest absolute gap first.
pub fn differences(first: &SubscaleScores, second: &SubscaleScores) -> Vec<QualityDifference> {
    let mut diffs: Vec<QualityDifference> = Subcategory::ALL
        .into_iter()
        .map(|sub| QualityDifference {
            subcategory: sub,
            difference: round1(first.get(sub) - second.get(sub)),
            first: first.get(sub),
            second: second.get(sub),
        })
        .collect();
    diffs.sort_by(|a, b| b.difference.abs().total_cmp(&a.difference.abs()));
    diffs
}

fn mutual_understanding(
    first: &TestResult,
    second: &TestResult,
    diffs: &[QualityDifference],
) -> String {
    let Some(largest) = diffs.first() else {
        return String::new();
    };
    format!(
        "Comparing the first result ({first_target}) with the second ({second_target}): \
         the largest gap is in {quality}, a difference of {gap:.1} points. \
         Understanding this difference and drawing on each other's strengths \
         builds better communication and cooperation.",
        first_target = first.target,
        second_target = second.target,
        quality = largest.subcategory.label(),
        gap = largest.difference.abs(),
    )
}

fn good_interactions(diffs: &[QualityDifference]) -> Vec<String> {
    diffs
        .iter()
        .take(HIGHLIGHTED)
        .map(|d| {
            if d.first > d.second {
                format!(
                    "{} is stronger in the first respondent; they can use it to support the other.",
                    d.subcategory.label()
                )
            } else {
                format!(
                    "Understand the difference in {} and respect each other's point of view.",
                    d.subcategory.label()
                )
            }
        })
        .chain(GENERIC_GOOD.iter().map(|s| s.to_string()))
        .take(MAX_SUGGESTIONS)
        .collect()
}

fn bad_interactions(diffs: &[QualityDifference]) -> Vec<String> {
    diffs
        .iter()
        .take(HIGHLIGHTED)
        .filter(|d| d.difference.abs() > CONFLICT_THRESHOLD)
        .map(|d| {
            format!(
                "Watch for clashes in values caused by the gap in {}.",
                d.subcategory.label()
            )
        })
        .chain(GENERIC_BAD.iter().map(|s| s.to_string()))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Compare two results.
pub fn compare(
    id: Uuid,
    first: &TestResult,
    second: &TestResult,
    created_at: jiff::Timestamp,
) -> Comparison {
    let diffs = differences(&first.scores, &second.scores);
    Comparison {
        id,
        result_ids: [first.id, second.id],
        mutual_understanding: mutual_understanding(first, second, &diffs),
        good_interactions: good_interactions(&diffs),
        bad_interactions: bad_interactions(&diffs),
        differences: diffs,
        created_at,
    }
}

/// Newest-first page of `comparisons`, keeping only those that include
/// `result_id` when one is given. `total_count` is taken before paging.
pub fn history(
    comparisons: Vec<Comparison>,
    result_id: Option<Uuid>,
    offset: usize,
    limit: usize,
) -> ComparisonHistory {
    let mut matching: Vec<Comparison> = comparisons
        .into_iter()
        .filter(|c| result_id.is_none_or(|id| c.result_ids.contains(&id)))
        .collect();
    matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

    let total_count = matching.len();
    let comparisons = matching.into_iter().skip(offset).take(limit).collect();
    ComparisonHistory {
        comparisons,
        total_count,
    }
}
