mod common;

use uuid::Uuid;

use sportsmind_core::models::subscale::{Subcategory, SubscaleScores};
use sportsmind_scoring::comparison::{compare, differences, history};

use common::{days_ago, now, result_at};

#[test]
fn differences_are_sorted_by_absolute_gap() {
    let first = SubscaleScores::uniform(25.0);
    let mut second = SubscaleScores::uniform(25.0);
    second.devotion = 10.0;
    second.self_worth = 45.0;
    second.courage = 30.0;

    let diffs = differences(&first, &second);
    assert_eq!(diffs.len(), Subcategory::ALL.len());
    assert_eq!(diffs[0].subcategory, Subcategory::SelfWorth);
    assert_eq!(diffs[0].difference, -20.0);
    assert_eq!(diffs[1].subcategory, Subcategory::Devotion);
    assert_eq!(diffs[1].difference, 15.0);
    assert_eq!(diffs[2].subcategory, Subcategory::Courage);
    assert_eq!(diffs[3].difference, 0.0);
}

#[test]
fn identical_results_keep_canonical_order() {
    let scores = SubscaleScores::uniform(30.0);
    let order: Vec<Subcategory> = differences(&scores, &scores)
        .iter()
        .map(|d| d.subcategory)
        .collect();
    assert_eq!(order, Subcategory::ALL.to_vec());
}

#[test]
fn large_gaps_produce_conflict_warnings() {
    let mut a = SubscaleScores::uniform(25.0);
    a.assertion = 50.0;
    let mut b = SubscaleScores::uniform(25.0);
    b.sensitivity = 48.0;

    let first = result_at(a, now());
    let second = result_at(b, now());
    let id = Uuid::new_v4();
    let comparison = compare(id, &first, &second, now());

    assert_eq!(comparison.id, id);
    assert_eq!(comparison.result_ids, [first.id, second.id]);
    assert!(comparison.mutual_understanding.contains("Assertion"));
    assert!(comparison.mutual_understanding.contains("25.0 points"));

    assert_eq!(comparison.good_interactions.len(), 5);
    assert!(comparison.good_interactions[0].starts_with("Assertion is stronger in the first"));
    assert!(comparison.good_interactions[1].contains("difference in Sensitivity"));

    assert_eq!(comparison.bad_interactions.len(), 5);
    assert_eq!(
        comparison.bad_interactions[0],
        "Watch for clashes in values caused by the gap in Assertion."
    );
    assert_eq!(
        comparison.bad_interactions[1],
        "Watch for clashes in values caused by the gap in Sensitivity."
    );
}

#[test]
fn gap_at_threshold_is_not_a_conflict() {
    let mut a = SubscaleScores::uniform(25.0);
    a.courage = 45.0;
    let b = SubscaleScores::uniform(25.0);

    let comparison = compare(Uuid::new_v4(), &result_at(a, now()), &result_at(b, now()), now());
    assert_eq!(comparison.bad_interactions.len(), 3);
    assert!(
        comparison
            .bad_interactions
            .iter()
            .all(|s| !s.starts_with("Watch for clashes"))
    );
}

#[test]
fn comparison_history_is_newest_first_and_paged() {
    let a = result_at(SubscaleScores::uniform(20.0), now());
    let b = result_at(SubscaleScores::uniform(30.0), now());
    let c = result_at(SubscaleScores::uniform(40.0), now());

    let oldest = compare(Uuid::new_v4(), &a, &b, days_ago(3));
    let middle = compare(Uuid::new_v4(), &b, &c, days_ago(2));
    let newest = compare(Uuid::new_v4(), &a, &c, days_ago(1));
    let all = vec![middle.clone(), oldest.clone(), newest.clone()];

    let page = history(all.clone(), None, 0, 10);
    assert_eq!(page.total_count, 3);
    let ids: Vec<Uuid> = page.comparisons.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    let page = history(all.clone(), None, 1, 1);
    assert_eq!(page.total_count, 3);
    assert_eq!(page.comparisons.len(), 1);
    assert_eq!(page.comparisons[0].id, middle.id);

    let page = history(all.clone(), None, 5, 10);
    assert_eq!(page.total_count, 3);
    assert!(page.comparisons.is_empty());

    let page = history(all, Some(a.id), 0, 10);
    assert_eq!(page.total_count, 2);
    let ids: Vec<Uuid> = page.comparisons.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newest.id, oldest.id]);
}
