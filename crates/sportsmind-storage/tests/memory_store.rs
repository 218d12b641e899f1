use jiff::Timestamp;
use uuid::Uuid;

use sportsmind_core::models::comparison::Comparison;
use sportsmind_core::models::question::{Question, Target};
use sportsmind_core::models::subscale::{Category, Subcategory, SubscaleScores};
use sportsmind_core::models::test_result::TestResult;
use sportsmind_storage::error::StorageError;
use sportsmind_storage::repository::Repository;
use sportsmind_storage::store::ObjectStore;

fn question(number: u32) -> Question {
    Question {
        id: Uuid::new_v4(),
        number,
        text: format!("Question {number}"),
        category: Category::AthleteMind,
        subcategory: Subcategory::Devotion,
        target: Target::All,
        reverse_scored: false,
        active: true,
    }
}

fn result(user_id: Option<Uuid>) -> TestResult {
    let now = Timestamp::now();
    TestResult {
        id: Uuid::new_v4(),
        user_id,
        target: Target::Coach,
        taken_at: now,
        scores: SubscaleScores::uniform(20.0),
        self_esteem_total: 80.0,
        analysis: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn list_is_prefix_scoped_and_sorted() {
    let store = ObjectStore::memory();
    store.put("results/b.json", b"{}".to_vec()).await.unwrap();
    store.put("questions/x.json", b"{}".to_vec()).await.unwrap();
    store.put("results/a.json", b"{}".to_vec()).await.unwrap();
    store.put("resultsx/c.json", b"{}".to_vec()).await.unwrap();

    let keys = store.list("results/").await.unwrap();
    assert_eq!(keys, vec!["results/a.json", "results/b.json"]);
    assert_eq!(store.backend(), "memory");
}

#[tokio::test]
async fn missing_key_is_not_found() {
    let store = ObjectStore::memory();
    let err = store.get("results/missing.json").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { key } if key == "results/missing.json"));
}

#[tokio::test]
async fn clones_share_the_same_memory() {
    let store = ObjectStore::memory();
    let other = store.clone();
    store.put("k", b"v".to_vec()).await.unwrap();
    assert_eq!(other.get("k").await.unwrap(), b"v".to_vec());
}

#[tokio::test]
async fn questions_round_trip_in_number_order() {
    let repo = Repository::new(ObjectStore::memory());
    let later = question(7);
    let earlier = question(2);
    repo.put_question(&later).await.unwrap();
    repo.put_question(&earlier).await.unwrap();

    let listed = repo.list_questions().await.unwrap();
    assert_eq!(listed, vec![earlier.clone(), later]);
    assert_eq!(repo.get_question(earlier.id).await.unwrap(), earlier);
}

#[tokio::test]
async fn seeding_only_fills_an_empty_catalog() {
    let repo = Repository::new(ObjectStore::memory());
    let seed = vec![question(1), question(2), question(3)];

    assert_eq!(repo.seed_questions(&seed).await.unwrap(), 3);
    assert_eq!(repo.seed_questions(&[question(4)]).await.unwrap(), 0);
    assert_eq!(repo.list_questions().await.unwrap().len(), 3);
}

#[tokio::test]
async fn results_filter_by_user() {
    let repo = Repository::new(ObjectStore::memory());
    let user = Uuid::new_v4();
    let mine = result(Some(user));
    repo.put_result(&mine).await.unwrap();
    repo.put_result(&result(Some(Uuid::new_v4()))).await.unwrap();
    repo.put_result(&result(None)).await.unwrap();

    assert_eq!(repo.list_results().await.unwrap().len(), 3);
    assert_eq!(repo.list_results_for_user(user).await.unwrap(), vec![mine.clone()]);
    assert_eq!(repo.get_result(mine.id).await.unwrap(), mine);
}

#[tokio::test]
async fn overwriting_a_result_replaces_it() {
    let repo = Repository::new(ObjectStore::memory());
    let mut stored = result(None);
    repo.put_result(&stored).await.unwrap();

    stored.self_esteem_total = 120.0;
    repo.put_result(&stored).await.unwrap();

    assert_eq!(repo.list_results().await.unwrap().len(), 1);
    assert_eq!(repo.get_result(stored.id).await.unwrap().self_esteem_total, 120.0);
}

#[tokio::test]
async fn comparisons_round_trip() {
    let repo = Repository::new(ObjectStore::memory());
    let comparison = Comparison {
        id: Uuid::new_v4(),
        result_ids: [Uuid::new_v4(), Uuid::new_v4()],
        differences: Vec::new(),
        mutual_understanding: "text".to_string(),
        good_interactions: vec!["good".to_string()],
        bad_interactions: Vec::new(),
        created_at: Timestamp::now(),
    };
    assert!(repo.list_comparisons().await.unwrap().is_empty());
    repo.put_comparison(&comparison).await.unwrap();
    assert_eq!(repo.get_comparison(comparison.id).await.unwrap(), comparison);
    assert_eq!(repo.list_comparisons().await.unwrap(), vec![comparison.clone()]);

    // Results live under a different prefix and are not listed as comparisons.
    repo.put_result(&result(None)).await.unwrap();
    assert_eq!(repo.list_comparisons().await.unwrap().len(), 1);

    let err = repo.get_comparison(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}
