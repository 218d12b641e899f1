use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use sportsmind_api::{AppState, Config, router};

async fn app() -> Router {
    let state = AppState::build(Config::default()).await.unwrap();
    router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// One answer per question the player sees, valued by `value_for(number)`.
async fn answers(app: &Router, value_for: impl Fn(u64) -> u64) -> Vec<Value> {
    let (status, questions) = get(app, "/questions/for/player").await;
    assert_eq!(status, StatusCode::OK);
    questions
        .as_array()
        .unwrap()
        .iter()
        .map(|q| {
            json!({
                "question_id": q["id"],
                "value": value_for(q["number"].as_u64().unwrap()),
            })
        })
        .collect()
}

async fn submit(app: &Router, user_id: Uuid, value: u64) -> Value {
    let answers = answers(app, |_| value).await;
    let (status, body) = post(
        app,
        "/tests",
        json!({ "target": "player", "user_id": user_id, "answers": answers }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[tokio::test]
async fn health_reports_memory_backend() {
    let app = app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn subscale_schema_lists_three_categories() {
    let app = app().await;
    let (status, body) = get(&app, "/subscales").await;
    assert_eq!(status, StatusCode::OK);

    let domains = body.as_array().unwrap();
    assert_eq!(domains.len(), 3);
    let subscales: usize = domains
        .iter()
        .map(|d| d["subscales"].as_array().unwrap().len())
        .sum();
    assert_eq!(subscales, 19);
    assert_eq!(domains[2]["composite_range"]["max"], 200.0);
}

#[tokio::test]
async fn seeded_catalog_is_served_in_number_order() {
    let app = app().await;
    let (status, body) = get(&app, "/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 99);
    let numbers: Vec<u64> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["number"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, (1..=99).collect::<Vec<u64>>());

    let (_, body) = get(&app, "/questions?category=self_affirmation").await;
    assert_eq!(body["total_count"], 20);
    assert_eq!(body["questions"].as_array().unwrap().len(), 20);

    let (_, body) = get(&app, "/questions/for/coach?category=sportsmanship").await;
    assert_eq!(body.as_array().unwrap().len(), 29);
}

#[tokio::test]
async fn question_listing_pages_with_total_count() {
    let app = app().await;
    let (status, body) = get(&app, "/questions?offset=10&limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 99);
    let numbers: Vec<u64> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["number"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![11, 12, 13, 14, 15]);

    let (_, body) = get(&app, "/questions?offset=95&limit=10").await;
    assert_eq!(body["questions"].as_array().unwrap().len(), 4);

    let (status, body) = get(&app, "/questions?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VAL_002");
}

#[tokio::test]
async fn unknown_and_malformed_question_ids() {
    let app = app().await;
    let (status, body) = get(&app, &format!("/questions/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "RES_002");

    let (status, body) = get(&app, "/questions/not-a-uuid").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "VAL_001");
    assert_eq!(body["details"][0]["field"], "id");
}

#[tokio::test]
async fn malformed_path_parameters_are_validation_errors() {
    let app = app().await;
    for uri in [
        "/tests/not-a-uuid",
        "/comparisons/not-a-uuid",
        "/users/nobody/results",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}: {body}");
        assert_eq!(body["error_code"], "VAL_001", "{uri}");
        assert!(!body["details"].as_array().unwrap().is_empty(), "{uri}");
    }

    let (status, body) = get(&app, "/tests/not-a-uuid").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "id");

    let (status, body) = get(&app, "/questions/for/parent").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "VAL_001");
}

#[tokio::test]
async fn question_lifecycle() {
    let app = app().await;
    let new = json!({
        "number": 100,
        "text": "I enjoy helping my teammates improve.",
        "category": "athlete_mind",
        "subcategory": "devotion",
        "target": "coach",
    });
    let (status, created) = post(&app, "/questions", new.clone()).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["active"], true);
    let id = created["id"].as_str().unwrap().to_string();

    let (_, coach) = get(&app, "/questions/for/coach").await;
    assert_eq!(coach.as_array().unwrap().len(), 100);
    let (_, player) = get(&app, "/questions/for/player").await;
    assert_eq!(player.as_array().unwrap().len(), 99);

    let (status, body) = post(&app, "/questions", new).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_code"], "RES_003");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/questions/{id}"),
        Some(json!({ "text": "I enjoy helping others improve." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["text"], "I enjoy helping others improve.");
    assert_eq!(updated["subcategory"], "devotion");

    let (status, deleted) = send(&app, Method::DELETE, &format!("/questions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["active"], false);

    let (_, still_there) = get(&app, &format!("/questions/{id}")).await;
    assert_eq!(still_there["active"], false);
    let (_, coach) = get(&app, "/questions/for/coach").await;
    assert_eq!(coach.as_array().unwrap().len(), 99);

    let (_, listed) = get(&app, "/questions").await;
    assert_eq!(listed["total_count"], 99);
    let (_, inactive) = get(&app, "/questions?active=false").await;
    assert_eq!(inactive["total_count"], 1);
    assert_eq!(inactive["questions"][0]["id"], id.as_str());
}

#[tokio::test]
async fn mismatched_subcategory_is_a_validation_error() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/questions",
        json!({
            "number": 120,
            "text": "Mismatched",
            "category": "sportsmanship",
            "subcategory": "self_worth",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "VAL_001");
    assert_eq!(body["details"][0]["field"], "subcategory");
}

#[tokio::test]
async fn submitting_a_test_scores_and_stores_it() {
    let app = app().await;
    let user = Uuid::new_v4();
    let result = submit(&app, user, 10).await;

    assert_eq!(result["scores"]["courage"], 0.0);
    assert_eq!(result["scores"]["commitment"], 50.0);
    assert_eq!(result["self_esteem_total"], 200.0);
    assert_eq!(result["analysis"]["athlete_type"], "striker");
    assert_eq!(
        result["analysis"]["athlete_type_distribution"]
            .as_array()
            .unwrap()
            .len(),
        5
    );
    assert_eq!(result["user_id"], user.to_string());

    let id = result["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/tests/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, result);
}

#[tokio::test]
async fn wrong_answer_count_cites_ninety_nine() {
    let app = app().await;
    let mut answers = answers(&app, |_| 5).await;
    answers.pop();

    let (status, body) = post(
        &app,
        "/tests",
        json!({ "target": "player", "answers": answers }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "VAL_001");
    assert!(body["error"].as_str().unwrap().contains("99"));
    assert_eq!(body["details"][0]["field"], "answers");
}

#[tokio::test]
async fn out_of_range_answer_is_rejected() {
    let app = app().await;
    let answers = answers(&app, |n| if n == 42 { 11 } else { 5 }).await;
    let (status, body) = post(
        &app,
        "/tests",
        json!({ "target": "adult", "answers": answers }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "answers.value");
}

#[tokio::test]
async fn unknown_target_is_a_body_error() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/tests",
        json!({ "target": "grandparent", "answers": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "body");
}

#[tokio::test]
async fn recomputing_analysis_keeps_scores() {
    let app = app().await;
    let result = submit(&app, Uuid::new_v4(), 6).await;
    let id = result["id"].as_str().unwrap();

    let (status, recomputed) = post(&app, &format!("/tests/{id}/analysis"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recomputed["scores"], result["scores"]);
    assert_eq!(recomputed["self_esteem_total"], result["self_esteem_total"]);
    assert_eq!(recomputed["analysis"], result["analysis"]);
    assert_eq!(recomputed["created_at"], result["created_at"]);
}

#[tokio::test]
async fn user_history_and_latest() {
    let app = app().await;
    let user = Uuid::new_v4();
    submit(&app, user, 2).await;
    submit(&app, user, 8).await;
    submit(&app, Uuid::new_v4(), 5).await;

    let (status, history) = get(&app, &format!("/users/{user}/results?sort_by=score&limit=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["total_count"], 2);
    let page = history["results"].as_array().unwrap();
    assert_eq!(page.len(), 1);
    // Low raw answers score high on the reverse-scored sportsmanship items.
    assert_eq!(page[0]["scores"]["commitment"], 10.0);
    assert_eq!(page[0]["scores"]["courage"], 40.0);

    let (status, latest) = get(&app, &format!("/users/{user}/results/latest")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(latest["user_id"], user.to_string());

    let (status, _) = get(&app, &format!("/users/{}/results/latest", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, &format!("/users/{user}/results?period=2weeks")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VAL_002");
}

#[tokio::test]
async fn athlete_type_endpoints() {
    let app = app().await;
    let (status, types) = get(&app, "/athlete-types").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(types.as_array().unwrap().len(), 5);
    assert_eq!(types[0]["id"], "striker");

    let (status, classification) = post(
        &app,
        "/athlete-types/analyze",
        json!({
            "athlete_mind_scores": { "steadiness": 50.0, "devotion": 50.0, "sensitivity": 50.0 },
            "target": "mother",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(classification["athlete_type"], "defender");
    assert!(!classification["description"].as_str().unwrap().is_empty());

    let (status, body) = post(
        &app,
        "/athlete-types/analyze",
        json!({ "athlete_mind_scores": { "result": 75.0 } }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "athlete_mind_scores.result");
}

#[tokio::test]
async fn comparing_two_results() {
    let app = app().await;
    let first = submit(&app, Uuid::new_v4(), 9).await;
    let second = submit(&app, Uuid::new_v4(), 3).await;

    let (status, comparison) = post(
        &app,
        "/comparisons",
        json!({ "result_ids": [first["id"], second["id"]] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{comparison}");
    let differences = comparison["differences"].as_array().unwrap();
    assert_eq!(differences.len(), 19);
    assert_eq!(differences[0]["difference"].as_f64().unwrap().abs(), 30.0);

    let id = comparison["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/comparisons/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, comparison);

    let (status, _) = post(
        &app,
        "/comparisons",
        json!({ "result_ids": [first["id"], Uuid::new_v4()] }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comparison_history_lists_newest_first() {
    let app = app().await;
    let a = submit(&app, Uuid::new_v4(), 8).await;
    let b = submit(&app, Uuid::new_v4(), 5).await;
    let c = submit(&app, Uuid::new_v4(), 2).await;

    let mut created = Vec::new();
    for pair in [[&a, &b], [&b, &c], [&a, &c]] {
        let (status, comparison) = post(
            &app,
            "/comparisons",
            json!({ "result_ids": [pair[0]["id"], pair[1]["id"]] }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{comparison}");
        created.push(comparison);
    }

    let (status, body) = get(&app, "/comparisons/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 3);
    let listed = body["comparisons"].as_array().unwrap();
    assert_eq!(listed.len(), 3);
    let stamps: Vec<&str> = listed
        .iter()
        .map(|c| c["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = stamps.clone();
    sorted.sort_by(|x, y| {
        let x: jiff::Timestamp = x.parse().unwrap();
        let y: jiff::Timestamp = y.parse().unwrap();
        y.cmp(&x)
    });
    assert_eq!(stamps, sorted);

    let (_, page) = get(&app, "/comparisons/history?limit=2&offset=2").await;
    assert_eq!(page["total_count"], 3);
    assert_eq!(page["comparisons"].as_array().unwrap().len(), 1);

    let uri = format!("/comparisons/history?result_id={}", b["id"].as_str().unwrap());
    let (_, filtered) = get(&app, &uri).await;
    assert_eq!(filtered["total_count"], 2);
    for comparison in filtered["comparisons"].as_array().unwrap() {
        assert!(comparison["result_ids"].as_array().unwrap().contains(&b["id"]));
    }

    let (status, _) = get(&app, "/comparisons/history?limit=101").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
