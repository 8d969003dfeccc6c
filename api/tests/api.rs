use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use uuid::Uuid;

use nutridecode_api::{
    application::http::server::http_server::{router, state},
    args::{Args, ScoringArgs, ServerArgs},
};

fn test_args() -> Arc<Args> {
    Arc::new(Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:5173".to_string()],
            log_json: false,
        },
        scoring: ScoringArgs {
            macro_tolerance_pct: 15.0,
        },
    })
}

// The prometheus layer installs a process-global metrics recorder, so the
// router can only be constructed once per test process; every test gets a
// handle to the same instance. Tests stay independent by using fresh user ids.
static ROUTER: tokio::sync::OnceCell<axum::Router> = tokio::sync::OnceCell::const_new();

async fn test_server() -> TestServer {
    let router = ROUTER
        .get_or_init(|| async {
            let state = state(test_args()).await.unwrap();
            router(state).unwrap()
        })
        .await
        .clone();
    TestServer::new(router).unwrap()
}

fn mayonnaise_document() -> Value {
    json!({
        "productName": "Classic Mayonnaise",
        "ingredients": {
            "list": ["Rapeseed Oil (78%)", "Water", "Free-range Egg", "Salt"],
            "preservatives": ["EDTA"]
        },
        "allergens": {
            "declared": ["Egg"],
            "mayContain": ["Mustard"]
        },
        "nutritionalInfo": {
            "perServing": {
                "calories": 104,
                "fats": { "total": 11.3, "saturated": 0.9 },
                "sugar": 0.2
            }
        },
        "packaging": {
            "sustainabilityClaims": ["Made from 100% recycled material"],
            "certifications": ["Vegetarian Society"]
        }
    })
}

#[tokio::test]
async fn analyze_label_scores_and_persists_the_record() {
    let server = test_server().await;
    let user_id = Uuid::new_v4();

    let response = server
        .post("/analysis")
        .add_header("x-user-id", user_id.to_string())
        .json(&json!({ "document": mayonnaise_document() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    // 65 + 15 (rapeseed) - 10 (EDTA) - 10 (104 kcal) - 5 (sugar)
    //    + 10 (recycled) + 5 (certification) = 70
    assert_eq!(body["data"]["score"]["health_score"], 70);
    assert_eq!(body["data"]["label"]["product_name"], "Classic Mayonnaise");
    assert_eq!(
        body["data"]["score"]["ingredient_classifications"][0]["tier"],
        "favorable"
    );
    assert_eq!(
        body["data"]["score"]["ingredient_classifications"][3]["tier"],
        "concerning"
    );

    let history = server
        .get("/analysis")
        .add_header("x-user-id", user_id.to_string())
        .await;
    assert_eq!(history.status_code(), StatusCode::OK);

    let history: Value = history.json();
    assert_eq!(history["data"].as_array().unwrap().len(), 1);

    let analysis_id = body["data"]["id"].as_str().unwrap();
    let single = server
        .get(&format!("/analysis/{analysis_id}"))
        .add_header("x-user-id", user_id.to_string())
        .await;
    assert_eq!(single.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn history_is_scoped_to_the_requesting_user() {
    let server = test_server().await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let created = server
        .post("/analysis")
        .add_header("x-user-id", alice.to_string())
        .json(&json!({ "document": mayonnaise_document() }))
        .await;
    let created: Value = created.json();

    let history = server
        .get("/analysis")
        .add_header("x-user-id", bob.to_string())
        .await;
    let history: Value = history.json();
    assert!(history["data"].as_array().unwrap().is_empty());

    let analysis_id = created["data"]["id"].as_str().unwrap();
    let response = server
        .get(&format!("/analysis/{analysis_id}"))
        .add_header("x-user-id", bob.to_string())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn requests_without_a_user_header_are_rejected() {
    let server = test_server().await;

    let response = server
        .post("/analysis")
        .json(&json!({ "document": {} }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn a_null_document_is_a_bad_request() {
    let server = test_server().await;

    let response = server
        .post("/analysis")
        .add_header("x-user-id", Uuid::new_v4().to_string())
        .json(&json!({ "document": null }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn preferences_default_then_update_then_personalize() {
    let server = test_server().await;
    let user_id = Uuid::new_v4();

    let defaults = server
        .get("/preferences")
        .add_header("x-user-id", user_id.to_string())
        .await;
    assert_eq!(defaults.status_code(), StatusCode::OK);

    let defaults: Value = defaults.json();
    assert_eq!(defaults["data"]["allergen_sensitivity"], "medium");
    assert_eq!(defaults["data"]["macro_preferences"]["carbs"], 40.0);

    let updated = server
        .put("/preferences")
        .add_header("x-user-id", user_id.to_string())
        .json(&json!({
            "allergen_alerts": ["egg"],
            "dietary_restrictions": ["Vegan"]
        }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);

    let analysis = server
        .post("/analysis")
        .add_header("x-user-id", user_id.to_string())
        .json(&json!({ "document": mayonnaise_document() }))
        .await;
    let analysis: Value = analysis.json();

    let report = &analysis["data"]["score"]["compliance_report"];
    assert_eq!(report["allergen_conflicts"][0], "Egg");
    assert!(
        report["violations"]
            .as_array()
            .unwrap()
            .iter()
            .any(|v| v.as_str().unwrap().contains("Vegan"))
    );
}
