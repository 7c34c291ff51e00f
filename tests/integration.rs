//! Integration tests for the CELI contribution room engine.
//!
//! This test suite drives the HTTP API end to end:
//! - Eligible holders (single year, clamped start, full table)
//! - Holders not yet eligible
//! - Reference years past the published limits
//! - Form-style string input
//! - Validation and malformed-request errors

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use celi_engine::api::{AppState, create_router};
use celi_engine::config::{ConfigLoader, DEFAULT_CONFIG_DIR};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load(DEFAULT_CONFIG_DIR).expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn years(result: &Value) -> Vec<i64> {
    result["outcome"]["rights"]["yearly"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["year"].as_i64().unwrap())
        .collect()
}

fn error_codes(error: &Value) -> Vec<String> {
    error["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| e["code"].as_str().unwrap().to_string())
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Eligible outcomes
// =============================================================================

#[tokio::test]
async fn test_eligible_in_reference_year() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 2000, "reference_year": 2018 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["outcome"]["status"], "eligible");
    assert_eq!(result["outcome"]["eligible_year"], 2018);
    assert_eq!(result["outcome"]["rights"]["total"], "5500");
    assert_eq!(years(&result), vec![2018]);
    assert_eq!(result["outcome"]["rights"]["yearly"][0]["amount"], "5500");
}

#[tokio::test]
async fn test_start_clamped_to_program_launch() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 1985, "reference_year": 2012 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["outcome"]["eligible_year"], 2003);
    assert_eq!(result["outcome"]["rights"]["total"], "20000");
    assert_eq!(years(&result), vec![2009, 2010, 2011, 2012]);
}

#[tokio::test]
async fn test_full_table_sum() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 1990, "reference_year": 2025 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["outcome"]["eligible_year"], 2008);
    assert_eq!(result["outcome"]["rights"]["total"], "102000");
    assert_eq!(years(&result).len(), 17);
    assert_eq!(result["display"]["total_label"], "102\u{a0}000\u{a0}$");
    assert_eq!(result["display"]["total_row"]["year_label"], "Total");
}

#[tokio::test]
async fn test_years_past_table_contribute_nothing() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 1990, "reference_year": 2030 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["outcome"]["rights"]["total"], "102000");
    assert_eq!(years(&result).last(), Some(&2025));
}

#[tokio::test]
async fn test_display_rows_match_breakdown() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 1996, "reference_year": 2016 }),
    )
    .await;

    let rows = result["display"]["rows"].as_array().unwrap();
    let labels: Vec<&str> = rows
        .iter()
        .map(|r| r["year_label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["2014", "2015", "2016"]);
    assert_eq!(rows[1]["amount_label"], "10\u{a0}000\u{a0}$");
    assert_eq!(result["outcome"]["rights"]["total"], "21000");
}

// =============================================================================
// Not yet eligible
// =============================================================================

#[tokio::test]
async fn test_not_yet_eligible() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 2010, "reference_year": 2020 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["outcome"]["status"], "not_yet_eligible");
    assert_eq!(result["outcome"]["eligible_year"], 2028);
    assert!(result["outcome"].get("rights").is_none());
    assert_eq!(
        result["display"]["message"],
        "Vous ne serez éligible au CELI qu'en 2028 (à vos 18 ans)."
    );
}

#[tokio::test]
async fn test_eligible_with_zero_total_is_not_not_yet_eligible() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 2010, "reference_year": 2028 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["outcome"]["status"], "eligible");
    assert_eq!(result["outcome"]["rights"]["total"], "0");
}

// =============================================================================
// Form-style input
// =============================================================================

#[tokio::test]
async fn test_string_years_are_parsed() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": "2000", "reference_year": " 2018 " }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["outcome"]["rights"]["total"], "5500");
}

#[tokio::test]
async fn test_omitted_reference_year_defaults_to_current_year() {
    let (status, result) =
        post_calculate(create_router_for_test(), json!({ "birth_year": 1990 })).await;

    // Outside 2009..=2030 the current year itself fails validation.
    if status == StatusCode::OK {
        assert!(result["reference_year"].as_i64().unwrap() >= 2009);
        assert_eq!(result["outcome"]["eligible_year"], 2008);
    } else {
        assert_eq!(error_codes(&result), vec!["invalid_reference_year"]);
    }
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_birth_year_out_of_range() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 1800, "reference_year": 2020 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error_codes(&error), vec!["invalid_birth_year"]);
    assert_eq!(
        error["errors"][0]["message"],
        "Veuillez entrer une année de naissance valide."
    );
}

#[tokio::test]
async fn test_reference_year_out_of_range() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 1990, "reference_year": 2035 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_codes(&error), vec!["invalid_reference_year"]);
}

#[tokio::test]
async fn test_both_years_out_of_range() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 1800, "reference_year": 2035 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_codes(&error),
        vec!["invalid_birth_year", "invalid_reference_year"]
    );
}

#[tokio::test]
async fn test_reference_before_birth() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 2022, "reference_year": 2015 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_codes(&error),
        vec!["invalid_birth_year", "reference_before_birth"]
    );
}

#[tokio::test]
async fn test_malformed_year_text() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": "1990abc", "reference_year": "2020" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_codes(&error), vec!["invalid_birth_year"]);
}

#[tokio::test]
async fn test_missing_birth_year() {
    let (status, error) =
        post_calculate(create_router_for_test(), json!({ "reference_year": 2020 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_codes(&error), vec!["invalid_birth_year"]);
}

#[tokio::test]
async fn test_blank_reference_year() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 1990, "reference_year": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_codes(&error), vec!["invalid_reference_year"]);
}

#[tokio::test]
async fn test_null_reference_year_is_not_defaulted() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "birth_year": 1990, "reference_year": null }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_codes(&error), vec!["invalid_reference_year"]);
}

#[tokio::test]
async fn test_non_object_body_is_malformed() {
    let (status, error) = post_calculate(create_router_for_test(), json!("1990")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .body(Body::from(r#"{"birth_year":1990}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}
