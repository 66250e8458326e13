//! Integration tests for the rental charge engine API.
//!
//! This suite drives the axum router end to end and covers:
//! - The reference checkout scenarios (holiday shifts, weekend exclusions,
//!   Labor Day, half-cent discount rounding)
//! - Boundary validation (day count, discount range, unknown tool codes)
//! - Case-insensitive tool lookup
//! - The plain-text receipt endpoint
//! - The catalog listing endpoint
//! - Malformed request bodies

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use rental_engine::api::{AppState, create_router};
use rental_engine::catalog::CatalogLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let catalog = CatalogLoader::load("./catalog").expect("Failed to load catalog");
    AppState::new(catalog)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn checkout_body(tool_code: &str, day_count: i64, discount: i64, checkout_date: &str) -> Value {
    json!({
        "tool_code": tool_code,
        "rental_day_count": day_count,
        "discount_percent": discount,
        "checkout_date": checkout_date
    })
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
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

async fn post_checkout(router: Router, body: Value) -> (StatusCode, Value) {
    post_json(router, "/checkout", body).await
}

async fn post_receipt(router: Router, body: Value) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/checkout/receipt")
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

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

fn assert_money(result: &Value, field: &str, expected: &str) {
    let actual = result[field].as_str().unwrap_or_else(|| {
        panic!("Expected string field '{}' in {}", field, result);
    });
    assert_eq!(actual, expected, "Field '{}' mismatch", field);
}

// =============================================================================
// Reference checkout scenarios
// =============================================================================

#[tokio::test]
async fn test_checkout_1_discount_above_100_is_rejected() {
    let body = checkout_body("JAKR", 5, 101, "2015-09-03");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_DISCOUNT");
    assert!(json["message"].as_str().unwrap().contains("101"));
}

#[tokio::test]
async fn test_checkout_2_ladder_over_independence_day_weekend() {
    // Checkout Thursday 7/2/20 for 3 days with 10% off. July 4th 2020 is a
    // Saturday, so Friday the 3rd is the observed holiday: ladders charge
    // weekends but not holidays, leaving 2 charge days.
    let body = checkout_body("LADW", 3, 10, "2020-07-02");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["due_date"], "2020-07-05");
    assert_eq!(json["charge_days"], 2);
    assert_money(&json, "daily_rental_charge", "1.99");
    assert_money(&json, "pre_discount_charge", "3.98");
    assert_money(&json, "discount_amount", "0.40");
    assert_money(&json, "final_charge", "3.58");
}

#[tokio::test]
async fn test_checkout_3_chainsaw_charges_holiday_but_not_weekend() {
    // Checkout Thursday 7/2/15 for 5 days with 25% off. Chainsaws charge
    // holidays but not weekends: the observed holiday Friday the 3rd is
    // charged, July 4-5 are not, leaving 3 charge days.
    let body = checkout_body("CHNS", 5, 25, "2015-07-02");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["due_date"], "2015-07-07");
    assert_eq!(json["charge_days"], 3);
    assert_money(&json, "daily_rental_charge", "1.49");
    assert_money(&json, "pre_discount_charge", "4.47");
    assert_money(&json, "discount_amount", "1.12");
    assert_money(&json, "final_charge", "3.35");
}

#[tokio::test]
async fn test_checkout_4_jackhammer_over_labor_day() {
    // Checkout Thursday 9/3/15 for 6 days, no discount. Jackhammers charge
    // weekdays only: weekend Sept 5-6 and Labor Day Sept 7 are excluded,
    // leaving 3 charge days.
    let body = checkout_body("JAKD", 6, 0, "2015-09-03");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["due_date"], "2015-09-09");
    assert_eq!(json["charge_days"], 3);
    assert_money(&json, "daily_rental_charge", "2.99");
    assert_money(&json, "pre_discount_charge", "8.97");
    assert_money(&json, "discount_amount", "0.00");
    assert_money(&json, "final_charge", "8.97");
}

#[tokio::test]
async fn test_checkout_5_jackhammer_nine_days_over_holiday_weekend() {
    // Checkout Thursday 7/2/15 for 9 days, no discount. Three weekend days
    // and the observed holiday leave 5 charge days.
    let body = checkout_body("JAKR", 9, 0, "2015-07-02");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["due_date"], "2015-07-11");
    assert_eq!(json["charge_days"], 5);
    assert_money(&json, "final_charge", "14.95");
}

#[tokio::test]
async fn test_checkout_6_half_cent_discount_rounds_up() {
    // Checkout Thursday 7/2/20 for 4 days at 50% off. Only Monday July 6th
    // is charged; 2.99 at 50% is 1.495, which rounds up to 1.50.
    let body = checkout_body("JAKR", 4, 50, "2020-07-02");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["due_date"], "2020-07-06");
    assert_eq!(json["charge_days"], 1);
    assert_money(&json, "pre_discount_charge", "2.99");
    assert_money(&json, "discount_amount", "1.50");
    assert_money(&json, "final_charge", "1.49");
}

#[tokio::test]
async fn test_checkout_7_zero_day_count_is_rejected() {
    let body = checkout_body("JAKR", 0, 99, "2015-09-03");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_DAY_COUNT");
}

#[tokio::test]
async fn test_checkout_8_unknown_tool_code_is_rejected() {
    let body = checkout_body("0000", 4, 50, "2020-07-02");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "TOOL_NOT_FOUND");
    assert!(json["message"].as_str().unwrap().contains("0000"));
}

// =============================================================================
// Additional boundary cases
// =============================================================================

#[tokio::test]
async fn test_negative_day_count_is_rejected() {
    let body = checkout_body("LADW", -2, 0, "2020-07-02");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_DAY_COUNT");
}

#[tokio::test]
async fn test_negative_discount_is_rejected() {
    let body = checkout_body("LADW", 3, -1, "2020-07-02");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_DISCOUNT");
}

#[tokio::test]
async fn test_full_discount_brings_final_charge_to_zero() {
    let body = checkout_body("LADW", 3, 100, "2020-07-02");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&json, "discount_amount", "3.98");
    assert_money(&json, "final_charge", "0.00");
}

#[tokio::test]
async fn test_tool_code_lookup_is_case_insensitive() {
    let body = checkout_body("ladw", 3, 10, "2020-07-02");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tool_code"], "LADW");
    assert_money(&json, "final_charge", "3.58");
}

#[tokio::test]
async fn test_pass_through_fields_are_echoed() {
    let body = checkout_body("CHNS", 5, 25, "2015-07-02");
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tool_code"], "CHNS");
    assert_eq!(json["tool_type"], "Chainsaw");
    assert_eq!(json["tool_brand"], "Stihl");
    assert_eq!(json["rental_days"], 5);
    assert_eq!(json["checkout_date"], "2015-07-02");
    assert_eq!(json["discount_percent"], 25);
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let body = json!({
        "tool_code": "LADW",
        "rental_day_count": 3,
        "checkout_date": "2020-07-02"
    });
    let (status, json) = post_checkout(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("discount_percent")
    );
}

#[tokio::test]
async fn test_syntactically_invalid_json_returns_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/checkout")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

// =============================================================================
// Receipt endpoint
// =============================================================================

#[tokio::test]
async fn test_receipt_renders_block_text() {
    let body = checkout_body("LADW", 3, 10, "2020-07-02");
    let (status, receipt) = post_receipt(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let expected = "Tool code: LADW\n\
                    Tool type: Ladder\n\
                    Tool brand: Werner\n\
                    Rental days: 3\n\
                    Checkout date: 07/02/20\n\
                    Due date: 07/05/20\n\
                    Daily rental charge: $1.99\n\
                    Charge days: 2\n\
                    Pre-discount charge: $3.98\n\
                    Discount percent: 10%\n\
                    Discount amount: $0.40\n\
                    Final charge: $3.58\n";
    assert_eq!(receipt, expected);
}

#[tokio::test]
async fn test_receipt_validation_errors_are_json() {
    let body = checkout_body("JAKR", 5, 101, "2015-09-03");
    let (status, receipt) = post_receipt(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&receipt).unwrap();
    assert_eq!(json["code"], "INVALID_DISCOUNT");
}

// =============================================================================
// Catalog listing
// =============================================================================

#[tokio::test]
async fn test_tools_endpoint_lists_catalog_sorted_by_code() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/tools")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    let codes: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["CHNS", "JAKD", "JAKR", "LADW"]);

    let chainsaw = &json[0];
    assert_eq!(chainsaw["brand"], "Stihl");
    assert_eq!(chainsaw["policy"]["name"], "Chainsaw");
    assert_eq!(chainsaw["policy"]["daily_charge"], "1.49");
}
