// Contract tests for the /api/v1/loans endpoints
//
// Validates status codes and JSON shapes of every response, including the
// flat `{"error": "..."}` body used by all failure paths.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::test;
use helpers::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::str::FromStr;

#[actix_web::test]
async fn test_create_response_schema() {
    let state = create_test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/loans")
        .set_json(TestDataFactory::reference_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    let object = body.as_object().expect("create response must be an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["customer_id", "loan_id", "monthly_emi", "total_amount_payable"]
    );

    assert_eq!(body["loan_id"], "loan-1");
    assert_eq!(body["customer_id"], "C1");
    // Money is serialized as decimal strings.
    let money = |field: &str| {
        let raw = body[field].as_str().expect("money must be a string");
        Decimal::from_str(raw).expect("money must parse as a decimal")
    };
    assert_eq!(money("total_amount_payable"), dec!(150000));
    assert_eq!(money("monthly_emi"), dec!(2500));
}

#[actix_web::test]
async fn test_loan_record_schema() {
    let state = create_test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/loans")
        .set_json(TestDataFactory::reference_payload())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/loans/loan-1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    for field in [
        "loan_id",
        "customer_id",
        "loan_amount",
        "interest_rate_yearly",
        "total_amount_payable",
        "monthly_emi",
    ] {
        assert!(body[field].is_string(), "{} must be a string", field);
    }
    assert!(body["loan_period_years"].is_i64(), "loan_period_years must be an integer");
}

#[actix_web::test]
async fn test_list_is_array() {
    let state = create_test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/v1/loans").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_get_unknown_is_404_with_error() {
    let state = create_test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/loans/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Loan not found" }));
}

#[actix_web::test]
async fn test_delete_unknown_is_404() {
    let state = create_test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::delete()
        .uri("/api/v1/loans/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Loan not found");
}

#[actix_web::test]
async fn test_missing_field_is_400_with_error() {
    let state = create_test_state().await;
    let app = init_app!(state);

    for field in [
        "customer_id",
        "loan_amount",
        "loan_period_years",
        "interest_rate_yearly",
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/loans")
            .set_json(TestDataFactory::payload_without(field))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "missing {} must be rejected", field);

        let body: Value = test::read_body_json(resp).await;
        let message = body["error"].as_str().expect("error must be a string");
        assert!(message.contains(field), "error should name {}: {}", field, message);
    }

    assert_eq!(count_loans(&state).await, 0);
}

#[actix_web::test]
async fn test_non_numeric_amount_is_400() {
    let state = create_test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/loans")
        .set_json(TestDataFactory::payload_with("loan_amount", json!("a lot")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(count_loans(&state).await, 0);
}

#[actix_web::test]
async fn test_fractional_period_is_400() {
    let state = create_test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/loans")
        .set_json(TestDataFactory::payload_with("loan_period_years", json!(2.5)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_storage_failure_is_500_without_details() {
    let state = create_test_state().await;
    let app = init_app!(state);
    state.close().await;

    let req = test::TestRequest::get().uri("/api/v1/loans").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Database error" }));
}

#[actix_web::test]
async fn test_request_id_header_is_echoed() {
    let state = create_test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/loans")
        .insert_header(("X-Request-ID", "contract-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get("x-request-id").unwrap(), "contract-42");
}
