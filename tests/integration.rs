//! Comprehensive integration tests for the payroll computation engine.
//!
//! This test suite covers the HTTP surface end to end:
//! - Full-month salary with no leave
//! - Mid-month hire and termination proration
//! - Zero-working-days rejection
//! - Deduction aggregation with itemized loan/advance installments
//! - Negative net pay flagging
//! - Idempotent results across identical requests
//! - Recording payments through the result sink
//! - Error cases (invalid input, invalid period, malformed JSON)

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::ledger::InMemoryResultSink;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(Arc::new(InMemoryResultSink::new())))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
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

async fn post_preview(router: Router, body: Value) -> (StatusCode, Value) {
    post_json(router, "/salaries/preview", body).await
}

fn create_request(employee_id: &str, base_salary: &str, hire_date: &str) -> Value {
    json!({
        "employee_id": employee_id,
        "profile": {"base_salary": base_salary, "currency": "PKR"},
        "period": {"year": 2026, "month": 6},
        "employment": {"hire_date": hire_date}
    })
}

fn assert_result_decimal(response: &Value, field: &str, expected: &str) {
    let actual = response["result"][field].as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

// =============================================================================
// Full-month and proration scenarios
// =============================================================================

#[tokio::test]
async fn test_full_month_no_leave_equals_base_exactly() {
    let router = create_router_for_test();
    let (status, body) = post_preview(router, create_request("emp_001", "30000", "2020-01-01")).await;

    assert_eq!(status, StatusCode::OK);
    assert_result_decimal(&body, "base_salary_prorated", "30000");
    assert_result_decimal(&body, "gross_salary", "30000");
    assert_result_decimal(&body, "net_salary", "30000");
    assert_eq!(body["result"]["is_prorated"], json!(false));
    assert_eq!(body["result"]["total_days_in_month"], json!(30));
    assert_eq!(body["result"]["proration_reason"], Value::Null);
}

#[tokio::test]
async fn test_full_month_in_31_day_month_has_no_penny_drift() {
    let router = create_router_for_test();
    let mut request = create_request("emp_001", "30000", "2020-01-01");
    request["period"] = json!({"year": 2026, "month": 7});

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::OK);
    // 30000 / 31 is a repeating decimal; the full month must still be exact.
    assert_result_decimal(&body, "base_salary_prorated", "30000");
}

#[tokio::test]
async fn test_mid_month_hire_prorated() {
    let router = create_router_for_test();
    let (status, body) = post_preview(router, create_request("emp_002", "30000", "2026-06-15")).await;

    assert_eq!(status, StatusCode::OK);
    assert_result_decimal(&body, "working_days", "16");
    assert_result_decimal(&body, "daily_rate", "1000");
    assert_result_decimal(&body, "base_salary_prorated", "16000");
    assert_eq!(body["result"]["is_prorated"], json!(true));
    assert_eq!(body["result"]["effective_start_day"], json!(15));
    assert!(
        body["result"]["proration_reason"]
            .as_str()
            .unwrap()
            .contains("2026-06-15")
    );
}

#[tokio::test]
async fn test_mid_month_termination_prorated() {
    let router = create_router_for_test();
    let request = json!({
        "employee_id": "emp_003",
        "profile": {"base_salary": "30000", "currency": "PKR"},
        "period": {"year": 2026, "month": 6},
        "employment": {"hire_date": "2020-01-01", "termination_date": "2026-06-20"}
    });

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_result_decimal(&body, "working_days", "20");
    assert_result_decimal(&body, "base_salary_prorated", "20000");
    assert_eq!(body["result"]["effective_end_day"], json!(20));
    assert!(
        body["result"]["proration_reason"]
            .as_str()
            .unwrap()
            .contains("left on 2026-06-20")
    );
}

#[tokio::test]
async fn test_hire_and_termination_in_same_month() {
    let router = create_router_for_test();
    let request = json!({
        "employee_id": "emp_004",
        "profile": {"base_salary": "30000", "currency": "PKR"},
        "period": {"year": 2026, "month": 6},
        "employment": {"hire_date": "2026-06-10", "termination_date": "2026-06-20"}
    });

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_result_decimal(&body, "working_days", "11");
    let reason = body["result"]["proration_reason"].as_str().unwrap();
    assert!(reason.contains("joined on 2026-06-10"));
    assert!(reason.contains("left on 2026-06-20"));
}

#[tokio::test]
async fn test_unpaid_leave_reduces_working_days() {
    let router = create_router_for_test();
    let mut request = create_request("emp_005", "30000", "2020-01-01");
    request["attendance"] = json!({
        "leave_days_total": "4",
        "unpaid_leave_days": "4"
    });

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_result_decimal(&body, "working_days", "26");
    assert_result_decimal(&body, "base_salary_prorated", "26000");
}

// =============================================================================
// Earnings and deductions
// =============================================================================

#[tokio::test]
async fn test_allowances_and_add_ons_build_gross() {
    let router = create_router_for_test();
    let request = json!({
        "employee_id": "emp_006",
        "profile": {
            "base_salary": "30000",
            "allowances": {"housing": "5000", "transport": "1000"},
            "currency": "PKR"
        },
        "period": {"year": 2026, "month": 6},
        "employment": {"hire_date": "2020-01-01"},
        "earnings": {"overtime_pay": "1800", "bonus": "200"}
    });

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_result_decimal(&body, "total_allowances", "6000");
    assert_result_decimal(&body, "total_earnings_add_ons", "2000");
    assert_result_decimal(&body, "gross_salary", "38000");
}

#[tokio::test]
async fn test_deduction_aggregation_itemizes_obligations() {
    let router = create_router_for_test();
    let mut request = create_request("emp_007", "30000", "2020-01-01");
    request["deductions"] = json!({"tax_deduction": "300"});
    request["loan_installments"] = json!([{"obligation_id": "loan_1", "amount": "500"}]);
    request["advance_installments"] = json!([{"obligation_id": "adv_2", "amount": "200"}]);

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_result_decimal(&body, "total_deductions", "1000");
    assert_result_decimal(&body, "net_salary", "29000");

    let deductions = &body["result"]["deductions"];
    assert_eq!(normalize_decimal(deductions["fixed_total"].as_str().unwrap()), "300");
    assert_eq!(normalize_decimal(deductions["loan_total"].as_str().unwrap()), "500");
    assert_eq!(normalize_decimal(deductions["advance_total"].as_str().unwrap()), "200");
    assert_eq!(
        deductions["loan_installments"][0]["obligation_id"],
        json!("loan_1")
    );
    assert_eq!(
        deductions["advance_installments"][0]["obligation_id"],
        json!("adv_2")
    );
}

#[tokio::test]
async fn test_negative_net_pay_flagged_not_clamped() {
    let router = create_router_for_test();
    let mut request = create_request("emp_008", "1000", "2020-01-01");
    request["deductions"] = json!({"other_deductions": "1500"});

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_result_decimal(&body, "net_salary", "-500");
    assert_eq!(body["result"]["negative_net_pay"], json!(true));
}

// =============================================================================
// Idempotence and envelope
// =============================================================================

#[tokio::test]
async fn test_identical_requests_produce_identical_results() {
    let request = create_request("emp_009", "45678.90", "2026-06-03");

    let (_, first) = post_preview(create_router_for_test(), request.clone()).await;
    let (_, second) = post_preview(create_router_for_test(), request).await;

    // The envelope ids differ, the computed result does not.
    assert_eq!(first["result"], second["result"]);
    assert_ne!(first["computation_id"], second["computation_id"]);
}

#[tokio::test]
async fn test_envelope_carries_metadata() {
    let router = create_router_for_test();
    let (status, body) = post_preview(router, create_request("emp_010", "30000", "2020-01-01")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_id"], json!("emp_010"));
    assert!(body["computation_id"].as_str().is_some());
    assert!(body["computed_at"].as_str().is_some());
    assert_eq!(body["engine_version"], json!(env!("CARGO_PKG_VERSION")));
    assert!(body.get("persisted_id").is_none());
}

// =============================================================================
// Recording through the result sink
// =============================================================================

#[tokio::test]
async fn test_record_salary_persists_and_mirrors_transaction() {
    let sink = Arc::new(InMemoryResultSink::new());
    let router = create_router(AppState::new(sink.clone()));

    let (status, body) = post_json(
        router,
        "/salaries",
        create_request("emp_011", "30000", "2020-01-01"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let persisted_id = body["persisted_id"].as_str().unwrap();

    let payments = sink.payments();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].id.to_string(), persisted_id);
    assert_eq!(payments[0].employee_id, "emp_011");
    assert_eq!(payments[0].result.net_salary, decimal("30000"));

    let transactions = sink.transactions();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount, decimal("30000"));
}

#[tokio::test]
async fn test_preview_does_not_persist() {
    let sink = Arc::new(InMemoryResultSink::new());
    let router = create_router(AppState::new(sink.clone()));

    let (status, _) = post_json(
        router,
        "/salaries/preview",
        create_request("emp_012", "30000", "2020-01-01"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(sink.payments().is_empty());
    assert!(sink.transactions().is_empty());
}

#[tokio::test]
async fn test_deleted_payment_can_be_re_recorded() {
    let sink = Arc::new(InMemoryResultSink::new());
    let router = create_router(AppState::new(sink.clone()));

    let (_, body) = post_json(
        router.clone(),
        "/salaries",
        create_request("emp_013", "30000", "2020-01-01"),
    )
    .await;
    let persisted_id = body["persisted_id"].as_str().unwrap().parse().unwrap();

    assert!(sink.delete_payment(persisted_id));
    assert!(sink.payments().is_empty());

    let (status, _) = post_json(
        router,
        "/salaries",
        create_request("emp_013", "30000", "2020-01-01"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sink.payments().len(), 1);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_zero_working_days_rejected() {
    let router = create_router_for_test();
    let mut request = create_request("emp_014", "30000", "2020-01-01");
    request["attendance"] = json!({
        "leave_days_total": "30",
        "unpaid_leave_days": "30"
    });

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], json!("ZERO_WORKING_DAYS"));
}

#[tokio::test]
async fn test_negative_overtime_pay_rejected() {
    let router = create_router_for_test();
    let mut request = create_request("emp_015", "30000", "2020-01-01");
    request["earnings"] = json!({"overtime_pay": "-50"});

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("INVALID_INPUT"));
    assert!(body["message"].as_str().unwrap().contains("overtime_pay"));
}

#[tokio::test]
async fn test_zero_base_salary_rejected() {
    let router = create_router_for_test();
    let (status, body) = post_preview(router, create_request("emp_016", "0", "2020-01-01")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("INVALID_INPUT"));
    assert!(body["message"].as_str().unwrap().contains("base_salary"));
}

#[tokio::test]
async fn test_inconsistent_leave_days_rejected() {
    let router = create_router_for_test();
    let mut request = create_request("emp_017", "30000", "2020-01-01");
    request["attendance"] = json!({
        "leave_days_total": "2",
        "unpaid_leave_days": "3"
    });

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("INVALID_INPUT"));
}

#[tokio::test]
async fn test_invalid_period_rejected() {
    let router = create_router_for_test();
    let mut request = create_request("emp_018", "30000", "2020-01-01");
    request["period"] = json!({"year": 2026, "month": 13});

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("INVALID_PERIOD"));
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let router = create_router_for_test();
    let request = json!({
        "employee_id": "emp_019",
        "period": {"year": 2026, "month": 6},
        "employment": {"hire_date": "2020-01-01"}
    });

    let (status, body) = post_preview(router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/salaries/preview")
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
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], json!("MALFORMED_JSON"));
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/salaries/preview")
                .body(Body::from(
                    create_request("emp_020", "30000", "2020-01-01").to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], json!("MISSING_CONTENT_TYPE"));
}
