//! Integration tests for the Vacation Entitlement Engine.
//!
//! This test suite covers:
//! - The worked scenarios for carry-over before, across and after its expiry
//! - Half-day, backdating, overlap and status-change handling
//! - Edits of existing vacations
//! - The HTTP API on top of the default configuration

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use vacation_engine::api::{AppState, create_router};
use vacation_engine::calculation::{
    CarryOverCase, HolidayCalendar, ValidationContext, VacationVerdict, check_vacation,
};
use vacation_engine::config::ConfigLoader;
use vacation_engine::models::{
    EmployeeEntitlement, ExistingVacation, StoredVacation, VacationFailure, VacationRequest,
    VacationStatus,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn context(today: NaiveDate) -> ValidationContext<'static> {
    ValidationContext {
        today,
        has_hr_access: false,
        vacation_calendar: None,
    }
}

fn scenario_entitlement() -> EmployeeEntitlement {
    EmployeeEntitlement {
        annual_entitlement: dec("20"),
        carry_over_granted: dec("5"),
        carry_over_used: Decimal::ZERO,
        used_this_year: Decimal::ZERO,
    }
}

fn check(
    request: &VacationRequest,
    today: NaiveDate,
    entitlement: &EmployeeEntitlement,
    existing: &[ExistingVacation],
) -> Result<VacationVerdict, VacationFailure> {
    check_vacation(
        request,
        &context(today),
        entitlement,
        date(3, 31),
        &HolidayCalendar::default(),
        existing,
    )
}

fn approved(id: u64, start: NaiveDate, end: NaiveDate) -> ExistingVacation {
    ExistingVacation {
        id,
        employee_id: "emp_001".to_string(),
        start_date: start,
        end_date: end,
        status: VacationStatus::Approved,
    }
}

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
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

fn validate_body(vacation: Value, entitlement: Value) -> Value {
    json!({
        "vacation": vacation,
        "entitlement": entitlement,
        "existing_vacations": [],
        "has_hr_access": false,
        "today": "2026-01-02"
    })
}

fn vacation_json(start: &str, end: &str) -> Value {
    json!({
        "employee_id": "emp_001",
        "start_date": start,
        "end_date": end,
        "status": "IN_PROGRESS",
        "calendars": [{ "id": 1, "title": "Company Vacation" }]
    })
}

fn assert_decimal(actual: &Value, expected: &str) {
    let actual = Decimal::from_str(actual.as_str().unwrap()).unwrap().normalize();
    assert_eq!(actual, dec(expected).normalize());
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_short_vacation_before_expiry() {
    // Mon Jan 12 .. Wed Jan 14
    let request = VacationRequest::new("emp_001", date(1, 12), date(1, 14));
    match check(&request, date(1, 2), &scenario_entitlement(), &[]) {
        Ok(VacationVerdict::WithinBalance { assessment, .. }) => {
            assert_eq!(assessment.case, CarryOverCase::BeforeExpiry);
            assert_eq!(assessment.needed_days, dec("3"));
            assert_eq!(assessment.remaining, dec("22"));
        }
        other => panic!("Expected WithinBalance, got {:?}", other),
    }
}

#[test]
fn test_scenario_long_vacation_across_expiry_exhausts_carry_over() {
    // Sun Feb 1 .. Sun Apr 5: 42 working days up to Mar 31, 45 in total
    let request = VacationRequest::new("emp_001", date(2, 1), date(4, 5));
    assert_eq!(
        check(&request, date(1, 2), &scenario_entitlement(), &[]),
        Err(VacationFailure::InsufficientBalance)
    );

    // With a large enough annual entitlement the whole need is taken from it
    let generous = EmployeeEntitlement {
        annual_entitlement: dec("50"),
        ..scenario_entitlement()
    };
    match check(&request, date(1, 2), &generous, &[]) {
        Ok(VacationVerdict::WithinBalance { assessment, .. }) => {
            assert_eq!(assessment.case, CarryOverCase::StraddlesExpiry);
            assert_eq!(assessment.needed_before_expiry, Some(dec("42")));
            assert_eq!(assessment.carry_over_rest, Some(dec("-37")));
            assert_eq!(assessment.remaining, dec("5"));
        }
        other => panic!("Expected WithinBalance, got {:?}", other),
    }
}

#[test]
fn test_scenario_half_day_over_two_days() {
    let mut request = VacationRequest::new("emp_001", date(1, 12), date(1, 13));
    request.half_day = true;
    assert_eq!(
        check(&request, date(1, 2), &scenario_entitlement(), &[]),
        Err(VacationFailure::HalfDaySpansMultipleDays)
    );
}

#[test]
fn test_scenario_new_vacation_starting_yesterday() {
    let today = date(10, 16);
    let request = VacationRequest::new("emp_001", date(10, 15), date(10, 16));
    assert_eq!(
        check(&request, today, &scenario_entitlement(), &[]),
        Err(VacationFailure::StartDateInPast)
    );
}

#[test]
fn test_scenario_overlap_and_edit_of_same_vacation() {
    let existing = vec![approved(11, date(5, 4), date(5, 8))];

    let request = VacationRequest::new("emp_001", date(5, 6), date(5, 12));
    assert_eq!(
        check(&request, date(1, 2), &scenario_entitlement(), &existing),
        Err(VacationFailure::OverlappingRequest {
            conflicting: vec![11]
        })
    );

    // Editing vacation 11 itself with its dates unchanged
    let mut edit = VacationRequest::new("emp_001", date(5, 4), date(5, 8));
    edit.status = VacationStatus::Approved;
    edit.stored = Some(StoredVacation {
        id: 11,
        status: VacationStatus::Approved,
        start_date: date(5, 4),
        end_date: date(5, 8),
        half_day: false,
        special: false,
        calendars: Vec::new(),
    });
    let entitlement = EmployeeEntitlement {
        used_this_year: dec("5"),
        ..scenario_entitlement()
    };
    assert!(matches!(
        check(&edit, date(1, 2), &entitlement, &existing),
        Ok(VacationVerdict::WithinBalance { .. })
    ));
}

#[test]
fn test_status_only_change_on_outdated_vacation() {
    // Stored vacation lies in the past and the employee has no days left
    let mut request = VacationRequest::new("emp_001", date(1, 5), date(1, 9));
    request.status = VacationStatus::Rejected;
    request.stored = Some(StoredVacation {
        id: 5,
        status: VacationStatus::InProgress,
        start_date: date(1, 5),
        end_date: date(1, 9),
        half_day: false,
        special: false,
        calendars: Vec::new(),
    });
    let exhausted = EmployeeEntitlement {
        used_this_year: dec("40"),
        ..scenario_entitlement()
    };
    assert_eq!(
        check(&request, date(6, 1), &exhausted, &[]),
        Ok(VacationVerdict::StatusChangeOnly)
    );
}

#[test]
fn test_end_on_expiry_uses_carry_over() {
    // Mon Mar 30 .. Tue Mar 31 with only carry-over left
    let entitlement = EmployeeEntitlement {
        annual_entitlement: Decimal::ZERO,
        carry_over_granted: dec("2"),
        ..Default::default()
    };
    let request = VacationRequest::new("emp_001", date(3, 30), date(3, 31));
    assert!(matches!(
        check(&request, date(1, 2), &entitlement, &[]),
        Ok(VacationVerdict::WithinBalance { .. })
    ));

    // One day later the carry-over no longer covers everything
    let request = VacationRequest::new("emp_001", date(3, 31), date(4, 1));
    assert_eq!(
        check(&request, date(1, 2), &entitlement, &[]),
        Err(VacationFailure::InsufficientBalance)
    );
}

#[test]
fn test_special_leave_ignores_exhausted_balance() {
    let mut request = VacationRequest::new("emp_001", date(7, 6), date(7, 10));
    request.special = true;
    let exhausted = EmployeeEntitlement {
        used_this_year: dec("25"),
        ..scenario_entitlement()
    };
    assert!(matches!(
        check(&request, date(1, 2), &exhausted, &[]),
        Ok(VacationVerdict::SpecialLeave { .. })
    ));
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_accepts_vacation_within_balance() {
    let body = validate_body(
        vacation_json("2026-07-06", "2026-07-10"),
        json!({ "annual_entitlement": "30", "used_this_year": "10" }),
    );
    let (status, result) = post_json(create_router_for_test(), "/vacations/validate", body).await;

    assert_eq!(status, StatusCode::OK, "{}", result);
    assert_eq!(result["verdict"], "within_balance");
    assert_eq!(result["carry_over_expiry"], "2026-03-31");
    assert_eq!(result["assessment"]["case"], "after_expiry");
    assert_decimal(&result["assessment"]["needed_days"], "5");
    assert_decimal(&result["assessment"]["remaining"], "15");
}

#[tokio::test]
async fn test_api_counts_configured_holidays() {
    // Mon Mar 30 .. Fri Apr 10 contains Good Friday and Easter Monday
    let body = validate_body(
        vacation_json("2026-03-30", "2026-04-10"),
        json!({ "annual_entitlement": "30", "carry_over_granted": "1" }),
    );
    let (status, result) = post_json(create_router_for_test(), "/vacations/validate", body).await;

    assert_eq!(status, StatusCode::OK, "{}", result);
    assert_eq!(result["assessment"]["case"], "straddles_expiry");
    assert_decimal(&result["assessment"]["needed_days"], "8");
    assert_decimal(&result["assessment"]["needed_before_expiry"], "2");
}

#[tokio::test]
async fn test_api_rejects_insufficient_balance() {
    let body = validate_body(
        vacation_json("2026-07-06", "2026-07-10"),
        json!({ "annual_entitlement": "3" }),
    );
    let (status, result) = post_json(create_router_for_test(), "/vacations/validate", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "INSUFFICIENT_BALANCE");
    assert_eq!(result["details"], "vacation.validate.notEnoughVacationDaysLeft");
}

#[tokio::test]
async fn test_api_requires_vacation_calendar() {
    let mut vacation = vacation_json("2026-07-06", "2026-07-10");
    vacation["calendars"] = json!([{ "id": 7, "title": "Team" }]);
    let body = validate_body(vacation, json!({ "annual_entitlement": "30" }));
    let (status, result) = post_json(create_router_for_test(), "/vacations/validate", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "MISSING_VACATION_CALENDAR");
    assert!(result["message"].as_str().unwrap().contains("Company Vacation"));
}

#[tokio::test]
async fn test_api_reports_missing_dates() {
    let mut vacation = vacation_json("2026-07-06", "2026-07-10");
    vacation["start_date"] = Value::Null;
    let body = validate_body(vacation, json!({}));
    let (status, result) = post_json(create_router_for_test(), "/vacations/validate", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "DATES_NOT_SET");
    assert_eq!(result["details"], "vacation.validate.datenotset");
}

#[tokio::test]
async fn test_api_reports_overlap() {
    let mut body = validate_body(
        vacation_json("2026-07-06", "2026-07-10"),
        json!({ "annual_entitlement": "30" }),
    );
    body["existing_vacations"] = json!([{
        "id": 3,
        "employee_id": "emp_001",
        "start_date": "2026-07-10",
        "end_date": "2026-07-17",
        "status": "IN_PROGRESS"
    }]);
    let (status, result) = post_json(create_router_for_test(), "/vacations/validate", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "OVERLAPPING_REQUEST");
}

#[tokio::test]
async fn test_api_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/vacations/validate")
                .header("Content-Type", "application/json")
                .body(Body::from("{ not json"))
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

#[tokio::test]
async fn test_api_missing_field() {
    let body = json!({ "entitlement": {} });
    let (status, result) = post_json(create_router_for_test(), "/vacations/validate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_api_working_days() {
    // Mon Dec 21 .. Thu Dec 31 with half days on 24th and 31st
    let body = json!({ "start_date": "2026-12-21", "end_date": "2026-12-31" });
    let (status, result) = post_json(create_router_for_test(), "/working-days", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["working_days"], "7");
}

#[tokio::test]
async fn test_api_working_days_half_day() {
    let body = json!({ "start_date": "2026-06-02", "end_date": "2026-06-02", "half_day": true });
    let (status, result) = post_json(create_router_for_test(), "/working-days", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["working_days"], "0.5");
}

#[tokio::test]
async fn test_api_working_days_rejects_reversed_range() {
    let body = json!({ "start_date": "2026-06-05", "end_date": "2026-06-01" });
    let (status, result) = post_json(create_router_for_test(), "/working-days", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_api_out_of_range_entitlement_is_insufficient() {
    // Decimal::MAX in both pools
    let body = validate_body(
        vacation_json("2026-01-12", "2026-01-14"),
        json!({
            "annual_entitlement": "79228162514264337593543950335",
            "carry_over_granted": "79228162514264337593543950335"
        }),
    );
    let (status, result) = post_json(create_router_for_test(), "/vacations/validate", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "INSUFFICIENT_BALANCE");
}

#[tokio::test]
async fn test_api_working_days_rejects_range_across_years() {
    for (start, end) in [("2026-12-28", "2027-01-04"), ("0001-01-01", "9999-12-31")] {
        let body = json!({ "start_date": start, "end_date": end });
        let (status, result) = post_json(create_router_for_test(), "/working-days", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(result["code"], "VALIDATION_ERROR");
    }
}
