//! HTTP request handlers for the Vacation Entitlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{Datelike, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{ValidationContext, WorkingDayCounter, check_vacation};
use crate::models::EmployeeEntitlement;

use super::request::{ValidateVacationRequest, WorkingDaysRequest};
use super::response::{ApiError, ApiErrorResponse, ValidationResponse, WorkingDaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/vacations/validate", post(validate_vacation_handler))
        .route("/working-days", post(working_days_handler))
        .with_state(state)
}

/// Handler for POST /vacations/validate endpoint.
///
/// Runs the period and balance checks on the submitted vacation and returns the
/// verdict, or the first failure as a 422.
async fn validate_vacation_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateVacationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let vacation = &request.vacation;

    // Without a start date the validator reports the missing dates; the expiry
    // year only has to be plausible until then.
    let year = vacation
        .start_date
        .or_else(|| vacation.stored.as_ref().map(|s| s.start_date))
        .unwrap_or(today)
        .year();
    let carry_over_expiry = match config.carry_over_expiry(year) {
        Ok(date) => date,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Policy error");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let context = ValidationContext {
        today,
        has_hr_access: request.has_hr_access,
        vacation_calendar: config.vacation_calendar(),
    };
    let entitlement = EmployeeEntitlement::from(request.entitlement.clone());

    let start_time = Instant::now();
    match check_vacation(
        vacation,
        &context,
        &entitlement,
        carry_over_expiry,
        config.calendar(),
        &request.existing_vacations,
    ) {
        Ok(verdict) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %vacation.employee_id,
                vacation_id = ?vacation.id(),
                duration_us = start_time.elapsed().as_micros(),
                "Vacation accepted"
            );
            (
                StatusCode::OK,
                Json(ValidationResponse {
                    correlation_id,
                    carry_over_expiry,
                    verdict,
                }),
            )
                .into_response()
        }
        Err(failure) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %vacation.employee_id,
                vacation_id = ?vacation.id(),
                code = failure.code(),
                "Vacation rejected"
            );
            ApiErrorResponse::from(failure).into_response()
        }
    }
}

/// Handler for POST /working-days endpoint.
///
/// Counts the working days of a range under the configured holiday calendar.
async fn working_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let invalid = if request.end_date < request.start_date {
        Some("end_date must not be before start_date")
    } else if request.end_date.year() != request.start_date.year() {
        Some("start_date and end_date must lie in the same year")
    } else if request.half_day && request.start_date != request.end_date {
        Some("half_day requires start_date == end_date")
    } else {
        None
    };
    if let Some(message) = invalid {
        return ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error(message),
        }
        .into_response();
    }

    let working_days = state.config().calendar().working_days(
        request.start_date,
        request.end_date,
        request.half_day,
    );
    info!(
        correlation_id = %correlation_id,
        start = %request.start_date,
        end = %request.end_date,
        working_days = %working_days,
        "Counted working days"
    );

    (
        StatusCode::OK,
        Json(WorkingDaysResponse {
            start_date: request.start_date,
            end_date: request.end_date,
            half_day: request.half_day,
            working_days,
        }),
    )
        .into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
