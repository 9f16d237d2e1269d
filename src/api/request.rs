//! Request types for the Vacation Entitlement Engine API.
//!
//! This module defines the JSON request structures for the `/vacations/validate`
//! and `/working-days` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{EntitlementAttributes, ExistingVacation, VacationRequest};

/// Request body for the `/vacations/validate` endpoint.
///
/// Carries the vacation to check together with the facts the persistence layer
/// and the session provide: the employee's entitlement attributes, their other
/// vacations and whether the acting user has HR access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateVacationRequest {
    /// The vacation to check.
    pub vacation: VacationRequest,
    /// The employee's entitlement attributes for the vacation's year.
    #[serde(default)]
    pub entitlement: EntitlementAttributes,
    /// The employee's stored vacations around the requested period.
    #[serde(default)]
    pub existing_vacations: Vec<ExistingVacation>,
    /// Whether the acting user may create vacations in the past.
    #[serde(default)]
    pub has_hr_access: bool,
    /// Today's date; defaults to the server's current UTC date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
    /// Whether only half of the single day is counted.
    #[serde(default)]
    pub half_day: bool,
}
