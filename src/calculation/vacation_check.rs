//! Full check of a vacation request.
//!
//! Runs the period validator first and only consults the balance when the
//! period is valid, the request is more than a status change, and the leave
//! is not special leave.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{EmployeeEntitlement, VacationFailure, VacationPeriod, VacationRequest};

use super::balance::{BalanceAssessment, assess_balance};
use super::period_validator::{PeriodCheck, ValidationContext, VacationLookup, validate_period};
use super::working_days::WorkingDayCounter;

/// Why a vacation request was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum VacationVerdict {
    /// Only the status changed along an allowed transition.
    StatusChangeOnly,
    /// Special leave; the entitlement was not consulted.
    SpecialLeave {
        /// The validated period.
        period: VacationPeriod,
        /// Working days the period costs.
        days: Decimal,
    },
    /// The remaining entitlement covers the period.
    WithinBalance {
        /// The validated period.
        period: VacationPeriod,
        /// The figures behind the decision.
        assessment: BalanceAssessment,
    },
}

/// Checks a vacation request against the period rules and the employee's balance.
///
/// # Arguments
///
/// * `request` - The request to check
/// * `context` - Today's date, the user's HR access and the vacation calendar
/// * `entitlement` - The employee's entitlement figures for the request's year
/// * `carry_over_expiry` - Last day the previous year's carry-over can be used
/// * `counter` - Working-day policy
/// * `lookup` - Source of the employee's stored vacations
///
/// # Returns
///
/// The verdict on success, or the first [`VacationFailure`] encountered.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{
///     check_vacation, HolidayCalendar, ValidationContext, VacationVerdict,
/// };
/// use vacation_engine::models::{
///     EmployeeEntitlement, ExistingVacation, VacationFailure, VacationRequest,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
/// let context = ValidationContext {
///     today: d(1, 2),
///     has_hr_access: false,
///     vacation_calendar: None,
/// };
/// let entitlement = EmployeeEntitlement {
///     annual_entitlement: Decimal::from(2),
///     ..Default::default()
/// };
/// let existing: Vec<ExistingVacation> = vec![];
///
/// let request = VacationRequest::new("emp_001", d(4, 6), d(4, 10));
/// let result = check_vacation(
///     &request, &context, &entitlement, d(3, 31), &HolidayCalendar::default(), &existing,
/// );
/// assert_eq!(result, Err(VacationFailure::InsufficientBalance));
///
/// let mut special = request.clone();
/// special.special = true;
/// let result = check_vacation(
///     &special, &context, &entitlement, d(3, 31), &HolidayCalendar::default(), &existing,
/// );
/// assert!(matches!(result, Ok(VacationVerdict::SpecialLeave { .. })));
/// ```
pub fn check_vacation<C, L>(
    request: &VacationRequest,
    context: &ValidationContext<'_>,
    entitlement: &EmployeeEntitlement,
    carry_over_expiry: NaiveDate,
    counter: &C,
    lookup: &L,
) -> Result<VacationVerdict, VacationFailure>
where
    C: WorkingDayCounter + ?Sized,
    L: VacationLookup + ?Sized,
{
    let period = match validate_period(request, context, counter, lookup)? {
        PeriodCheck::StatusChangeOnly => return Ok(VacationVerdict::StatusChangeOnly),
        PeriodCheck::Valid(period) => period,
    };

    if request.special {
        let days = counter.working_days(period.start, period.end, period.half_day);
        debug!(
            employee_id = %request.employee_id,
            days = %days,
            "Special leave, skipping balance check"
        );
        return Ok(VacationVerdict::SpecialLeave { period, days });
    }

    let previous = request.stored.as_ref().map(|s| s.period());
    let Some(assessment) = assess_balance(
        &period,
        previous.as_ref(),
        entitlement,
        carry_over_expiry,
        counter,
    ) else {
        warn!(
            employee_id = %request.employee_id,
            "Entitlement figures out of range, treating balance as insufficient"
        );
        return Err(VacationFailure::InsufficientBalance);
    };

    if !assessment.sufficient {
        return Err(VacationFailure::InsufficientBalance);
    }

    Ok(VacationVerdict::WithinBalance { period, assessment })
}
