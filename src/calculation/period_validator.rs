//! Structural validation of a requested vacation period.
//!
//! The checks run in a fixed order and stop at the first failure, so the caller
//! always gets exactly one reason back.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::{
    CalendarRef, ExistingVacation, VacationFailure, VacationPeriod, VacationRequest,
    VacationStatus,
};

use super::working_days::{HALF_DAY, WorkingDayCounter};

/// Looks up the stored vacations of an employee.
pub trait VacationLookup {
    /// Returns the employee's vacations that share at least one day with
    /// `start..=end`. Rejected vacations never block a period and are left out.
    fn find_overlapping(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<ExistingVacation>;
}

impl VacationLookup for [ExistingVacation] {
    fn find_overlapping(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<ExistingVacation> {
        self.iter()
            .filter(|v| v.employee_id == employee_id)
            .filter(|v| v.status != VacationStatus::Rejected)
            .filter(|v| v.start_date <= end && start <= v.end_date)
            .cloned()
            .collect()
    }
}

impl VacationLookup for Vec<ExistingVacation> {
    fn find_overlapping(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<ExistingVacation> {
        self.as_slice().find_overlapping(employee_id, start, end)
    }
}

/// Facts about the acting user and the organization needed for validation.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Today's date; new vacations may not start before it.
    pub today: NaiveDate,
    /// Whether the acting user may create vacations in the past.
    pub has_hr_access: bool,
    /// The organization-wide vacation calendar, if one is configured.
    pub vacation_calendar: Option<&'a CalendarRef>,
}

/// Result of a successful period validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodCheck {
    /// Only the status changed; nothing else was checked.
    StatusChangeOnly,
    /// The period passed every check.
    Valid(VacationPeriod),
}

/// Validates the requested period of a vacation.
///
/// Checks, in order:
/// 1. An edit that only moves the status along an allowed transition passes at once
/// 2. Both dates are set
/// 3. The end date is not before the start date
/// 4. Both dates are in the same year
/// 5. A new vacation does not start before today, unless the user has HR access
/// 6. A half-day vacation covers a single day
/// 7. The period contains at least half a working day
/// 8. No other vacation of the employee overlaps the period
/// 9. The configured vacation calendar, if any, is among the selected calendars
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{
///     HolidayCalendar, PeriodCheck, ValidationContext, validate_period,
/// };
/// use vacation_engine::models::{ExistingVacation, VacationFailure, VacationRequest};
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
/// let context = ValidationContext {
///     today: d(1, 2),
///     has_hr_access: false,
///     vacation_calendar: None,
/// };
/// let existing: Vec<ExistingVacation> = vec![];
///
/// let request = VacationRequest::new("emp_001", d(1, 16), d(1, 12));
/// let result = validate_period(&request, &context, &HolidayCalendar::default(), &existing);
/// assert_eq!(result, Err(VacationFailure::EndBeforeStart));
///
/// let request = VacationRequest::new("emp_001", d(1, 12), d(1, 16));
/// let result = validate_period(&request, &context, &HolidayCalendar::default(), &existing);
/// assert!(matches!(result, Ok(PeriodCheck::Valid(_))));
/// ```
pub fn validate_period<C, L>(
    request: &VacationRequest,
    context: &ValidationContext<'_>,
    counter: &C,
    lookup: &L,
) -> Result<PeriodCheck, VacationFailure>
where
    C: WorkingDayCounter + ?Sized,
    L: VacationLookup + ?Sized,
{
    if request.is_status_only_change() {
        debug!(
            employee_id = %request.employee_id,
            vacation_id = ?request.id(),
            status = %request.status,
            "Status-only change, skipping period checks"
        );
        return Ok(PeriodCheck::StatusChangeOnly);
    }

    let period = request.period().ok_or(VacationFailure::DatesNotSet)?;

    if period.end < period.start {
        return Err(VacationFailure::EndBeforeStart);
    }

    if period.end.year() > period.start.year() {
        return Err(VacationFailure::SpansTwoYears);
    }

    if request.is_new() && period.start < context.today && !context.has_hr_access {
        return Err(VacationFailure::StartDateInPast);
    }

    if period.half_day && period.start != period.end {
        return Err(VacationFailure::HalfDaySpansMultipleDays);
    }

    let days = counter.working_days(period.start, period.end, period.half_day);
    if days < HALF_DAY {
        return Err(VacationFailure::ZeroWorkingDays);
    }

    let own_id = request.id();
    let conflicting: Vec<_> = lookup
        .find_overlapping(&request.employee_id, period.start, period.end)
        .into_iter()
        .filter(|v| Some(v.id) != own_id)
        .map(|v| v.id)
        .collect();
    if !conflicting.is_empty() {
        debug!(
            employee_id = %request.employee_id,
            conflicting = ?conflicting,
            "Requested period overlaps existing vacations"
        );
        return Err(VacationFailure::OverlappingRequest { conflicting });
    }

    if let Some(calendar) = context.vacation_calendar {
        if !request.calendars.contains(calendar) {
            return Err(VacationFailure::MissingVacationCalendar {
                calendar: calendar.title.clone(),
            });
        }
    }

    debug!(
        employee_id = %request.employee_id,
        start = %period.start,
        end = %period.end,
        half_day = period.half_day,
        working_days = %days,
        "Vacation period is valid"
    );
    Ok(PeriodCheck::Valid(period))
}
