//! Rejection reasons for a vacation request.

use thiserror::Error;

use super::VacationId;

/// Why a vacation request was rejected.
///
/// Exactly one reason is reported per check: validation stops at the first
/// failing rule. Each reason carries a stable message key the caller resolves
/// to a localized text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VacationFailure {
    /// Start or end date is missing.
    #[error("start and end date must both be set")]
    DatesNotSet,

    /// The end date lies before the start date.
    #[error("end date lies before start date")]
    EndBeforeStart,

    /// The range runs into the next year.
    #[error("vacation must not span two years")]
    SpansTwoYears,

    /// A new request starts before today and the user may not backdate.
    #[error("start date lies in the past")]
    StartDateInPast,

    /// The half-day flag is set on a range of more than one day.
    #[error("a half-day vacation must start and end on the same day")]
    HalfDaySpansMultipleDays,

    /// The range contains less than half a working day.
    #[error("the requested period contains no working days")]
    ZeroWorkingDays,

    /// Another request of the same employee already covers part of the range.
    #[error("a vacation already exists in this period (ids: {conflicting:?})")]
    OverlappingRequest {
        /// Ids of the conflicting requests.
        conflicting: Vec<VacationId>,
    },

    /// The organization's vacation calendar is not among the selected calendars.
    #[error("vacation must be posted to calendar '{calendar}'")]
    MissingVacationCalendar {
        /// Title of the configured vacation calendar.
        calendar: String,
    },

    /// Not enough vacation days are left for the requested period.
    #[error("not enough vacation days left")]
    InsufficientBalance,
}

impl VacationFailure {
    /// Machine-readable code of the failure.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::VacationFailure;
    ///
    /// assert_eq!(VacationFailure::EndBeforeStart.code(), "END_BEFORE_START");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            VacationFailure::DatesNotSet => "DATES_NOT_SET",
            VacationFailure::EndBeforeStart => "END_BEFORE_START",
            VacationFailure::SpansTwoYears => "SPANS_TWO_YEARS",
            VacationFailure::StartDateInPast => "START_DATE_IN_PAST",
            VacationFailure::HalfDaySpansMultipleDays => "HALF_DAY_SPANS_MULTIPLE_DAYS",
            VacationFailure::ZeroWorkingDays => "ZERO_WORKING_DAYS",
            VacationFailure::OverlappingRequest { .. } => "OVERLAPPING_REQUEST",
            VacationFailure::MissingVacationCalendar { .. } => "MISSING_VACATION_CALENDAR",
            VacationFailure::InsufficientBalance => "INSUFFICIENT_BALANCE",
        }
    }

    /// Key of the localized message shown to the user.
    pub fn message_key(&self) -> &'static str {
        match self {
            VacationFailure::DatesNotSet => "vacation.validate.datenotset",
            VacationFailure::EndBeforeStart => "vacation.validate.endbeforestart",
            VacationFailure::SpansTwoYears => "vacation.validate.vacationIn2Years",
            VacationFailure::StartDateInPast => "vacation.validate.startDateBeforeNow",
            VacationFailure::HalfDaySpansMultipleDays => {
                "vacation.validate.moreThanOneDaySelectedOnHalfDay"
            }
            VacationFailure::ZeroWorkingDays => "vacation.validate.daysarenull",
            VacationFailure::OverlappingRequest { .. } => "vacation.validate.leaveapplicationexists",
            VacationFailure::MissingVacationCalendar { .. } => "vacation.validate.noCalender",
            VacationFailure::InsufficientBalance => "vacation.validate.notEnoughVacationDaysLeft",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_failures() -> Vec<VacationFailure> {
        vec![
            VacationFailure::DatesNotSet,
            VacationFailure::EndBeforeStart,
            VacationFailure::SpansTwoYears,
            VacationFailure::StartDateInPast,
            VacationFailure::HalfDaySpansMultipleDays,
            VacationFailure::ZeroWorkingDays,
            VacationFailure::OverlappingRequest {
                conflicting: vec![1],
            },
            VacationFailure::MissingVacationCalendar {
                calendar: "Vacation".to_string(),
            },
            VacationFailure::InsufficientBalance,
        ]
    }

    #[test]
    fn test_message_keys_are_distinct() {
        let keys: HashSet<_> = all_failures().iter().map(|f| f.message_key()).collect();
        assert_eq!(keys.len(), all_failures().len());
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes: HashSet<_> = all_failures().iter().map(|f| f.code()).collect();
        assert_eq!(codes.len(), all_failures().len());
    }

    #[test]
    fn test_missing_calendar_displays_title() {
        let failure = VacationFailure::MissingVacationCalendar {
            calendar: "Company Vacation".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "vacation must be posted to calendar 'Company Vacation'"
        );
    }

    #[test]
    fn test_overlap_displays_conflicting_ids() {
        let failure = VacationFailure::OverlappingRequest {
            conflicting: vec![4, 9],
        };
        assert_eq!(
            failure.to_string(),
            "a vacation already exists in this period (ids: [4, 9])"
        );
    }
}
