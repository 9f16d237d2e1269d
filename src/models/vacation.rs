//! Vacation request model and related types.
//!
//! This module defines the [`VacationRequest`] being evaluated, the persisted copy
//! it may have been loaded from, and the validated [`VacationPeriod`] handed from
//! the period validator to the balance calculator.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Persistent identifier of a vacation request.
pub type VacationId = u64;

/// The approval status of a vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VacationStatus {
    /// Requested and waiting for a decision.
    InProgress,
    /// Approved by the manager or HR.
    Approved,
    /// Rejected by the manager or HR.
    Rejected,
}

impl VacationStatus {
    /// Returns true if moving from `from` to `to` is one of the administrative
    /// transitions that never needs the dates or the balance re-checked.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::VacationStatus;
    ///
    /// assert!(VacationStatus::is_status_only_transition(
    ///     VacationStatus::InProgress,
    ///     VacationStatus::Approved,
    /// ));
    /// assert!(!VacationStatus::is_status_only_transition(
    ///     VacationStatus::Approved,
    ///     VacationStatus::InProgress,
    /// ));
    /// ```
    pub fn is_status_only_transition(from: VacationStatus, to: VacationStatus) -> bool {
        matches!(
            (from, to),
            (VacationStatus::InProgress, VacationStatus::Approved)
                | (VacationStatus::InProgress, VacationStatus::Rejected)
                | (VacationStatus::Rejected, VacationStatus::Approved)
                | (VacationStatus::Rejected, VacationStatus::InProgress)
        )
    }
}

impl std::fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VacationStatus::InProgress => write!(f, "IN_PROGRESS"),
            VacationStatus::Approved => write!(f, "APPROVED"),
            VacationStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Reference to a shared calendar a vacation can be posted to.
///
/// Two references are equal when their ids are equal; the title is only
/// carried along for messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRef {
    /// Identifier of the calendar.
    pub id: u64,
    /// Display title of the calendar.
    #[serde(default)]
    pub title: String,
}

impl CalendarRef {
    /// Creates a calendar reference.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

impl PartialEq for CalendarRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CalendarRef {}

impl Hash for CalendarRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The persisted copy of a vacation request that is being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredVacation {
    /// Persistent identifier.
    pub id: VacationId,
    /// Status as currently stored.
    pub status: VacationStatus,
    /// Stored first day of the vacation (inclusive).
    pub start_date: NaiveDate,
    /// Stored last day of the vacation (inclusive).
    pub end_date: NaiveDate,
    /// Stored half-day flag.
    #[serde(default)]
    pub half_day: bool,
    /// Stored special-leave flag.
    #[serde(default)]
    pub special: bool,
    /// Calendars the stored vacation is posted to.
    #[serde(default)]
    pub calendars: Vec<CalendarRef>,
}

impl StoredVacation {
    /// Returns the stored date range as a period.
    pub fn period(&self) -> VacationPeriod {
        VacationPeriod {
            start: self.start_date,
            end: self.end_date,
            half_day: self.half_day,
        }
    }
}

/// A vacation request as submitted for validation.
///
/// Dates are optional because a submitted form may leave them empty; the
/// period validator reports that case instead of the caller having to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationRequest {
    /// The employee the vacation is requested for.
    pub employee_id: String,
    /// First day of the vacation (inclusive).
    pub start_date: Option<NaiveDate>,
    /// Last day of the vacation (inclusive).
    pub end_date: Option<NaiveDate>,
    /// Whether only half of the single requested day is taken.
    #[serde(default)]
    pub half_day: bool,
    /// Special leave is exempt from the entitlement check.
    #[serde(default)]
    pub special: bool,
    /// The requested status.
    pub status: VacationStatus,
    /// Calendars the vacation is posted to.
    #[serde(default)]
    pub calendars: Vec<CalendarRef>,
    /// The persisted copy, if this request is an edit of an existing one.
    #[serde(default)]
    pub stored: Option<StoredVacation>,
}

impl VacationRequest {
    /// Creates a new, unsaved in-progress request for the given range.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::VacationRequest;
    /// use chrono::NaiveDate;
    ///
    /// let request = VacationRequest::new(
    ///     "emp_001",
    ///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
    /// );
    /// assert!(request.is_new());
    /// assert!(!request.half_day);
    /// ```
    pub fn new(employee_id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            start_date: Some(start),
            end_date: Some(end),
            half_day: false,
            special: false,
            status: VacationStatus::InProgress,
            calendars: Vec::new(),
            stored: None,
        }
    }

    /// Returns true if the request has not been persisted yet.
    pub fn is_new(&self) -> bool {
        self.stored.is_none()
    }

    /// Returns the persistent id of the request, if it has one.
    pub fn id(&self) -> Option<VacationId> {
        self.stored.as_ref().map(|s| s.id)
    }

    /// Returns the requested range, or `None` while either date is unset.
    pub fn period(&self) -> Option<VacationPeriod> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(VacationPeriod {
                start,
                end,
                half_day: self.half_day,
            }),
            _ => None,
        }
    }

    /// Returns true if this edit changes nothing but the status, and the change is
    /// one of the allowed administrative transitions.
    ///
    /// Dates, the half-day and special-leave flags and the set of calendars
    /// must all match the stored copy; calendar order does not matter.
    pub fn is_status_only_change(&self) -> bool {
        let Some(stored) = &self.stored else {
            return false;
        };

        VacationStatus::is_status_only_transition(stored.status, self.status)
            && self.start_date == Some(stored.start_date)
            && self.end_date == Some(stored.end_date)
            && self.half_day == stored.half_day
            && self.special == stored.special
            && same_calendars(&self.calendars, &stored.calendars)
    }
}

fn same_calendars(a: &[CalendarRef], b: &[CalendarRef]) -> bool {
    a.iter().collect::<HashSet<_>>() == b.iter().collect::<HashSet<_>>()
}

/// A structurally valid, inclusive date range within a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPeriod {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
    /// Whether only half of the single day is taken.
    pub half_day: bool,
}

impl VacationPeriod {
    /// The calendar year the period falls in.
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// Checks whether the period shares at least one day with `start..=end`.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::VacationPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
    /// let period = VacationPeriod { start: d(3, 2), end: d(3, 6), half_day: false };
    ///
    /// assert!(period.overlaps(d(3, 6), d(3, 10)));
    /// assert!(!period.overlaps(d(3, 7), d(3, 10)));
    /// ```
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= end && start <= self.end
    }
}

/// An already stored vacation of an employee, as returned by the overlap lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingVacation {
    /// Persistent identifier.
    pub id: VacationId,
    /// The employee the vacation belongs to.
    pub employee_id: String,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
    /// Current status.
    pub status: VacationStatus,
}
