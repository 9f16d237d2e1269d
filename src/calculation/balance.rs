//! Vacation balance calculation.
//!
//! This module decides whether the days a vacation costs fit into what is left of
//! the employee's entitlement. Days carried over from the previous year may only
//! be spent up to and including the carry-over expiry date, so the calculation
//! depends on where the period lies relative to that date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{EmployeeEntitlement, VacationPeriod};

use super::working_days::WorkingDayCounter;

/// Where a vacation period lies relative to the carry-over expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarryOverCase {
    /// Starts after the expiry date; only this year's days can be used.
    AfterExpiry,
    /// Ends on or before the expiry date; both pools can be used.
    BeforeExpiry,
    /// Starts on or before the expiry date and ends after it.
    StraddlesExpiry,
}

impl CarryOverCase {
    /// Classifies `period` against `expiry`.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::calculation::CarryOverCase;
    /// use vacation_engine::models::VacationPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
    /// let expiry = d(3, 31);
    ///
    /// let ends_on_expiry = VacationPeriod { start: d(3, 30), end: d(3, 31), half_day: false };
    /// assert_eq!(CarryOverCase::of(&ends_on_expiry, expiry), CarryOverCase::BeforeExpiry);
    ///
    /// let starts_on_expiry = VacationPeriod { start: d(3, 31), end: d(4, 1), half_day: false };
    /// assert_eq!(CarryOverCase::of(&starts_on_expiry, expiry), CarryOverCase::StraddlesExpiry);
    /// ```
    pub fn of(period: &VacationPeriod, expiry: NaiveDate) -> Self {
        if period.start > expiry {
            CarryOverCase::AfterExpiry
        } else if period.end <= expiry {
            CarryOverCase::BeforeExpiry
        } else {
            CarryOverCase::StraddlesExpiry
        }
    }
}

impl std::fmt::Display for CarryOverCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarryOverCase::AfterExpiry => write!(f, "after expiry"),
            CarryOverCase::BeforeExpiry => write!(f, "before expiry"),
            CarryOverCase::StraddlesExpiry => write!(f, "straddles expiry"),
        }
    }
}

/// The figures behind a balance decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceAssessment {
    /// Which carry-over rule applied.
    pub case: CarryOverCase,
    /// Working days the requested period costs.
    pub needed_days: Decimal,
    /// Days left from this year's entitlement, including any released by an edit.
    pub available_this_year: Decimal,
    /// Days left from the previous year's carry-over.
    pub available_carry_over: Decimal,
    /// Working days up to and including the expiry date (straddling periods only).
    pub needed_before_expiry: Option<Decimal>,
    /// Carry-over left after the pre-expiry days (straddling periods only).
    pub carry_over_rest: Option<Decimal>,
    /// Balance left after booking the period; negative when insufficient.
    pub remaining: Decimal,
    /// Whether the balance covers the period.
    pub sufficient: bool,
}

/// Assesses whether the employee's balance covers `period`.
///
/// `previous` is the stored range of the vacation being edited. Its days are
/// already part of `used_this_year`, so they are released before the new
/// period is booked.
///
/// Returns `None` when the figures are too large to compute with; callers
/// treat that as an insufficient balance.
///
/// # Arguments
///
/// * `period` - The validated period to book
/// * `previous` - The stored period of the vacation being edited, if any
/// * `entitlement` - The employee's entitlement figures for the period's year
/// * `carry_over_expiry` - Last day the previous year's carry-over can be used
/// * `counter` - Working-day policy
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{assess_balance, CarryOverCase, HolidayCalendar};
/// use vacation_engine::models::{EmployeeEntitlement, VacationPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
/// let entitlement = EmployeeEntitlement {
///     annual_entitlement: Decimal::from(20),
///     carry_over_granted: Decimal::from(5),
///     ..Default::default()
/// };
/// // Mon Jan 12 .. Wed Jan 14
/// let period = VacationPeriod { start: d(1, 12), end: d(1, 14), half_day: false };
///
/// let assessment = assess_balance(
///     &period, None, &entitlement, d(3, 31), &HolidayCalendar::default(),
/// )
/// .unwrap();
/// assert_eq!(assessment.case, CarryOverCase::BeforeExpiry);
/// assert_eq!(assessment.remaining, Decimal::from(22));
/// assert!(assessment.sufficient);
/// ```
pub fn assess_balance<C>(
    period: &VacationPeriod,
    previous: Option<&VacationPeriod>,
    entitlement: &EmployeeEntitlement,
    carry_over_expiry: NaiveDate,
    counter: &C,
) -> Option<BalanceAssessment>
where
    C: WorkingDayCounter + ?Sized,
{
    let mut available_this_year = entitlement.available_this_year()?;
    let available_carry_over = entitlement.available_carry_over()?;

    if let Some(previous) = previous {
        let released = counter.working_days(previous.start, previous.end, previous.half_day);
        available_this_year = available_this_year.checked_add(released)?;
    }

    let needed_days = counter.working_days(period.start, period.end, period.half_day);
    let case = CarryOverCase::of(period, carry_over_expiry);

    let mut needed_before_expiry = None;
    let mut carry_over_rest = None;

    let remaining = match case {
        CarryOverCase::AfterExpiry => available_this_year.checked_sub(needed_days)?,
        CarryOverCase::BeforeExpiry => available_this_year
            .checked_add(available_carry_over)?
            .checked_sub(needed_days)?,
        CarryOverCase::StraddlesExpiry => {
            // A straddling period spans several days, so it is never a half day
            let before = counter.working_days(period.start, carry_over_expiry, false);
            let rest = available_carry_over.checked_sub(before)?;
            needed_before_expiry = Some(before);
            carry_over_rest = Some(rest);

            if rest <= Decimal::ZERO {
                available_this_year.checked_sub(needed_days)?
            } else {
                available_this_year.checked_sub(needed_days.checked_sub(rest)?)?
            }
        }
    };

    let sufficient = remaining >= Decimal::ZERO;

    debug!(
        case = %case,
        needed_days = %needed_days,
        available_this_year = %available_this_year,
        available_carry_over = %available_carry_over,
        remaining = %remaining,
        sufficient,
        "Assessed vacation balance"
    );

    Some(BalanceAssessment {
        case,
        needed_days,
        available_this_year,
        available_carry_over,
        needed_before_expiry,
        carry_over_rest,
        remaining,
        sufficient,
    })
}

/// Returns true if the employee's balance covers `period`.
///
/// Figures too large to compute with count as insufficient. See
/// [`assess_balance`] for the figures behind the decision.
pub fn has_sufficient_balance<C>(
    period: &VacationPeriod,
    previous: Option<&VacationPeriod>,
    entitlement: &EmployeeEntitlement,
    carry_over_expiry: NaiveDate,
    counter: &C,
) -> bool
where
    C: WorkingDayCounter + ?Sized,
{
    assess_balance(period, previous, entitlement, carry_over_expiry, counter)
        .is_some_and(|assessment| assessment.sufficient)
}
