//! Working-day counting.
//!
//! This module converts an inclusive date range into the number of vacation days
//! it costs. The [`WorkingDayCounter`] trait is the seam callers can plug their
//! own policy into; [`HolidayCalendar`] is the default Monday-to-Friday policy
//! with configurable holidays.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::Holiday;

/// The cost of a half-day vacation.
pub const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Counts the working days between two inclusive dates.
pub trait WorkingDayCounter {
    /// Returns the number of working days in `start..=end`.
    ///
    /// When `half_day` is set the result is exactly half a day; callers only
    /// set it for single-day ranges.
    fn working_days(&self, start: NaiveDate, end: NaiveDate, half_day: bool) -> Decimal;
}

impl<T: WorkingDayCounter + ?Sized> WorkingDayCounter for &T {
    fn working_days(&self, start: NaiveDate, end: NaiveDate, half_day: bool) -> Decimal {
        (**self).working_days(start, end, half_day)
    }
}

/// Monday-to-Friday working days with holidays taken out.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{HolidayCalendar, WorkingDayCounter};
/// use vacation_engine::models::Holiday;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
/// let calendar = HolidayCalendar::new(vec![Holiday {
///     date: d(1, 1),
///     name: "New Year's Day".to_string(),
///     work_fraction: Decimal::ZERO,
/// }]);
///
/// // Thu Jan 1 (holiday), Fri Jan 2, weekend, Mon Jan 5
/// assert_eq!(calendar.working_days(d(1, 1), d(1, 5), false), Decimal::from(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    holidays: HashMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holidays.
    ///
    /// If two entries share a date the later one wins.
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        Self {
            holidays: holidays.into_iter().map(|h| (h.date, h)).collect(),
        }
    }

    /// Returns the holiday on `date`, if any.
    pub fn holiday(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Returns how much of a working day `date` is worth.
    pub fn day_weight(&self, date: NaiveDate) -> Decimal {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return Decimal::ZERO;
        }
        match self.holidays.get(&date) {
            Some(holiday) => holiday.work_fraction,
            None => Decimal::ONE,
        }
    }

    /// Number of configured holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if no holidays are configured.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl WorkingDayCounter for HolidayCalendar {
    fn working_days(&self, start: NaiveDate, end: NaiveDate, half_day: bool) -> Decimal {
        if half_day {
            return HALF_DAY;
        }
        if start > end {
            return Decimal::ZERO;
        }
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| self.day_weight(date))
            .sum()
    }
}
