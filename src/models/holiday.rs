//! Holiday model.
//!
//! This module contains the [`Holiday`] type the working-day counter uses to
//! reduce the weight of individual calendar days.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A day on which less than a full working day is owed.
///
/// Most holidays are free days (`work_fraction` of 0). Some, like Christmas Eve
/// or New Year's Eve, are half working days and only cost half a vacation day.
///
/// # Example
///
/// ```
/// use vacation_engine::models::Holiday;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let christmas_eve = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 12, 24).unwrap(),
///     name: "Christmas Eve".to_string(),
///     work_fraction: Decimal::new(5, 1),
/// };
/// assert!(!christmas_eve.is_full_holiday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "New Year's Day").
    pub name: String,
    /// Fraction of a working day still owed on this date.
    #[serde(default)]
    pub work_fraction: Decimal,
}

impl Holiday {
    /// Returns true if no work at all is owed on this date.
    pub fn is_full_holiday(&self) -> bool {
        self.work_fraction.is_zero()
    }
}
