//! Configuration types for vacation validation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculation::HolidayCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarRef, Holiday};

/// A day of the year without a year, e.g. March 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    /// Month (1-12).
    pub month: u32,
    /// Day of the month (1-31).
    pub day: u32,
}

impl MonthDay {
    /// Resolves the month and day in `year`.
    ///
    /// A day past the end of the month is clamped to the month's last day, so
    /// February 29 resolves to February 28 in non-leap years.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::config::MonthDay;
    /// use chrono::NaiveDate;
    ///
    /// let feb_29 = MonthDay { month: 2, day: 29 };
    /// assert_eq!(feb_29.in_year(2027).unwrap(), NaiveDate::from_ymd_opt(2027, 2, 28).unwrap());
    /// assert_eq!(feb_29.in_year(2028).unwrap(), NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
    /// ```
    pub fn in_year(&self, year: i32) -> EngineResult<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(year, self.month, 1).ok_or_else(|| {
            EngineError::InvalidPolicy {
                field: "carry_over_expiry".to_string(),
                message: format!("month {} does not exist in year {}", self.month, year),
            }
        })?;

        if let Some(date) = first.with_day(self.day) {
            return Ok(date);
        }

        first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| EngineError::InvalidPolicy {
                field: "carry_over_expiry".to_string(),
                message: format!("cannot resolve {}-{} in year {}", self.month, self.day, year),
            })
    }

    fn validate(&self, field: &str) -> EngineResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(EngineError::InvalidPolicy {
                field: format!("{field}.month"),
                message: format!("must be between 1 and 12, got {}", self.month),
            });
        }
        // 2000 is a leap year, so this accepts Feb 29
        let longest = MonthDay {
            month: self.month,
            day: 31,
        }
        .in_year(2000)?
        .day();
        if self.day == 0 || self.day > longest {
            return Err(EngineError::InvalidPolicy {
                field: format!("{field}.day"),
                message: format!(
                    "must be between 1 and {} for month {}, got {}",
                    longest, self.month, self.day
                ),
            });
        }
        Ok(())
    }
}

impl Default for MonthDay {
    fn default() -> Self {
        Self { month: 3, day: 31 }
    }
}

/// Organization-wide vacation policy from policy.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VacationPolicy {
    /// Last day each year on which the previous year's carry-over can be used.
    #[serde(default)]
    pub carry_over_expiry: MonthDay,
    /// Calendar every vacation must be posted to, if any.
    #[serde(default)]
    pub vacation_calendar: Option<CalendarRef>,
}

impl VacationPolicy {
    /// Returns the carry-over expiry date for `year`.
    pub fn carry_over_expiry(&self, year: i32) -> EngineResult<NaiveDate> {
        self.carry_over_expiry.in_year(year)
    }

    /// Checks that the policy values are usable.
    pub fn validate(&self) -> EngineResult<()> {
        self.carry_over_expiry.validate("carry_over_expiry")
    }
}

/// Holiday configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysConfig {
    /// All configured holidays.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl HolidaysConfig {
    /// Checks that every holiday has a work fraction between 0 and 1.
    pub fn validate(&self) -> EngineResult<()> {
        for holiday in &self.holidays {
            if holiday.work_fraction.is_sign_negative()
                || holiday.work_fraction > rust_decimal::Decimal::ONE
            {
                return Err(EngineError::InvalidHoliday {
                    date: holiday.date,
                    message: format!(
                        "work fraction must be between 0 and 1, got {}",
                        holiday.work_fraction
                    ),
                });
            }
        }
        Ok(())
    }
}

/// The complete vacation configuration.
#[derive(Debug, Clone)]
pub struct VacationConfig {
    policy: VacationPolicy,
    calendar: HolidayCalendar,
}

impl VacationConfig {
    /// Creates a new VacationConfig, validating the policy and holidays.
    pub fn new(policy: VacationPolicy, holidays: HolidaysConfig) -> EngineResult<Self> {
        policy.validate()?;
        holidays.validate()?;
        Ok(Self {
            policy,
            calendar: HolidayCalendar::new(holidays.holidays),
        })
    }

    /// Returns the vacation policy.
    pub fn policy(&self) -> &VacationPolicy {
        &self.policy
    }

    /// Returns the holiday calendar used to count working days.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}
