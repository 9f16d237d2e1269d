//! Calculation logic for the Vacation Entitlement Engine.
//!
//! This module contains working-day counting, structural validation of a
//! requested vacation period, the carry-over aware balance calculation, and the
//! check that chains them together.

mod balance;
mod period_validator;
mod vacation_check;
mod working_days;

pub use balance::{BalanceAssessment, CarryOverCase, assess_balance, has_sufficient_balance};
pub use period_validator::{PeriodCheck, ValidationContext, VacationLookup, validate_period};
pub use vacation_check::{VacationVerdict, check_vacation};
pub use working_days::{HALF_DAY, HolidayCalendar, WorkingDayCounter};
