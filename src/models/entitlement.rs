//! Employee entitlement figures.
//!
//! The persistence layer stores these figures as optional per-employee
//! attributes. [`EntitlementAttributes`] mirrors that raw shape and
//! [`EmployeeEntitlement`] is the typed view the balance calculator works on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw entitlement attributes of an employee, any of which may be unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitlementAttributes {
    /// Vacation days granted for the current year.
    #[serde(default)]
    pub annual_entitlement: Option<Decimal>,
    /// Days carried over from the previous year.
    #[serde(default)]
    pub carry_over_granted: Option<Decimal>,
    /// Days of the carry-over already taken.
    #[serde(default)]
    pub carry_over_used: Option<Decimal>,
    /// Days approved or planned in the request's year, across all requests.
    #[serde(default)]
    pub used_this_year: Option<Decimal>,
}

/// Typed entitlement figures of an employee for one year.
///
/// # Example
///
/// ```
/// use vacation_engine::models::{EmployeeEntitlement, EntitlementAttributes};
/// use rust_decimal::Decimal;
///
/// let entitlement = EmployeeEntitlement::from(EntitlementAttributes {
///     annual_entitlement: Some(Decimal::from(30)),
///     carry_over_granted: Some(Decimal::from(5)),
///     carry_over_used: Some(Decimal::from(2)),
///     used_this_year: Some(Decimal::from(10)),
/// });
///
/// // 10 used this year, 2 of them from the carry-over
/// assert_eq!(entitlement.available_this_year(), Some(Decimal::from(22)));
/// assert_eq!(entitlement.available_carry_over(), Some(Decimal::from(3)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeEntitlement {
    /// Vacation days granted for the current year.
    pub annual_entitlement: Decimal,
    /// Days carried over from the previous year.
    pub carry_over_granted: Decimal,
    /// Days of the carry-over already taken.
    pub carry_over_used: Decimal,
    /// Days approved or planned in the request's year, across all requests.
    pub used_this_year: Decimal,
}

impl EmployeeEntitlement {
    /// Days left from this year's entitlement.
    ///
    /// Days drawn from the carry-over are part of `used_this_year` but do not
    /// reduce this year's pool. Returns `None` if the figures overflow.
    pub fn available_this_year(&self) -> Option<Decimal> {
        let used = self.used_this_year.checked_sub(self.carry_over_used)?;
        self.annual_entitlement.checked_sub(used)
    }

    /// Days left from the previous year's carry-over, or `None` on overflow.
    pub fn available_carry_over(&self) -> Option<Decimal> {
        self.carry_over_granted.checked_sub(self.carry_over_used)
    }
}

impl From<EntitlementAttributes> for EmployeeEntitlement {
    fn from(attrs: EntitlementAttributes) -> Self {
        Self {
            annual_entitlement: attrs.annual_entitlement.unwrap_or(Decimal::ZERO),
            carry_over_granted: attrs.carry_over_granted.unwrap_or(Decimal::ZERO),
            carry_over_used: attrs.carry_over_used.unwrap_or(Decimal::ZERO),
            used_this_year: attrs.used_this_year.unwrap_or(Decimal::ZERO),
        }
    }
}
