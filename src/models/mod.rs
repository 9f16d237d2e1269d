//! Core data models for the Vacation Entitlement Engine.
//!
//! This module contains the vacation request, the employee's entitlement
//! figures, holidays, and the rejection reasons reported back to the caller.

mod entitlement;
mod failure;
mod holiday;
mod vacation;

pub use entitlement::{EmployeeEntitlement, EntitlementAttributes};
pub use failure::VacationFailure;
pub use holiday::Holiday;
pub use vacation::{
    CalendarRef, ExistingVacation, StoredVacation, VacationId, VacationPeriod, VacationRequest,
    VacationStatus,
};
