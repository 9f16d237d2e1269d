//! HTTP API module for the Vacation Entitlement Engine.
//!
//! This module exposes the vacation check and the working-day counter as REST
//! endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ValidateVacationRequest, WorkingDaysRequest};
pub use response::{ApiError, ValidationResponse, WorkingDaysResponse};
pub use state::AppState;
