//! Configuration loading and management for the Vacation Entitlement Engine.
//!
//! This module loads the vacation policy (carry-over expiry, vacation calendar)
//! and the holiday list from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Carry-over expires: {}", config.carry_over_expiry(2026).unwrap());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidaysConfig, MonthDay, VacationConfig, VacationPolicy};
