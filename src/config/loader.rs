//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the vacation
//! policy and holidays from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::calculation::HolidayCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::CalendarRef;

use super::types::{HolidaysConfig, VacationConfig, VacationPolicy};

/// Loads and provides access to the vacation configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml    # Carry-over expiry and vacation calendar
/// └── holidays.yaml  # Holidays and half holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let expiry = loader.carry_over_expiry(2026).unwrap();
/// println!("Carry-over expires on {}", expiry);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: VacationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// `policy.yaml` is required. `holidays.yaml` is optional; without it only
    /// weekends are free.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - policy.yaml is missing
    /// - Any file contains invalid YAML
    /// - The policy or a holiday contains an unusable value
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<VacationPolicy>(&path.join("policy.yaml"))?;

        let holidays_path = path.join("holidays.yaml");
        let holidays = if holidays_path.exists() {
            Self::load_yaml::<HolidaysConfig>(&holidays_path)?
        } else {
            HolidaysConfig::default()
        };

        let loader = Self::from_parts(policy, holidays)?;
        info!(
            path = %path.display(),
            holidays = loader.calendar().len(),
            "Loaded vacation configuration"
        );
        Ok(loader)
    }

    /// Builds a loader from already parsed parts.
    pub fn from_parts(policy: VacationPolicy, holidays: HolidaysConfig) -> EngineResult<Self> {
        Ok(Self {
            config: VacationConfig::new(policy, holidays)?,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &VacationConfig {
        &self.config
    }

    /// Returns the vacation policy.
    pub fn policy(&self) -> &VacationPolicy {
        self.config.policy()
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        self.config.calendar()
    }

    /// Returns the configured vacation calendar, if any.
    pub fn vacation_calendar(&self) -> Option<&CalendarRef> {
        self.config.policy().vacation_calendar.as_ref()
    }

    /// Returns the carry-over expiry date for `year`.
    pub fn carry_over_expiry(&self, year: i32) -> EngineResult<NaiveDate> {
        self.config.policy().carry_over_expiry(year)
    }
}
