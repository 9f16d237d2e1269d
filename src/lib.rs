//! Vacation Entitlement Engine
//!
//! This crate decides whether a requested leave period is structurally valid and
//! whether the employee has enough vacation days left, taking the carry-over from
//! the previous year and its expiry date into account.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
