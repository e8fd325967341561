#![forbid(unsafe_code)]

//! Core domain model and dosage logic for medication ordinations.
//!
//! This crate provides:
//! - Domain types (medications, patients, timed dose entries)
//! - Treatment-period date arithmetic
//! - The ordination contract and its three variants
//!   (fixed-daily, uneven-daily, as-needed)
//! - Recommended daily dose from patient weight
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod period;
pub mod config;
pub mod logging;
pub mod ordination;
pub mod fixed_daily;
pub mod uneven_daily;
pub mod as_needed;
pub mod recommendation;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use period::TreatmentPeriod;
pub use config::Config;
pub use ordination::{AnyOrdination, Ordination, OrdinationKind};
pub use fixed_daily::FixedDaily;
pub use uneven_daily::UnevenDaily;
pub use as_needed::AsNeeded;
pub use recommendation::{recommended_daily_dose, WeightClass};
