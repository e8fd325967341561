//! Core domain types for the ordination system.
//!
//! This module defines the plain records the dosage engine consumes:
//! - Medications and their per-kilogram daily dosing factors
//! - Patients (read only by the recommendation module)
//! - Timed dose entries for recurring daily patterns

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Medication
// ============================================================================

/// A medication dispensed by an ordination.
///
/// The three per-kilogram factors give the recommended daily intake for
/// light, normal and heavy patients. The dose-calculation engine never reads
/// them; only the recommendation module does.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    /// Dispensing unit, e.g. "Stk" or "ml"
    pub unit: String,
    pub units_per_kg_light: f64,
    pub units_per_kg_normal: f64,
    pub units_per_kg_heavy: f64,
}

impl Medication {
    /// Create a medication with a fresh id
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        units_per_kg_light: f64,
        units_per_kg_normal: f64,
        units_per_kg_heavy: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            unit: unit.into(),
            units_per_kg_light,
            units_per_kg_normal,
            units_per_kg_heavy,
        }
    }
}

// ============================================================================
// Patient
// ============================================================================

/// A patient record
///
/// The core holds no patient lists; callers pass the record in when they
/// want a weight-based dose recommendation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub weight_kg: f64,
}

impl Patient {
    /// Create a patient with a fresh id
    pub fn new(name: impl Into<String>, weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            weight_kg,
        }
    }
}

// ============================================================================
// Timed Dose
// ============================================================================

/// One entry in a recurring daily dose pattern.
///
/// Carries a time of day only: the pattern repeats every day of the
/// ordination's period, so calendar dates play no part.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimedDose {
    pub time: NaiveTime,
    pub quantity: f64,
}

impl TimedDose {
    pub fn new(time: NaiveTime, quantity: f64) -> Self {
        Self { time, quantity }
    }
}
