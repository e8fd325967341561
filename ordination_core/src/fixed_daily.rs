//! Fixed-daily ordination: the same four dose slots every day.

use crate::ordination::{ensure_quantity, Ordination, OrdinationKind};
use crate::{Medication, Result, TreatmentPeriod};
use serde::Serialize;

/// An ordination dispensing fixed morning, noon, evening and night doses on
/// every day of its treatment period.
///
/// All state is set at construction; dose queries are pure reads.
#[derive(Clone, Debug, Serialize)]
pub struct FixedDaily {
    period: TreatmentPeriod,
    medication: Medication,
    morning: f64,
    noon: f64,
    evening: f64,
    night: f64,
}

impl FixedDaily {
    /// Create a fixed-daily ordination.
    ///
    /// Each of the four slot quantities must be non-negative; a negative
    /// slot is rejected here rather than ever surfacing as a negative dose
    /// figure.
    pub fn new(
        period: TreatmentPeriod,
        medication: Medication,
        morning: f64,
        noon: f64,
        evening: f64,
        night: f64,
    ) -> Result<Self> {
        ensure_quantity("morning dose", morning)?;
        ensure_quantity("noon dose", noon)?;
        ensure_quantity("evening dose", evening)?;
        ensure_quantity("night dose", night)?;

        tracing::debug!(
            "Created fixed-daily ordination of {} over {} days",
            medication.name,
            period.days()
        );

        Ok(Self {
            period,
            medication,
            morning,
            noon,
            evening,
            night,
        })
    }

    pub fn morning(&self) -> f64 {
        self.morning
    }

    pub fn noon(&self) -> f64 {
        self.noon
    }

    pub fn evening(&self) -> f64 {
        self.evening
    }

    pub fn night(&self) -> f64 {
        self.night
    }
}

impl Ordination for FixedDaily {
    fn medication(&self) -> &Medication {
        &self.medication
    }

    fn period(&self) -> &TreatmentPeriod {
        &self.period
    }

    fn kind(&self) -> OrdinationKind {
        OrdinationKind::FixedDaily
    }

    fn daily_dose(&self) -> f64 {
        self.morning + self.noon + self.evening + self.night
    }
}
