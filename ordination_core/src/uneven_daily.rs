//! Uneven-daily ordination: an arbitrary recurring daily dose pattern.

use crate::ordination::{ensure_quantity, Ordination, OrdinationKind};
use crate::{Medication, Result, TimedDose, TreatmentPeriod};
use serde::Serialize;

/// An ordination dispensing a caller-supplied pattern of timed doses,
/// repeated on every day of its treatment period.
///
/// The pattern has no upper bound on entries, and entries may share a time
/// of day; every entry counts toward the daily figure.
#[derive(Clone, Debug, Serialize)]
pub struct UnevenDaily {
    period: TreatmentPeriod,
    medication: Medication,
    doses: Vec<TimedDose>,
}

impl UnevenDaily {
    /// Create an uneven-daily ordination.
    ///
    /// Every entry quantity must be non-negative. An empty pattern is valid
    /// and simply doses to zero.
    pub fn new(
        period: TreatmentPeriod,
        medication: Medication,
        doses: Vec<TimedDose>,
    ) -> Result<Self> {
        for dose in &doses {
            ensure_quantity("dose entry", dose.quantity)?;
        }

        tracing::debug!(
            "Created uneven-daily ordination of {} with {} entries over {} days",
            medication.name,
            doses.len(),
            period.days()
        );

        Ok(Self {
            period,
            medication,
            doses,
        })
    }

    /// The recurring daily pattern
    pub fn doses(&self) -> &[TimedDose] {
        &self.doses
    }
}

impl Ordination for UnevenDaily {
    fn medication(&self) -> &Medication {
        &self.medication
    }

    fn period(&self) -> &TreatmentPeriod {
        &self.period
    }

    fn kind(&self) -> OrdinationKind {
        OrdinationKind::UnevenDaily
    }

    fn daily_dose(&self) -> f64 {
        self.doses.iter().map(|d| d.quantity).sum()
    }
}
