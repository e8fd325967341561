//! The shared ordination contract and polymorphic dispatch.
//!
//! Every prescription variant answers the same two dose queries:
//! - `daily_dose`: the per-day figure, computed per variant
//! - `total_dose`: the figure over the whole active period
//!
//! Callers dispatch either through the [`Ordination`] trait or through the
//! [`AnyOrdination`] tagged enum when they hold ordinations of mixed kinds.

use crate::{AsNeeded, Error, FixedDaily, Medication, Result, TreatmentPeriod, UnevenDaily};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of ordination a value is
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrdinationKind {
    FixedDaily,
    UnevenDaily,
    AsNeeded,
}

impl fmt::Display for OrdinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrdinationKind::FixedDaily => "fixed daily",
            OrdinationKind::UnevenDaily => "uneven daily",
            OrdinationKind::AsNeeded => "as needed (PN)",
        };
        f.write_str(label)
    }
}

/// Contract shared by every prescription variant
pub trait Ordination {
    /// The medication this ordination dispenses
    fn medication(&self) -> &Medication;

    /// The inclusive date range the ordination is active for
    fn period(&self) -> &TreatmentPeriod;

    fn kind(&self) -> OrdinationKind;

    /// Dose per day
    fn daily_dose(&self) -> f64;

    /// Total dose over the active period
    ///
    /// Daily-pattern variants scale the daily dose by the period length; the
    /// as-needed variant overrides this to sum actual administrations.
    fn total_dose(&self) -> f64 {
        self.daily_dose() * self.period().days() as f64
    }
}

/// Reject negative or non-finite dose quantities.
///
/// Invariant: a negative quantity must never reach a computed dose figure.
pub(crate) fn ensure_quantity(label: &str, quantity: f64) -> Result<()> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{} must be a non-negative quantity, got {}",
            label, quantity
        )));
    }
    Ok(())
}

/// An ordination of any kind, for heterogeneous collections
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnyOrdination {
    FixedDaily(FixedDaily),
    UnevenDaily(UnevenDaily),
    AsNeeded(AsNeeded),
}

impl AnyOrdination {
    /// The as-needed variant, mutably, if that is what this holds
    ///
    /// Administrations can only be recorded on as-needed ordinations.
    pub fn as_needed_mut(&mut self) -> Option<&mut AsNeeded> {
        match self {
            AnyOrdination::AsNeeded(pn) => Some(pn),
            _ => None,
        }
    }
}

impl Ordination for AnyOrdination {
    fn medication(&self) -> &Medication {
        match self {
            AnyOrdination::FixedDaily(o) => o.medication(),
            AnyOrdination::UnevenDaily(o) => o.medication(),
            AnyOrdination::AsNeeded(o) => o.medication(),
        }
    }

    fn period(&self) -> &TreatmentPeriod {
        match self {
            AnyOrdination::FixedDaily(o) => o.period(),
            AnyOrdination::UnevenDaily(o) => o.period(),
            AnyOrdination::AsNeeded(o) => o.period(),
        }
    }

    fn kind(&self) -> OrdinationKind {
        match self {
            AnyOrdination::FixedDaily(o) => o.kind(),
            AnyOrdination::UnevenDaily(o) => o.kind(),
            AnyOrdination::AsNeeded(o) => o.kind(),
        }
    }

    fn daily_dose(&self) -> f64 {
        match self {
            AnyOrdination::FixedDaily(o) => o.daily_dose(),
            AnyOrdination::UnevenDaily(o) => o.daily_dose(),
            AnyOrdination::AsNeeded(o) => o.daily_dose(),
        }
    }

    fn total_dose(&self) -> f64 {
        match self {
            AnyOrdination::FixedDaily(o) => o.total_dose(),
            AnyOrdination::UnevenDaily(o) => o.total_dose(),
            AnyOrdination::AsNeeded(o) => o.total_dose(),
        }
    }
}

impl From<FixedDaily> for AnyOrdination {
    fn from(value: FixedDaily) -> Self {
        AnyOrdination::FixedDaily(value)
    }
}

impl From<UnevenDaily> for AnyOrdination {
    fn from(value: UnevenDaily) -> Self {
        AnyOrdination::UnevenDaily(value)
    }
}

impl From<AsNeeded> for AnyOrdination {
    fn from(value: AsNeeded) -> Self {
        AnyOrdination::AsNeeded(value)
    }
}
