//! As-needed (PN) ordination: doses given only on recorded dates.

use crate::ordination::{ensure_quantity, Ordination, OrdinationKind};
use crate::{Error, Medication, Result, TreatmentPeriod};
use chrono::NaiveDate;
use serde::Serialize;

/// An ordination with a fixed per-administration quantity, dispensed only
/// when the patient needs it and recorded one administration at a time.
///
/// The administration list is owned exclusively by the instance and grows
/// through [`AsNeeded::give_dose`]. The `&mut` receiver serializes appends;
/// to share one instance across threads, put it behind a single `Mutex`.
#[derive(Clone, Debug, Serialize)]
pub struct AsNeeded {
    period: TreatmentPeriod,
    medication: Medication,
    dose_quantity: f64,
    max_doses_per_day: u32,
    administrations: Vec<NaiveDate>,
}

impl AsNeeded {
    /// Create an as-needed ordination with no administrations recorded.
    ///
    /// The per-administration quantity must be non-negative, and the daily
    /// maximum must be at least 1 (a cap of zero could never be satisfied).
    pub fn new(
        period: TreatmentPeriod,
        medication: Medication,
        dose_quantity: f64,
        max_doses_per_day: u32,
    ) -> Result<Self> {
        ensure_quantity("dose quantity", dose_quantity)?;
        if max_doses_per_day == 0 {
            return Err(Error::InvalidArgument(
                "maximum doses per day must be at least 1".into(),
            ));
        }

        Ok(Self {
            period,
            medication,
            dose_quantity,
            max_doses_per_day,
            administrations: Vec::new(),
        })
    }

    /// Record one administration on `date`.
    ///
    /// Rejects dates outside the treatment period and administrations beyond
    /// the per-day maximum. A rejected call leaves the record unchanged.
    pub fn give_dose(&mut self, date: NaiveDate) -> Result<()> {
        if !self.period.contains(date) {
            return Err(Error::InvalidArgument(format!(
                "administration on {} falls outside the treatment period {} to {}",
                date,
                self.period.start(),
                self.period.end()
            )));
        }

        if self.doses_on(date) >= self.max_doses_per_day as usize {
            return Err(Error::InvalidArgument(format!(
                "administration on {} would exceed the maximum of {} doses per day",
                date, self.max_doses_per_day
            )));
        }

        self.administrations.push(date);
        tracing::debug!(
            "Recorded administration of {} on {} ({} total)",
            self.medication.name,
            date,
            self.administrations.len()
        );
        Ok(())
    }

    /// Number of administrations recorded on one calendar date
    pub fn doses_on(&self, date: NaiveDate) -> usize {
        self.administrations.iter().filter(|d| **d == date).count()
    }

    /// All recorded administration dates, in the order they were given
    pub fn administrations(&self) -> &[NaiveDate] {
        &self.administrations
    }

    pub fn dose_quantity(&self) -> f64 {
        self.dose_quantity
    }

    pub fn max_doses_per_day(&self) -> u32 {
        self.max_doses_per_day
    }
}

impl Ordination for AsNeeded {
    fn medication(&self) -> &Medication {
        &self.medication
    }

    fn period(&self) -> &TreatmentPeriod {
        &self.period
    }

    fn kind(&self) -> OrdinationKind {
        OrdinationKind::AsNeeded
    }

    /// Average dose per day over the span actually observed: total dose
    /// divided by the inclusive day count between the earliest and latest
    /// administration. With fewer than two distinct administration dates
    /// there is no observed span, and the figure is 0.
    fn daily_dose(&self) -> f64 {
        let Some(first) = self.administrations.iter().min().copied() else {
            return 0.0;
        };
        let last = self
            .administrations
            .iter()
            .max()
            .copied()
            .unwrap_or(first);
        if first == last {
            return 0.0;
        }

        let span_days = (last - first).num_days() + 1;
        self.total_dose() / span_days as f64
    }

    /// Total quantity actually administered; the full treatment span plays
    /// no part here.
    fn total_dose(&self) -> f64 {
        self.administrations.len() as f64 * self.dose_quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, day).unwrap()
    }

    fn period(from_day: u32, to_day: u32) -> TreatmentPeriod {
        TreatmentPeriod::new(date(from_day), date(to_day)).unwrap()
    }

    fn medication() -> Medication {
        Medication::new("Methotrexat", "Stk", 0.01, 0.015, 0.02)
    }

    #[test]
    fn test_daily_dose_averages_over_observed_span() {
        crate::logging::init_test();

        let mut pn = AsNeeded::new(period(2, 4), medication(), 6.0, 4).unwrap();
        pn.give_dose(date(2)).unwrap();
        pn.give_dose(date(4)).unwrap();

        // 2 administrations of 6 over Dec 2..=4 = 12 / 3
        assert_eq!(pn.daily_dose(), 4.0);
        assert_eq!(pn.total_dose(), 12.0);
    }

    #[test]
    fn test_total_dose_sums_administrations() {
        let mut pn = AsNeeded::new(period(2, 4), medication(), 5.0, 4).unwrap();
        pn.give_dose(date(2)).unwrap();
        pn.give_dose(date(3)).unwrap();
        pn.give_dose(date(4)).unwrap();

        assert_eq!(pn.total_dose(), 15.0);
    }

    #[test]
    fn test_no_administrations_doses_to_zero() {
        let pn = AsNeeded::new(period(2, 4), medication(), 6.0, 4).unwrap();
        assert_eq!(pn.total_dose(), 0.0);
        assert_eq!(pn.daily_dose(), 0.0);
    }

    #[test]
    fn test_single_administration_date_has_no_observed_span() {
        let mut pn = AsNeeded::new(period(2, 4), medication(), 6.0, 4).unwrap();
        pn.give_dose(date(3)).unwrap();
        pn.give_dose(date(3)).unwrap();

        // Two administrations but one distinct date: total is real, the
        // per-day average is undefined and reported as 0.
        assert_eq!(pn.total_dose(), 12.0);
        assert_eq!(pn.daily_dose(), 0.0);
    }

    #[test]
    fn test_give_dose_outside_period_is_rejected() {
        let mut pn = AsNeeded::new(period(2, 4), medication(), 6.0, 4).unwrap();
        let result = pn.give_dose(date(5));

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(pn.administrations().is_empty());
    }

    #[test]
    fn test_give_dose_accepts_period_boundaries() {
        let mut pn = AsNeeded::new(period(2, 4), medication(), 6.0, 4).unwrap();
        pn.give_dose(date(2)).unwrap();
        pn.give_dose(date(4)).unwrap();
        assert_eq!(pn.administrations().len(), 2);
    }

    #[test]
    fn test_daily_cap_is_enforced_per_date() {
        let mut pn = AsNeeded::new(period(2, 4), medication(), 2.0, 2).unwrap();
        pn.give_dose(date(3)).unwrap();
        pn.give_dose(date(3)).unwrap();

        let result = pn.give_dose(date(3));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(pn.doses_on(date(3)), 2);

        // Other dates are unaffected by one date hitting its cap
        pn.give_dose(date(4)).unwrap();
        assert_eq!(pn.administrations().len(), 3);
    }

    #[test]
    fn test_zero_daily_maximum_is_rejected() {
        let result = AsNeeded::new(period(2, 4), medication(), 6.0, 0);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_negative_dose_quantity_is_rejected() {
        let result = AsNeeded::new(period(2, 4), medication(), -6.0, 4);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_out_of_order_administrations_still_span_min_to_max() {
        let mut pn = AsNeeded::new(period(2, 8), medication(), 3.0, 4).unwrap();
        pn.give_dose(date(6)).unwrap();
        pn.give_dose(date(2)).unwrap();
        pn.give_dose(date(4)).unwrap();

        // 3 administrations of 3 over Dec 2..=6 = 9 / 5
        assert_eq!(pn.daily_dose(), 9.0 / 5.0);
    }

    #[test]
    fn test_repeated_queries_are_idempotent() {
        let mut pn = AsNeeded::new(period(2, 4), medication(), 6.0, 4).unwrap();
        pn.give_dose(date(2)).unwrap();
        pn.give_dose(date(4)).unwrap();

        assert_eq!(pn.daily_dose(), pn.daily_dose());
        assert_eq!(pn.total_dose(), pn.total_dose());
    }
}
