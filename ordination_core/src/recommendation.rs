//! Recommended daily dose from patient weight.
//!
//! Medications carry per-kilogram daily factors for light, normal and heavy
//! patients; the recommended figure is the factor for the patient's weight
//! class times the weight itself. The result is advisory and never gates
//! ordination construction.

use crate::{Config, Error, Medication, Patient, Result};
use serde::{Deserialize, Serialize};

/// Patient weight classification
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    Light,
    Normal,
    Heavy,
}

impl WeightClass {
    /// Classify a weight against the configured thresholds.
    ///
    /// Weights strictly below the light threshold are light, strictly above
    /// the heavy threshold are heavy, everything between (both thresholds
    /// included) is normal.
    pub fn for_weight(weight_kg: f64, config: &Config) -> Self {
        if weight_kg < config.dosing.light_weight_max_kg {
            WeightClass::Light
        } else if weight_kg > config.dosing.heavy_weight_min_kg {
            WeightClass::Heavy
        } else {
            WeightClass::Normal
        }
    }
}

/// Recommended daily dose of `medication` for `patient`, in the medication's
/// dispensing unit.
pub fn recommended_daily_dose(
    patient: &Patient,
    medication: &Medication,
    config: &Config,
) -> Result<f64> {
    if !patient.weight_kg.is_finite() || patient.weight_kg <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "patient weight must be positive, got {}",
            patient.weight_kg
        )));
    }

    let class = WeightClass::for_weight(patient.weight_kg, config);
    let factor = match class {
        WeightClass::Light => medication.units_per_kg_light,
        WeightClass::Normal => medication.units_per_kg_normal,
        WeightClass::Heavy => medication.units_per_kg_heavy,
    };

    let dose = patient.weight_kg * factor;
    tracing::debug!(
        "Recommended daily dose of {} for {:?} patient ({} kg): {} {}",
        medication.name,
        class,
        patient.weight_kg,
        dose,
        medication.unit
    );
    Ok(dose)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medication() -> Medication {
        Medication::new("Paracetamol", "Stk", 1.0, 1.5, 2.0)
    }

    #[test]
    fn test_weight_class_boundaries() {
        let config = Config::default();

        assert_eq!(WeightClass::for_weight(24.9, &config), WeightClass::Light);
        assert_eq!(WeightClass::for_weight(25.0, &config), WeightClass::Normal);
        assert_eq!(WeightClass::for_weight(120.0, &config), WeightClass::Normal);
        assert_eq!(WeightClass::for_weight(120.1, &config), WeightClass::Heavy);
    }

    #[test]
    fn test_recommended_dose_uses_matching_factor() {
        let config = Config::default();

        let light = Patient::new("Ida", 20.0);
        let normal = Patient::new("Jens", 80.0);
        let heavy = Patient::new("Finn", 150.0);

        assert_eq!(
            recommended_daily_dose(&light, &medication(), &config).unwrap(),
            20.0
        );
        assert_eq!(
            recommended_daily_dose(&normal, &medication(), &config).unwrap(),
            120.0
        );
        assert_eq!(
            recommended_daily_dose(&heavy, &medication(), &config).unwrap(),
            300.0
        );
    }

    #[test]
    fn test_custom_thresholds_shift_the_classes() {
        let mut config = Config::default();
        config.dosing.light_weight_max_kg = 30.0;
        config.dosing.heavy_weight_min_kg = 100.0;

        assert_eq!(WeightClass::for_weight(28.0, &config), WeightClass::Light);
        assert_eq!(WeightClass::for_weight(101.0, &config), WeightClass::Heavy);
    }

    #[test]
    fn test_non_positive_weight_is_rejected() {
        let config = Config::default();

        for weight in [0.0, -5.0, f64::NAN] {
            let patient = Patient::new("Test", weight);
            let result = recommended_daily_dose(&patient, &medication(), &config);
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
    }
}
