//! Water dosing

/// Fill volume per kilogram of laundry, in milliliters
pub const WATER_ML_PER_KG: u32 = 5_000;

/// Water dose for a load, in milliliters
///
/// `weight_kg_x10` is the load weight in 0.1 kg units, so the dose is
/// `weight_kg_x10 * 500` (e.g. 2.0 kg → 10 L). Positive for any
/// non-empty load and monotonic in weight.
pub const fn water_dose_ml(weight_kg_x10: u16) -> u32 {
    weight_kg_x10 as u32 * (WATER_ML_PER_KG / 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dose_for_known_loads() {
        assert_eq!(water_dose_ml(20), 10_000); // 2.0 kg → 10 L
        assert_eq!(water_dose_ml(80), 40_000); // 8.0 kg → 40 L
    }

    #[test]
    fn test_dose_is_positive_for_nonempty_load() {
        assert!(water_dose_ml(1) > 0);
    }

    #[test]
    fn test_dose_is_monotonic_in_weight() {
        let mut prev = water_dose_ml(1);
        for weight in 2..=100 {
            let dose = water_dose_ml(weight);
            assert!(dose > prev);
            prev = dose;
        }
    }
}
