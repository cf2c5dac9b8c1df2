//! Drum load capacity check

use crate::config::LaundryBatch;

/// Maximum load the drum accepts, in 0.1 kg units (8.0 kg)
///
/// Independent of material: an overweight load risks bearing damage
/// whatever the fabric. The boundary is inclusive on the pass side,
/// so a load of exactly 8.0 kg is accepted.
pub const MAX_LOAD_KG_X10: u16 = 80;

/// Load check status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadStatus {
    /// Load is within drum capacity
    Ok,
    /// Load exceeds drum capacity
    Overweight,
}

/// Check a batch against the drum capacity
///
/// This runs before dirt detection and before any hardware interaction.
pub const fn check_load(batch: &LaundryBatch) -> LoadStatus {
    if batch.weight_kg_x10 > MAX_LOAD_KG_X10 {
        LoadStatus::Overweight
    } else {
        LoadStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Material;

    #[test]
    fn test_light_load_accepted() {
        let batch = LaundryBatch::new(Material::Jeans, 20); // 2.0 kg
        assert_eq!(check_load(&batch), LoadStatus::Ok);
    }

    #[test]
    fn test_heavy_load_rejected() {
        let batch = LaundryBatch::new(Material::Cotton, 100); // 10.0 kg
        assert_eq!(check_load(&batch), LoadStatus::Overweight);
    }

    #[test]
    fn test_capacity_boundary_is_inclusive() {
        let at_limit = LaundryBatch::new(Material::Cotton, MAX_LOAD_KG_X10);
        assert_eq!(check_load(&at_limit), LoadStatus::Ok);

        let over_limit = LaundryBatch::new(Material::Cotton, MAX_LOAD_KG_X10 + 1);
        assert_eq!(check_load(&over_limit), LoadStatus::Overweight);
    }

    #[test]
    fn test_material_does_not_affect_capacity() {
        for material in [
            Material::Cotton,
            Material::Jeans,
            Material::Wool,
            Material::Synthetic,
            Material::Delicate,
        ] {
            let batch = LaundryBatch::new(material, 100);
            assert_eq!(check_load(&batch), LoadStatus::Overweight);
        }
    }
}
