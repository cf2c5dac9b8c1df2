//! Simulated water pump
//!
//! Models the drum water level: pouring raises it, draining empties
//! it. Pouring fails when the inlet supply is off or when the fill
//! would exceed drum capacity; draining never fails.

use kyklos_core::traits::{PumpError, WaterPump};

/// Maximum pour operations remembered for inspection
pub const MAX_POUR_LOG: usize = 16;

/// Simulated pump configuration
#[derive(Debug, Clone)]
pub struct SimPumpConfig {
    /// Drum water capacity in milliliters
    pub drum_capacity_ml: u32,
    /// Inlet supply available at start
    pub supply_available: bool,
}

impl Default for SimPumpConfig {
    fn default() -> Self {
        Self {
            drum_capacity_ml: 60_000, // 60 L drum
            supply_available: true,
        }
    }
}

/// Simulated water pump
///
/// Tracks the current drum level and records every accepted pour for
/// inspection between runs.
pub struct SimPump {
    config: SimPumpConfig,
    /// Current drum level (ml)
    level_ml: u32,
    /// Accepted pour volumes, oldest first
    pour_log: heapless::Vec<u32, MAX_POUR_LOG>,
}

impl SimPump {
    /// Create a pump from a configuration
    pub fn new(config: SimPumpConfig) -> Self {
        Self {
            config,
            level_ml: 0,
            pour_log: heapless::Vec::new(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SimPumpConfig {
        &self.config
    }

    /// Current drum water level in milliliters
    pub fn level_ml(&self) -> u32 {
        self.level_ml
    }

    /// Accepted pour volumes, oldest first
    pub fn pour_log(&self) -> &[u32] {
        &self.pour_log
    }

    /// Turn the inlet supply on or off
    pub fn set_supply(&mut self, available: bool) {
        self.config.supply_available = available;
    }
}

impl Default for SimPump {
    fn default() -> Self {
        Self::new(SimPumpConfig::default())
    }
}

impl WaterPump for SimPump {
    fn pour(&mut self, volume_ml: u32) -> Result<(), PumpError> {
        if !self.config.supply_available {
            return Err(PumpError::NoSupply);
        }

        let new_level = self.level_ml.saturating_add(volume_ml);
        if new_level > self.config.drum_capacity_ml {
            return Err(PumpError::Overflow);
        }

        self.level_ml = new_level;
        // Log full is a test-rig concern, not a pump fault
        let _ = self.pour_log.push(volume_ml);
        Ok(())
    }

    fn release(&mut self) {
        self.level_ml = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pour_raises_level() {
        let mut pump = SimPump::default();
        pump.pour(10_000).unwrap();
        assert_eq!(pump.level_ml(), 10_000);
        assert_eq!(pump.pour_log(), &[10_000]);
    }

    #[test]
    fn test_release_drains_completely() {
        let mut pump = SimPump::default();
        pump.pour(25_000).unwrap();
        pump.release();
        assert_eq!(pump.level_ml(), 0);
    }

    #[test]
    fn test_no_supply_fault() {
        let mut pump = SimPump::default();
        pump.set_supply(false);
        assert_eq!(pump.pour(10_000), Err(PumpError::NoSupply));
        assert_eq!(pump.level_ml(), 0);
    }

    #[test]
    fn test_overflow_fault_leaves_level_unchanged() {
        let mut pump = SimPump::new(SimPumpConfig {
            drum_capacity_ml: 20_000,
            supply_available: true,
        });
        pump.pour(15_000).unwrap();
        assert_eq!(pump.pour(10_000), Err(PumpError::Overflow));
        assert_eq!(pump.level_ml(), 15_000);
    }

    #[test]
    fn test_fill_to_exact_capacity_is_accepted() {
        let mut pump = SimPump::new(SimPumpConfig {
            drum_capacity_ml: 20_000,
            supply_available: true,
        });
        pump.pour(20_000).unwrap();
        assert_eq!(pump.level_ml(), 20_000);
    }
}
