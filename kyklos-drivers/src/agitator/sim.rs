//! Simulated drum drive
//!
//! Models the agitator motor: wash runs accumulate toward a thermal
//! limit, a jammed drum stalls both washing and spinning, and an
//! unpowered drive refuses to run at all.

use kyklos_core::traits::{Agitator, EngineError};

/// Maximum wash runs remembered for inspection
pub const MAX_RUN_LOG: usize = 16;

/// Simulated agitator configuration
#[derive(Debug, Clone)]
pub struct SimAgitatorConfig {
    /// Total wash minutes before thermal protection trips
    pub thermal_limit_min: u16,
    /// Drive power available at start
    pub powered: bool,
}

impl Default for SimAgitatorConfig {
    fn default() -> Self {
        Self {
            thermal_limit_min: 240,
            powered: true,
        }
    }
}

/// Simulated agitator
///
/// Records completed wash runs and spins for inspection between runs.
pub struct SimAgitator {
    config: SimAgitatorConfig,
    /// Drum jammed (stalls wash and spin)
    jammed: bool,
    /// Accumulated wash minutes since the last cool-down
    total_run_min: u16,
    /// Completed wash durations, oldest first
    run_log: heapless::Vec<u16, MAX_RUN_LOG>,
    /// Completed spin stages
    spin_count: u32,
}

impl SimAgitator {
    /// Create an agitator from a configuration
    pub fn new(config: SimAgitatorConfig) -> Self {
        Self {
            config,
            jammed: false,
            total_run_min: 0,
            run_log: heapless::Vec::new(),
            spin_count: 0,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SimAgitatorConfig {
        &self.config
    }

    /// Jam or free the drum
    pub fn set_jammed(&mut self, jammed: bool) {
        self.jammed = jammed;
    }

    /// Turn drive power on or off
    pub fn set_powered(&mut self, powered: bool) {
        self.config.powered = powered;
    }

    /// Completed wash durations, oldest first
    pub fn run_log(&self) -> &[u16] {
        &self.run_log
    }

    /// Number of completed spin stages
    pub fn spin_count(&self) -> u32 {
        self.spin_count
    }

    /// Accumulated wash minutes since the last cool-down
    pub fn total_run_min(&self) -> u16 {
        self.total_run_min
    }

    /// Reset the thermal accumulator (the machine cooled down)
    pub fn cool_down(&mut self) {
        self.total_run_min = 0;
    }

    fn check_drive(&self) -> Result<(), EngineError> {
        if !self.config.powered {
            return Err(EngineError::Unpowered);
        }
        if self.jammed {
            return Err(EngineError::Stalled);
        }
        Ok(())
    }
}

impl Default for SimAgitator {
    fn default() -> Self {
        Self::new(SimAgitatorConfig::default())
    }
}

impl Agitator for SimAgitator {
    fn run_washing(&mut self, minutes: u16) -> Result<(), EngineError> {
        self.check_drive()?;

        let total = self.total_run_min.saturating_add(minutes);
        if total > self.config.thermal_limit_min {
            return Err(EngineError::Overheated);
        }

        self.total_run_min = total;
        let _ = self.run_log.push(minutes);
        Ok(())
    }

    fn spin(&mut self) -> Result<(), EngineError> {
        self.check_drive()?;
        self.spin_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wash_and_spin_recorded() {
        let mut drive = SimAgitator::default();
        drive.run_washing(60).unwrap();
        drive.spin().unwrap();

        assert_eq!(drive.run_log(), &[60]);
        assert_eq!(drive.spin_count(), 1);
        assert_eq!(drive.total_run_min(), 60);
    }

    #[test]
    fn test_jammed_drum_stalls() {
        let mut drive = SimAgitator::default();
        drive.set_jammed(true);

        assert_eq!(drive.run_washing(30), Err(EngineError::Stalled));
        assert_eq!(drive.spin(), Err(EngineError::Stalled));

        drive.set_jammed(false);
        assert!(drive.run_washing(30).is_ok());
    }

    #[test]
    fn test_unpowered_drive_refuses() {
        let mut drive = SimAgitator::default();
        drive.set_powered(false);

        assert_eq!(drive.run_washing(30), Err(EngineError::Unpowered));
        assert_eq!(drive.spin(), Err(EngineError::Unpowered));
    }

    #[test]
    fn test_thermal_limit_trips() {
        let mut drive = SimAgitator::new(SimAgitatorConfig {
            thermal_limit_min: 100,
            powered: true,
        });

        drive.run_washing(90).unwrap();
        assert_eq!(drive.run_washing(90), Err(EngineError::Overheated));

        // The failed run does not accumulate.
        assert_eq!(drive.total_run_min(), 90);

        drive.cool_down();
        assert!(drive.run_washing(90).is_ok());
    }
}
