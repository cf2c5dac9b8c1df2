//! Wash-cycle controller
//!
//! Sequences a single laundry run over the three injected hardware
//! capabilities: validate the configuration, check the load weight,
//! resolve the effective program, then pour, wash, release, and
//! optionally spin. The first fault aborts the run; `start` always
//! returns a status and never panics.

use crate::config::{LaundryBatch, ProgramConfig};
use crate::cycle::dosing::water_dose_ml;
use crate::cycle::{ErrorCode, LaundryStatus, WashProgram};
use crate::safety::{check_load, LoadStatus};
use crate::traits::{Agitator, DirtDetector, WaterPump};

/// Controller for a washing machine
///
/// Owns its three collaborators for the lifetime of the machine;
/// they are acquired at construction and never reassigned. Each call
/// to [`start`](Self::start) is independent: the controller keeps no
/// state across runs.
pub struct WashController<D, A, P> {
    dirt: D,
    agitator: A,
    pump: P,
}

impl<D: DirtDetector, A: Agitator, P: WaterPump> WashController<D, A, P> {
    /// Create a controller from its three collaborators
    pub fn new(dirt: D, agitator: A, pump: P) -> Self {
        Self {
            dirt,
            agitator,
            pump,
        }
    }

    /// Get access to the dirt detector
    pub fn dirt_detector(&self) -> &D {
        &self.dirt
    }

    /// Get mutable access to the dirt detector
    pub fn dirt_detector_mut(&mut self) -> &mut D {
        &mut self.dirt
    }

    /// Get access to the agitator
    pub fn agitator(&self) -> &A {
        &self.agitator
    }

    /// Get mutable access to the agitator
    pub fn agitator_mut(&mut self) -> &mut A {
        &mut self.agitator
    }

    /// Get access to the water pump
    pub fn pump(&self) -> &P {
        &self.pump
    }

    /// Get mutable access to the water pump
    pub fn pump_mut(&mut self) -> &mut P {
        &mut self.pump
    }

    /// Run one wash cycle for a batch
    ///
    /// A missing configuration reports `UnknownError` before anything
    /// else; an overweight load reports `TooHeavy` before any hardware
    /// is touched. Both failures carry no program. From program
    /// resolution onward, every outcome carries the resolved program,
    /// including mid-sequence faults.
    pub fn start(&mut self, batch: &LaundryBatch, config: Option<&ProgramConfig>) -> LaundryStatus {
        let Some(config) = config else {
            return LaundryStatus::failure(ErrorCode::UnknownError, None);
        };

        if check_load(batch) == LoadStatus::Overweight {
            return LaundryStatus::failure(ErrorCode::TooHeavy, None);
        }

        // Resolve into a local first so every later outcome, success or
        // fault, reports the concrete program and never the auto-detect
        // sentinel.
        let program = match WashProgram::from_fixed(config.program) {
            Some(fixed) => fixed,
            None => WashProgram::from_soil_degree(self.dirt.detect_dirt_degree(batch)),
        };

        match self.run_sequence(batch, config, program) {
            Ok(()) => LaundryStatus::success(program),
            Err(code) => LaundryStatus::failure(code, Some(program)),
        }
    }

    /// Execute the hardware sequence: pour, wash, release, spin
    fn run_sequence(
        &mut self,
        batch: &LaundryBatch,
        config: &ProgramConfig,
        program: WashProgram,
    ) -> Result<(), ErrorCode> {
        self.pump
            .pour(water_dose_ml(batch.weight_kg_x10))
            .map_err(|_| ErrorCode::WaterPumpFailure)?;

        self.agitator
            .run_washing(program.duration_min())
            .map_err(|_| ErrorCode::EngineFailure)?;

        self.pump.release();

        if config.spin {
            self.agitator
                .spin()
                .map_err(|_| ErrorCode::EngineFailure)?;
        }

        Ok(())
    }
}
