//! Cycle phase machine
//!
//! Explicit model of the stages a run moves through. The controller
//! drives the hardware directly; this machine documents and checks the
//! legal orderings, and callers can use it to track progress.

use super::ErrorCode;

/// Phases of a wash run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclePhase {
    /// Checking that a configuration is present
    Validating,
    /// Checking the load against drum capacity
    WeightChecking,
    /// Resolving the effective program (fixed or via dirt sensor)
    ResolvingProgram,
    /// Filling the drum
    Pouring,
    /// Wash agitation
    Washing,
    /// Draining the drum
    Releasing,
    /// Final high-speed spin
    Spinning,
    /// Run completed successfully
    Done,
    /// Run aborted with the given error code
    Failed(ErrorCode),
}

impl CyclePhase {
    /// Phase entered when the current phase completes
    ///
    /// `Releasing` branches on whether a spin was requested; terminal
    /// phases are fixed points.
    pub const fn next(self, spin_requested: bool) -> Self {
        match self {
            CyclePhase::Validating => CyclePhase::WeightChecking,
            CyclePhase::WeightChecking => CyclePhase::ResolvingProgram,
            CyclePhase::ResolvingProgram => CyclePhase::Pouring,
            CyclePhase::Pouring => CyclePhase::Washing,
            CyclePhase::Washing => CyclePhase::Releasing,
            CyclePhase::Releasing => {
                if spin_requested {
                    CyclePhase::Spinning
                } else {
                    CyclePhase::Done
                }
            }
            CyclePhase::Spinning => CyclePhase::Done,
            CyclePhase::Done | CyclePhase::Failed(_) => self,
        }
    }

    /// Phase entered when the current phase fails
    ///
    /// `ResolvingProgram` and `Releasing` have no fault path and are
    /// fixed points, as are the terminal phases.
    pub const fn fail(self) -> Self {
        match self {
            CyclePhase::Validating => CyclePhase::Failed(ErrorCode::UnknownError),
            CyclePhase::WeightChecking => CyclePhase::Failed(ErrorCode::TooHeavy),
            CyclePhase::Pouring => CyclePhase::Failed(ErrorCode::WaterPumpFailure),
            CyclePhase::Washing | CyclePhase::Spinning => {
                CyclePhase::Failed(ErrorCode::EngineFailure)
            }
            CyclePhase::ResolvingProgram
            | CyclePhase::Releasing
            | CyclePhase::Done
            | CyclePhase::Failed(_) => self,
        }
    }

    /// Check if this phase ends the run
    pub const fn is_terminal(&self) -> bool {
        matches!(self, CyclePhase::Done | CyclePhase::Failed(_))
    }

    /// Check if the resolved program is known in this phase
    ///
    /// True from `Pouring` onward, including failures raised after
    /// resolution. Pre-resolution failures carry no program.
    pub const fn program_resolved(&self) -> bool {
        match self {
            CyclePhase::Pouring
            | CyclePhase::Washing
            | CyclePhase::Releasing
            | CyclePhase::Spinning
            | CyclePhase::Done => true,
            CyclePhase::Failed(code) => matches!(
                code,
                ErrorCode::WaterPumpFailure | ErrorCode::EngineFailure
            ),
            CyclePhase::Validating
            | CyclePhase::WeightChecking
            | CyclePhase::ResolvingProgram => false,
        }
    }
}
