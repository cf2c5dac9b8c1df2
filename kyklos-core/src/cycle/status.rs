//! Per-run status model

use super::WashProgram;

/// Overall outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunResult {
    Success,
    Failure,
}

/// Error code reported with a run outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    /// No fault occurred
    NoError,
    /// Load exceeds drum capacity
    TooHeavy,
    /// Pump fault while filling
    WaterPumpFailure,
    /// Agitator fault during wash or spin
    EngineFailure,
    /// Missing or invalid configuration
    UnknownError,
}

/// Immutable status of a completed run attempt
///
/// Produced exactly once per invocation of the controller and never
/// mutated afterwards. `NoError` pairs with `Success` and any other
/// code pairs with `Failure`; the two constructors are the only way
/// a status is built, so the pairing always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LaundryStatus {
    result: RunResult,
    error: ErrorCode,
    /// The program that actually ran, or `None` if the run failed
    /// before program resolution
    program: Option<WashProgram>,
}

impl LaundryStatus {
    /// Status for a run that completed every stage
    pub const fn success(program: WashProgram) -> Self {
        Self {
            result: RunResult::Success,
            error: ErrorCode::NoError,
            program: Some(program),
        }
    }

    /// Status for a failed run
    ///
    /// `program` is the resolved program if resolution had already
    /// happened when the fault hit, `None` otherwise. `error` must
    /// not be `NoError`; that code is reserved for [`success`].
    ///
    /// [`success`]: Self::success
    pub const fn failure(error: ErrorCode, program: Option<WashProgram>) -> Self {
        debug_assert!(!matches!(error, ErrorCode::NoError));
        Self {
            result: RunResult::Failure,
            error,
            program,
        }
    }

    /// Overall outcome
    pub const fn result(&self) -> RunResult {
        self.result
    }

    /// Error code (`NoError` for a successful run)
    pub const fn error(&self) -> ErrorCode {
        self.error
    }

    /// The program that was resolved for this run, if any
    pub const fn program(&self) -> Option<WashProgram> {
        self.program
    }

    /// Check if the run succeeded
    pub const fn is_success(&self) -> bool {
        matches!(self.result, RunResult::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_pairs_with_no_error() {
        let status = LaundryStatus::success(WashProgram::Short);
        assert!(status.is_success());
        assert_eq!(status.result(), RunResult::Success);
        assert_eq!(status.error(), ErrorCode::NoError);
        assert_eq!(status.program(), Some(WashProgram::Short));
    }

    #[test]
    fn test_failure_before_resolution_has_no_program() {
        let status = LaundryStatus::failure(ErrorCode::TooHeavy, None);
        assert!(!status.is_success());
        assert_eq!(status.error(), ErrorCode::TooHeavy);
        assert_eq!(status.program(), None);
    }

    #[test]
    fn test_failure_after_resolution_keeps_program() {
        let status = LaundryStatus::failure(ErrorCode::EngineFailure, Some(WashProgram::Long));
        assert_eq!(status.result(), RunResult::Failure);
        assert_eq!(status.program(), Some(WashProgram::Long));
    }
}
