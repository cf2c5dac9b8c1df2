//! Wash-cycle control
//!
//! The controller, the resolved program model, the per-run status,
//! the cycle phase machine, and water dosing.

pub mod controller;
pub mod dosing;
pub mod phase;
pub mod program;
pub mod status;

pub use controller::WashController;
pub use dosing::{water_dose_ml, WATER_ML_PER_KG};
pub use phase::CyclePhase;
pub use program::WashProgram;
pub use status::{ErrorCode, LaundryStatus, RunResult};
