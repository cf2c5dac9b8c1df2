//! Hardware capability traits
//!
//! These traits define the interface between the wash-cycle control
//! logic and the three hardware collaborators. Implementations may be
//! simulated or physical; the controller does not care which.

pub mod agitator;
pub mod dirt;
pub mod pump;

pub use agitator::{Agitator, EngineError};
pub use dirt::{DirtDetector, Percentage};
pub use pump::{PumpError, WaterPump};
