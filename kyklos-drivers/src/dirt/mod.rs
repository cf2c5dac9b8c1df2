//! Dirt sensor implementations

pub mod fixed;
pub mod turbidity;

pub use fixed::FixedDirtSensor;
pub use turbidity::{AdcReader, TurbiditySensor};
