//! Agitator implementations

pub mod sim;

pub use sim::{SimAgitator, SimAgitatorConfig};
