//! Water pump implementations

pub mod sim;

pub use sim::{SimPump, SimPumpConfig};
