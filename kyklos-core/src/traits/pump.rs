//! Water pump trait

/// Errors that can occur when filling the drum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpError {
    /// Inlet supply not available
    NoSupply,
    /// Inlet or filter clogged
    Clogged,
    /// Fill would exceed drum capacity
    Overflow,
}

/// Trait for the water pump
///
/// The pump fills the drum before the wash and drains it afterwards.
/// Draining has no fault path: gravity drain always completes.
pub trait WaterPump {
    /// Pour the given volume of water into the drum
    fn pour(&mut self, volume_ml: u32) -> Result<(), PumpError>;

    /// Drain the drum completely
    fn release(&mut self);
}
