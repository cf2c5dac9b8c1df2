//! Agitator (drum drive) trait

/// Errors that can occur with agitator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// Drum blocked or drive belt stalled
    Stalled,
    /// Thermal protection tripped
    Overheated,
    /// Drive power not available
    Unpowered,
}

/// Trait for the drum drive
///
/// The agitator performs the wash agitation and the optional final
/// spin. The controller maps any [`EngineError`] to a single engine
/// failure code; the variants exist for driver diagnostics.
pub trait Agitator {
    /// Run wash agitation for the given duration in minutes
    fn run_washing(&mut self, minutes: u16) -> Result<(), EngineError>;

    /// Run the high-speed spin stage
    fn spin(&mut self) -> Result<(), EngineError>;
}
