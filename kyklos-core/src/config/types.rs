//! Configuration type definitions
//!
//! Weights use integer fixed-point with 0.1 kg resolution (`weight_kg_x10`)
//! so the core stays FPU-free.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fabric kind of a laundry load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    #[default]
    Cotton,
    Jeans,
    Wool,
    Synthetic,
    Delicate,
}

/// Wash program selection
///
/// `AutoDetect` is a selection sentinel, not a runnable program: it is
/// always resolved to a concrete [`WashProgram`](crate::cycle::WashProgram)
/// via the dirt sensor before anything executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Program {
    Short,
    Medium,
    Long,
    /// Resolve the program from the measured dirt degree
    #[default]
    AutoDetect,
}

/// Program configuration for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramConfig {
    /// Selected program (fixed or auto-detect)
    pub program: Program,
    /// Run the spin stage after the wash
    pub spin: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            program: Program::AutoDetect,
            spin: true,
        }
    }
}

impl ProgramConfig {
    /// Create a configuration for a run
    pub const fn new(program: Program, spin: bool) -> Self {
        Self { program, spin }
    }
}

/// A load of laundry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LaundryBatch {
    /// Fabric kind
    pub material: Material,
    /// Load weight in 0.1 kg units (e.g. 2.0 kg is 20)
    pub weight_kg_x10: u16,
}

impl LaundryBatch {
    /// Create a batch from material and weight in 0.1 kg units
    pub const fn new(material: Material, weight_kg_x10: u16) -> Self {
        Self {
            material,
            weight_kg_x10,
        }
    }

    /// Load weight in whole kilograms (truncates)
    pub const fn weight_kg(&self) -> u16 {
        self.weight_kg_x10 / 10
    }
}
