//! Fixed-value dirt sensor
//!
//! Reports a configured soil degree regardless of the batch. Useful
//! for bench runs and as the simplest substitutable collaborator.

use kyklos_core::config::LaundryBatch;
use kyklos_core::traits::{DirtDetector, Percentage};

/// Dirt sensor that always reports the same degree
#[derive(Debug, Clone, Copy)]
pub struct FixedDirtSensor {
    degree: Percentage,
}

impl FixedDirtSensor {
    /// Create a sensor reporting the given degree
    pub const fn new(degree: Percentage) -> Self {
        Self { degree }
    }

    /// Change the reported degree
    pub fn set_degree(&mut self, degree: Percentage) {
        self.degree = degree;
    }

    /// The configured degree
    pub const fn degree(&self) -> Percentage {
        self.degree
    }
}

impl DirtDetector for FixedDirtSensor {
    fn detect_dirt_degree(&mut self, _batch: &LaundryBatch) -> Percentage {
        self.degree
    }
}
