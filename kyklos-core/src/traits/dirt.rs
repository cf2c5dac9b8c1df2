//! Dirt sensor trait

use crate::config::LaundryBatch;

/// A percentage in [0.0, 100.0] with 0.1 % resolution
///
/// Stored as tenths of a percent (e.g. 50.0 % is 500). Construction
/// clamps to the valid range, so a `Percentage` is always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Percentage(u16);

impl Percentage {
    /// 0.0 %
    pub const ZERO: Self = Self(0);

    /// 100.0 %
    pub const MAX: Self = Self(1000);

    /// Create from tenths of a percent, clamping to 100.0 %
    pub const fn from_x10(tenths: u16) -> Self {
        if tenths > Self::MAX.0 {
            Self::MAX
        } else {
            Self(tenths)
        }
    }

    /// Create from whole percent, clamping to 100 %
    pub const fn from_percent(percent: u8) -> Self {
        Self::from_x10(percent as u16 * 10)
    }

    /// Value in tenths of a percent
    pub const fn as_x10(self) -> u16 {
        self.0
    }

    /// Value in whole percent (truncates)
    pub const fn as_percent(self) -> u16 {
        self.0 / 10
    }
}

/// Trait for dirt sensors
///
/// Implementations measure how soiled a load is (optical turbidity,
/// conductivity, or a simulated value). There is no fault path:
/// implementations that can fail internally must fall back to a
/// safe reading.
pub trait DirtDetector {
    /// Measure the dirt degree of a batch
    ///
    /// Takes `&mut self` because sensor reads typically require
    /// mutable access.
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Percentage;
}
