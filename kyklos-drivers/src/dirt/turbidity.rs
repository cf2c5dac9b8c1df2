//! Optical turbidity dirt sensor
//!
//! Measures how much light passes through the wash water: a clean
//! load reads high on the ADC, a heavily soiled load reads low.
//! Uses a lookup table for integer-only degree calculation.
//!
//! The dirt capability has no fault path, so a failed or out-of-range
//! reading falls back to a configured fail-safe degree. The default
//! fail-safe reads as heavily soiled, which biases auto-detection
//! toward the long program rather than under-washing on a bad sensor.

use kyklos_core::config::LaundryBatch;
use kyklos_core::traits::{DirtDetector, Percentage};

/// Turbidity lookup table
///
/// Table format: (adc_raw, dirt_degree_x10), sorted by decreasing ADC
/// reading (increasing soil). Calibrated for a 12-bit ADC with the
/// emitter at full brightness in clear water.
const DIRT_TABLE: &[(u16, u16)] = &[
    (3_900, 0),    // clear water
    (3_500, 100),  // 10%
    (3_000, 200),  // 20%
    (2_400, 350),  // 35%
    (1_800, 500),  // 50% (auto-detect boundary)
    (1_200, 650),  // 65%
    (700, 800),    // 80%
    (300, 900),    // 90%
    (100, 1000),   // opaque
];

/// Reading conversion failure (internal; never escapes the trait)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadFault {
    Adc,
    OutOfRange,
}

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Optical turbidity sensor over an ADC channel
///
/// Uses the lookup table with linear interpolation to convert a raw
/// light reading into a dirt degree.
pub struct TurbiditySensor<ADC> {
    adc: ADC,
    /// Degree reported when the ADC faults or reads out of range
    fallback: Percentage,
}

impl<ADC> TurbiditySensor<ADC> {
    /// Default fail-safe degree (85.0 %, reads as heavily soiled)
    pub const DEFAULT_FALLBACK: Percentage = Percentage::from_x10(850);

    /// Create a sensor with the default fail-safe degree
    pub fn new(adc: ADC) -> Self {
        Self {
            adc,
            fallback: Self::DEFAULT_FALLBACK,
        }
    }

    /// Create a sensor with a specific fail-safe degree
    pub fn with_fallback(adc: ADC, fallback: Percentage) -> Self {
        Self { adc, fallback }
    }

    /// The configured fail-safe degree
    pub const fn fallback(&self) -> Percentage {
        self.fallback
    }

    /// Convert a raw ADC reading to a dirt degree via the table
    ///
    /// Uses linear interpolation between table entries.
    fn raw_to_degree(raw: u16) -> Result<Percentage, ReadFault> {
        if raw > DIRT_TABLE[0].0 {
            // Brighter than clear water: emitter fault or empty drum
            return Err(ReadFault::OutOfRange);
        }

        if raw < DIRT_TABLE[DIRT_TABLE.len() - 1].0 {
            // Darker than the opaque calibration point
            return Err(ReadFault::OutOfRange);
        }

        // Table is sorted by decreasing ADC (increasing degree)
        for i in 0..DIRT_TABLE.len() - 1 {
            let (adc_high, deg_low) = DIRT_TABLE[i];
            let (adc_low, deg_high) = DIRT_TABLE[i + 1];

            if raw <= adc_high && raw >= adc_low {
                let adc_range = (adc_high - adc_low) as u32;
                let deg_range = (deg_high - deg_low) as u32;
                let adc_offset = (adc_high - raw) as u32;

                let degree = deg_low as u32 + deg_range * adc_offset / adc_range;
                return Ok(Percentage::from_x10(degree as u16));
            }
        }

        Err(ReadFault::OutOfRange)
    }

    fn try_detect(&mut self) -> Result<Percentage, ReadFault>
    where
        ADC: AdcReader,
    {
        let raw = self.adc.read().map_err(|_| ReadFault::Adc)?;
        Self::raw_to_degree(raw)
    }
}

impl<ADC: AdcReader> DirtDetector for TurbiditySensor<ADC> {
    fn detect_dirt_degree(&mut self, _batch: &LaundryBatch) -> Percentage {
        self.try_detect().unwrap_or(self.fallback)
    }
}

/// Dummy ADC for testing (returns a fixed value or a fault)
#[cfg(test)]
struct DummyAdc(Result<u16, ()>);

#[cfg(test)]
impl AdcReader for DummyAdc {
    fn read(&mut self) -> Result<u16, ()> {
        self.0
    }
}
