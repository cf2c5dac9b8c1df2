//! Resolved wash programs

use crate::config::Program;
use crate::traits::Percentage;

/// Auto-detection soil boundary in tenths of a percent (50.0 %)
///
/// The boundary is inclusive: exactly 50.0 % resolves to `Medium`.
pub const AUTODETECT_SOIL_BOUNDARY_X10: u16 = 500;

/// A concrete wash program that can actually run
///
/// This is a separate enum from the [`Program`] selection so that the
/// auto-detect sentinel can never appear in a run record: anything of
/// this type has already been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WashProgram {
    Short,
    Medium,
    Long,
}

impl WashProgram {
    /// Wash agitation duration in minutes
    pub const fn duration_min(self) -> u16 {
        match self {
            WashProgram::Short => 30,
            WashProgram::Medium => 60,
            WashProgram::Long => 90,
        }
    }

    /// Resolve a program from a measured soil degree
    ///
    /// Auto-detection assumes at least a medium-soil load, so `Short`
    /// is never produced here; it can only be selected explicitly.
    pub const fn from_soil_degree(degree: Percentage) -> Self {
        if degree.as_x10() <= AUTODETECT_SOIL_BOUNDARY_X10 {
            WashProgram::Medium
        } else {
            WashProgram::Long
        }
    }

    /// Resolve a fixed program selection, or `None` for auto-detect
    pub const fn from_fixed(selection: Program) -> Option<Self> {
        match selection {
            Program::Short => Some(WashProgram::Short),
            Program::Medium => Some(WashProgram::Medium),
            Program::Long => Some(WashProgram::Long),
            Program::AutoDetect => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_are_ordered() {
        assert!(WashProgram::Short.duration_min() < WashProgram::Medium.duration_min());
        assert!(WashProgram::Medium.duration_min() < WashProgram::Long.duration_min());
    }

    #[test]
    fn test_soil_resolution() {
        assert_eq!(
            WashProgram::from_soil_degree(Percentage::from_x10(0)),
            WashProgram::Medium
        );
        assert_eq!(
            WashProgram::from_soil_degree(Percentage::from_x10(300)),
            WashProgram::Medium
        );
        assert_eq!(
            WashProgram::from_soil_degree(Percentage::from_x10(900)),
            WashProgram::Long
        );
    }

    #[test]
    fn test_soil_boundary_resolves_to_medium() {
        // Exactly 50.0 % is still medium; 50.1 % tips over to long.
        assert_eq!(
            WashProgram::from_soil_degree(Percentage::from_x10(500)),
            WashProgram::Medium
        );
        assert_eq!(
            WashProgram::from_soil_degree(Percentage::from_x10(501)),
            WashProgram::Long
        );
    }

    #[test]
    fn test_fixed_resolution() {
        assert_eq!(
            WashProgram::from_fixed(Program::Short),
            Some(WashProgram::Short)
        );
        assert_eq!(
            WashProgram::from_fixed(Program::Medium),
            Some(WashProgram::Medium)
        );
        assert_eq!(
            WashProgram::from_fixed(Program::Long),
            Some(WashProgram::Long)
        );
        assert_eq!(WashProgram::from_fixed(Program::AutoDetect), None);
    }
}
