//! Hardware-agnostic control core for the Kyklos washing machine
//!
//! This crate contains all control logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (dirt detector, agitator, water pump)
//! - Wash-cycle controller and run status model
//! - Cycle phase machine
//! - Load capacity checking
//! - Water dosing
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod cycle;
pub mod safety;
pub mod traits;
