//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the capability
//! traits defined in kyklos-core:
//!
//! - Dirt sensors (fixed value, ADC-backed turbidity)
//! - Agitator (simulated drum drive)
//! - Water pump (simulated drum fill/drain)

#![no_std]
#![deny(unsafe_code)]

pub mod agitator;
pub mod dirt;
pub mod pump;
