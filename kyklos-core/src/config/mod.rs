//! Configuration types
//!
//! Caller-facing selection and batch value types. These are created by
//! the caller before a run and never mutated by the controller.

pub mod types;

pub use types::{LaundryBatch, Material, Program, ProgramConfig};
