//! Safety checks
//!
//! Pre-run checks that must pass before any hardware is touched.

pub mod capacity;

pub use capacity::{check_load, LoadStatus, MAX_LOAD_KG_X10};
