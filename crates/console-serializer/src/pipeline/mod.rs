//! Per-container conversion stages
//!
//! Each stage is a pure function over upstream types. The converter wires them
//! together for every container of a unit.

pub mod env;
pub mod hints;
pub mod probes;
pub mod volumes;
