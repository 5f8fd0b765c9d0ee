#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Exact rational arithmetic, the closed dimension set, the basis-unit
//! abbreviation registry, and the basis-power-unit / natural-unit algebra
//! (layers L1-L4) underpinning `unital`'s compile-time unit safety.
//!
//! This crate has no allocation and no runtime state in its designed path
//! (see its `unital::Quantity`-facing counterpart for the compile-time
//! `UnitSpec` mechanism built atop it). The `alloc` feature unlocks the
//! abbreviation-assembly helpers, the only place this crate ever allocates.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bpu;
pub mod dimension;
pub mod error;
pub mod natural_unit;
pub mod ratio;
pub mod registry;

pub use bpu::{Bpu, Residual};
pub use dimension::Dimension;
pub use error::UnitError;
pub use natural_unit::{NaturalUnit, MAX_DIMENSIONS};
pub use ratio::Ratio;
pub use registry::{BasisUnit, RegisteredUnit, REGISTRY_CAPACITY};
