//! A zero-cost, compile-time-checked quantity-and-units library.
//!
//! `Quantity<U, R>` pairs a numeric payload `R` with a zero-sized unit
//! marker `U`; dimensional analysis happens entirely at compile time via
//! `U`'s associated constants, so a mismatched-dimension operation is a
//! compile error rather than a runtime panic or a silently wrong answer.
//! `unital_core` supplies the underlying exact-rational and unit-algebra
//! machinery (exact [`Ratio`](unital_core::Ratio) arithmetic, the closed
//! five-dimension set, basis-power-units, and `NaturalUnit`s); this crate
//! builds the compile-time [`UnitSpec`] mechanism, the [`Quantity`]
//! wrapper, and the ergonomic surface (factory constructors, arithmetic,
//! `Display`, `serde`) on top of it.
//!
//! ```
//! use unital::prelude::*;
//!
//! let distance = 5.0.kilometers();
//! let time = 2.0.hours();
//! let speed = distance / time;
//! assert_eq!(speed.value(), 2.5);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod arithmetic;
pub mod display;
pub mod dyn_quantity;
pub mod prelude;
pub mod quantity;
pub mod scalar;
#[cfg(feature = "serde")]
pub mod serialization;
pub mod unit_spec;
pub mod units;

pub use dyn_quantity::DynQuantity;
pub use quantity::Quantity;
pub use scalar::{Exact, Real, Scalar};
pub use unit_spec::{Dimensionless, UnitProduct, UnitRatio, UnitSpec};

pub use unital_core::{Bpu, Dimension, NaturalUnit, Ratio, Residual, UnitError};
