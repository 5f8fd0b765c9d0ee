//! Marker types and factory constructors for every registration in
//! `unital_core::registry`.
//!
//! Each basis unit gets a zero-sized marker type implementing [`UnitSpec`],
//! a free factory function (e.g. [`distance::kilometers`]), and a method on
//! [`crate::prelude::QuantityExt`] (`.kilometers()`). [`define_basis_unit!`]
//! generates all three from a single declaration, table-driven rather than
//! hand-written per unit.

pub mod currency;
pub mod distance;
pub mod mass;
pub mod price;
pub mod time;

/// Declare a basis-unit marker type, its `UnitSpec` impl, and its factory
/// function. `$marker` must be unique within the crate; `$factory` is the
/// pluralized free-function name.
macro_rules! define_basis_unit {
    ($marker:ident, $dimension:expr, $num:expr, $den:expr, $factory:ident) => {
        #[doc = concat!("The basis unit with scale ", stringify!($num), "/", stringify!($den), ".")]
        #[derive(Debug, Clone, Copy)]
        pub struct $marker;

        impl $crate::unit_spec::sealed::Sealed for $marker {}

        impl $crate::unit_spec::UnitSpec for $marker {
            const VALUE: unital_core::NaturalUnit = unital_core::NaturalUnit::single(unital_core::Bpu::new(
                unital_core::BasisUnit::new($dimension, unital_core::Ratio::new($num, $den)),
                unital_core::Ratio::new(1, 1),
            ));
            const RESIDUAL: unital_core::Residual = unital_core::Residual::IDENTITY;
        }

        pub fn $factory<R: $crate::scalar::Scalar>(value: R) -> $crate::quantity::Quantity<$marker, R> {
            $crate::quantity::Quantity::new(value)
        }
    };
}

pub(crate) use define_basis_unit;
