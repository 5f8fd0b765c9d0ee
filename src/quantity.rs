//! The numeric-payload-plus-compile-time-unit wrapper.
//!
//! `Quantity<U, R>` pairs a [`Scalar`] payload `R` with a zero-sized
//! [`UnitSpec`] marker `U`; `sizeof(Quantity<U, R>) == sizeof(R)`, since `U`
//! carries no runtime representation at all.

use core::marker::PhantomData;

use unital_core::bpu::Residual;

use crate::scalar::Scalar;
use crate::unit_spec::{same_dimension_check, Dimensionless, UnitSpec};

/// A numeric payload of type `R`, tagged at compile time with the unit `U`.
#[derive(Clone, Copy)]
pub struct Quantity<U: UnitSpec, R: Scalar> {
    value: R,
    _unit: PhantomData<U>,
}

impl<U: UnitSpec, R: Scalar> Quantity<U, R> {
    pub const fn new(value: R) -> Self {
        Quantity { value, _unit: PhantomData }
    }

    /// The bare payload, discarding the unit-safety guarantee deliberately.
    pub const fn value(self) -> R {
        self.value
    }

    /// Rescale to a different compile-time unit `U2` of the same dimension.
    /// The dimension check is an inline `const` assertion
    /// (stable since Rust 1.79's inline-const expressions), so a mismatched
    /// rescale target is a compile error, not a runtime NaN, preferred
    /// whenever the units are statically known, as they always are for
    /// `Quantity<U, R>`.
    pub fn rescale<U2: UnitSpec>(self) -> Quantity<U2, R> {
        const { assert!(same_dimension_check::<U, U2>(), "rescale target has an incompatible dimension") };
        let (_, residual) = U::VALUE.ratio(&U2::VALUE);
        Quantity::new(apply_residual(self.value, combine(U::RESIDUAL, residual, U2::RESIDUAL)))
    }

    /// The short text form of this quantity's unit, independent of
    /// [`core::fmt::Display`]'s payload-plus-unit rendering.
    pub fn abbreviation(&self) -> alloc::string::String {
        U::VALUE.abbreviation()
    }
}

/// Compose the source unit's own residual, the ratio-operation's residual,
/// and the target unit's (inverted) own residual into the single factor
/// `rescale` applies to the payload.
fn combine(source_residual: Residual, ratio_residual: Residual, target_residual: Residual) -> Residual {
    source_residual.mul(ratio_residual).mul(target_residual.reciprocal())
}

pub(crate) fn apply_residual<R: Scalar>(value: R, residual: Residual) -> R {
    if residual.is_identity() {
        value
    } else {
        value.scale_by(residual.collapse())
    }
}

impl<R: Scalar> Quantity<Dimensionless, R> {
    /// A dimensionless quantity is, observably, just its payload; Rust has
    /// no implicit conversions, so callers go through `From`/`.into()`.
    pub const fn into_value(self) -> R {
        self.value
    }
}

impl<R: Scalar> From<Quantity<Dimensionless, R>> for f64 {
    fn from(q: Quantity<Dimensionless, R>) -> f64 {
        q.value.to_f64()
    }
}

impl<U: UnitSpec, R: Scalar> Default for Quantity<U, R> {
    fn default() -> Self {
        Quantity::new(R::ZERO)
    }
}

impl<U: UnitSpec, R: Scalar> core::fmt::Debug for Quantity<U, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quantity").field("value", &self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::distance::{kilometers, meters};

    #[test]
    fn rescale_is_idempotent_on_same_unit() {
        let a = meters(5.0_f64);
        let b: Quantity<crate::units::distance::Meter, f64> = a.rescale();
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn rescale_km_to_m_scales_payload() {
        let km = kilometers(2.0_f64);
        let m: Quantity<crate::units::distance::Meter, f64> = km.rescale();
        assert_eq!(m.value(), 2000.0);
    }

    #[test]
    fn abbreviation_names_the_unit_without_the_payload() {
        let km = kilometers(2.0_f64);
        assert_eq!(km.abbreviation(), "km");
    }
}
