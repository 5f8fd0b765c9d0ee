//! Arithmetic on [`Quantity`], gated by the `strict` /
//! `left_hand_wins` (default) / `smaller_wins` feature flags, which resolve
//! which operand's unit the result of addition/subtraction/comparison
//! inherits.
//!
//! Multiplication and division are always well-formed (their result unit is
//! the compile-time-computed [`UnitProduct`]/[`UnitRatio`]); only
//! addition, subtraction, and comparison require the operands to share a
//! dimension, which the active policy enforces differently:
//!
//! - `strict`: only `Quantity<U, R> op Quantity<U, R>` exists at all, so a
//!   mismatched unit is a missing-trait-impl compile error.
//! - `left_hand_wins` / `smaller_wins`: `Quantity<U1, R> op Quantity<U2, R>`
//!   exists for any same-dimension `U1`/`U2`, gated by an inline `const`
//!   assertion, and the right operand is rescaled onto the left's unit.
//!   `smaller_wins`'s "the smaller-scale operand wins" can't be expressed at
//!   the type level on stable Rust (no `generic_const_exprs` to branch the
//!   `Output` type on a value derived from two generic params' associated
//!   consts), so this crate implements `smaller_wins` identically to
//!   `left_hand_wins`: the left operand's unit is always the result type. See
//!   DESIGN.md.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::quantity::{apply_residual, Quantity};
use crate::scalar::Scalar;
use crate::unit_spec::{same_dimension_check, UnitProduct, UnitRatio, UnitSpec};

impl<U: UnitSpec, R: Scalar> Neg for Quantity<U, R> {
    type Output = Quantity<U, R>;
    fn neg(self) -> Self::Output {
        Quantity::new(-self.value())
    }
}

/// Multiplying or dividing two Quantities of mismatched scale (e.g.
/// `meters() * kilometers()`) folds their basis units into one via
/// [`unital_core::natural_unit::NaturalUnit::product`]/`ratio`, which may
/// merge two same-dimension entries at different scales; the resulting
/// outer scale factor is applied to the payload immediately, so the stored
/// value is always the true result, not a figure still awaiting a later
/// `.rescale()`. Each operand's own `RESIDUAL` is already realized in its
/// `.value()` (both operands arrived that way, recursively), so only the
/// fresh merge residual from this particular pairing is applied here --
/// reusing `UnitProduct`/`UnitRatio`'s own `RESIDUAL` constant too would
/// double-apply any residual an operand already picked up from an earlier
/// multiplication or division.
impl<U1: UnitSpec, U2: UnitSpec, R: Scalar> Mul<Quantity<U2, R>> for Quantity<U1, R> {
    type Output = Quantity<UnitProduct<U1, U2>, R>;
    fn mul(self, rhs: Quantity<U2, R>) -> Self::Output {
        let (_, residual) = U1::VALUE.product(&U2::VALUE);
        Quantity::new(apply_residual(self.value() * rhs.value(), residual))
    }
}

impl<U1: UnitSpec, U2: UnitSpec, R: Scalar> Div<Quantity<U2, R>> for Quantity<U1, R> {
    type Output = Quantity<UnitRatio<U1, U2>, R>;
    fn div(self, rhs: Quantity<U2, R>) -> Self::Output {
        let (_, residual) = U1::VALUE.ratio(&U2::VALUE);
        Quantity::new(apply_residual(self.value() / rhs.value(), residual))
    }
}

impl<U: UnitSpec, R: Scalar> Mul<R> for Quantity<U, R> {
    type Output = Quantity<U, R>;
    fn mul(self, scalar: R) -> Self::Output {
        Quantity::new(self.value() * scalar)
    }
}

impl<U: UnitSpec, R: Scalar> Div<R> for Quantity<U, R> {
    type Output = Quantity<U, R>;
    fn div(self, scalar: R) -> Self::Output {
        Quantity::new(self.value() / scalar)
    }
}

#[cfg(feature = "strict")]
mod policy {
    use super::*;

    impl<U: UnitSpec, R: Scalar> Add for Quantity<U, R> {
        type Output = Quantity<U, R>;
        fn add(self, rhs: Self) -> Self::Output {
            Quantity::new(self.value() + rhs.value())
        }
    }

    impl<U: UnitSpec, R: Scalar> Sub for Quantity<U, R> {
        type Output = Quantity<U, R>;
        fn sub(self, rhs: Self) -> Self::Output {
            Quantity::new(self.value() - rhs.value())
        }
    }

    impl<U: UnitSpec, R: Scalar> PartialEq for Quantity<U, R> {
        fn eq(&self, other: &Self) -> bool {
            self.value() == other.value()
        }
    }

    impl<U: UnitSpec, R: Scalar> PartialOrd for Quantity<U, R> {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            self.value().partial_cmp(&other.value())
        }
    }
}

#[cfg(not(feature = "strict"))]
mod policy {
    use super::*;

    /// Both `left_hand_wins` and `smaller_wins` result-type on the left
    /// operand's unit; the dimension check is an inline `const` assertion,
    /// so a mismatched-dimension operation is a compile error, never a
    /// runtime surprise.
    impl<U1: UnitSpec, U2: UnitSpec, R: Scalar> Add<Quantity<U2, R>> for Quantity<U1, R> {
        type Output = Quantity<U1, R>;
        fn add(self, rhs: Quantity<U2, R>) -> Self::Output {
            const { assert!(same_dimension_check::<U1, U2>(), "quantity addition requires the same dimension") };
            let rescaled: Quantity<U1, R> = rhs.rescale();
            Quantity::new(self.value() + rescaled.value())
        }
    }

    impl<U1: UnitSpec, U2: UnitSpec, R: Scalar> Sub<Quantity<U2, R>> for Quantity<U1, R> {
        type Output = Quantity<U1, R>;
        fn sub(self, rhs: Quantity<U2, R>) -> Self::Output {
            const { assert!(same_dimension_check::<U1, U2>(), "quantity subtraction requires the same dimension") };
            let rescaled: Quantity<U1, R> = rhs.rescale();
            Quantity::new(self.value() - rescaled.value())
        }
    }

    impl<U1: UnitSpec, U2: UnitSpec, R: Scalar> PartialEq<Quantity<U2, R>> for Quantity<U1, R> {
        fn eq(&self, other: &Quantity<U2, R>) -> bool {
            const { assert!(same_dimension_check::<U1, U2>(), "quantity comparison requires the same dimension") };
            let rescaled: Quantity<U1, R> = (*other).rescale();
            self.value() == rescaled.value()
        }
    }

    impl<U1: UnitSpec, U2: UnitSpec, R: Scalar> PartialOrd<Quantity<U2, R>> for Quantity<U1, R> {
        fn partial_cmp(&self, other: &Quantity<U2, R>) -> Option<core::cmp::Ordering> {
            const { assert!(same_dimension_check::<U1, U2>(), "quantity comparison requires the same dimension") };
            let rescaled: Quantity<U1, R> = (*other).rescale();
            self.value().partial_cmp(&rescaled.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::units::distance::{kilometers, meters};
    use crate::units::time::{hours, minutes};

    #[test]
    fn km_times_km_has_square_distance_unit() {
        let area = kilometers(2.0_f64) * kilometers(3.0_f64);
        assert_eq!(area.value(), 6.0);
    }

    #[test]
    fn m_div_km_is_dimensionless_ratio() {
        let ratio = meters(500.0_f64) / kilometers(1.0_f64);
        assert_eq!(ratio.value(), 0.5);
    }

    #[test]
    fn m_times_hour_times_km_times_minute() {
        let product = meters(2.0_f64) * hours(1.0_f64) * kilometers(3.0_f64) * minutes(4.0_f64);
        assert_eq!(product.value(), 400.0);
    }

    #[test]
    fn nanogram_plus_microgram_rescales_rhs_onto_left_unit() {
        use crate::units::mass::{micrograms, nanograms};
        let sum = nanograms(1000.0_f64) + micrograms(2.0_f64);
        assert_eq!(sum.value(), 3000.0);
    }

    #[test]
    fn km_compares_greater_than_m() {
        let km = kilometers(1.0_f64);
        let m = meters(500.0_f64);
        assert!(km > m);
        assert!(km != m);
    }
}
