//! Runtime-unit secondary mode: a payload paired
//! with a *runtime* [`NaturalUnit`] value instead of a compile-time type
//! parameter. Dimension-mismatched operations return a NaN-payload
//! `DynQuantity` with an unspecified but well-formed unit, rather than
//! panicking. `Quantity<U, R>` stays the primary, compile-time-checked
//! mode; this exists for callers whose unit really is only known at
//! runtime.

use unital_core::bpu::Residual;
use unital_core::error::UnitError;
use unital_core::natural_unit::NaturalUnit;
use unital_core::ratio::Ratio;

use crate::quantity::Quantity;
use crate::scalar::Scalar;
use crate::unit_spec::UnitSpec;

/// A payload of type `R` tagged with a unit known only at runtime.
#[derive(Debug, Clone, Copy)]
pub struct DynQuantity<R: Scalar> {
    value: R,
    unit: NaturalUnit,
    residual: Residual,
}

impl<R: Scalar> DynQuantity<R> {
    /// Construct directly from a scale ratio; fails only if `scale` was
    /// built with a zero denominator.
    pub fn try_new(value: R, dimension: unital_core::Dimension, scale: Ratio) -> Result<Self, UnitError> {
        if scale.den() == 0 {
            return Err(UnitError::InvalidRatio { numerator: scale.num(), denominator: scale.den() });
        }
        let bpu = unital_core::Bpu::new(unital_core::BasisUnit::new(dimension, scale), Ratio::one());
        Ok(DynQuantity { value, unit: NaturalUnit::single(bpu), residual: Residual::IDENTITY })
    }

    pub const fn dimensionless(value: R) -> Self {
        DynQuantity { value, unit: NaturalUnit::dimensionless(), residual: Residual::IDENTITY }
    }

    pub const fn value(self) -> R {
        self.value
    }

    pub const fn unit(&self) -> &NaturalUnit {
        &self.unit
    }

    pub fn is_nan(self) -> bool {
        self.value.is_nan_payload()
    }

    /// Erase a compile-time-checked [`Quantity`] into its runtime form.
    /// Erasure is total: recovering the static type is not attempted.
    pub const fn from_quantity<U: UnitSpec>(q: Quantity<U, R>) -> Self {
        DynQuantity { value: q.value(), unit: U::VALUE, residual: U::RESIDUAL }
    }

    /// Rescale onto `target`, returning a NaN-payload `DynQuantity` with an
    /// unspecified unit (`target`'s dimension, arbitrarily) if the
    /// dimensions disagree at runtime.
    pub fn rescale(self, target: NaturalUnit) -> Self {
        if !self.unit.same_dimension(&target) {
            return DynQuantity { value: R::quiet_nan(), unit: target, residual: Residual::IDENTITY };
        }
        let (_, ratio_residual) = self.unit.ratio(&target);
        let combined = self.residual.mul(ratio_residual);
        let factor = combined.collapse();
        let value = if factor == 1.0 { self.value } else { self.value.scale_by(factor) };
        DynQuantity { value, unit: target, residual: Residual::IDENTITY }
    }

    fn combine(self, other: Self, op: impl Fn(R, R) -> R) -> Self {
        if !self.unit.same_dimension(&other.unit) {
            return DynQuantity { value: R::quiet_nan(), unit: self.unit, residual: Residual::IDENTITY };
        }
        let rescaled = other.rescale(self.unit);
        DynQuantity { value: op(self.value, rescaled.value), unit: self.unit, residual: self.residual }
    }

    pub fn checked_add(self, other: Self) -> Self {
        self.combine(other, |a, b| a + b)
    }

    pub fn checked_sub(self, other: Self) -> Self {
        self.combine(other, |a, b| a - b)
    }

    /// Multiplying or dividing folds the two operands' basis units into one,
    /// possibly merging same-dimension entries at different scales; the
    /// combined outer factor (both operands' own residuals plus the merge's)
    /// is collapsed into the payload immediately, so the result always
    /// carries `Residual::IDENTITY`, not a figure awaiting a later
    /// `.rescale()`.
    pub fn mul(self, other: Self) -> Self {
        let (unit, merge_residual) = self.unit.product(&other.unit);
        let combined = self.residual.mul(other.residual).mul(merge_residual);
        let value = if combined.is_identity() { self.value * other.value } else { (self.value * other.value).scale_by(combined.collapse()) };
        DynQuantity { value, unit, residual: Residual::IDENTITY }
    }

    pub fn div(self, other: Self) -> Self {
        let (unit, merge_residual) = self.unit.ratio(&other.unit);
        let combined = self.residual.mul(other.residual.reciprocal()).mul(merge_residual);
        let value = if combined.is_identity() { self.value / other.value } else { (self.value / other.value).scale_by(combined.collapse()) };
        DynQuantity { value, unit, residual: Residual::IDENTITY }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::distance::meters;

    #[test]
    fn mismatched_dimension_add_yields_nan_payload() {
        let mass = DynQuantity::try_new(5.0_f64, unital_core::Dimension::Mass, Ratio::one()).unwrap();
        let time = DynQuantity::try_new(2.0_f64, unital_core::Dimension::Time, Ratio::one()).unwrap();
        let sum = mass.checked_add(time);
        assert!(sum.is_nan());
    }

    #[test]
    fn matching_dimension_add_sums_payload() {
        let a = DynQuantity::try_new(5.0_f64, unital_core::Dimension::Mass, Ratio::one()).unwrap();
        let b = DynQuantity::try_new(2.0_f64, unital_core::Dimension::Mass, Ratio::one()).unwrap();
        let sum = a.checked_add(b);
        assert_eq!(sum.value(), 7.0);
        assert!(!sum.is_nan());
    }

    #[test]
    fn zero_denominator_scale_is_rejected() {
        let err = DynQuantity::try_new(1.0_f64, unital_core::Dimension::Mass, Ratio::new(1, 0)).unwrap_err();
        assert!(matches!(err, UnitError::InvalidRatio { .. }));
    }

    #[test]
    fn from_quantity_erases_the_static_unit() {
        let q = meters(3.0_f64);
        let dyn_q = DynQuantity::from_quantity(q);
        assert_eq!(dyn_q.value(), 3.0);
    }
}
