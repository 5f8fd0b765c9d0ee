//! Basis-power-unit: a [`BasisUnit`] raised to a rational exponent.

use crate::ratio::Ratio;
use crate::registry::BasisUnit;

/// The by-product of combining two BPUs (or rescaling one) whose scale
/// factors disagree: an exact outer [`Ratio`] and an inexact *squared*
/// outer factor, following the `(m^q)²` discipline for keeping fractional
/// exponents exact wherever possible.
///
/// `Residual::IDENTITY` is what a from-scratch, non-rescaled unit carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    pub exact: Ratio,
    pub inexact_sq: f64,
}

impl Residual {
    pub const IDENTITY: Residual = Residual { exact: Ratio::new(1, 1), inexact_sq: 1.0 };

    pub const fn mul(self, other: Self) -> Self {
        Residual { exact: self.exact.mul(other.exact), inexact_sq: self.inexact_sq * other.inexact_sq }
    }

    pub const fn reciprocal(self) -> Self {
        Residual { exact: self.exact.reciprocal(), inexact_sq: 1.0 / self.inexact_sq }
    }

    /// Collapse to the single scalar factor to apply to a numeric payload:
    /// `exact * sqrt(inexact_sq)`, eliding the sqrt when it's exactly 1.0.
    /// Not `const`: `libm::sqrt` is a plain runtime function, and this is
    /// only ever called once a numeric payload exists.
    pub fn collapse(self) -> f64 {
        if self.inexact_sq == 1.0 {
            self.exact.to_f64()
        } else {
            self.exact.to_f64() * libm::sqrt(self.inexact_sq)
        }
    }

    pub const fn is_identity(self) -> bool {
        self.exact.is_unity() && self.inexact_sq == 1.0
    }
}

/// A [`BasisUnit`] raised to a rational exponent: `(s * native_unit)^p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bpu {
    pub basis: BasisUnit,
    pub exponent: Ratio,
}

impl Bpu {
    pub const fn new(basis: BasisUnit, exponent: Ratio) -> Self {
        Bpu { basis, exponent }
    }

    pub const fn reciprocal(self) -> Self {
        Bpu { basis: self.basis, exponent: self.exponent.negate() }
    }

    /// Rescale to a new basis scale factor `new_scale`, returning the
    /// rescaled BPU and the residual outer factor.
    ///
    /// `m = old_scale / new_scale`; `p = p0 + q` with `p0 = floor(p)`
    /// integral and `q = frac(p)` in (-1, 1). Only integer and half-integer
    /// `q` produce an exact `(m^q)^2`; other denominators yield NaN in
    /// `inexact_sq` (documented behavior, not an error).
    pub const fn rescale(self, new_scale: Ratio) -> (Self, Residual) {
        let m = self.basis.scale.div(new_scale);
        let p0 = self.exponent.floor();
        let q = self.exponent.frac();

        let exact = m.pow(p0 as i32);

        // q = frac(p) is always in [0, 1) under Ratio's true-floor convention,
        // so the -1/2 arm below is presently unreachable; kept so this still
        // reads correctly if frac's convention ever changes.
        let inexact_sq = if q.is_zero() {
            1.0
        } else if q.equals(Ratio::new(1, 2)) {
            // (m^(1/2))^2 = m
            m.to_f64()
        } else if q.equals(Ratio::new(-1, 2)) {
            // (m^(-1/2))^2 = 1/m
            1.0 / m.to_f64()
        } else {
            f64::NAN
        };

        let rescaled = Bpu { basis: BasisUnit::new(self.basis.dimension, new_scale), exponent: self.exponent };
        (rescaled, Residual { exact, inexact_sq })
    }

    /// Product of two BPUs over the same dimension: rescale `other` to
    /// `self`'s scale, then add exponents. Caller (`NaturalUnit`) only
    /// invokes this once it has already matched the two BPUs' dimensions.
    pub const fn product(self, other: Self) -> (Self, Residual) {
        let (other_rescaled, residual) = other.rescale(self.basis.scale);
        let combined = Bpu { basis: self.basis, exponent: self.exponent.add(other_rescaled.exponent) };
        (combined, residual)
    }

    /// Ratio of two BPUs over the same dimension: exponent = left - right.
    pub const fn ratio(self, other: Self) -> (Self, Residual) {
        let (other_rescaled, residual) = other.rescale(self.basis.scale);
        let combined = Bpu { basis: self.basis, exponent: self.exponent.sub(other_rescaled.exponent) };
        (combined, residual.reciprocal())
    }
}

#[cfg(feature = "alloc")]
impl Bpu {
    /// The BPU's abbreviation: the basis unit's abbreviation plus an
    /// exponent suffix: empty for exponent 1, `^n` for integer
    /// exponent n, `^(n/d)` for fractional, sign on the numerator.
    pub fn abbreviation(&self) -> alloc::string::String {
        use alloc::format;
        let base = crate::registry::abbrev(self.basis);
        if self.exponent.equals(Ratio::new(1, 1)) {
            base
        } else if self.exponent.is_integral() {
            format!("{}^{}", base, self.exponent.num())
        } else {
            format!("{}^{}", base, self.exponent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;

    fn bu(scale_num: i64, scale_den: i64) -> BasisUnit {
        BasisUnit::new(Dimension::Distance, Ratio::new(scale_num, scale_den))
    }

    #[test]
    fn rescale_round_trip_integer_exponent() {
        let meter_sq = Bpu::new(bu(1, 1), Ratio::new(2, 1));
        let (km_sq, out) = meter_sq.rescale(Ratio::new(1_000, 1));
        let (back, back_out) = km_sq.rescale(Ratio::new(1, 1));
        assert_eq!(back.basis.scale, meter_sq.basis.scale);
        let combined = out.mul(back_out);
        assert!(combined.is_identity());
    }

    #[test]
    fn rescale_half_integer_exponent_round_trips() {
        let bpu = Bpu::new(bu(1, 1), Ratio::new(1, 2));
        let (rescaled, out) = bpu.rescale(Ratio::new(4, 1));
        let (_back, back_out) = rescaled.rescale(Ratio::new(1, 1));
        let combined = out.mul(back_out);
        assert!((combined.inexact_sq - 1.0).abs() < 1e-12);
        assert_eq!(combined.exact, Ratio::new(1, 1));
    }

    #[test]
    fn product_on_mismatched_scale_emits_exact_residual() {
        // meter * kilometer, expressed in meter's scale.
        let meter = Bpu::new(bu(1, 1), Ratio::new(1, 1));
        let kilometer = Bpu::new(bu(1_000, 1), Ratio::new(1, 1));
        let (combined, residual) = meter.product(kilometer);
        assert_eq!(combined.exponent, Ratio::new(2, 1));
        assert_eq!(residual.exact, Ratio::new(1_000, 1));
    }

    #[test]
    fn bpu_rescale_is_const_evaluable() {
        const METER: BasisUnit = BasisUnit::new(Dimension::Distance, Ratio::new(1, 1));
        const KM_BPU: Bpu = Bpu::new(METER, Ratio::new(2, 1));
        const RESCALED: (Bpu, Residual) = KM_BPU.rescale(Ratio::new(1_000, 1));
        assert_eq!(RESCALED.1.exact, Ratio::new(1_000_000, 1));
    }
}
