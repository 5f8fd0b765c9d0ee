//! Bounded ordered sequence of [`Bpu`]s over distinct dimensions.
//!
//! Every operation reachable from a [`crate`]-level `const` evaluation (i.e.
//! everything `unital::UnitSpec::VALUE`/`RESIDUAL` can call transitively) is
//! written as a genuine `const fn`: manual indexed `while` loops over
//! `entries[..len]` instead of iterators or closures, since neither is
//! usable inside a `const fn` on stable Rust. Methods only ever used at
//! `Quantity` runtime (`entries`, `same_dimension`, `same_unit`, `native`,
//! `abbreviation`) stay ordinary functions and may use iterators freely.

use crate::bpu::{Bpu, Residual};
use crate::dimension::Dimension;
use crate::ratio::Ratio;
use crate::registry::BasisUnit;

/// Number of basis dimensions; also the fixed capacity of a [`NaturalUnit`].
pub const MAX_DIMENSIONS: usize = 5;

/// A bounded ordered sequence of [`Bpu`]s, at most one per distinct
/// dimension. Ordering is observational, not semantic:
/// equality is defined per-dimension, not by position.
#[derive(Debug, Clone, Copy)]
pub struct NaturalUnit {
    entries: [Option<Bpu>; MAX_DIMENSIONS],
    len: usize,
}

impl NaturalUnit {
    pub const fn dimensionless() -> Self {
        NaturalUnit { entries: [None; MAX_DIMENSIONS], len: 0 }
    }

    /// Build from a fixed-size array of BPUs, folding each one in via
    /// [`Self::mul_bpu_in_place`].
    pub const fn from_bpus<const N: usize>(bpus: [Bpu; N]) -> Self {
        let mut unit = Self::dimensionless();
        let mut i = 0;
        while i < N {
            let (next, _residual) = unit.mul_bpu_in_place(bpus[i]);
            unit = next;
            i += 1;
        }
        unit
    }

    pub const fn single(bpu: Bpu) -> Self {
        let mut entries = [None; MAX_DIMENSIONS];
        entries[0] = Some(bpu);
        NaturalUnit { entries, len: 1 }
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.len == 0
    }

    pub fn entries(&self) -> impl Iterator<Item = &Bpu> {
        self.entries.iter().filter_map(|e| e.as_ref())
    }

    const fn find_index(&self, dimension: Dimension) -> Option<usize> {
        let mut i = 0;
        while i < self.len {
            if let Some(b) = self.entries[i] {
                if b.basis.dimension.const_eq(dimension) {
                    return Some(i);
                }
            }
            i += 1;
        }
        None
    }

    /// Contract the sequence, keeping `entries[..len]` populated, consuming
    /// `self` and returning the updated value (copy-and-return rather than
    /// `&mut self`, so this stays a plain `const fn`).
    const fn remove_at(self, index: usize) -> Self {
        let mut entries = self.entries;
        let mut i = index;
        while i < self.len - 1 {
            entries[i] = entries[i + 1];
            i += 1;
        }
        entries[self.len - 1] = None;
        NaturalUnit { entries, len: self.len - 1 }
    }

    const fn append(self, bpu: Bpu) -> Self {
        let mut entries = self.entries;
        entries[self.len] = Some(bpu);
        NaturalUnit { entries, len: self.len + 1 }
    }

    /// Fold a single BPU in by product, returning the updated unit and the
    /// residual its combination produced.
    pub const fn mul_bpu_in_place(self, bpu: Bpu) -> (Self, Residual) {
        match self.find_index(bpu.basis.dimension) {
            Some(idx) => {
                let existing = match self.entries[idx] {
                    Some(b) => b,
                    None => unreachable!(),
                };
                let (combined, residual) = existing.product(bpu);
                let updated = if combined.exponent.is_zero() {
                    self.remove_at(idx)
                } else {
                    let mut entries = self.entries;
                    entries[idx] = Some(combined);
                    NaturalUnit { entries, len: self.len }
                };
                (updated, residual)
            }
            None => (self.append(bpu), Residual::IDENTITY),
        }
    }

    /// Fold a single BPU in by ratio: symmetric with
    /// [`Self::mul_bpu_in_place`], appending the reciprocal of `bpu` when its
    /// dimension is absent.
    pub const fn div_bpu_in_place(self, bpu: Bpu) -> (Self, Residual) {
        match self.find_index(bpu.basis.dimension) {
            Some(idx) => {
                let existing = match self.entries[idx] {
                    Some(b) => b,
                    None => unreachable!(),
                };
                let (combined, residual) = existing.ratio(bpu);
                let updated = if combined.exponent.is_zero() {
                    self.remove_at(idx)
                } else {
                    let mut entries = self.entries;
                    entries[idx] = Some(combined);
                    NaturalUnit { entries, len: self.len }
                };
                (updated, residual)
            }
            None => (self.append(bpu.reciprocal()), Residual::IDENTITY),
        }
    }

    /// Product of two NaturalUnits: fold in each of `other`'s BPUs via
    /// [`Self::mul_bpu_in_place`], multiplying residuals together. The
    /// double-width intermediate for the scale-factor arithmetic inside each
    /// BPU product happens inside [`Bpu::rescale`]'s `Ratio` operations,
    /// which already reduce through an `i128` intermediate, so no separate
    /// widened `NaturalUnit` representation is required here.
    pub const fn product(&self, other: &Self) -> (Self, Residual) {
        let mut result = *self;
        let mut residual = Residual::IDENTITY;
        let mut i = 0;
        while i < other.len {
            if let Some(bpu) = other.entries[i] {
                let (next, r) = result.mul_bpu_in_place(bpu);
                result = next;
                residual = residual.mul(r);
            }
            i += 1;
        }
        (result, residual)
    }

    pub const fn ratio(&self, other: &Self) -> (Self, Residual) {
        let mut result = *self;
        let mut residual = Residual::IDENTITY;
        let mut i = 0;
        while i < other.len {
            if let Some(bpu) = other.entries[i] {
                let (next, r) = result.div_bpu_in_place(bpu);
                result = next;
                residual = residual.mul(r);
            }
            i += 1;
        }
        (result, residual)
    }

    /// Sum of exponents over entries with the given dimension. `const fn`:
    /// called from the compile-time dimension-agreement check that gates
    /// `unital`'s rescale/arithmetic operations, as well as at runtime.
    pub const fn exponent_sum(&self, dimension: Dimension) -> Ratio {
        let mut acc = Ratio::zero();
        let mut i = 0;
        while i < self.len {
            if let Some(b) = self.entries[i] {
                if b.basis.dimension.const_eq(dimension) {
                    acc = acc.add(b.exponent);
                }
            }
            i += 1;
        }
        acc
    }

    /// Two NaturalUnits denote the same *dimension* iff every dimension's
    /// summed exponent agrees.
    pub const fn same_dimension(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < Dimension::ALL.len() {
            let d = Dimension::ALL[i];
            if !self.exponent_sum(d).equals(other.exponent_sum(d)) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Same dimension, and additionally the scale factor for each present
    /// dimension agrees.
    pub const fn same_unit(&self, other: &Self) -> bool {
        if !self.same_dimension(other) {
            return false;
        }
        let mut i = 0;
        while i < Dimension::ALL.len() {
            let d = Dimension::ALL[i];
            let a = match self.find_index(d) {
                Some(idx) => match self.entries[idx] {
                    Some(b) => Some(b.basis.scale),
                    None => unreachable!(),
                },
                None => None,
            };
            let b = match other.find_index(d) {
                Some(idx) => match other.entries[idx] {
                    Some(b) => Some(b.basis.scale),
                    None => unreachable!(),
                },
                None => None,
            };
            let eq = match (a, b) {
                (Some(x), Some(y)) => x.equals(y),
                (None, None) => true,
                _ => false,
            };
            if !eq {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn native(dimension: Dimension) -> Self {
        Self::single(Bpu::new(BasisUnit::native(dimension), Ratio::one()))
    }
}

impl Default for NaturalUnit {
    fn default() -> Self {
        Self::dimensionless()
    }
}

#[cfg(feature = "alloc")]
impl NaturalUnit {
    /// Join each BPU's abbreviation with `.`, in sequence order.
    /// Empty for a dimensionless unit.
    pub fn abbreviation(&self) -> alloc::string::String {
        use alloc::string::String;
        let mut out = String::new();
        for (i, bpu) in self.entries().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(&bpu.abbreviation());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bpu(dim: Dimension, scale: Ratio, exp: Ratio) -> Bpu {
        Bpu::new(BasisUnit::new(dim, scale), exp)
    }

    #[test]
    fn zero_exponent_cancels_entry() {
        let u = NaturalUnit::single(bpu(Dimension::Mass, Ratio::one(), Ratio::one()));
        let (u, _) = u.div_bpu_in_place(bpu(Dimension::Mass, Ratio::one(), Ratio::one()));
        assert!(u.is_dimensionless());
    }

    #[test]
    fn product_commutes_dimensionally() {
        let a = NaturalUnit::single(bpu(Dimension::Distance, Ratio::one(), Ratio::one()));
        let b = NaturalUnit::single(bpu(Dimension::Time, Ratio::one(), Ratio::one()));
        let (ab, _) = a.product(&b);
        let (ba, _) = b.product(&a);
        assert!(ab.same_dimension(&ba));
    }

    #[test]
    fn ratio_of_self_is_dimensionless() {
        let u = NaturalUnit::single(bpu(Dimension::Mass, Ratio::new(1000, 1), Ratio::one()));
        let (result, residual) = u.ratio(&u);
        assert!(result.is_dimensionless());
        assert!(residual.is_identity());
    }

    #[test]
    fn km_times_km_has_no_residual() {
        let km = NaturalUnit::single(bpu(Dimension::Distance, Ratio::new(1000, 1), Ratio::one()));
        let (result, residual) = km.product(&km);
        let entry = result.entries().next().unwrap();
        assert_eq!(entry.exponent, Ratio::new(2, 1));
        assert_eq!(entry.basis.scale, Ratio::new(1000, 1));
        assert!(residual.is_identity());
    }

    #[test]
    fn natural_unit_product_is_const_evaluable() {
        const M: Bpu = Bpu::new(BasisUnit::new(Dimension::Distance, Ratio::new(1, 1)), Ratio::new(1, 1));
        const KM: Bpu = Bpu::new(BasisUnit::new(Dimension::Distance, Ratio::new(1_000, 1)), Ratio::new(1, 1));
        const U: NaturalUnit = NaturalUnit::single(M);
        const V: NaturalUnit = NaturalUnit::single(KM);
        const RESULT: (NaturalUnit, Residual) = U.product(&V);
        assert!(RESULT.0.same_dimension(&U));
    }
}
