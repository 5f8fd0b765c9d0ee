//! The compile-time unit-representation mechanism: a sealed trait
//! implemented by zero-sized marker types, each carrying its unit's value
//! as an associated `const`.
//!
//! Follows the `Unit` trait plus `Prod`/`Per` composite-marker pattern used
//! by exact-dimensional-analysis crates, generalized from a bare `f64`
//! scale factor to this crate's richer `NaturalUnit`/residual model.

use unital_core::bpu::Residual;
use unital_core::natural_unit::NaturalUnit;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A compile-time unit marker. `VALUE` is computed by ordinary `const fn`
/// arithmetic over operands' own `VALUE`s, rather than being encoded as a
/// const-generic parameter, since Rust's const generics accept no
/// structural type rich enough for a `NaturalUnit` on stable (see
/// DESIGN.md for the rejected const-generic-tuple alternative).
pub trait UnitSpec: sealed::Sealed + 'static {
    const VALUE: NaturalUnit;
    /// Residual accumulated by `VALUE`'s own construction (identity for any
    /// unit built directly from registered basis units; only composite
    /// markers built from mismatched-scale operands carry a nontrivial one).
    const RESIDUAL: Residual;
}

/// The dimensionless unit: the identity for [`UnitProduct`]/[`UnitRatio`].
pub struct Dimensionless;
impl sealed::Sealed for Dimensionless {}
impl UnitSpec for Dimensionless {
    const VALUE: NaturalUnit = NaturalUnit::dimensionless();
    const RESIDUAL: Residual = Residual::IDENTITY;
}

/// The product unit `A * B`, computed once at compile time via
/// [`NaturalUnit::product`].
pub struct UnitProduct<A, B>(core::marker::PhantomData<(A, B)>);
impl<A: UnitSpec, B: UnitSpec> sealed::Sealed for UnitProduct<A, B> {}
impl<A: UnitSpec, B: UnitSpec> UnitSpec for UnitProduct<A, B> {
    const VALUE: NaturalUnit = {
        let (value, _) = A::VALUE.product(&B::VALUE);
        value
    };
    const RESIDUAL: Residual = {
        let (_, residual) = A::VALUE.product(&B::VALUE);
        Residual {
            exact: A::RESIDUAL.exact.mul(B::RESIDUAL.exact).mul(residual.exact),
            inexact_sq: A::RESIDUAL.inexact_sq * B::RESIDUAL.inexact_sq * residual.inexact_sq,
        }
    };
}

/// The ratio unit `A / B`, computed once at compile time via
/// [`NaturalUnit::ratio`].
pub struct UnitRatio<A, B>(core::marker::PhantomData<(A, B)>);
impl<A: UnitSpec, B: UnitSpec> sealed::Sealed for UnitRatio<A, B> {}
impl<A: UnitSpec, B: UnitSpec> UnitSpec for UnitRatio<A, B> {
    const VALUE: NaturalUnit = {
        let (value, _) = A::VALUE.ratio(&B::VALUE);
        value
    };
    const RESIDUAL: Residual = {
        let (_, residual) = A::VALUE.ratio(&B::VALUE);
        Residual {
            exact: A::RESIDUAL.exact.mul(B::RESIDUAL.exact.reciprocal()).mul(residual.exact),
            inexact_sq: A::RESIDUAL.inexact_sq * (1.0 / B::RESIDUAL.inexact_sq) * residual.inexact_sq,
        }
    };
}

/// Two unit markers denote the same dimension.
pub fn same_dimension<A: UnitSpec, B: UnitSpec>() -> bool {
    A::VALUE.same_dimension(&B::VALUE)
}

/// `const fn` form of [`same_dimension`], for use inside the `const { assert!(...) }`
/// inline-const blocks that gate `Quantity::rescale`/arithmetic at compile time
/// (stable Rust has no `generic_const_exprs`, so the check lives in the
/// function body rather than in a where-bound; see DESIGN.md's Design Note 1
/// resolution). Legal on stable: `A::VALUE`/`B::VALUE` are associated consts,
/// resolved to concrete `NaturalUnit` values before `same_dimension` (an
/// ordinary inherent `const fn`, not a trait method) is called on them.
pub const fn same_dimension_check<A: UnitSpec, B: UnitSpec>() -> bool {
    A::VALUE.same_dimension(&B::VALUE)
}
