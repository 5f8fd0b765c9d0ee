//! The sealed `Scalar` trait hierarchy bounding valid [`crate::Quantity`]
//! payload types, covering any numeric type a caller wants rather than a
//! single hard-coded float, grounded in `qtty-core`'s `Scalar`/`Real`/`Exact`
//! hierarchy.

mod sealed {
    pub trait Sealed {}
}

/// A numeric payload type usable inside a [`crate::Quantity`].
///
/// Sealed: only the impls provided by this crate exist, so downstream
/// crates cannot accidentally plug in a type this crate hasn't reasoned
/// about (e.g. one without well-defined zero/one or that can't represent
/// a rescale residual).
pub trait Scalar:
    sealed::Sealed
    + Copy
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::fmt::Display
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Apply a rescale residual factor to a payload.
    fn scale_by(self, factor: f64) -> Self;

    fn to_f64(self) -> f64;

    /// A quiet NaN payload for the runtime-unit-mismatch regime. Integer
    /// scalars saturate to `Self::ZERO` instead, since
    /// there is no integer NaN; callers of [`crate::DynQuantity`] on integer
    /// payloads should prefer checking dimensional compatibility up front.
    fn quiet_nan() -> Self;

    fn is_nan_payload(self) -> bool;
}

/// A [`Scalar`] supporting the transcendental operations needed to collapse
/// a half-integer rescale residual (the final `sqrt`).
pub trait Real: Scalar {
    fn sqrt(self) -> Self;
}

/// Marker for [`Scalar`] types for which rescale residuals should themselves
/// stay exact (only meaningful when a quantity's `inexact_sq` residual is
/// trivially `1.0`, i.e. no fractional exponents are in play).
pub trait Exact: Scalar {}

macro_rules! impl_scalar_float {
    ($t:ty) => {
        impl sealed::Sealed for $t {}
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn scale_by(self, factor: f64) -> Self {
                self * factor as $t
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn quiet_nan() -> Self {
                <$t>::NAN
            }

            fn is_nan_payload(self) -> bool {
                self.is_nan()
            }
        }
        impl Real for $t {
            fn sqrt(self) -> Self {
                self.sqrt()
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($t:ty) => {
        impl sealed::Sealed for $t {}
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn scale_by(self, factor: f64) -> Self {
                ((self as f64) * factor) as $t
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn quiet_nan() -> Self {
                Self::ZERO
            }

            fn is_nan_payload(self) -> bool {
                false
            }
        }
        impl Exact for $t {}
    };
}

impl_scalar_int!(i8);
impl_scalar_int!(i16);
impl_scalar_int!(i32);
impl_scalar_int!(i64);
impl_scalar_int!(i128);

#[cfg(feature = "scalar-rational")]
mod rational_impls {
    use super::{sealed, Exact, Scalar};
    use num_rational::Ratio;

    macro_rules! impl_scalar_rational {
        ($t:ty) => {
            impl sealed::Sealed for Ratio<$t> {}
            impl Scalar for Ratio<$t> {
                const ZERO: Self = Ratio::new_raw(0, 1);
                const ONE: Self = Ratio::new_raw(1, 1);

                fn scale_by(self, factor: f64) -> Self {
                    // Rescale residuals are exact only when `factor` came
                    // from a `Residual` with `inexact_sq == 1.0`; callers
                    // that mix fractional exponents into a rational-payload
                    // `Quantity` accept the same float multiply/divide
                    // everyone else does.
                    let scaled = self.to_f64_lossy() * factor;
                    Ratio::approximate_float(scaled).unwrap_or(Self::ZERO)
                }

                fn to_f64(self) -> f64 {
                    self.to_f64_lossy()
                }

                fn quiet_nan() -> Self {
                    Self::ZERO
                }

                fn is_nan_payload(self) -> bool {
                    false
                }
            }
            impl Exact for Ratio<$t> {}
        };
    }

    impl_scalar_rational!(i32);
    impl_scalar_rational!(i64);

    trait ToF64Lossy {
        fn to_f64_lossy(&self) -> f64;
    }

    impl ToF64Lossy for Ratio<i32> {
        fn to_f64_lossy(&self) -> f64 {
            *self.numer() as f64 / *self.denom() as f64
        }
    }

    impl ToF64Lossy for Ratio<i64> {
        fn to_f64_lossy(&self) -> f64 {
            *self.numer() as f64 / *self.denom() as f64
        }
    }
}
