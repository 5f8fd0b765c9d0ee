//! Exact rational arithmetic over `i64`, internally widened to `i128` to
//! mitigate overflow in scale-factor products and ratios.
//!
//! [`Ratio`] never normalizes on construction; callers that need lowest
//! terms call [`Ratio::reduce`] or rely on the arithmetic operations, which
//! reduce opportunistically as they go.
//!
//! Every operation here is a `const fn`: this type is evaluated at compile
//! time inside [`crate::bpu::Bpu`]/[`crate::natural_unit::NaturalUnit`]
//! `const` associated values (see `unital::unit_spec::UnitSpec`). Rust's
//! stable compiler does not support calling trait methods from a `const fn`
//! (that needs the still-nightly `const_trait_impl`), so rather than being
//! generic over a `RatioInt`-style trait, this is monomorphized to a
//! concrete `i64`/`i128` pair. The registration tables stay well within
//! `i64` range through the cubic powers a quantity library needs, so this
//! loses no expressiveness this crate actually requires.

use core::cmp::Ordering;
use core::fmt;

/// An exact rational number `num / den`.
///
/// Construction does not normalize; `den` is never zero for a well-formed
/// value. Use [`Ratio::reduce`] to obtain lowest terms with a positive
/// denominator.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    num: i64,
    den: i64,
}

const fn abs128(x: i128) -> i128 {
    if x < 0 {
        -x
    } else {
        x
    }
}

const fn gcd128(a: i128, b: i128) -> i128 {
    let mut a = abs128(a);
    let mut b = abs128(b);
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    if a == 0 {
        1
    } else {
        a
    }
}

/// Narrow a reduced `i128` intermediate back to `i64`; panics (in a const
/// context, a compile error) on overflow, matching this crate's
/// overflow-is-a-bug convention for the canonical registration table.
const fn narrow(x: i128) -> i64 {
    x as i64
}

impl Ratio {
    /// Construct `num/den` without normalizing.
    pub const fn new(num: i64, den: i64) -> Self {
        Ratio { num, den }
    }

    pub const fn zero() -> Self {
        Ratio { num: 0, den: 1 }
    }

    pub const fn one() -> Self {
        Ratio { num: 1, den: 1 }
    }

    pub const fn num(self) -> i64 {
        self.num
    }

    pub const fn den(self) -> i64 {
        self.den
    }

    /// Reduce `num/den` to lowest terms with a non-negative denominator.
    pub const fn reduce(num: i64, den: i64) -> Self {
        let (mut num, den) = (num, den);
        let den = if den < 0 {
            num = -num;
            -den
        } else {
            den
        };
        if num == 0 {
            return Ratio { num: 0, den: 1 };
        }
        let g = gcd128(num as i128, den as i128);
        Ratio { num: narrow(num as i128 / g), den: narrow(den as i128 / g) }
    }

    pub const fn reduced(self) -> Self {
        Self::reduce(self.num, self.den)
    }

    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    pub const fn is_unity(self) -> bool {
        self.num == self.den && self.num != 0
    }

    pub const fn is_integral(self) -> bool {
        self.den == 1 || self.den == -1
    }

    pub const fn negate(self) -> Self {
        Ratio { num: -self.num, den: self.den }
    }

    pub const fn reciprocal(self) -> Self {
        Ratio { num: self.den, den: self.num }
    }

    pub const fn add(self, other: Self) -> Self {
        let a = self.num as i128;
        let b = self.den as i128;
        let c = other.num as i128;
        let d = other.den as i128;
        let num = a * d + b * c;
        let den = b * d;
        Self::reduce_wide(num, den)
    }

    pub const fn sub(self, other: Self) -> Self {
        self.add(other.negate())
    }

    /// Product, canceling common factors between (a,d) and (c,b) before
    /// multiplying, to keep intermediate magnitude down.
    pub const fn mul(self, other: Self) -> Self {
        let (mut a, mut d) = (self.num as i128, other.den as i128);
        let ad_gcd = gcd128(a, d);
        if ad_gcd != 0 {
            a /= ad_gcd;
            d /= ad_gcd;
        }
        let (mut c, mut b) = (other.num as i128, self.den as i128);
        let cb_gcd = gcd128(c, b);
        if cb_gcd != 0 {
            c /= cb_gcd;
            b /= cb_gcd;
        }
        Self::reduce_wide(a * c, b * d)
    }

    pub const fn div(self, other: Self) -> Self {
        self.mul(other.reciprocal())
    }

    const fn reduce_wide(num: i128, den: i128) -> Self {
        let (mut num, den) = (num, den);
        let den = if den < 0 {
            num = -num;
            -den
        } else {
            den
        };
        if num == 0 {
            return Ratio { num: 0, den: 1 };
        }
        let g = gcd128(num, den);
        Ratio { num: narrow(num / g), den: narrow(den / g) }
    }

    /// Integer power via binary exponentiation, O(log |p|).
    pub const fn pow(self, p: i32) -> Self {
        if p == 0 {
            return Self::one();
        }
        if p < 0 {
            return self.pow(-p).reciprocal();
        }
        let mut base = self;
        let mut exp = p as u32;
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.mul(base);
            }
            base = base.mul(base);
            exp >>= 1;
        }
        acc
    }

    /// Sign-normalized three-way comparison.
    pub const fn compare(self, other: Self) -> Ordering {
        let (mut a, mut b) = (self.num as i128, self.den as i128);
        if b < 0 {
            a = -a;
            b = -b;
        }
        let (mut c, mut d) = (other.num as i128, other.den as i128);
        if d < 0 {
            c = -c;
            d = -d;
        }
        let lhs = a * d;
        let rhs = c * b;
        if lhs < rhs {
            Ordering::Less
        } else if lhs > rhs {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub const fn equals(self, other: Self) -> bool {
        matches!(self.compare(other), Ordering::Equal)
    }

    /// Largest integer <= value.
    pub const fn floor(self) -> i64 {
        let (n, d): (i128, i128) =
            if self.den < 0 { (-(self.num as i128), -(self.den as i128)) } else { (self.num as i128, self.den as i128) };
        let q = n / d;
        let r = n % d;
        let q = if r != 0 && ((n < 0) != (d < 0)) { q - 1 } else { q };
        narrow(q)
    }

    pub const fn ceil(self) -> i64 {
        let f = self.floor();
        if self.sub(Ratio::new(f, 1)).is_zero() {
            f
        } else {
            f + 1
        }
    }

    /// `self - floor(self)`, always in `[0, 1)` regardless of the sign of `self`.
    pub const fn frac(self) -> Self {
        self.sub(Ratio::new(self.floor(), 1))
    }

    pub const fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Widen to an `i128` numerator/denominator pair, for use as a
    /// double-width intermediate in products/ratios that might overflow
    /// `i64`.
    pub const fn widen(self) -> (i128, i128) {
        (self.num as i128, self.den as i128)
    }

    /// Narrow a widened `(num, den)` pair back down, reducing first.
    pub const fn narrow_from(wide: (i128, i128)) -> Self {
        Self::reduce_wide(wide.0, wide.1)
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.equals(*other)
    }
}
impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(*other))
    }
}
impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "({}/{})", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_has_gcd_one_and_positive_den() {
        let r = Ratio::reduce(-6, -4);
        assert_eq!(r.num(), 3);
        assert_eq!(r.den(), 2);
    }

    #[test]
    fn reduce_is_idempotent() {
        let r = Ratio::reduce(100, 30);
        let r2 = Ratio::reduce(r.num(), r.den());
        assert_eq!(r, r2);
    }

    #[test]
    fn add_negate_is_zero() {
        let x = Ratio::new(7, 9);
        assert!(x.add(x.negate()).is_zero());
    }

    #[test]
    fn mul_reciprocal_is_one() {
        let x = Ratio::new(7, 9);
        assert!(x.mul(x.reciprocal()).is_unity());
    }

    #[test]
    fn mul_commutes() {
        let x = Ratio::new(7, 9);
        let y = Ratio::new(-3, 11);
        assert_eq!(x.mul(y), y.mul(x));
    }

    #[test]
    fn add_associates() {
        let x = Ratio::new(1, 3);
        let y = Ratio::new(1, 6);
        let z = Ratio::new(5, 7);
        assert_eq!(x.add(y).add(z), x.add(y.add(z)));
    }

    #[test]
    fn pow_laws() {
        let x = Ratio::new(3, 2);
        assert_eq!(x.pow(0), Ratio::one());
        assert_eq!(x.pow(1), x);
        assert_eq!(x.pow(5), x.pow(2).mul(x.pow(3)));
        assert_eq!(x.pow(-2), x.pow(2).reciprocal());
    }

    #[test]
    fn compare_handles_negative_denominator() {
        let x = Ratio::new(-1, -2); // = 1/2
        let y = Ratio::new(1, 2);
        assert_eq!(x.compare(y), Ordering::Equal);
    }

    #[test]
    fn floor_and_frac_preserve_sign() {
        let x = Ratio::new(-7, 2); // -3.5
        assert_eq!(x.floor(), -4);
        let frac = x.frac();
        assert!(frac.to_f64() > 0.0);
        assert!(frac.to_f64() < 1.0);
    }

    #[test]
    fn widen_narrow_round_trips() {
        let x = Ratio::new(123456789, 987654321);
        let wide = x.widen();
        let back = Ratio::narrow_from(wide);
        assert_eq!(back, x.reduced());
    }

    #[test]
    fn const_eval_smoke_test() {
        const KM: Ratio = Ratio::new(1000, 1);
        const KM_SQ: Ratio = KM.mul(KM);
        assert_eq!(KM_SQ, Ratio::new(1_000_000, 1));
    }
}
