//! `Display` for [`Quantity`]: `<payload><abbreviation>`,
//! no separator, e.g. `5km`, `12.5g`.

use crate::quantity::Quantity;
use crate::scalar::Scalar;
use crate::unit_spec::UnitSpec;

impl<U: UnitSpec, R: Scalar> core::fmt::Display for Quantity<U, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let value = if U::RESIDUAL.is_identity() { self.value() } else { self.value().scale_by(U::RESIDUAL.collapse()) };
        write!(f, "{}{}", value, U::VALUE.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use crate::units::distance::kilometers;
    use crate::units::mass::grams;

    #[test]
    fn kilometers_display_with_abbreviation() {
        assert_eq!(kilometers(5.0_f64).to_string(), "5km");
    }

    #[test]
    fn grams_display_with_abbreviation() {
        assert_eq!(grams(12.5_f64).to_string(), "12.5g");
    }
}
