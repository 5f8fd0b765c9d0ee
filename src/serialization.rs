//! `serde` support, feature-gated. A statically-typed [`Quantity`]
//! serializes as its bare payload, since its unit is already encoded in the
//! Rust type and carries no runtime representation; a [`DynQuantity`]
//! serializes as `{value, unit_abbreviation}`, since its unit *is* runtime
//! state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dyn_quantity::DynQuantity;
use crate::quantity::Quantity;
use crate::scalar::Scalar;
use crate::unit_spec::UnitSpec;

impl<U: UnitSpec, R: Scalar + Serialize> Serialize for Quantity<U, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de, U: UnitSpec, R: Scalar + Deserialize<'de>> Deserialize<'de> for Quantity<U, R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        R::deserialize(deserializer).map(Quantity::new)
    }
}

#[derive(Serialize, Deserialize)]
struct DynQuantityWire<R> {
    value: R,
    unit_abbreviation: alloc::string::String,
}

impl<R: Scalar + Serialize> Serialize for DynQuantity<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = DynQuantityWire { value: self.value(), unit_abbreviation: self.unit().abbreviation() };
        wire.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::units::distance::kilometers;

    #[test]
    fn quantity_serializes_as_bare_payload() {
        let q = kilometers(5.0_f64);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "5.0");
    }

    #[test]
    fn dyn_quantity_serializes_as_value_and_abbreviation() {
        use crate::dyn_quantity::DynQuantity;
        let q = DynQuantity::from_quantity(kilometers(5.0_f64));
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":5.0,"unit_abbreviation":"km"}"#);
    }
}
