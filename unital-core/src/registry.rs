//! `BasisUnit` and the closed, compile-time abbreviation registry.

use crate::dimension::Dimension;
use crate::ratio::Ratio;

/// A `(dimension, scale)` pair: `scale * native_unit(dimension)`.
///
/// Example: `(Time, 60/1)` is "minute"; `(Mass, 1/1000)` is "milligram".
/// Equality is componentwise.
#[derive(Debug, Clone, Copy)]
pub struct BasisUnit {
    pub dimension: Dimension,
    pub scale: Ratio,
}

impl BasisUnit {
    pub const fn new(dimension: Dimension, scale: Ratio) -> Self {
        BasisUnit { dimension, scale }
    }

    pub const fn native(dimension: Dimension) -> Self {
        BasisUnit { dimension, scale: Ratio::one() }
    }
}

impl PartialEq for BasisUnit {
    fn eq(&self, other: &Self) -> bool {
        self.dimension.const_eq(other.dimension) && self.scale == other.scale
    }
}

/// One entry in a per-dimension registration table.
#[derive(Debug, Clone, Copy)]
pub struct RegisteredUnit {
    pub scale: Ratio,
    pub abbrev: &'static str,
}

/// Bound on the number of registrations per dimension.
pub const REGISTRY_CAPACITY: usize = 25;

const fn r(num: i64, den: i64) -> Ratio {
    Ratio::new(num, den)
}

// SI decade-ladder prefixes shared by mass, distance, and (partially) time.
const MASS_TABLE: &[RegisteredUnit] = &[
    RegisteredUnit { scale: r(1, 1_000_000_000_000), abbrev: "pg" },
    RegisteredUnit { scale: r(1, 1_000_000_000), abbrev: "ng" },
    RegisteredUnit { scale: r(1, 1_000_000), abbrev: "ug" },
    RegisteredUnit { scale: r(1, 1_000), abbrev: "mg" },
    RegisteredUnit { scale: r(1, 100), abbrev: "cg" },
    RegisteredUnit { scale: r(1, 10), abbrev: "dg" },
    RegisteredUnit { scale: r(1, 1), abbrev: "g" },
    RegisteredUnit { scale: r(10, 1), abbrev: "dag" },
    RegisteredUnit { scale: r(100, 1), abbrev: "hg" },
    RegisteredUnit { scale: r(1_000, 1), abbrev: "kg" },
    RegisteredUnit { scale: r(1_000_000, 1), abbrev: "t" },
    RegisteredUnit { scale: r(1_000_000_000, 1), abbrev: "kt" },
    RegisteredUnit { scale: r(1_000_000_000_000, 1), abbrev: "Mt" },
    RegisteredUnit { scale: r(1_000_000_000_000_000, 1), abbrev: "Gt" },
];

const DISTANCE_TABLE: &[RegisteredUnit] = &[
    RegisteredUnit { scale: r(1, 1_000_000_000_000), abbrev: "pm" },
    RegisteredUnit { scale: r(1, 1_000_000_000), abbrev: "nm" },
    RegisteredUnit { scale: r(1, 1_000_000), abbrev: "um" },
    RegisteredUnit { scale: r(1, 1_000), abbrev: "mm" },
    RegisteredUnit { scale: r(1, 100), abbrev: "cm" },
    RegisteredUnit { scale: r(1, 10), abbrev: "dm" },
    RegisteredUnit { scale: r(1, 1), abbrev: "m" },
    RegisteredUnit { scale: r(10, 1), abbrev: "dam" },
    RegisteredUnit { scale: r(100, 1), abbrev: "hm" },
    RegisteredUnit { scale: r(1_000, 1), abbrev: "km" },
    RegisteredUnit { scale: r(1_000_000, 1), abbrev: "Mm" },
    RegisteredUnit { scale: r(1_000_000_000, 1), abbrev: "Gm" },
    // Non-decadic registrations.
    RegisteredUnit { scale: r(254, 10_000), abbrev: "in" },
    RegisteredUnit { scale: r(3048, 10_000), abbrev: "ft" },
    RegisteredUnit { scale: r(9144, 10_000), abbrev: "yd" },
    RegisteredUnit { scale: r(1_609_344, 1_000), abbrev: "mi" },
    RegisteredUnit { scale: r(299_792_458, 1), abbrev: "ls" },
    RegisteredUnit { scale: r(149_597_870_700, 1), abbrev: "AU" },
];

const TIME_TABLE: &[RegisteredUnit] = &[
    RegisteredUnit { scale: r(1, 1_000_000_000_000), abbrev: "ps" },
    RegisteredUnit { scale: r(1, 1_000_000_000), abbrev: "ns" },
    RegisteredUnit { scale: r(1, 1_000_000), abbrev: "us" },
    RegisteredUnit { scale: r(1, 1_000), abbrev: "ms" },
    RegisteredUnit { scale: r(1, 1), abbrev: "s" },
    RegisteredUnit { scale: r(1_000_000_000, 1), abbrev: "Gs" },
    // Non-decadic registrations.
    RegisteredUnit { scale: r(60, 1), abbrev: "min" },
    RegisteredUnit { scale: r(3_600, 1), abbrev: "h" },
    RegisteredUnit { scale: r(86_400, 1), abbrev: "d" },
    RegisteredUnit { scale: r(31_536_000, 1), abbrev: "y" },
];

const CURRENCY_TABLE: &[RegisteredUnit] = &[RegisteredUnit { scale: r(1, 1), abbrev: "ccy" }];
const PRICE_TABLE: &[RegisteredUnit] = &[RegisteredUnit { scale: r(1, 1), abbrev: "px" }];

fn table_for(dimension: Dimension) -> &'static [RegisteredUnit] {
    match dimension {
        Dimension::Mass => MASS_TABLE,
        Dimension::Distance => DISTANCE_TABLE,
        Dimension::Time => TIME_TABLE,
        Dimension::Currency => CURRENCY_TABLE,
        Dimension::Price => PRICE_TABLE,
        Dimension::Invalid => &[],
    }
}

/// Look up a basis unit's abbreviation; synthesize a fallback if unregistered.
#[cfg(feature = "alloc")]
pub fn abbrev(unit: BasisUnit) -> alloc::string::String {
    use alloc::string::ToString;
    if let Some(found) = table_for(unit.dimension).iter().find(|entry| entry.scale == unit.scale) {
        return found.abbrev.to_string();
    }
    synthesize_fallback(unit)
}

/// Look up a basis unit's registered abbreviation, with no fallback synthesis
/// (the allocation-free half of the contract; available with no feature).
pub fn abbrev_registered(unit: BasisUnit) -> Option<&'static str> {
    table_for(unit.dimension).iter().find(|entry| entry.scale == unit.scale).map(|entry| entry.abbrev)
}

#[cfg(feature = "alloc")]
fn synthesize_fallback(unit: BasisUnit) -> alloc::string::String {
    use alloc::format;
    let native = unit.dimension.native_abbrev();
    if unit.scale.den() == 1 {
        format!("{}{}", unit.scale.num(), native)
    } else {
        format!("{}{}", unit.scale, native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_scale_has_no_fallback() {
        let kg = BasisUnit::new(Dimension::Mass, r(1_000, 1));
        assert_eq!(abbrev(kg), "kg");
    }

    #[test]
    fn unregistered_scale_synthesizes_fallback() {
        let odd = BasisUnit::new(Dimension::Mass, r(1234, 1));
        assert_eq!(abbrev(odd), "1234g");
    }

    #[test]
    fn tables_stay_within_capacity() {
        for dim in Dimension::ALL {
            assert!(table_for(dim).len() <= REGISTRY_CAPACITY);
        }
    }
}
