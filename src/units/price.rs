//! Price basis unit.
//!
//! Price is its own basis dimension, not a derived `Currency / Distance`
//! (or similar) ratio unit: treating price as a closed fifth dimension
//! rather than a composite avoids entangling it with the currency axis.

use unital_core::Dimension;

use super::define_basis_unit;

define_basis_unit!(Price, Dimension::Price, 1, 1, price);
