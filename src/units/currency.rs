//! Currency basis unit.
//!
//! Currency carries no decade ladder: every amount is expressed in the
//! single native unit, since currency is an opaque, unscaled dimension
//! (no "cents"/"kilocurrency" registrations).

use unital_core::Dimension;

use super::define_basis_unit;

define_basis_unit!(Currency, Dimension::Currency, 1, 1, currency);
