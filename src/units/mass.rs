//! Mass basis units.

use unital_core::Dimension;

use super::define_basis_unit;

define_basis_unit!(Picogram, Dimension::Mass, 1, 1_000_000_000_000, picograms);
define_basis_unit!(Nanogram, Dimension::Mass, 1, 1_000_000_000, nanograms);
define_basis_unit!(Microgram, Dimension::Mass, 1, 1_000_000, micrograms);
define_basis_unit!(Milligram, Dimension::Mass, 1, 1_000, milligrams);
define_basis_unit!(Centigram, Dimension::Mass, 1, 100, centigrams);
define_basis_unit!(Decigram, Dimension::Mass, 1, 10, decigrams);
define_basis_unit!(Gram, Dimension::Mass, 1, 1, grams);
define_basis_unit!(Decagram, Dimension::Mass, 10, 1, decagrams);
define_basis_unit!(Hectogram, Dimension::Mass, 100, 1, hectograms);
define_basis_unit!(Kilogram, Dimension::Mass, 1_000, 1, kilograms);
define_basis_unit!(Tonne, Dimension::Mass, 1_000_000, 1, tonnes);
define_basis_unit!(Kilotonne, Dimension::Mass, 1_000_000_000, 1, kilotonnes);
define_basis_unit!(Megatonne, Dimension::Mass, 1_000_000_000_000, 1, megatonnes);
define_basis_unit!(Gigatonne, Dimension::Mass, 1_000_000_000_000_000, 1, gigatonnes);
