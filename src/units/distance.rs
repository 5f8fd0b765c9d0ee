//! Distance basis units.

use unital_core::Dimension;

use super::define_basis_unit;

define_basis_unit!(Picometer, Dimension::Distance, 1, 1_000_000_000_000, picometers);
define_basis_unit!(Nanometer, Dimension::Distance, 1, 1_000_000_000, nanometers);
define_basis_unit!(Micrometer, Dimension::Distance, 1, 1_000_000, micrometers);
define_basis_unit!(Millimeter, Dimension::Distance, 1, 1_000, millimeters);
define_basis_unit!(Centimeter, Dimension::Distance, 1, 100, centimeters);
define_basis_unit!(Decimeter, Dimension::Distance, 1, 10, decimeters);
define_basis_unit!(Meter, Dimension::Distance, 1, 1, meters);
define_basis_unit!(Decameter, Dimension::Distance, 10, 1, decameters);
define_basis_unit!(Hectometer, Dimension::Distance, 100, 1, hectometers);
define_basis_unit!(Kilometer, Dimension::Distance, 1_000, 1, kilometers);
define_basis_unit!(Megameter, Dimension::Distance, 1_000_000, 1, megameters);
define_basis_unit!(Gigameter, Dimension::Distance, 1_000_000_000, 1, gigameters);

define_basis_unit!(Inch, Dimension::Distance, 254, 10_000, inches);
define_basis_unit!(Foot, Dimension::Distance, 3_048, 10_000, feet);
define_basis_unit!(Yard, Dimension::Distance, 9_144, 10_000, yards);
define_basis_unit!(Mile, Dimension::Distance, 1_609_344, 1_000, miles);
define_basis_unit!(Lightsecond, Dimension::Distance, 299_792_458, 1, lightseconds);
define_basis_unit!(AstronomicalUnit, Dimension::Distance, 149_597_870_700, 1, astronomical_units);
