//! Time basis units.

use unital_core::Dimension;

use super::define_basis_unit;

define_basis_unit!(Picosecond, Dimension::Time, 1, 1_000_000_000_000, picoseconds);
define_basis_unit!(Nanosecond, Dimension::Time, 1, 1_000_000_000, nanoseconds);
define_basis_unit!(Microsecond, Dimension::Time, 1, 1_000_000, microseconds);
define_basis_unit!(Millisecond, Dimension::Time, 1, 1_000, milliseconds);
define_basis_unit!(Second, Dimension::Time, 1, 1, seconds);
define_basis_unit!(Kilosecond, Dimension::Time, 1_000, 1, kiloseconds);
define_basis_unit!(Megasecond, Dimension::Time, 1_000_000, 1, megaseconds);
define_basis_unit!(Gigasecond, Dimension::Time, 1_000_000_000, 1, gigaseconds);

define_basis_unit!(Minute, Dimension::Time, 60, 1, minutes);
define_basis_unit!(Hour, Dimension::Time, 3_600, 1, hours);
define_basis_unit!(Day, Dimension::Time, 86_400, 1, days);
define_basis_unit!(Year365, Dimension::Time, 31_536_000, 1, years365);
