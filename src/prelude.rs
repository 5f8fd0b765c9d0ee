//! Method-call sugar for building quantities, grounded in the
//! teacher's `default_declarators.rs` extension-trait pattern: `5.0.meters()`
//! reads the same as the free function `meters(5.0)`, just postfix.

use crate::scalar::Scalar;
use crate::quantity::Quantity;
use crate::units::currency::{currency, Currency};
use crate::units::distance::{
    astronomical_units, centimeters, decameters, decimeters, feet, gigameters, hectometers, inches, kilometers,
    lightseconds, megameters, meters, micrometers, miles, millimeters, nanometers, picometers, yards,
    AstronomicalUnit, Centimeter, Decameter, Decimeter, Foot, Gigameter, Hectometer, Inch, Kilometer, Lightsecond,
    Megameter, Meter, Micrometer, Mile, Millimeter, Nanometer, Picometer, Yard,
};
use crate::units::mass::{
    centigrams, decagrams, decigrams, gigatonnes, grams, hectograms, kilograms, kilotonnes, megatonnes, micrograms,
    milligrams, nanograms, picograms, tonnes, Centigram, Decagram, Decigram, Gigatonne, Gram, Hectogram, Kilogram,
    Kilotonne, Megatonne, Microgram, Milligram, Nanogram, Picogram, Tonne,
};
use crate::units::price::{price, Price};
use crate::units::time::{
    days, gigaseconds, hours, kiloseconds, megaseconds, microseconds, milliseconds, minutes, nanoseconds,
    picoseconds, seconds, years365, Day, Gigasecond, Hour, Kilosecond, Megasecond, Microsecond, Millisecond, Minute,
    Nanosecond, Picosecond, Second, Year365,
};

/// Postfix factory methods, one per registered basis unit, blanket-
/// implemented for every [`Scalar`].
pub trait QuantityExt: Scalar + Sized {
    fn picograms(self) -> Quantity<Picogram, Self> {
        picograms(self)
    }
    fn nanograms(self) -> Quantity<Nanogram, Self> {
        nanograms(self)
    }
    fn micrograms(self) -> Quantity<Microgram, Self> {
        micrograms(self)
    }
    fn milligrams(self) -> Quantity<Milligram, Self> {
        milligrams(self)
    }
    fn centigrams(self) -> Quantity<Centigram, Self> {
        centigrams(self)
    }
    fn decigrams(self) -> Quantity<Decigram, Self> {
        decigrams(self)
    }
    fn grams(self) -> Quantity<Gram, Self> {
        grams(self)
    }
    fn decagrams(self) -> Quantity<Decagram, Self> {
        decagrams(self)
    }
    fn hectograms(self) -> Quantity<Hectogram, Self> {
        hectograms(self)
    }
    fn kilograms(self) -> Quantity<Kilogram, Self> {
        kilograms(self)
    }
    fn tonnes(self) -> Quantity<Tonne, Self> {
        tonnes(self)
    }
    fn kilotonnes(self) -> Quantity<Kilotonne, Self> {
        kilotonnes(self)
    }
    fn megatonnes(self) -> Quantity<Megatonne, Self> {
        megatonnes(self)
    }
    fn gigatonnes(self) -> Quantity<Gigatonne, Self> {
        gigatonnes(self)
    }

    fn picometers(self) -> Quantity<Picometer, Self> {
        picometers(self)
    }
    fn nanometers(self) -> Quantity<Nanometer, Self> {
        nanometers(self)
    }
    fn micrometers(self) -> Quantity<Micrometer, Self> {
        micrometers(self)
    }
    fn millimeters(self) -> Quantity<Millimeter, Self> {
        millimeters(self)
    }
    fn centimeters(self) -> Quantity<Centimeter, Self> {
        centimeters(self)
    }
    fn decimeters(self) -> Quantity<Decimeter, Self> {
        decimeters(self)
    }
    fn meters(self) -> Quantity<Meter, Self> {
        meters(self)
    }
    fn decameters(self) -> Quantity<Decameter, Self> {
        decameters(self)
    }
    fn hectometers(self) -> Quantity<Hectometer, Self> {
        hectometers(self)
    }
    fn kilometers(self) -> Quantity<Kilometer, Self> {
        kilometers(self)
    }
    fn megameters(self) -> Quantity<Megameter, Self> {
        megameters(self)
    }
    fn gigameters(self) -> Quantity<Gigameter, Self> {
        gigameters(self)
    }
    fn inches(self) -> Quantity<Inch, Self> {
        inches(self)
    }
    fn feet(self) -> Quantity<Foot, Self> {
        feet(self)
    }
    fn yards(self) -> Quantity<Yard, Self> {
        yards(self)
    }
    fn miles(self) -> Quantity<Mile, Self> {
        miles(self)
    }
    fn lightseconds(self) -> Quantity<Lightsecond, Self> {
        lightseconds(self)
    }
    fn astronomical_units(self) -> Quantity<AstronomicalUnit, Self> {
        astronomical_units(self)
    }

    fn picoseconds(self) -> Quantity<Picosecond, Self> {
        picoseconds(self)
    }
    fn nanoseconds(self) -> Quantity<Nanosecond, Self> {
        nanoseconds(self)
    }
    fn microseconds(self) -> Quantity<Microsecond, Self> {
        microseconds(self)
    }
    fn milliseconds(self) -> Quantity<Millisecond, Self> {
        milliseconds(self)
    }
    fn seconds(self) -> Quantity<Second, Self> {
        seconds(self)
    }
    fn kiloseconds(self) -> Quantity<Kilosecond, Self> {
        kiloseconds(self)
    }
    fn megaseconds(self) -> Quantity<Megasecond, Self> {
        megaseconds(self)
    }
    fn gigaseconds(self) -> Quantity<Gigasecond, Self> {
        gigaseconds(self)
    }
    fn minutes(self) -> Quantity<Minute, Self> {
        minutes(self)
    }
    fn hours(self) -> Quantity<Hour, Self> {
        hours(self)
    }
    fn days(self) -> Quantity<Day, Self> {
        days(self)
    }
    fn years365(self) -> Quantity<Year365, Self> {
        years365(self)
    }

    fn currency(self) -> Quantity<Currency, Self> {
        currency(self)
    }
    fn price(self) -> Quantity<Price, Self> {
        price(self)
    }
}

impl<R: Scalar> QuantityExt for R {}
