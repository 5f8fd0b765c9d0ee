// Assigning a distance Quantity where a time Quantity is expected must fail
// to compile: Quantity<Meter, f64> and Quantity<Second, f64> are distinct,
// unrelated types with no implicit conversion between them.

use unital::prelude::*;
use unital::units::time::Second;
use unital::Quantity;

fn main() {
    let distance = 1.0.meters();

    let _time: Quantity<Second, f64> = distance;
}
