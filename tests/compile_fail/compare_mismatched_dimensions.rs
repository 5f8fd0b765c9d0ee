// Comparing a mass Quantity to a time Quantity must fail to compile.

use unital::prelude::*;

fn main() {
    let mass = 1.0.kilograms();
    let time = 1.0.seconds();

    let _ = mass > time;
}
