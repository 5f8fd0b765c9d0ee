// Adding a mass Quantity to a distance Quantity must fail to compile: the
// inline `const` dimension assertion inside `Add`'s impl body rejects it.

use unital::prelude::*;

fn main() {
    let mass = 1.0.kilograms();
    let distance = 1.0.meters();

    let _sum = mass + distance;
}
