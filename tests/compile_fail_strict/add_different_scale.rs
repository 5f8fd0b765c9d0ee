// Under the `strict` feature, addition is only defined for identical unit
// types: meters + kilometers must fail to compile even though both are
// distance quantities, since `strict` carries no cross-scale rescaling.

use unital::prelude::*;

fn main() {
    let meters = 1.0.meters();
    let kilometers = 1.0.kilometers();

    let _sum = meters + kilometers;
}
