use unital::prelude::*;

#[test]
fn reflexivity() {
    let a = 5.0.meters();
    assert!(a == a);
    assert!(a <= a);
    assert!(a >= a);
}

#[test]
fn antisymmetry() {
    let a = 5.0.meters();
    let b = 5.0.meters();
    assert!(a <= b);
    assert!(b <= a);
    assert!(a == b);
}

#[test]
fn transitivity() {
    let a = 1.0.meters();
    let b = 2.0.meters();
    let c = 3.0.meters();
    assert!(a < b);
    assert!(b < c);
    assert!(a < c);
}

#[test]
fn kilometer_compares_across_scale() {
    let km = 1.0.kilometers();
    let equal_m = 1000.0.meters();
    let smaller_m = 999.0.meters();
    let larger_m = 1001.0.meters();

    assert!(km == equal_m);
    assert!(km > smaller_m);
    assert!(km < larger_m);
}
