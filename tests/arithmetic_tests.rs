use unital::prelude::*;

#[test]
fn km_times_km_is_distance_squared_at_km_scale() {
    let area = 2.0.kilometers() * 3.0.kilometers();
    assert_eq!(area.value(), 6.0);
}

#[test]
fn m_times_km_realizes_the_thousandfold_scale_immediately() {
    let product = 1.0.meters() * 1.0.kilometers();
    assert_eq!(product.value(), 1000.0);
}

#[test]
fn m_div_km_ratio_collapses_to_one_thousandth() {
    let ratio = 1.0.meters() / 1.0.kilometers();
    assert_eq!(ratio.value(), 0.001);
}

#[test]
fn m_times_hour_times_km_times_minute() {
    let product = 2.0.meters() * 1.0.hours() * 3.0.kilometers() * 4.0.minutes();
    assert_eq!(product.value(), 400.0);
}

#[test]
fn nanogram_plus_microgram_left_hand_unit_wins() {
    let sum = 1.0.nanograms() + 2.0.micrograms();
    assert_eq!(sum.value(), 1001.0);

    let reversed = 2.0.micrograms() + 1.0.nanograms();
    assert_eq!(reversed.value(), 1.001);
}

#[test]
fn subtraction_rescales_the_right_operand() {
    let remaining = 5.0.kilometers() - 2000.0.meters();
    assert_eq!(remaining.value(), 3.0);
}

#[test]
fn negation_flips_the_payload_sign() {
    let debt = -5.0.currency();
    assert_eq!(debt.value(), -5.0);
}

#[test]
fn rescale_is_idempotent() {
    let distance = 5.0.meters();
    let same: unital::Quantity<unital::units::distance::Meter, f64> = distance.rescale();
    assert_eq!(distance.value(), same.value());
}

#[test]
fn rescale_composition_matches_direct_rescale() {
    let distance = 5.0.kilometers();
    let via_meters: unital::Quantity<unital::units::distance::Meter, f64> = distance.rescale();
    let via_centimeters: unital::Quantity<unital::units::distance::Centimeter, f64> = via_meters.rescale();
    let direct: unital::Quantity<unital::units::distance::Centimeter, f64> = distance.rescale();
    assert_eq!(via_centimeters.value(), direct.value());
}
