use scatterplot_rs::ChartError;
use scatterplot_rs::core::LinearScale;

#[test]
fn scale_maps_domain_endpoints_exactly() {
    let scale = LinearScale::new(0.0, 150.0, 0.0, 1290.0).expect("valid scale");

    assert_eq!(scale.project(0.0).expect("min"), 0.0);
    assert_eq!(scale.project(150.0).expect("max"), 1290.0);
}

#[test]
fn scale_interpolates_linearly() {
    let scale = LinearScale::new(0.0, 100.0, 0.0, 500.0).expect("valid scale");

    assert_eq!(scale.project(50.0).expect("midpoint"), 250.0);
    assert_eq!(scale.project(25.0).expect("quarter"), 125.0);
}

#[test]
fn inverted_range_maps_larger_values_higher() {
    // Growth-rate axis: range runs from plot height down to zero.
    let scale = LinearScale::new(-2.5, 3.2, 450.0, 0.0).expect("valid scale");

    assert_eq!(scale.project(-2.5).expect("bottom"), 450.0);
    assert_eq!(scale.project(3.2).expect("top"), 0.0);

    let low = scale.project(-1.0).expect("low");
    let high = scale.project(2.0).expect("high");
    assert!(high < low);
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(1000.0, 2000.0, 3.0, 20.0).expect("valid scale");

    let original = 1_234.5;
    let px = scale.project(original).expect("project");
    let recovered = scale.invert(px).expect("invert");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn degenerate_domain_is_rejected() {
    let result = LinearScale::new(42.0, 42.0, 0.0, 100.0);
    assert!(matches!(
        result,
        Err(ChartError::DegenerateScale { value }) if value == 42.0
    ));
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, f64::INFINITY, 0.0, 100.0).is_err());
}

#[test]
fn non_finite_value_is_rejected() {
    let scale = LinearScale::new(0.0, 1.0, 0.0, 100.0).expect("valid scale");
    assert!(scale.project(f64::NAN).is_err());
    assert!(scale.invert(f64::INFINITY).is_err());
}

#[test]
fn empty_pixel_range_is_rejected() {
    assert!(LinearScale::new(0.0, 1.0, 10.0, 10.0).is_err());
}
