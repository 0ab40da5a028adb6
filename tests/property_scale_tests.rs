use proptest::prelude::*;
use scatterplot_rs::core::LinearScale;

proptest! {
    #[test]
    fn projection_is_monotone_over_the_domain(
        domain_start in -1_000.0f64..1_000.0,
        span in 0.001f64..10_000.0,
        range_start in -2_000.0f64..2_000.0,
        range_span in proptest::sample::select(vec![-500.0f64, -50.0, 50.0, 500.0]),
        samples in proptest::collection::vec(0.0f64..=1.0, 2..32)
    ) {
        let domain_end = domain_start + span;
        let scale = LinearScale::new(domain_start, domain_end, range_start, range_start + range_span)
            .expect("valid scale");

        let mut values: Vec<f64> = samples
            .iter()
            .map(|t| domain_start + t * span)
            .collect();
        values.sort_by(f64::total_cmp);

        for pair in values.windows(2) {
            let lo = scale.project(pair[0]).expect("project");
            let hi = scale.project(pair[1]).expect("project");
            if range_span > 0.0 {
                prop_assert!(lo <= hi);
            } else {
                prop_assert!(lo >= hi);
            }
        }
    }

    #[test]
    fn domain_endpoints_map_to_range_endpoints_exactly(
        domain_start in -1_000.0f64..1_000.0,
        span in 0.001f64..10_000.0,
        range_start in -2_000.0f64..2_000.0,
        range_end in -2_000.0f64..2_000.0
    ) {
        prop_assume!(range_start != range_end);
        let scale = LinearScale::new(domain_start, domain_start + span, range_start, range_end)
            .expect("valid scale");

        prop_assert_eq!(scale.project(domain_start).expect("min"), range_start);
        prop_assert_eq!(scale.project(domain_start + span).expect("max"), range_end);
    }

    #[test]
    fn round_trip_recovers_the_value(
        domain_start in -1_000.0f64..1_000.0,
        span in 0.1f64..10_000.0,
        t in 0.0f64..=1.0
    ) {
        let scale = LinearScale::new(domain_start, domain_start + span, 0.0, 1290.0)
            .expect("valid scale");

        let original = domain_start + t * span;
        let px = scale.project(original).expect("project");
        let recovered = scale.invert(px).expect("invert");
        prop_assert!((recovered - original).abs() <= span * 1e-9);
    }
}
