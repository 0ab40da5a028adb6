use scatterplot_rs::config::ChartConfig;
use scatterplot_rs::core::{CountryRecord, ScaleSet};
use scatterplot_rs::interaction::{BASE_OPACITY, HOVER_OPACITY, HoverState, hit_test};
use scatterplot_rs::render::build_plot_frame;

fn sample_rows() -> Vec<CountryRecord> {
    vec![
        CountryRecord::new("A", "Asia and Pacific", 2000, 1000.0, 50.0, 1.2),
        CountryRecord::new("B", "America", 2000, 2000.0, 150.0, -0.5),
    ]
}

#[test]
fn pointer_enter_emits_tooltip_and_opacity_request() {
    let rows = sample_rows();
    let mut hover = HoverState::default();

    let effect = hover.pointer_enter(&rows, 0).expect("known index");
    assert_eq!(effect.point_index, Some(0));
    assert_eq!(effect.opacity, HOVER_OPACITY);
    assert_eq!(hover.hovered(), Some(0));

    let tooltip = effect.tooltip.expect("tooltip");
    assert_eq!(tooltip.country, "A");
    assert_eq!(tooltip.region, "Asia and Pacific");
    assert_eq!(tooltip.population, "1000");
    assert_eq!(tooltip.density, 50.0);
    assert_eq!(tooltip.growth_rate, 1.2);
}

#[test]
fn pointer_leave_restores_opacity_and_hides_tooltip() {
    let rows = sample_rows();
    let mut hover = HoverState::default();
    hover.pointer_enter(&rows, 1).expect("enter");

    let effect = hover.pointer_leave();
    assert_eq!(effect.point_index, Some(1));
    assert_eq!(effect.opacity, BASE_OPACITY);
    assert!(effect.tooltip.is_none());
    assert_eq!(hover.hovered(), None);
}

#[test]
fn pointer_enter_out_of_range_is_ignored() {
    let rows = sample_rows();
    let mut hover = HoverState::default();

    assert!(hover.pointer_enter(&rows, 99).is_none());
    assert_eq!(hover.hovered(), None);
}

#[test]
fn hit_test_finds_the_marker_under_the_pointer() {
    let rows = sample_rows();
    let config = ChartConfig::default();
    let scales = ScaleSet::from_rows(&rows, &config).expect("scales");
    let frame = build_plot_frame(&rows, &scales, &config).expect("frame");

    let b = frame.points[1];
    assert_eq!(hit_test(&frame, b.x, b.y), Some(1));
    assert_eq!(hit_test(&frame, b.x + b.radius - 0.5, b.y), Some(1));
}

#[test]
fn hit_test_misses_outside_every_marker() {
    let rows = sample_rows();
    let config = ChartConfig::default();
    let scales = ScaleSet::from_rows(&rows, &config).expect("scales");
    let frame = build_plot_frame(&rows, &scales, &config).expect("frame");

    assert_eq!(hit_test(&frame, -500.0, -500.0), None);
}

#[test]
fn hit_test_prefers_the_nearest_center_on_overlap() {
    let rows = vec![
        CountryRecord::new("A", "America", 2000, 1000.0, 100.0, 1.0),
        CountryRecord::new("B", "America", 2000, 2000.0, 101.0, 1.0),
    ];
    let config = ChartConfig::default();
    let scales = ScaleSet::from_rows(&rows, &config).expect("scales");
    let frame = build_plot_frame(&rows, &scales, &config).expect("frame");

    // Just right of A's center, both markers overlap the pointer; B's
    // center is farther away.
    let a = frame.points[0];
    assert_eq!(hit_test(&frame, a.x + 1.0, a.y), Some(0));
}
