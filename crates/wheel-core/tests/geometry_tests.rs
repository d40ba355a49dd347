use proptest::prelude::*;
use wheel_core::{render_pass, WheelConfig, WheelGeometry};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn small_lists_use_the_minimum_segment_count() {
    let cfg = WheelConfig::default();
    let g = WheelGeometry::compute(5, &cfg);
    // max(2 * 9, 5 + 4) = 18 segments
    assert!(approx(g.item_angle_deg, 20.0));
    let expected_radius = 32.0 / 20.0_f64.to_radians().tan();
    assert!(approx(g.radius_px, expected_radius));
    // diameter bound (184) is tighter than 9 rows (288)
    assert!(approx(g.container_height_px, 184.0));
    assert_eq!(g.quarter_count, 4);
}

#[test]
fn long_lists_shrink_the_step_and_cap_the_height() {
    let cfg = WheelConfig::default();
    let g = WheelGeometry::compute(30, &cfg);
    assert!(approx(g.item_angle_deg, 360.0 / 34.0));
    assert!(approx(g.container_height_px, 9.0 * 32.0));
}

#[test]
fn one_step_spans_one_row() {
    let cfg = WheelConfig::default();
    let g = WheelGeometry::compute(12, &cfg);
    let rise = g.radius_px * g.item_angle_deg.to_radians().tan();
    assert!(approx(rise, cfg.item_height_px));
}

#[test]
fn render_pass_fades_with_distance_and_marks_one_active() {
    let cfg = WheelConfig::default();
    let g = WheelGeometry::compute(5, &cfg);
    let frame = render_pass(2.0, &g, 5);

    let opacities: Vec<f64> = frame.items.iter().map(|i| i.opacity).collect();
    let expected = [0.7, 0.85, 1.0, 0.85, 0.7];
    for (got, want) in opacities.iter().zip(expected) {
        assert!(approx(*got, want), "got {got}, want {want}");
    }
    assert_eq!(frame.active_index(), Some(2));
    assert_eq!(frame.items.iter().filter(|i| i.active).count(), 1);
    assert!(frame.items.iter().all(|i| i.visible));
    assert!(approx(frame.rotation_deg, 40.0));
    assert!(approx(frame.translate_z_px, -g.radius_px));
}

#[test]
fn render_pass_hides_items_past_the_quarter_turn() {
    let cfg = WheelConfig::default();
    let g = WheelGeometry::compute(12, &cfg);
    let frame = render_pass(0.0, &g, 12);
    assert!(frame.items[5].visible);
    assert!(!frame.items[6].visible);
    assert_eq!(frame.items[11].opacity, 0.0);
}

#[test]
fn half_way_between_rows_nothing_is_active() {
    let cfg = WheelConfig::default();
    let g = WheelGeometry::compute(4, &cfg);
    let frame = render_pass(1.5, &g, 4);
    assert_eq!(frame.active_index(), None);
}

#[test]
fn empty_list_renders_no_items() {
    let cfg = WheelConfig::default();
    let g = WheelGeometry::compute(0, &cfg);
    let frame = render_pass(0.0, &g, 0);
    assert!(frame.items.is_empty());
    assert!(g.radius_px.is_finite());
}

proptest! {
    #[test]
    fn visible_arc_never_exceeds_a_full_turn(n in 1usize..500, visible in 1usize..40) {
        let cfg = WheelConfig { visible_count: visible, ..WheelConfig::default() };
        let g = WheelGeometry::compute(n, &cfg);
        prop_assert!(g.item_angle_deg * visible as f64 <= 360.0);
        // and stays on the front hemisphere
        prop_assert!(g.item_angle_deg * visible as f64 <= 180.0 + 1e-9);
        prop_assert!(g.radius_px > 0.0);
        prop_assert!(g.container_height_px <= visible as f64 * cfg.item_height_px);
    }

    #[test]
    fn render_pass_is_idempotent(n in 0usize..64, position in -0.5f64..64.0) {
        let cfg = WheelConfig::default();
        let g = WheelGeometry::compute(n, &cfg);
        let a = render_pass(position, &g, n);
        let b = render_pass(position, &g, n);
        prop_assert_eq!(a, b);
    }
}
