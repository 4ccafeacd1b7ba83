use approx::assert_relative_eq;

use pinpoint_core::viewport::{Viewport, ZOOM_STEP};

const CENTER: [f32; 2] = [400.0, 300.0];
const BITMAP: [f32; 2] = [104.0, 54.0];

#[test]
fn test_zoom_in_accumulates_by_fixed_step() {
    let mut view = Viewport::default();
    for _ in 0..8 {
        view.wheel_zoom(1, CENTER, CENTER);
    }
    assert_relative_eq!(view.zoom, ZOOM_STEP.powi(8), max_relative = 1e-5);
}

#[test]
fn test_zoom_out_divides_by_fixed_step() {
    let mut view = Viewport::default();
    view.wheel_zoom(-1, CENTER, CENTER);
    assert_relative_eq!(view.zoom, 1.0 / ZOOM_STEP, max_relative = 1e-6);
}

#[test]
fn test_zoom_round_trip_returns_to_original_factor() {
    let mut view = Viewport::default();
    for _ in 0..12 {
        view.wheel_zoom(1, [250.0, 120.0], CENTER);
    }
    for _ in 0..12 {
        view.wheel_zoom(-1, [250.0, 120.0], CENTER);
    }
    assert_relative_eq!(view.zoom, 1.0, max_relative = 1e-5);
}

#[test]
fn test_zoom_factor_is_not_clamped() {
    let mut view = Viewport::default();
    view.wheel_zoom(40, CENTER, CENTER);
    assert!(view.zoom > 1000.0);

    let mut view = Viewport::default();
    view.wheel_zoom(-40, CENTER, CENTER);
    assert!(view.zoom < 0.001);
}

#[test]
fn test_wheel_zoom_keeps_pointer_scene_point_fixed() {
    let mut view = Viewport::default();
    view.pan_by([33.0, -17.0]);

    let pointer = [513.0, 222.0];
    let before = view.scene_from_screen(pointer, CENTER, BITMAP);
    view.wheel_zoom(1, pointer, CENTER);
    let after = view.scene_from_screen(pointer, CENTER, BITMAP);

    assert_relative_eq!(after[0], before[0], epsilon = 1e-3);
    assert_relative_eq!(after[1], before[1], epsilon = 1e-3);
}

#[test]
fn test_zoom_out_also_preserves_the_anchor() {
    let mut view = Viewport::default();
    view.wheel_zoom(5, [290.0, 410.0], CENTER);

    let pointer = [352.0, 268.0];
    let before = view.scene_from_screen(pointer, CENTER, BITMAP);
    view.wheel_zoom(-2, pointer, CENTER);
    let after = view.scene_from_screen(pointer, CENTER, BITMAP);

    assert_relative_eq!(after[0], before[0], epsilon = 1e-3);
    assert_relative_eq!(after[1], before[1], epsilon = 1e-3);
}

#[test]
fn test_pan_accumulates_drag_deltas() {
    let mut view = Viewport::default();
    view.pan_by([5.0, -3.0]);
    view.pan_by([2.5, 4.0]);
    assert_eq!(view.pan, [7.5, 1.0]);
}

#[test]
fn test_unzoomed_panel_center_is_bitmap_center() {
    let view = Viewport::default();
    assert_eq!(view.scene_from_screen(CENTER, CENTER, BITMAP), [52.0, 27.0]);
}

#[test]
fn test_scene_screen_round_trip() {
    let mut view = Viewport::default();
    view.wheel_zoom(3, [390.0, 310.0], CENTER);
    view.pan_by([-12.0, 8.0]);

    let scene = [17.0, 42.0];
    let screen = view.screen_from_scene(scene, CENTER, BITMAP);
    let back = view.scene_from_screen(screen, CENTER, BITMAP);

    assert_relative_eq!(back[0], scene[0], epsilon = 1e-3);
    assert_relative_eq!(back[1], scene[1], epsilon = 1e-3);
}

#[test]
fn test_fit_uses_limiting_dimension_and_recenters() {
    let mut view = Viewport::default();
    view.pan_by([40.0, 40.0]);
    view.fit([200.0, 100.0], [800.0, 600.0]);

    assert_relative_eq!(view.zoom, 4.0, epsilon = 1e-6);
    assert_eq!(view.pan, [0.0, 0.0]);
}
