use pinpoint_core::origin::OriginCorner;

// A 100x50 bitmap after the 2 px frame is composited around it.
const SIZE: [f32; 2] = [104.0, 54.0];

#[test]
fn test_top_left_is_identity() {
    assert_eq!(OriginCorner::TopLeft.map([10.0, 20.0], SIZE), [10.0, 20.0]);
}

#[test]
fn test_bottom_left_flips_y() {
    assert_eq!(OriginCorner::BottomLeft.map([10.0, 20.0], SIZE), [10.0, 34.0]);
}

#[test]
fn test_top_right_flips_x() {
    assert_eq!(OriginCorner::TopRight.map([10.0, 20.0], SIZE), [94.0, 20.0]);
}

#[test]
fn test_bottom_right_flips_both() {
    assert_eq!(
        OriginCorner::BottomRight.map([10.0, 20.0], SIZE),
        [94.0, 34.0]
    );
}

#[test]
fn test_each_corner_reads_its_own_position_as_zero() {
    let [w, h] = SIZE;
    assert_eq!(OriginCorner::TopLeft.map([0.0, 0.0], SIZE), [0.0, 0.0]);
    assert_eq!(OriginCorner::BottomLeft.map([0.0, h], SIZE), [0.0, 0.0]);
    assert_eq!(OriginCorner::TopRight.map([w, 0.0], SIZE), [0.0, 0.0]);
    assert_eq!(OriginCorner::BottomRight.map([w, h], SIZE), [0.0, 0.0]);
}

#[test]
fn test_fractional_scene_positions_pass_through() {
    assert_eq!(
        OriginCorner::BottomLeft.map([10.5, 20.25], SIZE),
        [10.5, 33.75]
    );
}

#[test]
fn test_positions_outside_the_bitmap_are_not_clamped() {
    assert_eq!(OriginCorner::TopLeft.map([-3.0, 60.0], SIZE), [-3.0, 60.0]);
    assert_eq!(OriginCorner::BottomLeft.map([-3.0, 60.0], SIZE), [-3.0, -6.0]);
    assert_eq!(OriginCorner::TopRight.map([110.0, 60.0], SIZE), [-6.0, 60.0]);
}

#[test]
fn test_default_origin_is_bottom_left() {
    assert_eq!(OriginCorner::default(), OriginCorner::BottomLeft);
}

#[test]
fn test_selector_lists_all_four_corners() {
    let labels: Vec<String> = OriginCorner::ALL.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        labels,
        ["Top Left", "Bottom Left", "Top Right", "Bottom Right"]
    );
}
