// Tests for the math-frame to compass-frame transform and the two
// eight-way direction classifiers.

use app_core::{direction8, direction_for, to_bearing, Direction, CLOCKWISE};

#[test]
fn bearing_at_axis_points() {
    assert!((to_bearing(0.0, 1.0) - 0.0).abs() < 1e-9);
    assert!((to_bearing(1.0, 0.0) - 90.0).abs() < 1e-9);
    assert!((to_bearing(0.0, -1.0) - 180.0).abs() < 1e-9);
    assert!((to_bearing(-1.0, 0.0) - 270.0).abs() < 1e-9);
}

#[test]
fn bearing_at_diagonals() {
    assert!((to_bearing(1.0, 1.0) - 45.0).abs() < 1e-9);
    assert!((to_bearing(1.0, -1.0) - 135.0).abs() < 1e-9);
    assert!((to_bearing(-1.0, -1.0) - 225.0).abs() < 1e-9);
    assert!((to_bearing(-1.0, 1.0) - 315.0).abs() < 1e-9);
}

#[test]
fn bearing_round_trips_across_the_circle() {
    // Build a unit vector at a known compass angle and recover it.
    for deg in (0..360).step_by(5) {
        let rad = (deg as f64).to_radians();
        let bearing = to_bearing(rad.sin(), rad.cos());
        assert!(
            (bearing - deg as f64).abs() < 1e-9,
            "expected bearing {deg}, got {bearing}"
        );
    }
}

#[test]
fn bearing_is_always_normalized() {
    for deg in 0..=720 {
        let rad = (deg as f64).to_radians();
        let bearing = to_bearing(rad.sin(), rad.cos());
        assert!(
            (0.0..360.0).contains(&bearing),
            "bearing {bearing} out of range for {deg}"
        );
    }
}

#[test]
fn direction_labels_match_codes() {
    let expected = [
        ("N", "UP"),
        ("NE", "UP-RIGHT"),
        ("E", "RIGHT"),
        ("SE", "DOWN-RIGHT"),
        ("S", "DOWN"),
        ("SW", "DOWN-LEFT"),
        ("W", "LEFT"),
        ("NW", "UP-LEFT"),
    ];
    for (dir, (code, label)) in CLOCKWISE.iter().zip(expected) {
        assert_eq!(dir.code(), code);
        assert_eq!(dir.label(), label);
    }
}

#[test]
fn classifiers_agree_at_sector_centers() {
    for dir in CLOCKWISE {
        let center = dir.bearing();
        assert_eq!(direction8(center), dir, "direction8 at {center}");
        assert_eq!(direction_for(center), dir, "direction_for at {center}");
    }
}

#[test]
fn classifiers_agree_across_the_circle() {
    // The rounding classifier and the sector classifier implement the same
    // partition; sample densely, including the exact 22.5 multiples.
    for i in 0..1440 {
        let bearing = i as f64 * 0.25;
        assert_eq!(
            direction8(bearing),
            direction_for(bearing),
            "classifiers disagree at bearing {bearing}"
        );
    }
}

#[test]
fn sector_boundaries_are_half_open() {
    assert_eq!(direction_for(22.5), Direction::NorthEast);
    assert_eq!(direction_for(67.5), Direction::East);
    assert_eq!(direction_for(112.5), Direction::SouthEast);
    assert_eq!(direction_for(157.5), Direction::South);
    assert_eq!(direction_for(202.5), Direction::SouthWest);
    assert_eq!(direction_for(247.5), Direction::West);
    assert_eq!(direction_for(292.5), Direction::NorthWest);
    // The wrap sector claims both ends of the circle.
    assert_eq!(direction_for(337.5), Direction::North);
    assert_eq!(direction_for(359.9), Direction::North);
    assert_eq!(direction_for(0.0), Direction::North);
}

#[test]
fn label_round_trip_from_vectors() {
    assert_eq!(direction_for(to_bearing(0.0, 1.0)).label(), "UP");
    assert_eq!(direction_for(to_bearing(1.0, 1.0)).label(), "UP-RIGHT");
    assert_eq!(direction_for(to_bearing(-0.5, -0.5)).label(), "DOWN-LEFT");
}
