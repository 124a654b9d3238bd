use physics_sandbox::math::{moment_for_box, moment_for_circle, to_degrees, Aabb, Point2, Vector2};
use physics_sandbox::Color;
use std::f32::consts::PI;
use approx::assert_relative_eq;

#[test]
fn test_aabb_from_origin_extent() {
    let area = Aabb::from_origin_extent(Point2::new(10.0, 20.0), Vector2::new(300.0, 200.0));

    assert_eq!(area.min, Point2::new(10.0, 20.0));
    assert_eq!(area.max, Point2::new(310.0, 220.0));
    assert_eq!(area.width(), 300.0);
    assert_eq!(area.height(), 200.0);
    assert_eq!(area.center(), Point2::new(160.0, 120.0));
    assert!(area.is_valid());
}

#[test]
fn test_aabb_from_center_half_extents() {
    let area = Aabb::from_center_half_extents(Point2::new(400.0, 360.0), Vector2::new(400.0, 360.0));

    assert_eq!(area, Aabb::from_origin_extent(Point2::origin(), Vector2::new(800.0, 720.0)));
    assert_eq!(area.origin(), Point2::origin());
    assert_eq!(area.extents(), Vector2::new(800.0, 720.0));
}

#[test]
fn test_aabb_corners_run_counter_clockwise() {
    let area = Aabb::new(Point2::new(0.0, 0.0), Point2::new(4.0, 3.0));
    let corners = area.corners();

    assert_eq!(corners[0], Point2::new(0.0, 0.0));
    assert_eq!(corners[1], Point2::new(4.0, 0.0));
    assert_eq!(corners[2], Point2::new(4.0, 3.0));
    assert_eq!(corners[3], Point2::new(0.0, 3.0));
}

#[test]
fn test_aabb_contains_and_lerp() {
    let area = Aabb::new(Point2::new(-10.0, -10.0), Point2::new(10.0, 30.0));

    assert!(area.contains_point(Point2::new(0.0, 0.0)));
    assert!(area.contains_point(Point2::new(10.0, 30.0)));
    assert!(!area.contains_point(Point2::new(10.1, 0.0)));

    let mid = area.lerp(0.5, 0.25);
    assert_relative_eq!(mid.x, 0.0);
    assert_relative_eq!(mid.y, 0.0);
}

#[test]
fn test_degenerate_aabb_is_invalid() {
    let flat = Aabb::from_origin_extent(Point2::origin(), Vector2::new(100.0, 0.0));
    let inverted = Aabb::new(Point2::new(5.0, 5.0), Point2::new(0.0, 0.0));

    assert!(!flat.is_valid());
    assert!(!inverted.is_valid());
}

#[test]
fn test_box_moment_is_deterministic() {
    let first = moment_for_box(100.0, 200.0, 100.0);
    let second = moment_for_box(100.0, 200.0, 100.0);

    assert_eq!(first, second);
    assert_relative_eq!(first, 100.0 * (200.0 * 200.0 + 100.0 * 100.0) / 12.0);
    assert_relative_eq!(first, 416_666.66, max_relative = 1.0e-5);
}

#[test]
fn test_circle_moment() {
    assert_relative_eq!(moment_for_circle(100.0, 10.0), 5000.0);
}

#[test]
fn test_to_degrees() {
    assert_relative_eq!(to_degrees(PI), 180.0);
    assert_relative_eq!(to_degrees(-PI / 2.0), -90.0);
}

#[test]
fn test_hsv_primaries() {
    let red = Color::from_hsv(0.0, 1.0, 1.0);
    assert_relative_eq!(red.r, 1.0);
    assert_relative_eq!(red.g, 0.0);
    assert_relative_eq!(red.b, 0.0);

    let green = Color::from_hsv(1.0 / 3.0, 1.0, 1.0);
    assert_relative_eq!(green.r, 0.0, epsilon = 1.0e-5);
    assert_relative_eq!(green.g, 1.0);
    assert_relative_eq!(green.b, 0.0, epsilon = 1.0e-5);

    let blue = Color::from_hsv(2.0 / 3.0, 1.0, 1.0);
    assert_relative_eq!(blue.r, 0.0, epsilon = 1.0e-5);
    assert_relative_eq!(blue.b, 1.0);
}

#[test]
fn test_hsv_pastel_and_wrap() {
    let pastel = Color::from_hsv(0.0, 0.3, 1.0);
    assert_relative_eq!(pastel.r, 1.0);
    assert_relative_eq!(pastel.g, 0.7, epsilon = 1.0e-6);
    assert_relative_eq!(pastel.b, 0.7, epsilon = 1.0e-6);
    assert_relative_eq!(pastel.a, 1.0);

    let wrapped = Color::from_hsv(1.25, 0.3, 1.0);
    let plain = Color::from_hsv(0.25, 0.3, 1.0);
    assert_relative_eq!(wrapped.r, plain.r, epsilon = 1.0e-5);
    assert_relative_eq!(wrapped.g, plain.g, epsilon = 1.0e-5);
    assert_relative_eq!(wrapped.b, plain.b, epsilon = 1.0e-5);

    let grey = Color::from_hsv(0.6, 0.0, 0.5);
    assert_eq!(grey, Color::rgb(0.5, 0.5, 0.5));
}
