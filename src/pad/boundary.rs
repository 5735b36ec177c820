//! Keeps the touch indicator inside the pad's travel circle
//!
//! The indicator may travel up to the usable radius from the pad center:
//! half the pad width minus the interaction inset, so the indicator's own
//! footprint never spills past the pad edge. Points outside that circle are
//! projected radially onto it, the same radial clamp used for analog sticks.

use super::geometry::{denormalize, PadGeometry, Point};

/// Radius the indicator may travel from the center.
///
/// A result `<= 0.0` means the pad is degenerate (unmeasured, or an inset at
/// least as large as the pad). Callers must not classify against it.
///
/// The width is halved as a float, so an odd pixel width keeps its half pixel.
pub fn usable_radius(geometry: &PadGeometry, interaction_size: f32) -> f32 {
    geometry.width / 2.0 - interaction_size
}

/// Whether a pad-centered point lies within `radius` of the origin (inclusive).
///
/// Cheap bounds first: the diamond `|x|+|y| <= r` sits inside the circle and
/// the square `max(|x|,|y|) <= r` contains it. Only points between the two
/// pay for the squared-distance comparison.
pub fn is_inside(point: Point, radius: f32) -> bool {
    let dx = point.x.abs();
    let dy = point.y.abs();

    if dx + dy <= radius {
        return true;
    }
    if dx > radius {
        return false;
    }
    if dy > radius {
        return false;
    }
    dx * dx + dy * dy <= radius * radius
}

/// Project a pad-centered point onto the circle of `radius`.
///
/// Result is pad-centered. The origin has no direction and is returned as-is.
pub fn project_onto_boundary(point: Point, radius: f32) -> Point {
    let magnitude = point.length();

    if magnitude == 0.0 {
        return Point::ORIGIN;
    }

    Point::new(radius * (point.x / magnitude), radius * (point.y / magnitude))
}

/// Project a pad-centered point onto the boundary and return it in
/// container-local coordinates, ready for display.
pub fn clamp_to_boundary(point: Point, radius: f32, geometry: &PadGeometry) -> Point {
    denormalize(project_onto_boundary(point, radius), geometry)
}

/// Where to draw the indicator for a pointer event.
///
/// `raw` is the container-local event position and `normalized` the same
/// position in pad-centered space. Inside the travel circle the raw point is
/// shown untouched; outside it the point is clamped to the boundary.
pub fn indicator_point(
    raw: Point,
    normalized: Point,
    radius: f32,
    geometry: &PadGeometry,
) -> Point {
    if is_inside(normalized, radius) {
        raw
    } else {
        clamp_to_boundary(normalized, radius, geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_usable_radius() {
        let geometry = PadGeometry::new(200.0, 200.0);
        assert_eq!(usable_radius(&geometry, 20.0), 80.0);
        assert_eq!(usable_radius(&geometry, 100.0), 0.0);
        assert!(usable_radius(&PadGeometry::default(), 32.0) < 0.0);
    }

    #[test]
    fn test_usable_radius_odd_width_keeps_half_pixel() {
        assert_eq!(usable_radius(&PadGeometry::new(201.0, 201.0), 20.0), 80.5);
    }

    #[test]
    fn test_project_huge_point_lands_on_circle() {
        assert_eq!(project_onto_boundary(Point::new(1e20, 0.0), 80.0), Point::new(80.0, 0.0));

        let projected = project_onto_boundary(Point::new(-3e25, 4e25), 10.0);
        assert!((projected.x + 6.0).abs() < 1e-4);
        assert!((projected.y - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_is_inside_stages() {
        // Diamond fast path
        assert!(is_inside(Point::new(30.0, 30.0), 80.0));
        // Square rejection
        assert!(!is_inside(Point::new(81.0, 0.0), 80.0));
        assert!(!is_inside(Point::new(0.0, -81.0), 80.0));
        // Between diamond and square, resolved exactly
        assert!(is_inside(Point::new(56.0, 56.0), 80.0)); // ~79.2
        assert!(!is_inside(Point::new(57.0, 57.0), 80.0)); // ~80.6
    }

    #[test]
    fn test_is_inside_boundary_is_inclusive() {
        assert!(is_inside(Point::new(80.0, 0.0), 80.0));
        assert!(is_inside(Point::new(0.0, -80.0), 80.0));
        assert!(is_inside(Point::new(48.0, 64.0), 80.0)); // 3-4-5
    }

    #[test]
    fn test_project_onto_boundary() {
        let projected = project_onto_boundary(Point::new(150.0, 0.0), 80.0);
        assert_eq!(projected, Point::new(80.0, 0.0));

        let projected = project_onto_boundary(Point::new(-30.0, 40.0), 10.0);
        assert!((projected.x + 6.0).abs() < 1e-5);
        assert!((projected.y - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_project_origin_returns_origin() {
        let projected = project_onto_boundary(Point::ORIGIN, 80.0);
        assert_eq!(projected, Point::ORIGIN);
        assert!(!projected.x.is_nan() && !projected.y.is_nan());
    }

    #[test]
    fn test_clamp_to_boundary_is_container_local() {
        let geometry = PadGeometry::new(200.0, 200.0);
        let clamped = clamp_to_boundary(Point::new(150.0, 0.0), 80.0, &geometry);
        assert_eq!(clamped, Point::new(180.0, 100.0));
    }

    #[test]
    fn test_indicator_point_inside_keeps_raw() {
        let geometry = PadGeometry::new(200.0, 200.0);
        let raw = Point::new(150.0, 100.0);
        let normalized = Point::new(50.0, 0.0);

        assert_eq!(indicator_point(raw, normalized, 80.0, &geometry), raw);
    }

    #[test]
    fn test_indicator_point_outside_clamps() {
        let geometry = PadGeometry::new(200.0, 200.0);
        let raw = Point::new(100.0, 300.0);
        let normalized = Point::new(0.0, 200.0);

        assert_eq!(
            indicator_point(raw, normalized, 80.0, &geometry),
            Point::new(100.0, 180.0)
        );
    }

    proptest! {
        #[test]
        fn prop_is_inside_matches_euclidean(
            x in -200.0f32..200.0,
            y in -200.0f32..200.0,
            radius in 1.0f32..150.0,
        ) {
            let exact = (x as f64).hypot(y as f64) <= radius as f64;
            let distance_sq = (x as f64) * (x as f64) + (y as f64) * (y as f64);
            let margin = (distance_sq - (radius as f64) * (radius as f64)).abs();

            // Skip points so close to the circle that f32 rounding decides
            prop_assume!(margin > 1.0);
            prop_assert_eq!(is_inside(Point::new(x, y), radius), exact);
        }

        #[test]
        fn prop_projection_lands_on_circle_same_direction(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            radius in 1.0f32..500.0,
        ) {
            let point = Point::new(x, y);
            prop_assume!(!is_inside(point, radius));

            let projected = project_onto_boundary(point, radius);
            let length = projected.length();
            prop_assert!((length - radius).abs() < 1e-2 * radius.max(1.0), "length {} radius {}", length, radius);

            // Same ray: parallel (cross ~ 0) and pointing the same way (dot > 0)
            let cross = x * projected.y - y * projected.x;
            let dot = x * projected.x + y * projected.y;
            prop_assert!(cross.abs() <= 1e-3 * point.length() * radius, "cross {}", cross);
            prop_assert!(dot > 0.0);
        }

        #[test]
        fn prop_projection_of_huge_points_lands_on_circle(
            x in -1e30f32..1e30,
            y in -1e30f32..1e30,
            radius in 1.0f32..500.0,
        ) {
            let point = Point::new(x, y);
            prop_assume!(point.length() > 1e18);

            let projected = project_onto_boundary(point, radius);
            prop_assert!((projected.length() - radius).abs() < 1e-2 * radius, "projected {:?}", projected);

            let dot = x * projected.x + y * projected.y;
            prop_assert!(dot > 0.0);
        }
    }
}
