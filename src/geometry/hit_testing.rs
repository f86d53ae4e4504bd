// Point-pick hit testing. Distances are measured in drawing space, so the
// effective pick radius on screen changes with the zoom level.

use kurbo::Point;

use crate::pline::Pline;

/// Default pick tolerance in drawing-space units
pub const PICK_TOLERANCE: f64 = 5.0;

/// Perpendicular distance from `point` to the infinite line through
/// `start` and `end`.
///
/// Uses `|A*x + B*y + C| / sqrt(A^2 + B^2)` with `A = y2 - y1`,
/// `B = x1 - x2`, `C = y1*(x2 - x1) - (y2 - y1)*x1`. The line is not clipped
/// to the segment. A zero-length segment falls back to point distance.
pub fn distance_to_line(start: Point, end: Point, point: Point) -> f64 {
    let a = end.y - start.y;
    let b = start.x - end.x;
    let c = start.y * (end.x - start.x) - (end.y - start.y) * start.x;
    let norm = (a * a + b * b).sqrt();
    if norm == 0.0 {
        return start.distance(point);
    }
    (a * point.x + b * point.y + c).abs() / norm
}

/// True if any segment of `pline` passes closer than `tolerance` to `point`
pub fn pline_hit(pline: &Pline, point: Point, tolerance: f64) -> bool {
    pline
        .points()
        .windows(2)
        .any(|seg| distance_to_line(seg[0], seg[1], point) < tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line_distance() {
        let d = distance_to_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 4.0).abs() < 1e-12);
    }

    #[test]
    fn distance_ignores_segment_ends() {
        // The line is infinite: a point far past the end but on the line is at zero distance
        let d = distance_to_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(50.0, 50.0));
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn degenerate_segment_uses_point_distance() {
        let p = Point::new(2.0, 2.0);
        let d = distance_to_line(p, p, Point::new(5.0, 6.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn pline_hit_respects_tolerance() {
        let line = Pline::line(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(pline_hit(&line, Point::new(5.0, 7.0), PICK_TOLERANCE));
        assert!(!pline_hit(&line, Point::new(0.0, 10.0), PICK_TOLERANCE));
    }
}
