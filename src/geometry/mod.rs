//! Drawing-space geometry: points, bounding boxes and hit testing.

pub mod bound;
pub mod hit_testing;

pub use bound::Bound;
pub use kurbo::Point;

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Direction from `a` to `b` in degrees, measured counter-clockwise from +X
pub fn angle_degrees(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Offset of `length` units along `angle_deg` degrees
pub fn from_polar(length: f64, angle_deg: f64) -> (f64, f64) {
    let radians = angle_deg.to_radians();
    (length * radians.cos(), length * radians.sin())
}

/// Rounds to three decimals, the precision shown in the input bar
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
