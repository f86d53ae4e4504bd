use kurbo::Point;

use crate::error::{DesignError, DesignResult};
use crate::geometry::Bound;

/// What kind of gesture produced a pline. Stored in documents as the shape tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlineKind {
    /// Connected line or freehand scribble
    Connected = 1,
    Line = 2,
    Rectangle = 3,
    Ellipse = 4,
}

impl PlineKind {
    pub fn tag(self) -> i32 {
        self as i32
    }

    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            1 => Some(Self::Connected),
            2 => Some(Self::Line),
            3 => Some(Self::Rectangle),
            4 => Some(Self::Ellipse),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Connected => "connected line",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
        }
    }
}

/// One drawn entity: an ordered, non-empty point sequence.
///
/// The points never change after construction, so the bound is computed once.
/// The selection flag is the only mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct Pline {
    kind: PlineKind,
    points: Vec<Point>,
    bound: Bound,
    is_selected: bool,
}

impl Pline {
    pub fn new(kind: PlineKind, points: Vec<Point>) -> DesignResult<Self> {
        let bound = Bound::from_points(points.iter().copied())
            .map_err(|_| DesignError::InvalidShape("a pline needs at least one point".into()))?;
        Ok(Self {
            kind,
            points,
            bound,
            is_selected: false,
        })
    }

    pub fn line(start: Point, end: Point) -> Self {
        Self {
            kind: PlineKind::Line,
            bound: Bound::from_corners(start, end),
            points: vec![start, end],
            is_selected: false,
        }
    }

    /// Closed rectangle outline `[c1, c2, c3, c4, c1]`
    pub fn rectangle(c1: Point, c2: Point, c3: Point, c4: Point) -> Self {
        let points = vec![c1, c2, c3, c4, c1];
        Self {
            kind: PlineKind::Rectangle,
            bound: Bound::from_corners(c1, c3).union(&Bound::from_corners(c2, c4)),
            points,
            is_selected: false,
        }
    }

    pub fn connected(points: Vec<Point>) -> DesignResult<Self> {
        Self::new(PlineKind::Connected, points)
    }

    /// Closed polygon approximating the axis-aligned ellipse
    pub fn ellipse(center: Point, rx: f64, ry: f64, segments: usize) -> DesignResult<Self> {
        if segments < 3 {
            return Err(DesignError::InvalidShape(format!(
                "an ellipse needs at least 3 segments, got {segments}"
            )));
        }
        let step = std::f64::consts::TAU / segments as f64;
        let mut points: Vec<Point> = (0..segments)
            .map(|i| {
                let t = step * i as f64;
                Point::new(center.x + rx * t.cos(), center.y + ry * t.sin())
            })
            .collect();
        points.push(points[0]);
        Self::new(PlineKind::Ellipse, points)
    }

    pub fn kind(&self) -> PlineKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pline_is_invalid() {
        assert!(matches!(
            Pline::new(PlineKind::Connected, Vec::new()),
            Err(DesignError::InvalidShape(_))
        ));
    }

    #[test]
    fn rectangle_is_closed_loop() {
        let (c1, c2, c3, c4) = (
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(0.0, 5.0),
        );
        let rect = Pline::rectangle(c1, c2, c3, c4);
        assert_eq!(rect.points(), &[c1, c2, c3, c4, c1]);
        assert_eq!(rect.bound(), Bound::from_corners(c1, c3));
        assert_eq!(rect.kind(), PlineKind::Rectangle);
    }

    #[test]
    fn ellipse_bound_matches_radii() {
        let e = Pline::ellipse(Point::new(10.0, 10.0), 4.0, 2.0, 64).unwrap();
        let b = e.bound();
        assert!((b.width() - 8.0).abs() < 1e-9);
        assert!((b.height() - 4.0).abs() < 0.01);
        assert_eq!(e.points().first(), e.points().last());
    }

    #[test]
    fn tags_round_trip() {
        for kind in [PlineKind::Connected, PlineKind::Line, PlineKind::Rectangle, PlineKind::Ellipse] {
            assert_eq!(PlineKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(PlineKind::from_tag(0), None);
        assert_eq!(PlineKind::from_tag(5), None);
    }
}
