use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::error::{DesignError, DesignResult};

/// Axis-aligned bounding box in drawing space.
///
/// The empty bound has `min = +inf` and `max = -inf`, so folding points or
/// other bounds into it always starts from "nothing" and any real point
/// shrinks it to that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bound {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bound {
    pub const EMPTY: Bound = Bound {
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Bound spanned by two opposite corners, in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            max_x: a.x.max(b.x),
            min_y: a.y.min(b.y),
            max_y: a.y.max(b.y),
        }
    }

    /// Smallest bound containing every point. Fails on an empty sequence.
    pub fn from_points<I>(points: I) -> DesignResult<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter().peekable();
        if iter.peek().is_none() {
            return Err(DesignError::EmptyInput);
        }
        Ok(iter.fold(Self::EMPTY, |bound, pt| bound.including(pt)))
    }

    /// Union of all bounds. Fails on an empty sequence.
    pub fn from_bounds<I>(bounds: I) -> DesignResult<Self>
    where
        I: IntoIterator<Item = Bound>,
    {
        let mut iter = bounds.into_iter().peekable();
        if iter.peek().is_none() {
            return Err(DesignError::EmptyInput);
        }
        Ok(iter.fold(Self::EMPTY, |acc, b| acc.union(&b)))
    }

    pub fn including(&self, pt: Point) -> Self {
        Self {
            min_x: self.min_x.min(pt.x),
            max_x: self.max_x.max(pt.x),
            min_y: self.min_y.min(pt.y),
            max_y: self.max_y.max(pt.y),
        }
    }

    pub fn union(&self, other: &Bound) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn mid(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// True when `other` lies entirely inside this bound (edges included)
    pub fn contains(&self, other: &Bound) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Scales the distance of every edge from `anchor` by `factor`.
    ///
    /// A factor above one grows the bound (zoom out), below one shrinks it.
    pub fn inflated(&self, anchor: Point, factor: f64) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            min_x: anchor.x - (anchor.x - self.min_x) * factor,
            max_x: anchor.x + (self.max_x - anchor.x) * factor,
            min_y: anchor.y - (anchor.y - self.min_y) * factor,
            max_y: anchor.y + (self.max_y - anchor.y) * factor,
        }
    }
}
