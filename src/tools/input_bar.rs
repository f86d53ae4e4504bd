//! Numeric entry for builders.
//!
//! The bar holds the values shown next to the canvas. Pointer clicks fill them
//! in; the user may overwrite them and press Enter, at which point
//! [`InputBar::commit`] resolves the fields into one [`TypedInput`] the active
//! builder applies in a single step.

use kurbo::Point;

use crate::geometry::{angle_degrees, distance, from_polar, round3};

/// A single editable value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    X,
    Y,
    Dx,
    Dy,
    Length,
    Angle,
    Breadth,
}

impl InputField {
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Dx => "DX",
            Self::Dy => "DY",
            Self::Length => "Length",
            Self::Angle => "Angle",
            Self::Breadth => "Breadth",
        }
    }
}

/// Which fields a builder shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLayout {
    /// Start point plus an offset given either as `(dx, dy)` or `(length, angle)`
    Segment,
    /// Anchor point plus an extent along each axis
    Size,
}

const SEGMENT_FIELDS: &[InputField] = &[
    InputField::X,
    InputField::Y,
    InputField::Dx,
    InputField::Dy,
    InputField::Length,
    InputField::Angle,
];

const SIZE_FIELDS: &[InputField] = &[
    InputField::X,
    InputField::Y,
    InputField::Length,
    InputField::Breadth,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Representation {
    Coordinates,
    Polar,
}

/// Geometry entered through the input bar, ready for a builder to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedInput {
    /// End point given as an offset from `origin`
    SetByCoordinates { origin: Point, dx: f64, dy: f64 },
    /// End point given as a length along an angle in degrees
    SetByPolar { origin: Point, length: f64, angle: f64 },
    /// Extent from `origin` along X (`length`) and Y (`breadth`)
    SetBySize { origin: Point, length: f64, breadth: f64 },
}

impl TypedInput {
    pub fn origin(&self) -> Point {
        match *self {
            Self::SetByCoordinates { origin, .. }
            | Self::SetByPolar { origin, .. }
            | Self::SetBySize { origin, .. } => origin,
        }
    }

    /// Far end of a segment input, or the opposite corner of a size input
    pub fn end_point(&self) -> Point {
        match *self {
            Self::SetByCoordinates { origin, dx, dy } => Point::new(origin.x + dx, origin.y + dy),
            Self::SetByPolar { origin, length, angle } => {
                let (dx, dy) = from_polar(length, angle);
                Point::new(origin.x + dx, origin.y + dy)
            }
            Self::SetBySize { origin, length, breadth } => {
                Point::new(origin.x + length, origin.y + breadth)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputBar {
    layout: InputLayout,
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    length: f64,
    angle: f64,
    breadth: f64,
    last_edited: Option<Representation>,
}

impl InputBar {
    pub fn new(layout: InputLayout) -> Self {
        Self {
            layout,
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            length: 0.0,
            angle: 0.0,
            breadth: 0.0,
            last_edited: None,
        }
    }

    pub fn layout(&self) -> InputLayout {
        self.layout
    }

    pub fn fields(&self) -> &'static [InputField] {
        match self.layout {
            InputLayout::Segment => SEGMENT_FIELDS,
            InputLayout::Size => SIZE_FIELDS,
        }
    }

    /// Value as displayed, rounded to three decimals
    pub fn get(&self, field: InputField) -> f64 {
        round3(self.raw(field))
    }

    /// User edit of one field
    pub fn set(&mut self, field: InputField, value: f64) {
        if !value.is_finite() {
            return;
        }
        *self.slot(field) = value;
        match field {
            InputField::Dx | InputField::Dy => self.last_edited = Some(Representation::Coordinates),
            InputField::Length | InputField::Angle if self.layout == InputLayout::Segment => {
                self.last_edited = Some(Representation::Polar)
            }
            _ => {}
        }
    }

    /// Shows a picked point as the new origin
    pub fn record_point(&mut self, pt: Point) {
        self.x = pt.x;
        self.y = pt.y;
    }

    /// Shows a picked segment in both representations
    pub fn record_segment(&mut self, start: Point, end: Point) {
        self.dx = end.x - start.x;
        self.dy = end.y - start.y;
        self.length = distance(start, end);
        self.angle = angle_degrees(start, end);
        self.last_edited = None;
    }

    pub fn record_size(&mut self, length: f64, breadth: f64) {
        self.length = length;
        self.breadth = breadth;
    }

    /// Resolves the fields into one input.
    ///
    /// For segments the representation edited last wins. Without an edit,
    /// non-zero `(dx, dy)` wins over `(length, angle)`. All-zero fields give
    /// nothing. The losing representation is recomputed from the winner.
    pub fn commit(&mut self) -> Option<TypedInput> {
        let origin = Point::new(self.x, self.y);
        match self.layout {
            InputLayout::Size => {
                if self.length == 0.0 || self.breadth == 0.0 {
                    return None;
                }
                Some(TypedInput::SetBySize {
                    origin,
                    length: self.length,
                    breadth: self.breadth,
                })
            }
            InputLayout::Segment => {
                if self.dx == 0.0 && self.dy == 0.0 && self.length == 0.0 && self.angle == 0.0 {
                    return None;
                }
                let use_polar = match self.last_edited {
                    Some(rep) => rep == Representation::Polar,
                    None => self.dx == 0.0 && self.dy == 0.0,
                };
                let input = if use_polar {
                    if self.length == 0.0 {
                        return None;
                    }
                    (self.dx, self.dy) = from_polar(self.length, self.angle);
                    TypedInput::SetByPolar {
                        origin,
                        length: self.length,
                        angle: self.angle,
                    }
                } else {
                    if self.dx == 0.0 && self.dy == 0.0 {
                        return None;
                    }
                    let end = Point::new(self.x + self.dx, self.y + self.dy);
                    self.length = distance(origin, end);
                    self.angle = angle_degrees(origin, end);
                    TypedInput::SetByCoordinates {
                        origin,
                        dx: self.dx,
                        dy: self.dy,
                    }
                };
                self.last_edited = None;
                Some(input)
            }
        }
    }

    fn raw(&self, field: InputField) -> f64 {
        match field {
            InputField::X => self.x,
            InputField::Y => self.y,
            InputField::Dx => self.dx,
            InputField::Dy => self.dy,
            InputField::Length => self.length,
            InputField::Angle => self.angle,
            InputField::Breadth => self.breadth,
        }
    }

    fn slot(&mut self, field: InputField) -> &mut f64 {
        match field {
            InputField::X => &mut self.x,
            InputField::Y => &mut self.y,
            InputField::Dx => &mut self.dx,
            InputField::Dy => &mut self.dy,
            InputField::Length => &mut self.length,
            InputField::Angle => &mut self.angle,
            InputField::Breadth => &mut self.breadth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn all_zero_commit_is_nothing() {
        let mut bar = InputBar::new(InputLayout::Segment);
        bar.set(InputField::X, 4.0);
        assert_eq!(bar.commit(), None);
        let mut bar = InputBar::new(InputLayout::Size);
        bar.set(InputField::Length, 3.0);
        assert_eq!(bar.commit(), None);
    }

    #[test]
    fn coordinates_recompute_polar_fields() {
        let mut bar = InputBar::new(InputLayout::Segment);
        bar.set(InputField::X, 1.0);
        bar.set(InputField::Y, 1.0);
        bar.set(InputField::Dx, 3.0);
        bar.set(InputField::Dy, 4.0);
        let input = bar.commit().expect("input");
        assert!(matches!(input, TypedInput::SetByCoordinates { .. }));
        assert!(close(input.end_point(), Point::new(4.0, 5.0)));
        assert_eq!(bar.get(InputField::Length), 5.0);
        assert_eq!(bar.get(InputField::Angle), 53.13);
    }

    #[test]
    fn last_edited_representation_wins() {
        let mut bar = InputBar::new(InputLayout::Segment);
        bar.set(InputField::Dx, 7.0);
        bar.set(InputField::Length, 2.0);
        bar.set(InputField::Angle, 90.0);
        let input = bar.commit().expect("input");
        assert!(matches!(input, TypedInput::SetByPolar { .. }));
        assert!(close(input.end_point(), Point::new(0.0, 2.0)));
        assert_eq!(bar.get(InputField::Dx), 0.0);
        assert_eq!(bar.get(InputField::Dy), 2.0);

        bar.set(InputField::Dx, 1.0);
        let input = bar.commit().expect("input");
        assert!(matches!(input, TypedInput::SetByCoordinates { dx, dy, .. } if dx == 1.0 && dy == 2.0));
    }

    #[test]
    fn picked_segment_fills_both_representations() {
        let mut bar = InputBar::new(InputLayout::Segment);
        bar.record_point(Point::new(0.0, 0.0));
        bar.record_segment(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert_eq!(bar.get(InputField::Length), 1.414);
        assert_eq!(bar.get(InputField::Angle), 45.0);
        assert!(matches!(bar.commit(), Some(TypedInput::SetByCoordinates { .. })));
    }

    #[test]
    fn size_layout_ignores_polar_edits() {
        let mut bar = InputBar::new(InputLayout::Size);
        assert_eq!(bar.fields(), SIZE_FIELDS);
        bar.set(InputField::X, -2.0);
        bar.set(InputField::Length, 5.0);
        bar.set(InputField::Breadth, 3.0);
        let input = bar.commit().expect("input");
        assert!(close(input.end_point(), Point::new(3.0, 3.0)));
        assert!(close(input.origin(), Point::new(-2.0, 0.0)));
    }

    #[test]
    fn non_finite_edits_are_ignored() {
        let mut bar = InputBar::new(InputLayout::Segment);
        bar.set(InputField::Dx, f64::NAN);
        assert_eq!(bar.get(InputField::Dx), 0.0);
    }
}
