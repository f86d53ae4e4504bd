use kurbo::Point;

use super::input_bar::{InputBar, InputLayout, TypedInput};
use super::Tool;
use crate::command::Command;
use crate::pline::Pline;
use crate::renderer::{RenderContext, FEEDBACK_COLOR};

const PROMPTS: [&str; 2] = [
    "Rectangle: Pick first corner of rectangle",
    "Rectangle: Pick opposite corner of rectangle",
];

/// Axis-aligned rectangle from two opposite corners
#[derive(Debug, Clone)]
pub struct RectBuilder {
    first: Option<Point>,
    hover: Option<Point>,
    bar: InputBar,
}

/// The closed outline through `first`, the two implied corners and `opposite`
fn outline(first: Point, opposite: Point) -> Pline {
    let corner2 = Point::new(opposite.x, first.y);
    let corner4 = Point::new(first.x, opposite.y);
    Pline::rectangle(first, corner2, opposite, corner4)
}

impl RectBuilder {
    pub fn new() -> Self {
        Self {
            first: None,
            hover: None,
            bar: InputBar::new(InputLayout::Size),
        }
    }
}

impl Default for RectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for RectBuilder {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn deactivate(&mut self) {
        self.first = None;
        self.hover = None;
    }

    fn on_pointer_down(&mut self, pos: Point) -> Option<Command> {
        match self.first.take() {
            None => {
                self.first = Some(pos);
                self.bar.record_point(pos);
                None
            }
            Some(first) => {
                self.hover = None;
                self.bar.record_size(pos.x - first.x, pos.y - first.y);
                Some(Command::AddPline(outline(first, pos)))
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Point) -> Option<Command> {
        self.hover = Some(pos);
        None
    }

    fn prompt(&self) -> &'static str {
        PROMPTS[usize::from(self.first.is_some())]
    }

    fn is_busy(&self) -> bool {
        self.first.is_some()
    }

    fn draw_feedback(&self, ctx: &mut RenderContext<'_>) {
        if let (Some(first), Some(hover)) = (self.first, self.hover) {
            ctx.draw_points(outline(first, hover).points(), FEEDBACK_COLOR);
        }
    }

    fn input_bar(&self) -> Option<&InputBar> {
        Some(&self.bar)
    }

    fn input_bar_mut(&mut self) -> Option<&mut InputBar> {
        Some(&mut self.bar)
    }

    fn apply_typed(&mut self, input: &TypedInput) -> Option<Command> {
        let TypedInput::SetBySize { origin, .. } = *input else {
            return None;
        };
        self.deactivate();
        Some(Command::AddPline(outline(origin, input.end_point())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implied_corners_follow_hover() {
        let mut tool = RectBuilder::new();
        tool.on_pointer_down(Point::new(0.0, 0.0));
        tool.on_pointer_move(Point::new(5.0, 5.0));

        let mut sink = crate::renderer::RecordingSink::new();
        tool.draw_feedback(&mut RenderContext::new(kurbo::Affine::IDENTITY, &mut sink));
        assert_eq!(sink.polylines_with(FEEDBACK_COLOR), 1);

        let Some(Command::AddPline(rect)) = tool.on_pointer_down(Point::new(5.0, 5.0)) else {
            panic!("expected a rectangle");
        };
        assert_eq!(
            rect.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(0.0, 5.0),
                Point::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn typed_size_builds_from_origin() {
        let mut tool = RectBuilder::new();
        let cmd = tool.apply_typed(&TypedInput::SetBySize {
            origin: Point::new(1.0, 2.0),
            length: 3.0,
            breadth: 4.0,
        });
        let Some(Command::AddPline(rect)) = cmd else {
            panic!("expected a rectangle");
        };
        assert_eq!(rect.points()[2], Point::new(4.0, 6.0));
        assert_eq!(rect.points()[1], Point::new(4.0, 2.0));
    }
}
