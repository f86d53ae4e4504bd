use kurbo::Point;

use super::Tool;
use crate::command::Command;
use crate::pline::Pline;
use crate::renderer::{RenderContext, FEEDBACK_COLOR};

/// Freehand drawing: press, drag, release
#[derive(Debug, Clone, Default)]
pub struct ScribbleBuilder {
    points: Vec<Point>,
    drawing: bool,
}

impl ScribbleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, pos: Point) {
        if self.points.last() != Some(&pos) {
            self.points.push(pos);
        }
    }
}

impl Tool for ScribbleBuilder {
    fn name(&self) -> &'static str {
        "Scribble"
    }

    fn deactivate(&mut self) {
        self.points.clear();
        self.drawing = false;
    }

    fn on_pointer_down(&mut self, pos: Point) -> Option<Command> {
        self.points.clear();
        self.points.push(pos);
        self.drawing = true;
        None
    }

    fn on_pointer_move(&mut self, pos: Point) -> Option<Command> {
        if self.drawing {
            self.push(pos);
        }
        None
    }

    fn on_pointer_up(&mut self, pos: Point) -> Option<Command> {
        if !self.drawing {
            return None;
        }
        self.push(pos);
        self.drawing = false;
        let points = std::mem::take(&mut self.points);
        if points.len() < 2 {
            return None;
        }
        Pline::connected(points).ok().map(Command::AddPline)
    }

    fn prompt(&self) -> &'static str {
        "Scribble: Press and drag to draw"
    }

    fn is_busy(&self) -> bool {
        self.drawing
    }

    fn draw_feedback(&self, ctx: &mut RenderContext<'_>) {
        ctx.draw_points(&self.points, FEEDBACK_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pline::PlineKind;

    #[test]
    fn drag_becomes_connected_pline() {
        let mut tool = ScribbleBuilder::new();
        tool.on_pointer_down(Point::new(0.0, 0.0));
        tool.on_pointer_move(Point::new(1.0, 0.5));
        tool.on_pointer_move(Point::new(1.0, 0.5));
        let Some(Command::AddPline(pline)) = tool.on_pointer_up(Point::new(2.0, 1.0)) else {
            panic!("expected a scribble");
        };
        assert_eq!(pline.kind(), PlineKind::Connected);
        assert_eq!(pline.points().len(), 3);
    }

    #[test]
    fn click_without_drag_is_dropped() {
        let mut tool = ScribbleBuilder::new();
        tool.on_pointer_down(Point::new(3.0, 3.0));
        assert_eq!(tool.on_pointer_up(Point::new(3.0, 3.0)), None);
        assert_eq!(tool.on_pointer_move(Point::new(4.0, 4.0)), None);
        assert!(!tool.is_busy());
    }
}
