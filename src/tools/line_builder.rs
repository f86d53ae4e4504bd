use kurbo::Point;

use super::input_bar::{InputBar, InputLayout, TypedInput};
use super::Tool;
use crate::command::Command;
use crate::pline::Pline;
use crate::renderer::{RenderContext, FEEDBACK_COLOR};

const PROMPTS: [&str; 2] = ["Line: Pick start point", "Line: Pick end point"];

/// Two clicks make a line: start point, then end point
#[derive(Debug, Clone)]
pub struct LineBuilder {
    first: Option<Point>,
    hover: Option<Point>,
    bar: InputBar,
}

impl LineBuilder {
    pub fn new() -> Self {
        Self {
            first: None,
            hover: None,
            bar: InputBar::new(InputLayout::Segment),
        }
    }
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for LineBuilder {
    fn name(&self) -> &'static str {
        "Line"
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
            Some(start) => {
                self.hover = None;
                self.bar.record_segment(start, pos);
                Some(Command::AddPline(Pline::line(start, pos)))
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
            ctx.draw_line(first, hover, FEEDBACK_COLOR);
        }
    }

    fn input_bar(&self) -> Option<&InputBar> {
        Some(&self.bar)
    }

    fn input_bar_mut(&mut self) -> Option<&mut InputBar> {
        Some(&mut self.bar)
    }

    fn apply_typed(&mut self, input: &TypedInput) -> Option<Command> {
        if matches!(input, TypedInput::SetBySize { .. }) {
            return None;
        }
        self.deactivate();
        Some(Command::AddPline(Pline::line(input.origin(), input.end_point())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::input_bar::InputField;

    #[test]
    fn second_click_finishes_line() {
        let mut tool = LineBuilder::new();
        assert_eq!(tool.prompt(), PROMPTS[0]);
        assert_eq!(tool.on_pointer_down(Point::new(0.0, 0.0)), None);
        assert_eq!(tool.prompt(), PROMPTS[1]);
        let cmd = tool.on_pointer_down(Point::new(10.0, 10.0));
        assert_eq!(
            cmd,
            Some(Command::AddPline(Pline::line(Point::new(0.0, 0.0), Point::new(10.0, 10.0))))
        );
        assert!(!tool.is_busy());
        assert_eq!(tool.bar.get(InputField::Length), 14.142);
    }

    #[test]
    fn deactivate_discards_start_point() {
        let mut tool = LineBuilder::new();
        tool.on_pointer_down(Point::new(1.0, 1.0));
        tool.deactivate();
        assert!(!tool.is_busy());
        assert_eq!(tool.on_pointer_down(Point::new(2.0, 2.0)), None);
    }

    #[test]
    fn typed_polar_line() {
        let mut tool = LineBuilder::new();
        let cmd = tool.apply_typed(&TypedInput::SetByPolar {
            origin: Point::new(1.0, 1.0),
            length: 2.0,
            angle: 0.0,
        });
        assert_eq!(
            cmd,
            Some(Command::AddPline(Pline::line(Point::new(1.0, 1.0), Point::new(3.0, 1.0))))
        );
    }
}
