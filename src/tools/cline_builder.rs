use kurbo::Point;

use super::input_bar::{InputBar, InputLayout, TypedInput};
use super::Tool;
use crate::command::Command;
use crate::pline::Pline;
use crate::renderer::{RenderContext, FEEDBACK_COLOR};

const PROMPTS: [&str; 2] = [
    "Connected Line: Pick start point",
    "Connected Line: Pick end point",
];

/// Open polyline, one vertex per click, finished by [`Tool::end_entity`]
#[derive(Debug, Clone)]
pub struct CLineBuilder {
    points: Vec<Point>,
    hover: Option<Point>,
    bar: InputBar,
}

impl CLineBuilder {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            hover: None,
            bar: InputBar::new(InputLayout::Segment),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    fn push(&mut self, pt: Point) {
        if let Some(&last) = self.points.last() {
            self.bar.record_segment(last, pt);
        }
        self.points.push(pt);
        self.bar.record_point(pt);
    }
}

impl Default for CLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CLineBuilder {
    fn name(&self) -> &'static str {
        "ConnectedLine"
    }

    fn deactivate(&mut self) {
        self.points.clear();
        self.hover = None;
    }

    fn on_pointer_down(&mut self, pos: Point) -> Option<Command> {
        self.push(pos);
        None
    }

    fn on_pointer_move(&mut self, pos: Point) -> Option<Command> {
        self.hover = Some(pos);
        None
    }

    /// Commits the accumulated points. Fewer than two are dropped silently.
    fn end_entity(&mut self) -> Option<Command> {
        let points = std::mem::take(&mut self.points);
        self.hover = None;
        if points.len() < 2 {
            log::debug!("Connected line discarded with {} points", points.len());
            return None;
        }
        Pline::connected(points).ok().map(Command::AddPline)
    }

    fn prompt(&self) -> &'static str {
        PROMPTS[usize::from(!self.points.is_empty())]
    }

    fn is_busy(&self) -> bool {
        !self.points.is_empty()
    }

    fn draw_feedback(&self, ctx: &mut RenderContext<'_>) {
        ctx.draw_points(&self.points, FEEDBACK_COLOR);
        if let (Some(&last), Some(hover)) = (self.points.last(), self.hover) {
            ctx.draw_line(last, hover, FEEDBACK_COLOR);
        }
    }

    fn input_bar(&self) -> Option<&InputBar> {
        Some(&self.bar)
    }

    fn input_bar_mut(&mut self) -> Option<&mut InputBar> {
        Some(&mut self.bar)
    }

    /// Appends a typed segment. The entity stays open until `end_entity`.
    fn apply_typed(&mut self, input: &TypedInput) -> Option<Command> {
        if matches!(input, TypedInput::SetBySize { .. }) {
            return None;
        }
        if self.points.is_empty() {
            self.points.push(input.origin());
        }
        let end = input.end_point();
        self.points.push(end);
        self.bar.record_point(end);
        None
    }
}
