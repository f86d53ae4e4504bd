use kurbo::Point;

use super::input_bar::{InputBar, InputLayout, TypedInput};
use super::Tool;
use crate::command::Command;
use crate::pline::Pline;
use crate::renderer::{RenderContext, FEEDBACK_COLOR};

const PROMPTS: [&str; 2] = ["Ellipse: Pick center point", "Ellipse: Pick corner of bounding box"];

/// Axis-aligned ellipse: centre first, then a point giving both radii
#[derive(Debug, Clone)]
pub struct EllipseBuilder {
    center: Option<Point>,
    hover: Option<Point>,
    segments: usize,
    bar: InputBar,
}

impl EllipseBuilder {
    pub fn new(segments: usize) -> Self {
        Self {
            center: None,
            hover: None,
            segments,
            bar: InputBar::new(InputLayout::Size),
        }
    }

    fn build(&self, center: Point, rx: f64, ry: f64) -> Option<Pline> {
        if rx == 0.0 || ry == 0.0 {
            log::debug!("Ellipse with zero radius ignored");
            return None;
        }
        Pline::ellipse(center, rx, ry, self.segments)
            .inspect_err(|err| log::warn!("Cannot build ellipse: {err}"))
            .ok()
    }
}

impl Tool for EllipseBuilder {
    fn name(&self) -> &'static str {
        "Ellipse"
    }

    fn deactivate(&mut self) {
        self.center = None;
        self.hover = None;
    }

    fn on_pointer_down(&mut self, pos: Point) -> Option<Command> {
        match self.center.take() {
            None => {
                self.center = Some(pos);
                self.bar.record_point(pos);
                None
            }
            Some(center) => {
                self.hover = None;
                let (rx, ry) = ((pos.x - center.x).abs(), (pos.y - center.y).abs());
                self.bar.record_size(rx, ry);
                self.build(center, rx, ry).map(Command::AddPline)
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Point) -> Option<Command> {
        self.hover = Some(pos);
        None
    }

    fn prompt(&self) -> &'static str {
        PROMPTS[usize::from(self.center.is_some())]
    }

    fn is_busy(&self) -> bool {
        self.center.is_some()
    }

    fn draw_feedback(&self, ctx: &mut RenderContext<'_>) {
        let (Some(center), Some(hover)) = (self.center, self.hover) else {
            return;
        };
        ctx.draw_line(center, hover, FEEDBACK_COLOR);
        let (rx, ry) = ((hover.x - center.x).abs(), (hover.y - center.y).abs());
        if rx > 0.0 && ry > 0.0 {
            if let Ok(preview) = Pline::ellipse(center, rx, ry, self.segments) {
                ctx.draw_points(preview.points(), FEEDBACK_COLOR);
            }
        }
    }

    fn input_bar(&self) -> Option<&InputBar> {
        Some(&self.bar)
    }

    fn input_bar_mut(&mut self) -> Option<&mut InputBar> {
        Some(&mut self.bar)
    }

    /// Size input is read as centre plus the two radii
    fn apply_typed(&mut self, input: &TypedInput) -> Option<Command> {
        let TypedInput::SetBySize { origin, length, breadth } = *input else {
            return None;
        };
        self.deactivate();
        self.build(origin, length.abs(), breadth.abs()).map(Command::AddPline)
    }
}
