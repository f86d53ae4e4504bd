// Drawing-space geometry goes through a RenderContext, which projects it into
// view space and hands it to a DrawSink. Nothing here holds global state.

use egui::{Color32, Pos2, Stroke};
use kurbo::{Affine, Point};

use crate::document::Drawing;
use crate::pline::Pline;

pub const ENTITY_COLOR: Color32 = Color32::BLACK;
pub const SELECTED_COLOR: Color32 = Color32::DARK_BLUE;
pub const FEEDBACK_COLOR: Color32 = Color32::RED;
pub const RUBBER_BAND_COLOR: Color32 = Color32::LIGHT_BLUE;

const LINE_WIDTH: f32 = 1.0;

/// Receives view-space primitives
pub trait DrawSink {
    /// Open polyline through `points`
    fn polyline(&mut self, points: &[Point], color: Color32);

    /// Axis-aligned rectangle outline spanned by two corners
    fn rect(&mut self, a: Point, b: Point, color: Color32);
}

/// The projection plus the sink it feeds, passed to every draw call
pub struct RenderContext<'a> {
    pub xfm: Affine,
    pub sink: &'a mut dyn DrawSink,
}

impl<'a> RenderContext<'a> {
    pub fn new(xfm: Affine, sink: &'a mut dyn DrawSink) -> Self {
        Self { xfm, sink }
    }

    /// Draws a drawing-space point sequence
    pub fn draw_points(&mut self, points: &[Point], color: Color32) {
        if points.len() < 2 {
            return;
        }
        let projected: Vec<Point> = points.iter().map(|pt| self.xfm * *pt).collect();
        self.sink.polyline(&projected, color);
    }

    pub fn draw_line(&mut self, a: Point, b: Point, color: Color32) {
        self.draw_points(&[a, b], color);
    }

    /// Entity in its document color, or the selection color
    pub fn draw_pline(&mut self, pline: &Pline) {
        let color = if pline.is_selected() { SELECTED_COLOR } else { ENTITY_COLOR };
        self.draw_points(pline.points(), color);
    }

    /// Selection rubber band between two drawing-space corners
    pub fn draw_rubber_band(&mut self, a: Point, b: Point) {
        let (a, b) = (self.xfm * a, self.xfm * b);
        self.sink.rect(a, b, RUBBER_BAND_COLOR);
    }
}

/// Draws every pline of the drawing in document order
pub fn render_drawing(drawing: &Drawing, ctx: &mut RenderContext<'_>) {
    for pline in drawing.plines() {
        ctx.draw_pline(pline);
    }
}

/// Sink backed by an egui painter. View space is relative to `origin`, the
/// top-left corner of the canvas.
pub struct PainterSink<'p> {
    painter: &'p egui::Painter,
    origin: Pos2,
}

impl<'p> PainterSink<'p> {
    pub fn new(painter: &'p egui::Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, pt: Point) -> Pos2 {
        Pos2::new(self.origin.x + pt.x as f32, self.origin.y + pt.y as f32)
    }
}

impl DrawSink for PainterSink<'_> {
    fn polyline(&mut self, points: &[Point], color: Color32) {
        let screen: Vec<Pos2> = points.iter().map(|pt| self.to_screen(*pt)).collect();
        self.painter.line(screen, Stroke::new(LINE_WIDTH, color));
    }

    fn rect(&mut self, a: Point, b: Point, color: Color32) {
        let rect = egui::Rect::from_two_pos(self.to_screen(a), self.to_screen(b));
        self.painter.rect_stroke(rect, 0.0, Stroke::new(LINE_WIDTH, color));
    }
}

/// One primitive captured by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Polyline { points: Vec<Point>, color: Color32 },
    Rect { a: Point, b: Point, color: Color32 },
}

/// Sink that keeps every call, for tests and headless use
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<DrawCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polylines_with(&self, color: Color32) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Polyline { color: c, .. } if *c == color))
            .count()
    }
}

impl DrawSink for RecordingSink {
    fn polyline(&mut self, points: &[Point], color: Color32) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            color,
        });
    }

    fn rect(&mut self, a: Point, b: Point, color: Color32) {
        self.calls.push(DrawCall::Rect { a, b, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plines_are_projected_and_colored_by_selection() {
        let mut drawing = Drawing::new();
        drawing.add_pline(Pline::line(Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
        drawing.add_pline(Pline::line(Point::new(2.0, 2.0), Point::new(3.0, 3.0)));
        drawing.plines_mut()[1].set_selected(true);

        let mut sink = RecordingSink::new();
        let xfm = Affine::translate((10.0, 20.0)) * Affine::scale_non_uniform(2.0, -2.0);
        render_drawing(&drawing, &mut RenderContext::new(xfm, &mut sink));

        assert_eq!(sink.calls.len(), 2);
        assert_eq!(
            sink.calls[0],
            DrawCall::Polyline {
                points: vec![Point::new(10.0, 20.0), Point::new(12.0, 18.0)],
                color: ENTITY_COLOR,
            }
        );
        assert_eq!(sink.polylines_with(SELECTED_COLOR), 1);
    }

    #[test]
    fn single_points_draw_nothing() {
        let mut sink = RecordingSink::new();
        let mut ctx = RenderContext::new(Affine::IDENTITY, &mut sink);
        ctx.draw_points(&[Point::new(1.0, 1.0)], FEEDBACK_COLOR);
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn painter_sink_accepts_primitives() {
        let ctx = egui::Context::default();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx, egui::LayerId::background(), rect);
        let mut sink = PainterSink::new(&painter, rect.min);
        let mut render = RenderContext::new(Affine::IDENTITY, &mut sink);
        render.draw_line(Point::new(0.0, 0.0), Point::new(50.0, 50.0), ENTITY_COLOR);
        render.draw_rubber_band(Point::new(5.0, 5.0), Point::new(20.0, 30.0));
    }
}
