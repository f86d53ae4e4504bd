use design_craft::command::{Command, Editor};
use design_craft::document::Drawing;
use design_craft::geometry::Bound;
use design_craft::input::InputEvent;
use design_craft::pline::Pline;
use design_craft::renderer::{RecordingSink, RUBBER_BAND_COLOR, SELECTED_COLOR};
use design_craft::renderer::DrawCall;
use design_craft::selection::{pick_select, rectangle_select, selected_indices};
use design_craft::view::compute_zoom_extents;
use design_craft::{EditorConfig, EditorContext};
use egui::PointerButton;
use kurbo::Point;

fn line_and_rectangle() -> Drawing {
    let mut drawing = Drawing::new();
    drawing.add_pline(Pline::line(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
    drawing.add_pline(Pline::rectangle(
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(5.0, 5.0),
        Point::new(0.0, 5.0),
    ));
    drawing
}

#[test]
fn window_selects_both_or_neither() {
    let mut drawing = line_and_rectangle();
    let all = Bound::from_corners(Point::new(-1.0, -1.0), Point::new(11.0, 11.0));
    assert_eq!(rectangle_select(&mut drawing, &all), 2);
    assert_eq!(selected_indices(&drawing), vec![0, 1]);

    let away = Bound::from_corners(Point::new(20.0, 20.0), Point::new(30.0, 30.0));
    assert_eq!(rectangle_select(&mut drawing, &away), 0);
    assert!(selected_indices(&drawing).is_empty());
}

#[test]
fn pick_within_five_units_only() {
    let mut drawing = Drawing::new();
    drawing.add_pline(Pline::line(Point::new(0.0, 0.0), Point::new(100.0, 0.0)));
    assert_eq!(pick_select(&mut drawing, Point::new(50.0, 4.9), 5.0), Some(0));
    assert_eq!(pick_select(&mut drawing, Point::new(50.0, 5.1), 5.0), None);
    assert!(!drawing.any_selected());
}

#[test]
fn selection_commands_go_through_the_editor() {
    let mut drawing = line_and_rectangle();
    let mut editor = Editor::new();
    editor.execute(
        Command::PickAt {
            point: Point::new(2.0, 2.5),
            tolerance: 1.0,
        },
        &mut drawing,
    );
    assert_eq!(selected_indices(&drawing), vec![0]);
    editor.execute(Command::ClearSelection, &mut drawing);
    assert!(!drawing.any_selected());
    assert!(!editor.is_modified());
}

#[test]
fn zoom_extents_fits_inside_margin() {
    let bound = Bound::from_corners(Point::new(-37.5, 12.0), Point::new(410.0, 95.25));
    let (w, h, margin) = (640.0, 480.0, 20.0);
    let xfm = compute_zoom_extents(w, h, margin, &bound, 1e4);
    let corners = [
        Point::new(bound.min_x, bound.min_y),
        Point::new(bound.max_x, bound.min_y),
        Point::new(bound.max_x, bound.max_y),
        Point::new(bound.min_x, bound.max_y),
    ];
    for corner in corners {
        let p = xfm * corner;
        assert!(p.x >= margin - 1e-9 && p.x <= w - margin + 1e-9);
        assert!(p.y >= margin - 1e-9 && p.y <= h - margin + 1e-9);
    }
    let mid = xfm * bound.mid();
    assert!((mid.x - w / 2.0).abs() < 1e-9 && (mid.y - h / 2.0).abs() < 1e-9);
}

#[test]
fn session_drag_select_and_right_click_fit() {
    let mut ctx = EditorContext::new(EditorConfig::default());
    ctx.resize(800.0, 600.0);
    for pline in line_and_rectangle().plines() {
        ctx.drawing_mut().add_pline(pline.clone());
    }
    ctx.select_tool("Selection");

    let start = ctx.view().to_view(Point::new(-1.0, -1.0));
    let end = ctx.view().to_view(Point::new(11.0, 11.0));
    ctx.handle_event(&InputEvent::PointerDown { pos: start, button: PointerButton::Primary });
    ctx.handle_event(&InputEvent::PointerMove { pos: end });

    let mut sink = RecordingSink::new();
    ctx.render(&mut sink);
    assert!(sink.calls.iter().any(|call| matches!(call, DrawCall::Rect { color, .. } if *color == RUBBER_BAND_COLOR)));

    ctx.handle_event(&InputEvent::PointerUp { pos: end, button: PointerButton::Primary });
    assert_eq!(selected_indices(ctx.drawing()), vec![0, 1]);

    let mut sink = RecordingSink::new();
    ctx.render(&mut sink);
    assert_eq!(sink.polylines_with(SELECTED_COLOR), 2);

    ctx.handle_event(&InputEvent::PointerDown { pos: Point::new(5.0, 5.0), button: PointerButton::Secondary });
    let mid = ctx.view().to_view(ctx.drawing().bound().mid());
    assert!((mid.x - 400.0).abs() < 1e-9 && (mid.y - 300.0).abs() < 1e-9);
}
