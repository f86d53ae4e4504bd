//! Selection queries over the drawing.
//!
//! Selection is a flag on each [`Pline`](crate::pline::Pline); these
//! functions only flip flags and never change which plines the drawing holds.

use kurbo::Point;

use crate::document::Drawing;
use crate::geometry::hit_testing::pline_hit;
use crate::geometry::Bound;

/// Replaces the selection with every pline whose bound lies fully inside
/// `area`. Partially covered plines are not selected. Returns the count.
pub fn rectangle_select(drawing: &mut Drawing, area: &Bound) -> usize {
    let mut count = 0;
    for pline in drawing.plines_mut() {
        let inside = area.contains(&pline.bound());
        pline.set_selected(inside);
        if inside {
            count += 1;
        }
    }
    drawing.request_redraw();
    count
}

/// Clears the selection, then selects the first pline with a segment closer
/// than `tolerance` to `point`. Returns the index of the picked pline.
pub fn pick_select(drawing: &mut Drawing, point: Point, tolerance: f64) -> Option<usize> {
    drawing.deselect_all();
    let hit = drawing
        .plines()
        .iter()
        .position(|pline| pline_hit(pline, point, tolerance));
    if let Some(index) = hit {
        drawing.plines_mut()[index].set_selected(true);
    }
    drawing.request_redraw();
    hit
}

/// Indices of the currently selected plines
pub fn selected_indices(drawing: &Drawing) -> Vec<usize> {
    drawing
        .plines()
        .iter()
        .enumerate()
        .filter(|(_, pline)| pline.is_selected())
        .map(|(index, _)| index)
        .collect()
}
