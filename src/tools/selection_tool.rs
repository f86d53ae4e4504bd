use kurbo::Point;

use super::Tool;
use crate::command::Command;
use crate::geometry::Bound;
use crate::renderer::RenderContext;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SelectionState {
    Idle,
    /// Button held since `start`; `moved` once the pointer left `start`
    Dragging { start: Point, current: Point, moved: bool },
}

/// Rectangle-drag selection, or point pick on a plain click
#[derive(Debug, Clone)]
pub struct SelectionTool {
    state: SelectionState,
    tolerance: f64,
}

impl SelectionTool {
    pub fn new(tolerance: f64) -> Self {
        Self {
            state: SelectionState::Idle,
            tolerance,
        }
    }
}

impl Tool for SelectionTool {
    fn name(&self) -> &'static str {
        "Selection"
    }

    fn deactivate(&mut self) {
        self.state = SelectionState::Idle;
    }

    fn on_pointer_down(&mut self, pos: Point) -> Option<Command> {
        self.state = SelectionState::Dragging {
            start: pos,
            current: pos,
            moved: false,
        };
        None
    }

    fn on_pointer_move(&mut self, pos: Point) -> Option<Command> {
        if let SelectionState::Dragging { start, current, moved } = &mut self.state {
            *current = pos;
            *moved |= pos != *start;
        }
        None
    }

    fn on_pointer_up(&mut self, pos: Point) -> Option<Command> {
        let SelectionState::Dragging { start, moved, .. } = self.state else {
            return None;
        };
        self.state = SelectionState::Idle;
        if moved || pos != start {
            Some(Command::SelectWithin(Bound::from_corners(start, pos)))
        } else {
            Some(Command::PickAt {
                point: pos,
                tolerance: self.tolerance,
            })
        }
    }

    fn prompt(&self) -> &'static str {
        "Select: Drag a window or pick an entity"
    }

    fn is_busy(&self) -> bool {
        !matches!(self.state, SelectionState::Idle)
    }

    fn draw_feedback(&self, ctx: &mut RenderContext<'_>) {
        if let SelectionState::Dragging { start, current, moved: true } = self.state {
            ctx.draw_rubber_band(start, current);
        }
    }
}
