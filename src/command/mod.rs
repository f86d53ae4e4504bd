mod history;

use kurbo::Point;

use crate::geometry::Bound;
use crate::pline::Pline;

pub use history::{Editor, RedoRecord};

/// Document edits produced by tools and executed by the [`Editor`]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a finished entity to the drawing
    AddPline(Pline),
    /// Select every pline fully inside the bound
    SelectWithin(Bound),
    /// Select the first pline passing within `tolerance` of `point`
    PickAt { point: Point, tolerance: f64 },
    /// Drop the current selection
    ClearSelection,
    /// Remove every selected pline as one batch
    DeleteSelected,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddPline(_) => "AddPline",
            Command::SelectWithin(_) => "SelectWithin",
            Command::PickAt { .. } => "PickAt",
            Command::ClearSelection => "ClearSelection",
            Command::DeleteSelected => "DeleteSelected",
        }
    }
}
