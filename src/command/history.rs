use super::Command;
use crate::document::Drawing;
use crate::pline::Pline;
use crate::selection;

/// An entry on the redo stack
#[derive(Debug, Clone, PartialEq)]
pub enum RedoRecord {
    /// A pline taken off the end of the drawing by `undo`
    Single(Pline),
    /// Plines removed together by a batch delete, with their former indices
    Batch(Vec<(usize, Pline)>),
}

/// Linear undo/redo over the drawing's entity list.
///
/// There is one stack. `undo` moves the last pline onto it, `redo` moves the
/// top entry back. Any new construction or deletion discards what is on the
/// stack, since those entries no longer follow from the current document.
#[derive(Debug, Default)]
pub struct Editor {
    redo_stack: Vec<RedoRecord>,
    modified: bool,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a command to the drawing
    pub fn execute(&mut self, command: Command, drawing: &mut Drawing) {
        log::debug!("Executing command: {}", command.name());
        match command {
            Command::AddPline(pline) => self.commit(pline, drawing),
            Command::SelectWithin(bound) => {
                selection::rectangle_select(drawing, &bound);
            }
            Command::PickAt { point, tolerance } => {
                selection::pick_select(drawing, point, tolerance);
            }
            Command::ClearSelection => {
                drawing.deselect_all();
                drawing.request_redraw();
            }
            Command::DeleteSelected => {
                self.delete_selected(drawing);
            }
        }
    }

    /// Appends a finished entity. Clears the redo history.
    pub fn commit(&mut self, pline: Pline, drawing: &mut Drawing) {
        log::debug!("Committing {} with {} points", pline.kind().name(), pline.points().len());
        self.redo_stack.clear();
        drawing.add_pline(pline);
        self.modified = true;
    }

    /// Moves the last pline onto the redo stack, deselected. Returns false if
    /// there was none.
    pub fn undo(&mut self, drawing: &mut Drawing) -> bool {
        let Some(mut pline) = drawing.remove_last() else {
            return false;
        };
        pline.set_selected(false);
        log::debug!("Undo: removed {}", pline.kind().name());
        self.redo_stack.push(RedoRecord::Single(pline));
        self.modified = true;
        true
    }

    /// Restores the most recent redo entry. Returns false if the stack was empty.
    pub fn redo(&mut self, drawing: &mut Drawing) -> bool {
        let Some(record) = self.redo_stack.pop() else {
            return false;
        };
        match record {
            RedoRecord::Single(pline) => {
                log::debug!("Redo: restored {}", pline.kind().name());
                drawing.add_pline(pline);
            }
            RedoRecord::Batch(entries) => {
                log::debug!("Redo: restored batch of {}", entries.len());
                drawing.reinsert(entries);
            }
        }
        self.modified = true;
        true
    }

    pub fn can_undo(&self, drawing: &Drawing) -> bool {
        !drawing.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Removes all selected plines as one record, so a single `redo` brings
    /// the whole batch back. Returns the number of plines removed.
    pub fn delete_selected(&mut self, drawing: &mut Drawing) -> usize {
        let removed = drawing.remove_selected();
        if removed.is_empty() {
            return 0;
        }
        let count = removed.len();
        log::info!("Deleted {count} selected entities");
        self.redo_stack.clear();
        self.redo_stack.push(RedoRecord::Batch(removed));
        self.modified = true;
        count
    }

    /// Empties the drawing and forgets all history (New / before Load)
    pub fn clear(&mut self, drawing: &mut Drawing) {
        if !drawing.is_empty() {
            drawing.clear();
        }
        self.reset();
    }

    /// Forgets history and marks the document unmodified
    pub fn reset(&mut self) {
        self.redo_stack.clear();
        self.modified = false;
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }
}
