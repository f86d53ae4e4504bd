use crate::geometry::Bound;
use crate::pline::Pline;

type ChangeHook = Box<dyn FnMut()>;

/// The document: an ordered list of plines and their combined bound.
///
/// `bound` is derived state and is recomputed on every membership change.
/// The change hook fires once per mutation so the canvas can repaint.
#[derive(Default)]
pub struct Drawing {
    plines: Vec<Pline>,
    bound: Bound,
    on_changed: Option<ChangeHook>,
}

impl std::fmt::Debug for Drawing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drawing")
            .field("plines", &self.plines)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the hook invoked after every change to the document
    pub fn set_on_changed(&mut self, hook: impl FnMut() + 'static) {
        self.on_changed = Some(Box::new(hook));
    }

    pub fn request_redraw(&mut self) {
        if let Some(hook) = self.on_changed.as_mut() {
            hook();
        }
    }

    pub fn add_pline(&mut self, pline: Pline) {
        self.plines.push(pline);
        self.recompute_bound();
        self.request_redraw();
    }

    pub fn remove_last(&mut self) -> Option<Pline> {
        let pline = self.plines.pop()?;
        self.recompute_bound();
        self.request_redraw();
        Some(pline)
    }

    /// Removes every selected pline, returning each with its former index
    pub fn remove_selected(&mut self) -> Vec<(usize, Pline)> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.plines.len());
        for (index, pline) in std::mem::take(&mut self.plines).into_iter().enumerate() {
            if pline.is_selected() {
                removed.push((index, pline));
            } else {
                kept.push(pline);
            }
        }
        self.plines = kept;
        if !removed.is_empty() {
            self.recompute_bound();
            self.request_redraw();
        }
        removed
    }

    /// Puts plines back, unselected, at the indices they were removed from.
    ///
    /// `entries` must be sorted by ascending index, as produced by
    /// [`Drawing::remove_selected`].
    pub fn reinsert(&mut self, entries: Vec<(usize, Pline)>) {
        for (index, mut pline) in entries {
            pline.set_selected(false);
            let index = index.min(self.plines.len());
            self.plines.insert(index, pline);
        }
        self.recompute_bound();
        self.request_redraw();
    }

    pub fn clear(&mut self) {
        self.plines.clear();
        self.bound = Bound::EMPTY;
        self.request_redraw();
    }

    /// Swaps in a freshly loaded set of plines
    pub fn replace_all(&mut self, plines: Vec<Pline>) {
        self.plines = plines;
        self.recompute_bound();
        self.request_redraw();
    }

    pub fn plines(&self) -> &[Pline] {
        &self.plines
    }

    /// Mutable access for selection flags. Membership cannot change through this.
    pub fn plines_mut(&mut self) -> &mut [Pline] {
        &mut self.plines
    }

    pub fn count(&self) -> usize {
        self.plines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plines.is_empty()
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }

    pub fn any_selected(&self) -> bool {
        self.plines.iter().any(Pline::is_selected)
    }

    pub fn deselect_all(&mut self) {
        for pline in self.plines.iter_mut() {
            pline.set_selected(false);
        }
    }

    fn recompute_bound(&mut self) {
        self.bound = Bound::from_bounds(self.plines.iter().map(Pline::bound))
            .unwrap_or(Bound::EMPTY);
    }
}
