use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::DocumentFormat;
use crate::command::Editor;
use crate::document::Drawing;
use crate::error::DesignResult;

const APP_NAME: &str = "Design Craft";

/// Answer to the "save changes?" prompt shown before New or Open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    Yes,
    No,
    Cancel,
}

/// What the caller should do after [`DocManager::resolve_prompt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The document was saved or discarded and has been cleared
    Proceed,
    /// The user chose to save but the document has no path yet
    NeedsPath,
    /// The pending action is abandoned
    Aborted,
}

/// Tracks which file the open document belongs to and moves documents
/// between disk and the [`Drawing`].
#[derive(Debug, Default, Clone)]
pub struct DocManager {
    path: Option<PathBuf>,
    extension: String,
}

impl DocManager {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            path: None,
            extension: extension.into(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// True once the document has been written to or read from a file
    pub fn is_saved(&self) -> bool {
        self.path.is_some()
    }

    pub fn title(&self) -> String {
        match self.path.as_deref().and_then(Path::file_stem) {
            Some(stem) => format!("{} - {APP_NAME}", stem.to_string_lossy()),
            None => "Untitled".to_owned(),
        }
    }

    /// Writes to the current path. Returns `Ok(false)` when there is no path
    /// yet and the caller has to ask for one.
    ///
    /// An empty drawing is never written, and the modified flag stays as it
    /// was since the file on disk no longer matches the drawing.
    pub fn save(&mut self, drawing: &Drawing, editor: &mut Editor) -> DesignResult<bool> {
        let Some(path) = self.path.clone() else {
            return Ok(false);
        };
        if drawing.is_empty() {
            log::debug!("Save skipped: document is empty");
            return Ok(true);
        }
        let bytes = DocumentFormat::from_path(&path).encode(drawing.plines())?;
        if let Err(err) = fs::write(&path, bytes) {
            log::error!("Failed to save {}: {err}", path.display());
            return Err(err.into());
        }
        log::info!("Saved {} entities to {}", drawing.count(), path.display());
        editor.set_modified(false);
        Ok(true)
    }

    /// Saves under a new path, adding the document extension when missing.
    /// An empty drawing writes nothing and keeps the current path.
    pub fn save_as(&mut self, path: &Path, drawing: &Drawing, editor: &mut Editor) -> DesignResult<()> {
        if drawing.is_empty() {
            log::debug!("Save as skipped: document is empty");
            return Ok(());
        }
        let path = self.with_extension(path);
        let previous = self.path.replace(path);
        match self.save(drawing, editor) {
            Ok(_) => Ok(()),
            Err(err) => {
                self.path = previous;
                Err(err)
            }
        }
    }

    /// Reads `path` and, only if the whole file decodes, swaps it in as the
    /// current document. On failure the drawing is untouched.
    pub fn open(&mut self, path: &Path, drawing: &mut Drawing, editor: &mut Editor) -> DesignResult<()> {
        let bytes = fs::read(path).inspect_err(|err| {
            log::error!("Failed to open {}: {err}", path.display());
        })?;
        let plines = DocumentFormat::from_path(path).decode(&bytes).inspect_err(|err| {
            log::warn!("Rejected {}: {err}", path.display());
        })?;
        log::info!("Loaded {} entities from {}", plines.len(), path.display());
        drawing.replace_all(plines);
        editor.reset();
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Empties the drawing and forgets the file
    pub fn new_document(&mut self, drawing: &mut Drawing, editor: &mut Editor) {
        editor.clear(drawing);
        self.path = None;
    }

    /// Whether New/Open has to ask before discarding the document
    pub fn needs_prompt(&self, editor: &Editor) -> bool {
        editor.is_modified()
    }

    /// Applies the user's answer to the unsaved-changes prompt.
    ///
    /// Yes saves then clears, No clears, Cancel leaves everything as is.
    pub fn resolve_prompt(
        &mut self,
        choice: PromptChoice,
        drawing: &mut Drawing,
        editor: &mut Editor,
    ) -> DesignResult<PromptOutcome> {
        match choice {
            PromptChoice::Cancel => Ok(PromptOutcome::Aborted),
            PromptChoice::No => {
                self.new_document(drawing, editor);
                Ok(PromptOutcome::Proceed)
            }
            PromptChoice::Yes => {
                if !self.save(drawing, editor)? {
                    return Ok(PromptOutcome::NeedsPath);
                }
                self.new_document(drawing, editor);
                Ok(PromptOutcome::Proceed)
            }
        }
    }

    fn with_extension(&self, path: &Path) -> PathBuf {
        if path.extension().is_some() || self.extension.is_empty() {
            path.to_path_buf()
        } else {
            path.with_extension(&self.extension)
        }
    }
}
