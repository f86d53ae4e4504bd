use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{resolve_config_path, EditorConfig};
use crate::error::DesignError;
use crate::file_handler::{PromptChoice, PromptOutcome};
use crate::input::InputHandler;
use crate::panels::{central_panel, dialogs, status_panel, tools_panel};
use crate::state::{EditorContext, FileRequest};

/// What survives a restart, stored through eframe's persistence
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PersistedState {
    pub config: EditorConfig,
    pub last_path: Option<PathBuf>,
}

/// File action waiting on an answer to the unsaved-changes prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    New,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPurpose {
    Open,
    SaveAs,
    /// Save the current document, then carry on with the pending action
    SaveAsThen(PendingAction),
}

/// Modal dialog currently shown over the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    UnsavedChanges(PendingAction),
    PathEntry { purpose: PathPurpose, text: String },
    Error(String),
}

pub struct DesignCraftApp {
    context: EditorContext,
    input: InputHandler,
    dialog: Option<Dialog>,
    last_path: Option<PathBuf>,
    title: String,
}

impl DesignCraftApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let persisted: PersistedState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        // The JSON file next to the executable overrides the stored config
        let config = match resolve_config_path() {
            Ok(path) => EditorConfig::load_or_create(&path, persisted.config),
            Err(err) => {
                log::warn!("No config file location: {err}");
                persisted.config
            }
        };

        let mut context = EditorContext::new(config);
        let egui_ctx = cc.egui_ctx.clone();
        context.drawing_mut().set_on_changed(move || egui_ctx.request_repaint());
        context.select_tool("Line");

        Self {
            context,
            input: InputHandler::new(egui::Rect::NOTHING),
            dialog: None,
            last_path: persisted.last_path,
            title: String::new(),
        }
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut EditorContext {
        &mut self.context
    }

    pub fn input_handler_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        self.dialog.as_mut()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn handle_file_request(&mut self, request: FileRequest) {
        match request {
            FileRequest::New => self.request_new(),
            FileRequest::Open => self.request_open(),
            FileRequest::Save => self.request_save(),
        }
    }

    pub fn request_new(&mut self) {
        if self.context.needs_prompt() {
            self.dialog = Some(Dialog::UnsavedChanges(PendingAction::New));
        } else {
            self.context.new_document();
        }
    }

    pub fn request_open(&mut self) {
        if self.context.needs_prompt() {
            self.dialog = Some(Dialog::UnsavedChanges(PendingAction::Open));
        } else {
            self.ask_path(PathPurpose::Open);
        }
    }

    pub fn request_save(&mut self) {
        if !self.context.docs().is_saved() {
            self.ask_path(PathPurpose::SaveAs);
            return;
        }
        match self.context.save() {
            Ok(true) => self.remember_path(),
            Ok(false) => self.ask_path(PathPurpose::SaveAs),
            Err(err) => self.show_error(err),
        }
    }

    pub fn request_save_as(&mut self) {
        self.ask_path(PathPurpose::SaveAs);
    }

    /// Answer from the unsaved-changes dialog
    pub fn answer_prompt(&mut self, pending: PendingAction, choice: PromptChoice) {
        self.dialog = None;
        match self.context.resolve_prompt(choice) {
            Ok(PromptOutcome::Proceed) => self.continue_with(pending),
            Ok(PromptOutcome::NeedsPath) => self.ask_path(PathPurpose::SaveAsThen(pending)),
            Ok(PromptOutcome::Aborted) => {}
            Err(err) => self.show_error(err),
        }
    }

    /// Path typed into the path dialog
    pub fn confirm_path(&mut self, purpose: PathPurpose, text: &str) {
        self.dialog = None;
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let path = PathBuf::from(text);
        let result = match purpose {
            PathPurpose::Open => self.context.open(&path),
            PathPurpose::SaveAs => self.context.save_as(&path),
            PathPurpose::SaveAsThen(pending) => self.context.save_as(&path).map(|()| {
                self.remember_path();
                self.context.new_document();
                self.continue_with(pending);
            }),
        };
        match result {
            Ok(()) => self.remember_path(),
            Err(err) => self.show_error(err),
        }
    }

    fn continue_with(&mut self, pending: PendingAction) {
        match pending {
            PendingAction::New => {}
            PendingAction::Open => self.ask_path(PathPurpose::Open),
        }
    }

    fn ask_path(&mut self, purpose: PathPurpose) {
        let text = self
            .last_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        self.dialog = Some(Dialog::PathEntry { purpose, text });
    }

    fn remember_path(&mut self) {
        if let Some(path) = self.context.docs().path() {
            self.last_path = Some(path.to_path_buf());
        }
    }

    fn show_error(&mut self, err: DesignError) {
        log::error!("{err}");
        self.dialog = Some(Dialog::Error(err.to_string()));
    }
}

impl eframe::App for DesignCraftApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = PersistedState {
            config: self.context.config().clone(),
            last_path: self.last_path.clone(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &state);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let title = self.context.title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }

        tools_panel(self, ctx);
        status_panel(self, ctx);
        central_panel(self, ctx);
        dialogs(self, ctx);
    }
}
