//! The headless editing session.
//!
//! `EditorContext` owns the document and everything that acts on it: the
//! undo/redo editor, the active tool, the view transform and the file
//! manager. The app feeds it [`InputEvent`]s and draws it through a
//! [`DrawSink`]; nothing here depends on a live window, so whole editing
//! sessions can be driven from tests.

use std::path::Path;

use egui::{Key, Modifiers, PointerButton};
use kurbo::Point;

use super::EditorState;
use crate::command::{Command, Editor};
use crate::config::EditorConfig;
use crate::document::Drawing;
use crate::error::DesignResult;
use crate::file_handler::{DocManager, PromptChoice, PromptOutcome};
use crate::input::InputEvent;
use crate::renderer::{render_drawing, DrawSink, RenderContext};
use crate::tools::{new_tool, Tool};
use crate::view::{PanGesture, ViewTransform};

/// File actions triggered from the keyboard. They need a path or a prompt,
/// so the app resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRequest {
    New,
    Open,
    Save,
}

#[derive(Debug)]
pub struct EditorContext {
    /// The active tool
    pub state: EditorState,
    drawing: Drawing,
    editor: Editor,
    view: ViewTransform,
    pan: PanGesture,
    docs: DocManager,
    config: EditorConfig,
    /// Last pointer position in drawing space
    cursor: Option<Point>,
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: EditorState::Idle,
            drawing: Drawing::new(),
            editor: Editor::new(),
            view: ViewTransform::new(&config),
            pan: PanGesture::default(),
            docs: DocManager::new(config.document_extension.clone()),
            config,
            cursor: None,
        }
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn drawing_mut(&mut self) -> &mut Drawing {
        &mut self.drawing
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn docs(&self) -> &DocManager {
        &self.docs
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// True while a middle-button drag is moving the view
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// Activates the named tool. Unknown names leave the current tool active.
    pub fn select_tool(&mut self, name: &str) -> bool {
        match new_tool(name, &self.config) {
            Some(tool) => {
                self.state.set_active_tool(tool);
                true
            }
            None => false,
        }
    }

    pub fn active_tool_name(&self) -> Option<&'static str> {
        self.state.active_tool().map(|tool| tool.name())
    }

    /// Records the canvas size. The first real size fits the start-up extents.
    pub fn resize(&mut self, width: f64, height: f64) {
        let (old_width, old_height) = self.view.view_size();
        if !self.view.set_view_size(width, height) {
            return;
        }
        if old_width <= 0.0 || old_height <= 0.0 {
            self.fit_document_or_extents();
        }
    }

    pub fn zoom_to_fit(&mut self) {
        self.view.zoom_to_fit(&self.drawing.bound());
        self.drawing.request_redraw();
    }

    /// Routes one input event. Returns a file request the caller must resolve.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<FileRequest> {
        match *event {
            InputEvent::PointerDown { pos, button } => match button {
                PointerButton::Primary => {
                    let pt = self.view.to_drawing(pos);
                    let cmd = self.state.active_tool_mut().and_then(|tool| tool.on_pointer_down(pt));
                    self.run(cmd);
                }
                PointerButton::Middle => self.pan.start(pos),
                PointerButton::Secondary => self.zoom_to_fit(),
                _ => {}
            },
            InputEvent::PointerMove { pos } => {
                if let Some(delta) = self.pan.update(pos) {
                    self.view.pan(delta);
                    self.drawing.request_redraw();
                }
                let pt = self.view.to_drawing(pos);
                self.cursor = Some(pt);
                let cmd = self.state.active_tool_mut().and_then(|tool| tool.on_pointer_move(pt));
                self.run(cmd);
                if self.state.active_tool().is_some_and(|tool| tool.is_busy()) {
                    self.drawing.request_redraw();
                }
            }
            InputEvent::PointerUp { pos, button } => match button {
                PointerButton::Primary => {
                    let pt = self.view.to_drawing(pos);
                    let cmd = self.state.active_tool_mut().and_then(|tool| tool.on_pointer_up(pt));
                    self.run(cmd);
                }
                PointerButton::Middle => {
                    if let Some(delta) = self.pan.end(pos) {
                        self.view.pan(delta);
                        self.drawing.request_redraw();
                    }
                }
                _ => {}
            },
            InputEvent::PointerLeave => {
                self.pan.cancel();
                self.cursor = None;
            }
            InputEvent::Wheel { pos, delta } => {
                self.view.wheel_zoom(pos, delta);
                self.drawing.request_redraw();
            }
            InputEvent::KeyDown { key, modifiers } => return self.handle_key(key, modifiers),
        }
        None
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Option<FileRequest> {
        if modifiers.command {
            match key {
                Key::N => return Some(FileRequest::New),
                Key::O => return Some(FileRequest::Open),
                Key::S => return Some(FileRequest::Save),
                Key::Z => {
                    self.undo();
                }
                Key::Y => {
                    self.redo();
                }
                _ => {}
            }
            return None;
        }
        match key {
            Key::Escape => self.end_entity(),
            Key::Delete => {
                self.delete_selected();
            }
            Key::Enter => self.commit_input(),
            _ => {}
        }
        None
    }

    /// Finishes an open-ended entity (connected line)
    pub fn end_entity(&mut self) {
        let cmd = self.state.active_tool_mut().and_then(|tool| tool.end_entity());
        self.run(cmd);
        self.drawing.request_redraw();
    }

    /// Applies the active tool's input bar
    pub fn commit_input(&mut self) {
        let cmd = self.state.active_tool_mut().and_then(|tool| tool.commit_input());
        self.run(cmd);
        self.drawing.request_redraw();
    }

    fn run(&mut self, command: Option<Command>) {
        if let Some(command) = command {
            self.editor.execute(command, &mut self.drawing);
        }
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo(&mut self.drawing)
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo(&mut self.drawing)
    }

    pub fn can_undo(&self) -> bool {
        self.editor.can_undo(&self.drawing)
    }

    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    pub fn delete_selected(&mut self) -> usize {
        self.editor.delete_selected(&mut self.drawing)
    }

    pub fn is_modified(&self) -> bool {
        self.editor.is_modified()
    }

    pub fn title(&self) -> String {
        let marker = if self.is_modified() { "*" } else { "" };
        format!("{}{marker}", self.docs.title())
    }

    /// Cursor position for the status bar
    pub fn status_text(&self) -> String {
        match self.cursor {
            Some(pt) => format!("X: {:.2}  Y: {:.2}", pt.x, pt.y),
            None => String::new(),
        }
    }

    pub fn prompt(&self) -> &'static str {
        self.state.active_tool().map_or("Pick a tool", |tool| tool.prompt())
    }

    /// Whether New/Open must ask about unsaved changes first
    pub fn needs_prompt(&self) -> bool {
        self.docs.needs_prompt(&self.editor)
    }

    pub fn new_document(&mut self) {
        self.discard_tool_work();
        self.docs.new_document(&mut self.drawing, &mut self.editor);
        self.fit_document_or_extents();
    }

    /// Loads `path`; the current document survives a failed load
    pub fn open(&mut self, path: &Path) -> DesignResult<()> {
        self.docs.open(path, &mut self.drawing, &mut self.editor)?;
        self.discard_tool_work();
        self.fit_document_or_extents();
        Ok(())
    }

    /// Saves to the known path. `Ok(false)` means a path is needed first.
    pub fn save(&mut self) -> DesignResult<bool> {
        self.docs.save(&self.drawing, &mut self.editor)
    }

    pub fn save_as(&mut self, path: &Path) -> DesignResult<()> {
        self.docs.save_as(path, &self.drawing, &mut self.editor)
    }

    pub fn resolve_prompt(&mut self, choice: PromptChoice) -> DesignResult<PromptOutcome> {
        let outcome = self.docs.resolve_prompt(choice, &mut self.drawing, &mut self.editor)?;
        if outcome == PromptOutcome::Proceed {
            self.discard_tool_work();
            self.fit_document_or_extents();
        }
        Ok(outcome)
    }

    /// Draws the document and the active tool's feedback
    pub fn render(&self, sink: &mut dyn DrawSink) {
        let mut ctx = RenderContext::new(self.view.projection(), sink);
        render_drawing(&self.drawing, &mut ctx);
        if let Some(tool) = self.state.active_tool() {
            tool.draw_feedback(&mut ctx);
        }
    }

    fn discard_tool_work(&mut self) {
        if let Some(tool) = self.state.active_tool_mut() {
            tool.deactivate();
        }
        self.pan.cancel();
    }

    fn fit_document_or_extents(&mut self) {
        let bound = self.drawing.bound();
        if bound.is_empty() {
            self.view.zoom_to_fit(&self.config.initial_extents);
        } else {
            self.view.zoom_to_fit(&bound);
        }
        self.drawing.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RecordingSink, FEEDBACK_COLOR};

    fn session() -> EditorContext {
        let mut ctx = EditorContext::new(EditorConfig::default());
        ctx.resize(800.0, 600.0);
        ctx
    }

    fn click(ctx: &mut EditorContext, x: f64, y: f64) {
        let pos = ctx.view().to_view(Point::new(x, y));
        ctx.handle_event(&InputEvent::PointerMove { pos });
        ctx.handle_event(&InputEvent::PointerDown { pos, button: PointerButton::Primary });
        ctx.handle_event(&InputEvent::PointerUp { pos, button: PointerButton::Primary });
    }

    fn key(ctx: &mut EditorContext, key: Key, command: bool) -> Option<FileRequest> {
        let modifiers = if command { Modifiers::COMMAND } else { Modifiers::NONE };
        ctx.handle_event(&InputEvent::KeyDown { key, modifiers })
    }

    #[test]
    fn clicks_build_a_line() {
        let mut ctx = session();
        assert!(ctx.select_tool("Line"));
        click(&mut ctx, 0.0, 0.0);
        assert_eq!(ctx.prompt(), "Line: Pick end point");
        click(&mut ctx, 10.0, 10.0);
        assert_eq!(ctx.drawing().count(), 1);
        let end = ctx.drawing().plines()[0].points()[1];
        assert!((end.x - 10.0).abs() < 1e-6 && (end.y - 10.0).abs() < 1e-6);
        assert!(ctx.is_modified());
        assert_eq!(ctx.title(), "Untitled*");
    }

    #[test]
    fn escape_commits_connected_line_and_shortcuts_undo() {
        let mut ctx = session();
        ctx.select_tool("ConnectedLine");
        click(&mut ctx, 0.0, 0.0);
        click(&mut ctx, 10.0, 0.0);
        click(&mut ctx, 10.0, 10.0);
        assert!(ctx.drawing().is_empty());
        key(&mut ctx, Key::Escape, false);
        assert_eq!(ctx.drawing().count(), 1);
        assert_eq!(ctx.drawing().plines()[0].points().len(), 3);

        key(&mut ctx, Key::Z, true);
        assert!(ctx.drawing().is_empty());
        key(&mut ctx, Key::Y, true);
        assert_eq!(ctx.drawing().count(), 1);
    }

    #[test]
    fn tool_switch_discards_unfinished_entity() {
        let mut ctx = session();
        ctx.select_tool("Rectangle");
        click(&mut ctx, 0.0, 0.0);
        ctx.select_tool("Line");
        click(&mut ctx, 5.0, 5.0);
        assert!(ctx.drawing().is_empty());
        assert!(!ctx.select_tool("Eraser"));
        assert_eq!(ctx.active_tool_name(), Some("Line"));
    }

    #[test]
    fn feedback_is_drawn_while_building() {
        let mut ctx = session();
        ctx.select_tool("Line");
        click(&mut ctx, 0.0, 0.0);
        let pos = ctx.view().to_view(Point::new(20.0, 5.0));
        ctx.handle_event(&InputEvent::PointerMove { pos });
        let mut sink = RecordingSink::new();
        ctx.render(&mut sink);
        assert_eq!(sink.polylines_with(FEEDBACK_COLOR), 1);
    }

    #[test]
    fn delete_key_removes_picked_entity() {
        let mut ctx = session();
        ctx.select_tool("Line");
        click(&mut ctx, 0.0, 0.0);
        click(&mut ctx, 100.0, 0.0);
        ctx.select_tool("Selection");
        click(&mut ctx, 50.0, 1.0);
        assert!(ctx.drawing().any_selected());
        key(&mut ctx, Key::Delete, false);
        assert!(ctx.drawing().is_empty());
        assert!(ctx.can_redo());
    }

    #[test]
    fn file_shortcuts_are_handed_back() {
        let mut ctx = session();
        assert_eq!(key(&mut ctx, Key::N, true), Some(FileRequest::New));
        assert_eq!(key(&mut ctx, Key::O, true), Some(FileRequest::Open));
        assert_eq!(key(&mut ctx, Key::S, true), Some(FileRequest::Save));
        assert_eq!(key(&mut ctx, Key::N, false), None);
    }

    #[test]
    fn middle_drag_pans() {
        let mut ctx = session();
        let anchor = Point::new(100.0, 100.0);
        let before = ctx.view().to_view(anchor);
        let start = Point::new(400.0, 300.0);
        ctx.handle_event(&InputEvent::PointerDown { pos: start, button: PointerButton::Middle });
        ctx.handle_event(&InputEvent::PointerMove { pos: Point::new(410.0, 300.0) });
        assert!(ctx.is_panning());
        ctx.handle_event(&InputEvent::PointerUp { pos: Point::new(420.0, 295.0), button: PointerButton::Middle });
        let after = ctx.view().to_view(anchor);
        assert!(!ctx.is_panning());
        assert!((after.x - before.x - 20.0).abs() < 1e-9);
        assert!((after.y - before.y + 5.0).abs() < 1e-9);
    }

    #[test]
    fn status_shows_two_decimals() {
        let mut ctx = session();
        assert_eq!(ctx.status_text(), "");
        let pos = ctx.view().to_view(Point::new(1.234, -5.0));
        ctx.handle_event(&InputEvent::PointerMove { pos });
        assert_eq!(ctx.status_text(), "X: 1.23  Y: -5.00");
    }

    #[test]
    fn typed_rectangle_on_enter() {
        let mut ctx = session();
        ctx.select_tool("Rectangle");
        if let Some(bar) = ctx.state.active_tool_mut().and_then(|tool| tool.input_bar_mut()) {
            bar.set(crate::tools::InputField::Length, 5.0);
            bar.set(crate::tools::InputField::Breadth, 5.0);
        }
        key(&mut ctx, Key::Enter, false);
        assert_eq!(ctx.drawing().count(), 1);
        assert_eq!(ctx.drawing().bound().width(), 5.0);
    }

    #[test]
    fn pick_tolerance_is_in_drawing_units_at_any_zoom() {
        let mut ctx = session();
        ctx.select_tool("Line");
        click(&mut ctx, 0.0, 0.0);
        click(&mut ctx, 100.0, 0.0);
        ctx.select_tool("Selection");

        // Start-up extents are zoomed out below one pixel per unit
        assert!(ctx.view().projection().as_coeffs()[0] < 1.0);
        click(&mut ctx, 50.0, 4.9);
        assert!(ctx.drawing().any_selected());
        click(&mut ctx, 50.0, 5.1);
        assert!(!ctx.drawing().any_selected());

        // Right-click fits the line, zooming in well past one pixel per unit
        let pos = ctx.view().to_view(Point::new(50.0, 0.0));
        ctx.handle_event(&InputEvent::PointerDown { pos, button: PointerButton::Secondary });
        assert!((ctx.view().projection().as_coeffs()[0] - 7.6).abs() < 1e-9);
        click(&mut ctx, 50.0, -4.9);
        assert!(ctx.drawing().any_selected());
        click(&mut ctx, 50.0, -5.1);
        assert!(!ctx.drawing().any_selected());
    }
}
