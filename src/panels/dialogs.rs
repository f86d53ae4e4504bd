use crate::app::{DesignCraftApp, Dialog, PathPurpose};
use crate::file_handler::PromptChoice;

fn modal(ctx: &egui::Context, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, add_contents);
}

pub fn dialogs(app: &mut DesignCraftApp, ctx: &egui::Context) {
    let Some(dialog) = app.dialog().cloned() else {
        return;
    };
    match dialog {
        Dialog::UnsavedChanges(pending) => {
            let mut choice = None;
            modal(ctx, "Unsaved changes", |ui| {
                ui.label("Save changes to the current drawing?");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        choice = Some(PromptChoice::Yes);
                    }
                    if ui.button("No").clicked() {
                        choice = Some(PromptChoice::No);
                    }
                    if ui.button("Cancel").clicked() {
                        choice = Some(PromptChoice::Cancel);
                    }
                });
            });
            if let Some(choice) = choice {
                app.answer_prompt(pending, choice);
            }
        }
        Dialog::PathEntry { purpose, mut text } => {
            let title = match purpose {
                PathPurpose::Open => "Open drawing",
                PathPurpose::SaveAs | PathPurpose::SaveAsThen(_) => "Save drawing as",
            };
            let mut confirmed = false;
            let mut cancelled = false;
            modal(ctx, title, |ui| {
                ui.label("File path:");
                let response = ui.text_edit_singleline(&mut text);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    confirmed = true;
                }
                ui.horizontal(|ui| {
                    confirmed |= ui.button("OK").clicked();
                    cancelled = ui.button("Cancel").clicked();
                });
            });
            if confirmed {
                app.confirm_path(purpose, &text);
            } else if cancelled {
                app.close_dialog();
            } else if let Some(Dialog::PathEntry { text: stored, .. }) = app.dialog_mut() {
                *stored = text;
            }
        }
        Dialog::Error(message) => {
            let mut close = false;
            modal(ctx, "Error", |ui| {
                ui.label(message.as_str());
                close = ui.button("OK").clicked();
            });
            if close {
                app.close_dialog();
            }
        }
    }
}
