use crate::app::DesignCraftApp;
use crate::selection::selected_indices;
use crate::tools::TOOL_NAMES;

pub fn tools_panel(app: &mut DesignCraftApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("File");
            ui.horizontal_wrapped(|ui| {
                if ui.button("New").clicked() {
                    app.request_new();
                }
                if ui.button("Open").clicked() {
                    app.request_open();
                }
                if ui.button("Save").clicked() {
                    app.request_save();
                }
                if ui.button("Save As").clicked() {
                    app.request_save_as();
                }
            });
            ui.separator();

            ui.heading("Tools");
            let active_tool_name = app.context().active_tool_name();
            for tool_name in TOOL_NAMES {
                let is_selected = active_tool_name == Some(tool_name);
                if ui.selectable_label(is_selected, tool_name).clicked() && !is_selected {
                    log::info!("Tool selected from UI: {}", tool_name);
                    app.context_mut().select_tool(tool_name);
                }
            }
            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.context().can_undo();
                let can_redo = app.context().can_redo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.context_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.context_mut().redo();
                }
            });
            let any_selected = app.context().drawing().any_selected();
            if ui.add_enabled(any_selected, egui::Button::new("Delete")).clicked() {
                app.context_mut().delete_selected();
            }
            if ui.button("Zoom to fit").clicked() {
                app.context_mut().zoom_to_fit();
            }
            ui.separator();

            let context = app.context();
            ui.label(format!("Entities: {}", context.drawing().count()));
            ui.label(format!("Selected: {}", selected_indices(context.drawing()).len()));
            ui.label(format!("Redo stack size: {}", context.editor().redo_len()));
        });
}
