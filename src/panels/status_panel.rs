use crate::app::DesignCraftApp;
use crate::tools::Tool;

/// Prompt, input bar and cursor coordinates along the bottom edge
pub fn status_panel(app: &mut DesignCraftApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(app.context().prompt());
            ui.separator();

            let mut commit = false;
            if let Some(bar) = app
                .context_mut()
                .state
                .active_tool_mut()
                .and_then(|tool| tool.input_bar_mut())
            {
                for &field in bar.fields() {
                    ui.label(field.label());
                    let mut value = bar.get(field);
                    let response = ui.add(egui::DragValue::new(&mut value).speed(0.1).max_decimals(3));
                    if response.changed() {
                        bar.set(field, value);
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        commit = true;
                    }
                }
                if ui.button("Apply").clicked() {
                    commit = true;
                }
            }
            if commit {
                app.context_mut().commit_input();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(app.context().status_text());
            });
        });
    });
}
