use crate::app::DesignCraftApp;
use crate::renderer::PainterSink;

pub fn central_panel(app: &mut DesignCraftApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.context_mut()
                .resize(f64::from(canvas_rect.width()), f64::from(canvas_rect.height()));

            // Dialogs own the keyboard and pointer while open
            if app.dialog().is_none() {
                let handler = app.input_handler_mut();
                handler.set_canvas_rect(canvas_rect);
                let events = handler.process_input(ctx);
                for event in &events {
                    if let Some(request) = app.context_mut().handle_event(event) {
                        app.handle_file_request(request);
                    }
                }
            }

            if app.context().is_panning() {
                ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            }

            let mut sink = PainterSink::new(&painter, canvas_rect.min);
            app.context().render(&mut sink);
        });
}
