use crate::PaintApp;
use crate::app::AppAction;

/// The drawing surface. Returns what pointer and keyboard input asked for.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context, accept_input: bool) -> Vec<AppAction> {
    let mut actions = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let [width, height] = app.document().size();
            let (response, painter) = ui.allocate_painter(
                egui::vec2(width as f32, height as f32),
                egui::Sense::click_and_drag(),
            );
            let canvas_rect = response.rect;

            app.input_mut().set_canvas_rect(canvas_rect);
            let events = app.input_mut().process_input(ctx);
            if accept_input {
                for event in events {
                    if let Some(action) = app.handle_canvas_event(event) {
                        actions.push(action);
                    }
                }
            }

            app.render_canvas(&painter, canvas_rect);

            if let Some(hover) = response.hover_pos() {
                app.set_cursor(Some((hover - canvas_rect.min).to_pos2()));
                app.render_brush_preview(&painter, hover);
            } else {
                app.set_cursor(None);
            }
        });
    });

    actions
}
