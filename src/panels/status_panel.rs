use crate::PaintApp;
use crate::state::color_to_hex;
use crate::tools::Tool;

/// One line of state at the bottom of the window
pub fn status_panel(app: &PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let pen = app.pen();
            let mode = if app.tool().is_text() {
                app.tool().name()
            } else if pen.is_erasing() {
                "Eraser"
            } else {
                "Brush"
            };
            ui.label(mode);
            ui.separator();
            ui.label(color_to_hex(pen.color()));
            ui.separator();
            ui.label(format!("{} px", pen.size()));
            ui.separator();

            let [width, height] = app.document().size();
            ui.label(format!("{}×{}", width, height));
            if let Some(cursor) = app.cursor() {
                ui.separator();
                ui.label(format!("{:.0}, {:.0}", cursor.x, cursor.y));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(app.status());
            });
        });
    });
}
