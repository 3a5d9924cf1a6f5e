use crate::PaintApp;
use crate::app::AppAction;
use crate::command::Command;
use crate::input::Shortcut;
use crate::panels::dialogs::{ColorTarget, Dialog};
use crate::state::{color_to_hex, BRUSH_SIZES};

/// The toolbar across the top of the window
pub fn tools_panel(app: &PaintApp, ctx: &egui::Context) -> Vec<AppAction> {
    let mut actions = Vec::new();
    let pen = app.pen();

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            if ui
                .button("🗑 Clear")
                .on_hover_text(Shortcut::Clear.hint())
                .clicked()
            {
                actions.push(AppAction::Run(Command::Clear));
            }

            let swatch = egui::Button::new("🎨 Color").fill(pen.color());
            if ui
                .add(swatch)
                .on_hover_text(format!("{} ({})", color_to_hex(pen.color()), Shortcut::ChooseColor.hint()))
                .clicked()
            {
                actions.push(AppAction::Open(Dialog::choose_color(ColorTarget::Pen, pen.color())));
            }

            let brush_active = !pen.is_erasing() && !app.tool().is_text();
            if ui
                .selectable_label(brush_active, "🖌 Brush")
                .on_hover_text(Shortcut::Brush.hint())
                .clicked()
            {
                actions.push(AppAction::SelectBrush);
            }

            if ui
                .selectable_label(pen.is_erasing(), "⌫ Eraser")
                .on_hover_text(Shortcut::Eraser.hint())
                .clicked()
            {
                actions.push(AppAction::Run(Command::ToggleEraser));
            }

            if ui
                .button("💾 Save")
                .on_hover_text(Shortcut::Save.hint())
                .clicked()
            {
                actions.push(AppAction::Save);
            }

            ui.separator();

            let mut size = pen.size();
            egui::ComboBox::from_id_salt("brush_size")
                .selected_text(format!("{} px", size))
                .show_ui(ui, |ui| {
                    for option in BRUSH_SIZES {
                        ui.selectable_value(&mut size, option, format!("{} px", option));
                    }
                });
            if size != pen.size() {
                actions.push(AppAction::Run(Command::SetPenSize(size)));
            }

            ui.separator();

            if ui.button("⬚ Canvas Size").clicked() {
                actions.push(AppAction::Open(Dialog::resize_canvas(app.document().size())));
            }

            if ui
                .selectable_label(app.tool().is_text(), "🔤 Text")
                .on_hover_text(Shortcut::Text.hint())
                .clicked()
            {
                actions.push(AppAction::RequestText);
            }

            let background = app.document().background();
            if ui
                .add(egui::Button::new("▣ Background").fill(background))
                .on_hover_text(color_to_hex(background))
                .clicked()
            {
                actions.push(AppAction::Open(Dialog::choose_color(
                    ColorTarget::Background,
                    background,
                )));
            }
        });
    });

    actions
}
