use egui::{Color32, Key};

use crate::command::Command;
use crate::document::MAX_CANVAS_SIDE;

/// Which color a color chooser edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Pen,
    Background,
}

/// Modal prompts opened from the toolbar or the keyboard
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ChooseColor {
        target: ColorTarget,
        color: Color32,
    },
    /// Integer prompts for the new canvas size
    ResizeCanvas {
        width: String,
        height: String,
        error: Option<String>,
    },
    /// String prompt for the text to stamp
    EnterText { text: String },
}

/// What the user did with an open dialog this frame
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    Pending,
    Cancelled,
    Run(Command),
    PlaceText(String),
}

impl Dialog {
    pub fn choose_color(target: ColorTarget, current: Color32) -> Self {
        Self::ChooseColor {
            target,
            color: current,
        }
    }

    pub fn resize_canvas(size: [u32; 2]) -> Self {
        Self::ResizeCanvas {
            width: size[0].to_string(),
            height: size[1].to_string(),
            error: None,
        }
    }

    pub fn enter_text() -> Self {
        Self::EnterText {
            text: String::new(),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::ChooseColor {
                target: ColorTarget::Pen,
                ..
            } => "Choose Color",
            Self::ChooseColor {
                target: ColorTarget::Background,
                ..
            } => "Background Color",
            Self::ResizeCanvas { .. } => "Canvas Size",
            Self::EnterText { .. } => "Text",
        }
    }

    /// Show the dialog and report what happened
    pub fn show(&mut self, ctx: &egui::Context) -> DialogAction {
        let mut action = DialogAction::Pending;
        let title = self.title();

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let (submit, cancel) = match self {
                    Self::ChooseColor { color, .. } => {
                        egui::color_picker::color_picker_color32(
                            ui,
                            color,
                            egui::color_picker::Alpha::Opaque,
                        );
                        buttons(ui)
                    }
                    Self::ResizeCanvas {
                        width,
                        height,
                        error,
                    } => {
                        egui::Grid::new("canvas_size_grid")
                            .num_columns(2)
                            .show(ui, |ui| {
                                ui.label("Width:");
                                ui.text_edit_singleline(width);
                                ui.end_row();
                                ui.label("Height:");
                                ui.text_edit_singleline(height);
                                ui.end_row();
                            });
                        if let Some(error) = error {
                            ui.colored_label(Color32::RED, error.as_str());
                        }
                        buttons(ui)
                    }
                    Self::EnterText { text } => {
                        ui.label("Text to place (click the canvas afterwards):");
                        ui.text_edit_singleline(text).request_focus();
                        buttons(ui)
                    }
                };

                let enter = ui.input(|i| i.key_pressed(Key::Enter));
                let escape = ui.input(|i| i.key_pressed(Key::Escape));
                if cancel || escape {
                    action = DialogAction::Cancelled;
                } else if submit || enter {
                    action = self.submit();
                }
            });

        action
    }

    fn submit(&mut self) -> DialogAction {
        match self {
            Self::ChooseColor {
                target: ColorTarget::Pen,
                color,
            } => DialogAction::Run(Command::SetColor(*color)),
            Self::ChooseColor {
                target: ColorTarget::Background,
                color,
            } => DialogAction::Run(Command::SetBackground(*color)),
            Self::ResizeCanvas {
                width,
                height,
                error,
            } => match (parse_side(width), parse_side(height)) {
                (Some(width), Some(height)) => {
                    DialogAction::Run(Command::ResizeCanvas { width, height })
                }
                _ => {
                    *error = Some(format!("Enter whole numbers from 1 to {}", MAX_CANVAS_SIDE));
                    DialogAction::Pending
                }
            },
            Self::EnterText { text } => {
                if text.trim().is_empty() {
                    DialogAction::Cancelled
                } else {
                    DialogAction::PlaceText(text.clone())
                }
            }
        }
    }
}

fn buttons(ui: &mut egui::Ui) -> (bool, bool) {
    ui.separator();
    ui.horizontal(|ui| {
        let ok = ui.button("OK").clicked();
        let cancel = ui.button("Cancel").clicked();
        (ok, cancel)
    })
    .inner
}

/// Parse one side of the canvas size prompt
pub fn parse_side(input: &str) -> Option<u32> {
    let value: u32 = input.trim().parse().ok()?;
    (1..=MAX_CANVAS_SIDE).contains(&value).then_some(value)
}
