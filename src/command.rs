use std::path::PathBuf;

use ab_glyph::FontArc;
use egui::{Color32, Pos2};

use crate::document::Document;
use crate::error::{PaintError, PaintResult};
use crate::state::PenState;
use crate::text::DEFAULT_TEXT_SIZE;

/// Everything the toolbar, the keyboard and the canvas tools can ask for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Wipe the canvas back to the background
    Clear,
    /// Set the pen color (color chooser)
    SetColor(Color32),
    /// Switch to the brush
    UseBrush,
    /// Turn the eraser on or off
    ToggleEraser,
    SetPenSize(u32),
    /// Step the pen size through the preset sizes
    StepPenSize { forward: bool },
    ResizeCanvas { width: u32, height: u32 },
    SetBackground(Color32),
    /// Freehand segment drawn with the current pen
    DrawSegment { from: Pos2, to: Pos2 },
    /// Stamp text in the pen color with its top-left at `position`
    StampText { position: Pos2, text: String },
    /// Take the pen color from the pixel under `position`
    PickColor { position: Pos2 },
    SavePng { path: PathBuf },
}

/// What executing a command did
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Done,
    /// The command had nothing to act on
    Ignored,
    Picked(Color32),
    Saved(PathBuf),
}

/// Everything a command may touch
pub struct CommandContext<'a> {
    pub document: &'a mut Document,
    pub pen: &'a mut PenState,
    pub font: Option<&'a FontArc>,
}

impl<'a> CommandContext<'a> {
    pub fn new(document: &'a mut Document, pen: &'a mut PenState, font: Option<&'a FontArc>) -> Self {
        Self { document, pen, font }
    }
}

impl Command {
    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> PaintResult<CommandOutcome> {
        log::debug!("Executing {:?}", self);
        match self {
            Command::Clear => ctx.document.clear(),
            Command::SetColor(color) => ctx.pen.set_color(*color),
            Command::UseBrush => ctx.pen.use_brush(),
            Command::ToggleEraser => ctx.pen.toggle_eraser(),
            Command::SetPenSize(size) => ctx.pen.set_size(*size),
            Command::StepPenSize { forward } => ctx.pen.step_size(*forward),
            Command::ResizeCanvas { width, height } => ctx.document.resize(*width, *height)?,
            Command::SetBackground(color) => ctx.document.set_background(*color),
            Command::DrawSegment { from, to } => {
                ctx.document
                    .draw_segment(*from, *to, ctx.pen.ink(), ctx.pen.size() as f32);
            }
            Command::StampText { position, text } => {
                if text.trim().is_empty() {
                    return Ok(CommandOutcome::Ignored);
                }
                let font = ctx.font.ok_or(PaintError::FontUnavailable)?;
                if !ctx
                    .document
                    .stamp_text(*position, text, ctx.pen.ink(), DEFAULT_TEXT_SIZE, font)
                {
                    return Ok(CommandOutcome::Ignored);
                }
            }
            Command::PickColor { position } => {
                return Ok(match ctx.document.pick_color(*position) {
                    Some(color) => {
                        ctx.pen.set_color(color);
                        CommandOutcome::Picked(color)
                    }
                    None => CommandOutcome::Ignored,
                });
            }
            Command::SavePng { path } => {
                ctx.document.save_png(path)?;
                return Ok(CommandOutcome::Saved(path.clone()));
            }
        }
        Ok(CommandOutcome::Done)
    }

    /// Short label for the status bar
    pub fn label(&self) -> &'static str {
        match self {
            Command::Clear => "Clear",
            Command::SetColor(_) => "Set Color",
            Command::UseBrush => "Brush",
            Command::ToggleEraser => "Eraser",
            Command::SetPenSize(_) | Command::StepPenSize { .. } => "Brush Size",
            Command::ResizeCanvas { .. } => "Resize Canvas",
            Command::SetBackground(_) => "Background",
            Command::DrawSegment { .. } => "Draw",
            Command::StampText { .. } => "Text",
            Command::PickColor { .. } => "Pick Color",
            Command::SavePng { .. } => "Save",
        }
    }
}
