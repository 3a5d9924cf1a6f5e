use egui::Pos2;

use crate::command::Command;
use crate::tools::Tool;

/// Places the text entered in the prompt where the canvas is clicked
#[derive(Debug, Clone, Default)]
pub struct TextTool {
    pending: Option<String>,
}

impl TextTool {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            pending: Some(text.into()),
        }
    }

    pub fn pending_text(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}

impl Tool for TextTool {
    fn name(&self) -> &'static str {
        "Text"
    }

    fn deactivate(&mut self) {
        self.pending = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        let text = self.pending.take()?;
        Some(Command::StampText { position: pos, text })
    }

    fn on_pointer_move(&mut self, _pos: Pos2) -> Option<Command> {
        None
    }

    fn on_pointer_up(&mut self, _pos: Pos2) -> Option<Command> {
        None
    }
}
