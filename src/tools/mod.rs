use egui::Pos2;

use crate::command::Command;

/// Tool trait defines the interface for the canvas tools.
///
/// Positions are canvas-local. A tool never touches the document directly;
/// it answers with the [`Command`] to run.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Called when the tool is selected (activated).
    fn activate(&mut self) {
        // default: do nothing
    }

    /// Called when the tool is deselected. Drops any half-finished gesture.
    fn deactivate(&mut self);

    /// Handle primary button press on the canvas.
    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command>;

    /// Handle pointer movement while the primary button is held.
    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command>;

    /// Handle primary button release.
    fn on_pointer_up(&mut self, pos: Pos2) -> Option<Command>;
}

mod freehand;
pub use freehand::FreehandTool;

mod text_tool;
pub use text_tool::TextTool;

/// Enum representing all available tool types
#[derive(Debug, Clone)]
pub enum ToolType {
    Freehand(FreehandTool),
    Text(TextTool),
}

impl Default for ToolType {
    fn default() -> Self {
        Self::Freehand(FreehandTool::new())
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Freehand(tool) => tool.name(),
            Self::Text(tool) => tool.name(),
        }
    }

    fn activate(&mut self) {
        match self {
            Self::Freehand(tool) => tool.activate(),
            Self::Text(tool) => tool.activate(),
        }
    }

    fn deactivate(&mut self) {
        match self {
            Self::Freehand(tool) => tool.deactivate(),
            Self::Text(tool) => tool.deactivate(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        match self {
            Self::Freehand(tool) => tool.on_pointer_down(pos),
            Self::Text(tool) => tool.on_pointer_down(pos),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command> {
        match self {
            Self::Freehand(tool) => tool.on_pointer_move(pos),
            Self::Text(tool) => tool.on_pointer_move(pos),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2) -> Option<Command> {
        match self {
            Self::Freehand(tool) => tool.on_pointer_up(pos),
            Self::Text(tool) => tool.on_pointer_up(pos),
        }
    }
}

impl ToolType {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Swap in `next`, giving the old tool a chance to clean up
    pub fn switch_to(&mut self, next: ToolType) {
        self.deactivate();
        *self = next;
        self.activate();
        log::info!("Tool selected: {}", self.name());
    }
}
