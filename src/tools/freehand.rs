use egui::Pos2;

use crate::command::Command;
use crate::tools::Tool;

/// Brush and eraser: every drag step becomes one segment.
///
/// Which color the segment gets is up to the pen state at execution time.
#[derive(Debug, Clone, Default)]
pub struct FreehandTool {
    // Transient state: end of the previous segment while dragging
    last_pos: Option<Pos2>,
}

impl FreehandTool {
    pub fn new() -> Self {
        Self { last_pos: None }
    }

    pub fn is_drawing(&self) -> bool {
        self.last_pos.is_some()
    }
}

impl Tool for FreehandTool {
    fn name(&self) -> &'static str {
        "Freehand"
    }

    fn deactivate(&mut self) {
        self.last_pos = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        self.last_pos = Some(pos);
        None
    }

    /// Only a drag that began with a press on this tool draws
    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command> {
        let last = self.last_pos.as_mut()?;
        if *last == pos {
            return None;
        }
        let from = std::mem::replace(last, pos);
        Some(Command::DrawSegment { from, to: pos })
    }

    fn on_pointer_up(&mut self, _pos: Pos2) -> Option<Command> {
        self.last_pos = None;
        None
    }
}
