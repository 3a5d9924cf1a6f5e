use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::stroke::Ink;

/// Stroke widths offered by the size selector
pub const BRUSH_SIZES: [u32; 5] = [1, 2, 5, 10, 20];

/// Current drawing color, stroke width and eraser flag.
///
/// `previous_color` remembers the pen color while the eraser is on, so that
/// switching back to the brush restores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenState {
    color: Color32,
    previous_color: Color32,
    size: u32,
    eraser: bool,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            previous_color: Color32::BLACK,
            size: BRUSH_SIZES[0],
            eraser: false,
        }
    }
}

impl PenState {
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_erasing(&self) -> bool {
        self.eraser
    }

    /// Set the pen color (from the color chooser or the picker)
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
        self.previous_color = color;
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size.max(1);
    }

    /// Switch back to the brush, restoring the remembered pen color
    pub fn use_brush(&mut self) {
        self.eraser = false;
        self.color = self.previous_color;
    }

    pub fn toggle_eraser(&mut self) {
        if self.eraser {
            self.use_brush();
        } else {
            self.previous_color = self.color;
            self.eraser = true;
        }
    }

    /// Step to the next (or previous) entry of [`BRUSH_SIZES`]
    pub fn step_size(&mut self, forward: bool) {
        let next = if forward {
            BRUSH_SIZES.iter().copied().find(|&s| s > self.size)
        } else {
            BRUSH_SIZES.iter().rev().copied().find(|&s| s < self.size)
        };
        if let Some(size) = next {
            self.size = size;
        }
    }

    /// What a new stroke is drawn with
    pub fn ink(&self) -> Ink {
        if self.eraser {
            Ink::Background
        } else {
            Ink::Color(self.previous_color)
        }
    }
}

/// Formats a color as `#rrggbb`
pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Settings restored between runs through eframe storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub pen: PenState,
    pub background: Color32,
    pub canvas_size: [u32; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pen: PenState::default(),
            background: Color32::WHITE,
            canvas_size: [600, 400],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pen() {
        let pen = PenState::default();
        assert_eq!(pen.color(), Color32::BLACK);
        assert_eq!(pen.size(), 1);
        assert!(!pen.is_erasing());
    }

    #[test]
    fn test_eraser_uses_background_and_restores_color() {
        let mut pen = PenState::default();
        pen.set_color(Color32::RED);

        pen.toggle_eraser();
        assert!(pen.is_erasing());
        assert_eq!(pen.ink(), Ink::Background);
        assert_eq!(pen.ink().resolve(Color32::YELLOW), Color32::YELLOW);

        pen.toggle_eraser();
        assert!(!pen.is_erasing());
        assert_eq!(pen.ink(), Ink::Color(Color32::RED));
    }

    #[test]
    fn test_brush_turns_eraser_off() {
        let mut pen = PenState::default();
        pen.set_color(Color32::BLUE);
        pen.toggle_eraser();
        pen.use_brush();
        assert!(!pen.is_erasing());
        assert_eq!(pen.color(), Color32::BLUE);
    }

    #[test]
    fn test_color_chosen_while_erasing_is_used_after() {
        let mut pen = PenState::default();
        pen.toggle_eraser();
        pen.set_color(Color32::GREEN);
        assert_eq!(pen.ink(), Ink::Background);
        pen.use_brush();
        assert_eq!(pen.ink(), Ink::Color(Color32::GREEN));
    }

    #[test]
    fn test_size_steps_and_clamps() {
        let mut pen = PenState::default();
        pen.step_size(false);
        assert_eq!(pen.size(), 1);
        pen.step_size(true);
        pen.step_size(true);
        assert_eq!(pen.size(), 5);
        pen.set_size(20);
        pen.step_size(true);
        assert_eq!(pen.size(), 20);
        pen.set_size(0);
        assert_eq!(pen.size(), 1);
    }

    #[test]
    fn test_hex() {
        assert_eq!(color_to_hex(Color32::from_rgb(255, 0, 16)), "#ff0010");
    }

    #[test]
    fn test_settings_fill_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"canvas_size":[800,600]}"#).unwrap();
        assert_eq!(settings.canvas_size, [800, 600]);
        assert_eq!(settings.background, Color32::WHITE);
        assert_eq!(settings.pen, PenState::default());
    }
}
