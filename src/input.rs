use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position relative to the canvas' top-left corner
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Input events the canvas reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved while the primary button is held
    PointerDrag { location: InputLocation },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

impl InputEvent {
    /// Helper to check if an input event occurred within the canvas
    pub fn is_in_canvas(&self) -> bool {
        match self {
            InputEvent::PointerDown { location, .. }
            | InputEvent::PointerUp { location, .. }
            | InputEvent::PointerDrag { location } => location.is_in_canvas,
            InputEvent::KeyDown { .. } => false,
        }
    }
}

/// Keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Save,
    ChooseColor,
    Clear,
    Brush,
    Eraser,
    Text,
    SmallerBrush,
    LargerBrush,
}

impl Shortcut {
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        if modifiers.command {
            return match key {
                Key::S => Some(Self::Save),
                Key::C => Some(Self::ChooseColor),
                Key::N => Some(Self::Clear),
                _ => None,
            };
        }
        if modifiers.alt || modifiers.ctrl {
            return None;
        }
        match key {
            Key::B => Some(Self::Brush),
            Key::E => Some(Self::Eraser),
            Key::T => Some(Self::Text),
            Key::OpenBracket => Some(Self::SmallerBrush),
            Key::CloseBracket => Some(Self::LargerBrush),
            _ => None,
        }
    }

    /// Key hint shown in tooltips
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Save => "Ctrl+S",
            Self::ChooseColor => "Ctrl+C",
            Self::Clear => "Ctrl+N",
            Self::Brush => "B",
            Self::Eraser => "E",
            Self::Text => "T",
            Self::SmallerBrush => "[",
            Self::LargerBrush => "]",
        }
    }
}

/// Handles converting raw egui input into canvas-local InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (it moves with scrolling and resizing)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a screen position
    pub fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            // Presses come before the drag of the same frame so a stroke
            // starts at the press position
            for button in [PointerButton::Primary, PointerButton::Secondary] {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = hover {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }

            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos
                    && input.pointer.button_down(PointerButton::Primary)
                {
                    events.push(InputEvent::PointerDrag {
                        location: self.make_location(pos),
                    });
                }
            }
            self.last_pointer_pos = hover;

            for button in [PointerButton::Primary, PointerButton::Secondary] {
                if input.pointer.button_released(button) {
                    let pos = hover.or(input.pointer.interact_pos()).unwrap_or(self.canvas_rect.min);
                    events.push(InputEvent::PointerUp {
                        location: self.make_location(pos),
                        button,
                    });
                }
            }

            let mut saw_copy_key = false;
            let mut saw_copy_event = false;
            for event in &input.raw.events {
                match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => {
                        saw_copy_key |= *key == Key::C && modifiers.command;
                        events.push(InputEvent::KeyDown {
                            key: *key,
                            modifiers: *modifiers,
                        });
                    }
                    // Some backends turn Ctrl+C into a copy event only
                    egui::Event::Copy => saw_copy_event = true,
                    _ => {}
                }
            }
            if saw_copy_event && !saw_copy_key {
                events.push(InputEvent::KeyDown {
                    key: Key::C,
                    modifiers: Modifiers::COMMAND,
                });
            }
        });

        events
    }
}
