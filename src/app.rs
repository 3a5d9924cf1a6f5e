use ab_glyph::FontArc;
use egui::{Painter, PointerButton, Pos2, Rect};

use crate::command::{Command, CommandContext, CommandOutcome};
use crate::document::Document;
use crate::file_handler::FileHandler;
use crate::input::{InputEvent, InputHandler, Shortcut};
use crate::panels::dialogs::{ColorTarget, Dialog, DialogAction};
use crate::panels::{central_panel, status_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::{color_to_hex, PenState, Settings};
use crate::text;
use crate::tools::{TextTool, Tool, ToolType};

/// Things the panels ask the app to do after they have been laid out
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Run(Command),
    Open(Dialog),
    /// Ask for a path, then export
    Save,
    /// Brush button: leave the text tool and the eraser
    SelectBrush,
    /// Text button: prompt for text to place
    RequestText,
    Shortcut(Shortcut),
}

pub struct PaintApp {
    renderer: Option<Renderer>,
    document: Document,
    pen: PenState,
    tool: ToolType,
    input: InputHandler,
    file_handler: FileHandler,
    font: Option<FontArc>,
    dialog: Option<Dialog>,
    stroke_active: bool,
    cursor: Option<Pos2>,
    status: String,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::from_settings(Settings::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!(
            "Starting with a {}x{} canvas",
            settings.canvas_size[0],
            settings.canvas_size[1]
        );

        let mut app = Self::from_settings(settings);
        app.renderer = Some(Renderer::new(&cc.egui_ctx));
        app
    }

    pub fn from_settings(settings: Settings) -> Self {
        Self {
            renderer: None,
            document: Document::with_size(settings.canvas_size, settings.background),
            pen: settings.pen,
            tool: ToolType::default(),
            input: InputHandler::new(Rect::NOTHING),
            file_handler: FileHandler::new(),
            font: None,
            dialog: None,
            stroke_active: false,
            cursor: None,
            status: String::from("Ready"),
        }
    }

    /// The part of the state restored on the next start
    pub fn settings(&self) -> Settings {
        Settings {
            pen: self.pen.clone(),
            background: self.document.background(),
            canvas_size: self.document.size(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn pen(&self) -> &PenState {
        &self.pen
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn cursor(&self) -> Option<Pos2> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<Pos2>) {
        self.cursor = cursor;
    }

    pub fn stroke_active(&self) -> bool {
        self.stroke_active
    }

    pub fn render_canvas(&mut self, painter: &Painter, rect: Rect) {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(painter, rect, &self.document);
        }
    }

    pub fn render_brush_preview(&self, painter: &Painter, hover: Pos2) {
        if self.tool.is_text() {
            return;
        }
        if let Some(renderer) = &self.renderer {
            renderer.render_brush_preview(painter, hover, &self.pen);
        }
    }

    /// Run a command against the document and pen, reporting the result in the status bar
    pub fn execute_command(&mut self, command: Command) {
        let mut ctx = CommandContext::new(&mut self.document, &mut self.pen, self.font.as_ref());
        let result = command.execute(&mut ctx);

        match result {
            Ok(CommandOutcome::Saved(path)) => {
                self.status = format!("Saved {}", path.display());
                self.file_handler.show_saved(&path);
            }
            Ok(CommandOutcome::Picked(color)) => {
                self.status = format!("Picked {}", color_to_hex(color));
            }
            Ok(CommandOutcome::Done) => {
                if !matches!(command, Command::DrawSegment { .. }) {
                    self.status = command.label().to_owned();
                }
            }
            Ok(CommandOutcome::Ignored) => {}
            Err(err) => {
                log::error!("{} failed: {}", command.label(), err);
                self.status = format!("{} failed: {}", command.label(), err);
                if matches!(command, Command::SavePng { .. } | Command::StampText { .. }) {
                    self.file_handler.show_error(&err.to_string());
                }
            }
        }

        if matches!(command, Command::StampText { .. }) {
            // The press that placed the text must not go on to draw
            self.stroke_active = false;
            self.tool.switch_to(ToolType::default());
        }
    }

    /// Route one canvas input event to the active tool or the shortcuts
    pub fn handle_canvas_event(&mut self, event: InputEvent) -> Option<AppAction> {
        let command = match event {
            InputEvent::PointerDown {
                location,
                button: PointerButton::Primary,
            } if location.is_in_canvas => {
                self.stroke_active = true;
                self.tool.on_pointer_down(location.position)
            }
            InputEvent::PointerDown {
                location,
                button: PointerButton::Secondary,
            } if location.is_in_canvas => Some(Command::PickColor {
                position: location.position,
            }),
            InputEvent::KeyDown { key, modifiers } => {
                return Shortcut::from_key(key, modifiers).map(AppAction::Shortcut);
            }
            InputEvent::PointerDrag { location } if self.stroke_active => {
                self.tool.on_pointer_move(location.position)
            }
            InputEvent::PointerUp {
                location,
                button: PointerButton::Primary,
            } if self.stroke_active => {
                self.stroke_active = false;
                self.tool.on_pointer_up(location.position)
            }
            _ => None,
        };
        command.map(AppAction::Run)
    }

    /// Apply a toolbar, keyboard or canvas request
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::Run(command) => self.execute_command(command),
            AppAction::Open(dialog) => self.dialog = Some(dialog),
            AppAction::Save => {
                if let Some(path) = self.file_handler.ask_save_path() {
                    self.execute_command(Command::SavePng { path });
                }
            }
            AppAction::SelectBrush => {
                if self.tool.is_text() {
                    self.tool.switch_to(ToolType::default());
                }
                self.execute_command(Command::UseBrush);
            }
            AppAction::RequestText => {
                if self.ensure_font() {
                    self.dialog = Some(Dialog::enter_text());
                }
            }
            AppAction::Shortcut(shortcut) => self.apply_shortcut(shortcut),
        }
    }

    fn apply_shortcut(&mut self, shortcut: Shortcut) {
        log::debug!("Shortcut {:?}", shortcut);
        let action = match shortcut {
            Shortcut::Save => AppAction::Save,
            Shortcut::ChooseColor => {
                AppAction::Open(Dialog::choose_color(ColorTarget::Pen, self.pen.color()))
            }
            Shortcut::Clear => AppAction::Run(Command::Clear),
            Shortcut::Brush => AppAction::SelectBrush,
            Shortcut::Eraser => AppAction::Run(Command::ToggleEraser),
            Shortcut::Text => AppAction::RequestText,
            Shortcut::SmallerBrush => AppAction::Run(Command::StepPenSize { forward: false }),
            Shortcut::LargerBrush => AppAction::Run(Command::StepPenSize { forward: true }),
        };
        self.apply(action);
    }

    /// Load the text font on first use
    fn ensure_font(&mut self) -> bool {
        if self.font.is_some() {
            return true;
        }
        match text::load_default_font() {
            Ok(font) => {
                self.font = Some(font);
                true
            }
            Err(err) => {
                log::warn!("Text stamping unavailable: {}", err);
                self.status = err.to_string();
                self.file_handler.show_error(&err.to_string());
                false
            }
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &mut self.dialog else {
            return;
        };
        match dialog.show(ctx) {
            DialogAction::Pending => {}
            DialogAction::Cancelled => self.dialog = None,
            DialogAction::Run(command) => {
                self.dialog = None;
                self.execute_command(command);
            }
            DialogAction::PlaceText(text) => {
                self.dialog = None;
                self.tool.switch_to(ToolType::Text(TextTool::new(text)));
                self.status = String::from("Click on the canvas to place the text");
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = tools_panel(self, ctx);
        status_panel(self, ctx);

        let accept_input = self.dialog.is_none() && !ctx.wants_keyboard_input();
        actions.extend(central_panel(self, ctx, accept_input));

        self.show_dialog(ctx);

        let changed = !actions.is_empty();
        for action in actions {
            self.apply(action);
        }
        if changed {
            ctx.request_repaint();
        }
    }
}
