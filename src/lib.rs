#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod bitmap;
pub mod command;
pub mod document;
pub mod error;
pub mod file_handler;
mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod text;
mod texture_manager;
pub mod tools;

pub use app::PaintApp;
pub use bitmap::Bitmap;
pub use command::{Command, CommandContext, CommandOutcome};
pub use document::Document;
pub use error::{PaintError, PaintResult};
pub use renderer::Renderer;
pub use state::{PenState, Settings};
pub use stroke::{CanvasItem, TextStamp};
pub use tools::{Tool, ToolType};
