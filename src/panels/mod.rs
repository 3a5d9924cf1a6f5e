mod central_panel;
pub mod dialogs;
mod status_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use status_panel::status_panel;
pub use tools_panel::tools_panel;
