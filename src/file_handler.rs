use std::path::{Path, PathBuf};

/// Make sure the chosen file name ends in `.png`; anything else gets it appended
pub fn ensure_png_extension(path: &Path) -> PathBuf {
    // A plain suffix check, so a file named just `.png` counts too
    let has_png = path
        .file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".png"))
        .unwrap_or(false);
    if has_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".png");
        PathBuf::from(name)
    }
}

/// Native dialogs used by the toolbar
pub struct FileHandler {
    last_dir: Option<PathBuf>,
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHandler {
    pub fn new() -> Self {
        Self { last_dir: None }
    }

    /// Ask where to save the picture. `None` when the dialog was cancelled.
    pub fn ask_save_path(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("PNG files", &["png"])
            .set_file_name("drawing.png");
        if let Some(dir) = &self.last_dir {
            dialog = dialog.set_directory(dir);
        }

        let path = dialog.save_file()?;
        self.last_dir = path.parent().map(Path::to_path_buf);
        Some(ensure_png_extension(&path))
    }

    pub fn show_saved(&self, path: &Path) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Information")
            .set_description(format!("Image saved to {}", path.display()))
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    pub fn show_error(&self, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Error")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
