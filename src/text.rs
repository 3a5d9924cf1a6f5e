use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontArc, GlyphId, OutlinedGlyph, ScaleFont};

use crate::error::{PaintError, PaintResult};

/// Environment variable overriding the font used for text stamps
pub const FONT_ENV_VAR: &str = "SKETCHPAD_FONT";

/// Pixel size used for text stamps
pub const DEFAULT_TEXT_SIZE: f32 = 24.0;

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Load a font from a file
pub fn load_font_file(path: &Path) -> PaintResult<FontArc> {
    let bytes = std::fs::read(path)?;
    FontArc::try_from_vec(bytes).map_err(|_| PaintError::InvalidFont {
        path: path.to_path_buf(),
    })
}

/// Find a font for text stamps.
///
/// An explicit `SKETCHPAD_FONT` must load; otherwise the first well-known
/// system font that parses is used.
pub fn load_default_font() -> PaintResult<FontArc> {
    if let Some(path) = std::env::var_os(FONT_ENV_VAR) {
        let path = PathBuf::from(path);
        log::info!("Loading text font from {}", path.display());
        return load_font_file(&path);
    }

    for candidate in FONT_CANDIDATES {
        let path = Path::new(candidate);
        if !path.exists() {
            continue;
        }
        match load_font_file(path) {
            Ok(font) => {
                log::info!("Using text font {}", path.display());
                return Ok(font);
            }
            Err(err) => log::warn!("Skipping font {}: {}", path.display(), err),
        }
    }

    Err(PaintError::FontUnavailable)
}

/// Coverage mask of rasterized text.
///
/// `offset` is the position of the mask's top-left pixel relative to the
/// stamp's anchor (the top-left of the first line box).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    pub offset: [i32; 2],
    pub coverage: Vec<f32>,
}

impl GlyphMask {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Coverage at mask coordinates, 0.0 outside the mask
    pub fn coverage_at(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.coverage[(y * self.width + x) as usize]
    }
}

/// Rasterize `text` at `px_size`. Lines are separated by `\n`.
pub fn rasterize(font: &FontArc, text: &str, px_size: f32) -> GlyphMask {
    let scaled = font.as_scaled(px_size);
    let ascent = scaled.ascent();
    let line_height = scaled.height() + scaled.line_gap();

    let mut outlined: Vec<OutlinedGlyph> = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        let baseline = ascent + line_idx as f32 * line_height;
        let mut cursor_x = 0.0f32;
        let mut last_glyph: Option<GlyphId> = None;

        for ch in line.chars() {
            let glyph_id = font.glyph_id(ch);
            if let Some(prev) = last_glyph {
                cursor_x += scaled.kern(prev, glyph_id);
            }
            let glyph = glyph_id.with_scale_and_position(px_size, point(cursor_x, baseline));
            if let Some(glyph) = font.outline_glyph(glyph) {
                outlined.push(glyph);
            }
            cursor_x += scaled.h_advance(glyph_id);
            last_glyph = Some(glyph_id);
        }
    }

    if outlined.is_empty() {
        return GlyphMask::default();
    }

    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for glyph in &outlined {
        let bounds = glyph.px_bounds();
        min_x = min_x.min(bounds.min.x.floor() as i32);
        min_y = min_y.min(bounds.min.y.floor() as i32);
        max_x = max_x.max(bounds.max.x.ceil() as i32);
        max_y = max_y.max(bounds.max.y.ceil() as i32);
    }

    let width = (max_x - min_x).max(0) as u32;
    let height = (max_y - min_y).max(0) as u32;
    let mut coverage = vec![0.0f32; (width * height) as usize];

    for glyph in &outlined {
        let bounds = glyph.px_bounds();
        let gx = bounds.min.x.floor() as i32 - min_x;
        let gy = bounds.min.y.floor() as i32 - min_y;
        glyph.draw(|x, y, c| {
            let px = gx + x as i32;
            let py = gy + y as i32;
            if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                let idx = py as usize * width as usize + px as usize;
                coverage[idx] = coverage[idx].max(c.clamp(0.0, 1.0));
            }
        });
    }

    GlyphMask {
        width,
        height,
        offset: [min_x, min_y],
        coverage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_lookup_outside_is_zero() {
        let mask = GlyphMask {
            width: 2,
            height: 1,
            offset: [0, 0],
            coverage: vec![0.25, 1.0],
        };
        assert_eq!(mask.coverage_at(1, 0), 1.0);
        assert_eq!(mask.coverage_at(2, 0), 0.0);
        assert_eq!(mask.coverage_at(0, 1), 0.0);
    }

    #[test]
    fn test_rasterize_with_system_font() {
        // Only runs where a system font is installed
        let Ok(font) = load_default_font() else {
            return;
        };
        let mask = rasterize(&font, "Hi", DEFAULT_TEXT_SIZE);
        assert!(!mask.is_empty());
        assert!(mask.coverage.iter().any(|&c| c > 0.5));

        let blank = rasterize(&font, "   ", DEFAULT_TEXT_SIZE);
        assert!(blank.is_empty());
    }

    #[test]
    fn test_missing_font_file() {
        let err = load_font_file(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, PaintError::Io(_)));
    }
}
