use std::path::Path;

use ab_glyph::FontArc;
use egui::{Color32, Pos2, Rect};

use crate::bitmap::Bitmap;
use crate::error::{PaintError, PaintResult};
use crate::stroke::{CanvasItem, Ink, TextStamp};
use crate::text;

/// Largest accepted canvas side, in pixels
pub const MAX_CANVAS_SIDE: u32 = 4096;

pub const DEFAULT_CANVAS_SIZE: [u32; 2] = [600, 400];

/// The drawing: the on-screen display list and the off-screen bitmap.
///
/// Every mutation goes through here so the two always show the same picture.
#[derive(Debug, Clone)]
pub struct Document {
    items: Vec<CanvasItem>,
    bitmap: Bitmap,
    background: Color32,
    next_stamp_id: usize,
    /// Bumped on every change; the renderer uses it to refresh textures
    version: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE[0], DEFAULT_CANVAS_SIZE[1], Color32::WHITE)
    }
}

impl Document {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            items: Vec::new(),
            bitmap: Bitmap::new(width, height, background),
            background,
            next_stamp_id: 0,
            version: 0,
        }
    }

    /// Build a document from persisted settings, falling back to the default
    /// size when the stored one is unusable
    pub fn with_size(size: [u32; 2], background: Color32) -> Self {
        let [width, height] = size;
        if validate_size(width, height).is_ok() {
            Self::new(width, height, background)
        } else {
            log::warn!("Ignoring stored canvas size {}x{}", width, height);
            Self::new(DEFAULT_CANVAS_SIZE[0], DEFAULT_CANVAS_SIZE[1], background)
        }
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn size(&self) -> [u32; 2] {
        self.bitmap.size()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Canvas-space rectangle of the drawing surface
    pub fn rect(&self) -> Rect {
        let [w, h] = self.size();
        Rect::from_min_size(Pos2::ZERO, egui::vec2(w as f32, h as f32))
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    /// Append one freehand segment to both the display list and the bitmap
    pub fn draw_segment(&mut self, from: Pos2, to: Pos2, ink: Ink, width: f32) {
        let item = CanvasItem::segment(from, to, ink, width, self.rect());
        paint_item(&mut self.bitmap, &item, self.background);
        self.items.push(item);
        self.touch();
    }

    /// Remove everything drawn, keeping size and background
    pub fn clear(&mut self) {
        self.items.clear();
        self.bitmap.fill(self.background);
        self.touch();
        log::info!("Canvas cleared");
    }

    /// Change the canvas size, keeping the drawing anchored at the top-left.
    ///
    /// Items are clipped to the smaller canvas for good: growing it again
    /// shows background where they were cut off.
    pub fn resize(&mut self, width: u32, height: u32) -> PaintResult<()> {
        validate_size(width, height)?;

        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(width as f32, height as f32));
        self.items.retain_mut(|item| item.restrict_to(rect));
        self.bitmap = Bitmap::new(width, height, self.background);
        self.repaint();
        self.touch();
        log::info!("Canvas resized to {}x{}", width, height);
        Ok(())
    }

    /// Change the background color.
    ///
    /// The canvas fill and everything drawn with the eraser take the new
    /// color; ink keeps its color even when it matches the old background.
    pub fn set_background(&mut self, color: Color32) {
        if color == self.background {
            return;
        }
        self.background = color;
        self.bitmap.fill(color);
        self.repaint();
        self.touch();
    }

    /// Redraw the bitmap from the display list, in drawing order
    fn repaint(&mut self) {
        for item in &self.items {
            paint_item(&mut self.bitmap, item, self.background);
        }
    }

    /// Color of the bitmap under a canvas position
    pub fn pick_color(&self, pos: Pos2) -> Option<Color32> {
        self.bitmap
            .pixel(pos.x.floor() as i64, pos.y.floor() as i64)
    }

    /// Rasterize `text` and stamp it with its top-left at `pos`.
    ///
    /// Returns `false` when there was nothing to draw.
    pub fn stamp_text(
        &mut self,
        pos: Pos2,
        text: &str,
        ink: Ink,
        px_size: f32,
        font: &FontArc,
    ) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let mask = text::rasterize(font, text, px_size);
        if mask.is_empty() {
            return false;
        }

        let stamp = TextStamp::new(self.next_stamp_id, pos, text.to_owned(), ink, mask);
        self.next_stamp_id += 1;
        log::debug!("Stamped {:?} at {:?}", stamp.text(), stamp.position());
        let item = CanvasItem::text(stamp, self.rect());
        paint_item(&mut self.bitmap, &item, self.background);
        self.items.push(item);
        self.touch();
        true
    }

    pub fn save_png(&self, path: &Path) -> PaintResult<()> {
        self.bitmap.save_png(path)
    }
}

fn paint_item(bitmap: &mut Bitmap, item: &CanvasItem, background: Color32) {
    let color = item.ink().resolve(background);
    match item {
        CanvasItem::Segment {
            from,
            to,
            width,
            clip,
            ..
        } => bitmap.draw_line(*from, *to, color, *width, *clip),
        CanvasItem::Text { stamp, clip } => {
            bitmap.blend_mask(stamp.mask(), stamp.position(), color, *clip)
        }
    }
}

fn validate_size(width: u32, height: u32) -> PaintResult<()> {
    if width == 0 || height == 0 || width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(PaintError::InvalidCanvasSize {
            width,
            height,
            max: MAX_CANVAS_SIDE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document() {
        let doc = Document::default();
        assert_eq!(doc.size(), [600, 400]);
        assert_eq!(doc.background(), Color32::WHITE);
        assert!(doc.items().is_empty());
    }

    #[test]
    fn test_invalid_stored_size_falls_back() {
        let doc = Document::with_size([0, 100], Color32::WHITE);
        assert_eq!(doc.size(), DEFAULT_CANVAS_SIZE);
        let doc = Document::with_size([800, 600], Color32::BLACK);
        assert_eq!(doc.size(), [800, 600]);
        assert_eq!(doc.pick_color(Pos2::new(1.0, 1.0)), Some(Color32::BLACK));
    }

    #[test]
    fn test_version_bumps() {
        let mut doc = Document::default();
        let v = doc.version();
        doc.draw_segment(Pos2::new(1.0, 1.0), Pos2::new(5.0, 5.0), Ink::Color(Color32::BLACK), 1.0);
        assert!(doc.version() > v);
        let v = doc.version();
        doc.set_background(Color32::WHITE);
        assert_eq!(doc.version(), v);
    }

    #[test]
    fn test_resize_drops_items_outside() {
        let mut doc = Document::default();
        doc.draw_segment(Pos2::new(10.0, 10.0), Pos2::new(20.0, 10.0), Ink::Color(Color32::BLACK), 1.0);
        doc.draw_segment(Pos2::new(500.0, 300.0), Pos2::new(550.0, 350.0), Ink::Color(Color32::BLACK), 1.0);
        doc.resize(100, 100).unwrap();
        assert_eq!(doc.items().len(), 1);
        assert_eq!(doc.size(), [100, 100]);
    }

    #[test]
    fn test_resize_rejects_bad_sizes() {
        let mut doc = Document::default();
        assert!(matches!(
            doc.resize(0, 10),
            Err(PaintError::InvalidCanvasSize { .. })
        ));
        assert!(doc.resize(MAX_CANVAS_SIDE + 1, 10).is_err());
        assert_eq!(doc.size(), [600, 400]);
    }

    #[test]
    fn test_shrink_then_grow_loses_the_cut_off_part() {
        let mut doc = Document::default();
        doc.draw_segment(
            Pos2::new(10.5, 10.5),
            Pos2::new(500.5, 10.5),
            Ink::Color(Color32::BLACK),
            1.0,
        );
        doc.resize(100, 100).unwrap();
        doc.resize(600, 400).unwrap();

        assert_eq!(doc.pick_color(Pos2::new(50.0, 10.0)), Some(Color32::BLACK));
        assert_eq!(doc.pick_color(Pos2::new(300.0, 10.0)), Some(Color32::WHITE));
        let clip = doc.items()[0].clip();
        assert_eq!(clip.max, Pos2::new(100.0, 100.0));
        assert!(!clip.contains(Pos2::new(300.5, 10.5)));
    }

    #[test]
    fn test_ink_matching_background_survives_background_changes() {
        let mut doc = Document::default();
        doc.draw_segment(
            Pos2::new(20.0, 20.0),
            Pos2::new(60.0, 20.0),
            Ink::Color(Color32::BLACK),
            5.0,
        );
        doc.set_background(Color32::BLACK);
        doc.set_background(Color32::WHITE);

        assert_eq!(doc.pick_color(Pos2::new(40.0, 20.0)), Some(Color32::BLACK));
        assert_eq!(doc.items()[0].ink(), Ink::Color(Color32::BLACK));
    }

    #[test]
    fn test_erased_marks_follow_background() {
        let mut doc = Document::default();
        doc.draw_segment(
            Pos2::new(20.0, 20.0),
            Pos2::new(60.0, 20.0),
            Ink::Color(Color32::RED),
            5.0,
        );
        doc.draw_segment(Pos2::new(40.0, 10.0), Pos2::new(40.0, 30.0), Ink::Background, 5.0);
        doc.set_background(Color32::YELLOW);

        assert_eq!(doc.pick_color(Pos2::new(40.0, 20.0)), Some(Color32::YELLOW));
        assert_eq!(doc.pick_color(Pos2::new(25.0, 20.0)), Some(Color32::RED));
        assert_eq!(doc.pick_color(Pos2::new(300.0, 300.0)), Some(Color32::YELLOW));
    }
}
