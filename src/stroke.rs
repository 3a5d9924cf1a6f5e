use egui::{Color32, Pos2, Rect, Vec2};

use crate::geometry::calculate_bounds;
use crate::text::GlyphMask;

/// What a stroke or stamp is painted with.
///
/// Eraser marks keep following the background, so a later background change
/// recolors them while ink that merely has the same color stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Color(Color32),
    Background,
}

impl Ink {
    pub fn resolve(self, background: Color32) -> Color32 {
        match self {
            Ink::Color(color) => color,
            Ink::Background => background,
        }
    }

    pub fn is_eraser(self) -> bool {
        matches!(self, Ink::Background)
    }
}

/// Text stamped onto the canvas.
///
/// The rasterized mask is kept so the screen shows exactly the pixels that
/// were blended into the bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStamp {
    id: usize,
    position: Pos2,
    text: String,
    ink: Ink,
    mask: GlyphMask,
}

impl TextStamp {
    pub fn new(id: usize, position: Pos2, text: String, ink: Ink, mask: GlyphMask) -> Self {
        Self {
            id,
            position: position.round(),
            text,
            ink,
            mask,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn ink(&self) -> Ink {
        self.ink
    }

    pub fn mask(&self) -> &GlyphMask {
        &self.mask
    }

    /// Canvas-space rectangle covered by the mask
    pub fn rect(&self) -> Rect {
        let min = self.position + Vec2::new(self.mask.offset[0] as f32, self.mask.offset[1] as f32);
        Rect::from_min_size(min, Vec2::new(self.mask.width as f32, self.mask.height as f32))
    }

    /// RGBA texture of the stamp in `color`, with coverage as alpha
    pub fn to_color_image(&self, color: Color32) -> egui::ColorImage {
        let rgba: Vec<u8> = self
            .mask
            .coverage
            .iter()
            .flat_map(|&c| {
                let alpha = (c * 255.0).round().clamp(0.0, 255.0) as u8;
                [color.r(), color.g(), color.b(), alpha]
            })
            .collect();
        egui::ColorImage::from_rgba_unmultiplied(
            [self.mask.width as usize, self.mask.height as usize],
            &rgba,
        )
    }
}

/// One entry of the on-screen display list.
///
/// `clip` is the part of the canvas the item may still paint on. It starts
/// as the canvas at drawing time and only shrinks, when the canvas does.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasItem {
    /// Straight piece of a freehand stroke, drawn with round caps
    Segment {
        from: Pos2,
        to: Pos2,
        ink: Ink,
        width: f32,
        clip: Rect,
    },
    Text { stamp: TextStamp, clip: Rect },
}

impl CanvasItem {
    pub fn segment(from: Pos2, to: Pos2, ink: Ink, width: f32, clip: Rect) -> Self {
        Self::Segment {
            from,
            to,
            ink,
            width,
            clip,
        }
    }

    pub fn text(stamp: TextStamp, clip: Rect) -> Self {
        Self::Text { stamp, clip }
    }

    pub fn ink(&self) -> Ink {
        match self {
            Self::Segment { ink, .. } => *ink,
            Self::Text { stamp, .. } => stamp.ink(),
        }
    }

    pub fn clip(&self) -> Rect {
        match self {
            Self::Segment { clip, .. } | Self::Text { clip, .. } => *clip,
        }
    }

    /// Canvas-space bounding box, ignoring the clip
    pub fn rect(&self) -> Rect {
        match self {
            Self::Segment { from, to, width, .. } => {
                calculate_bounds(&[*from, *to], (width / 2.0).max(0.5))
            }
            Self::Text { stamp, .. } => stamp.rect(),
        }
    }

    /// Narrow the clip to `rect`. Returns `false` once nothing of the item can show.
    pub fn restrict_to(&mut self, rect: Rect) -> bool {
        let bounds = self.rect();
        let clip = match self {
            Self::Segment { clip, .. } | Self::Text { clip, .. } => clip,
        };
        *clip = clip.intersect(rect);
        clip.is_positive() && clip.intersects(bounds)
    }
}
