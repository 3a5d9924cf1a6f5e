use std::collections::HashSet;

use eframe::egui::{self, Color32, Painter, Pos2, Rect, Stroke};

use crate::document::Document;
use crate::state::PenState;
use crate::stroke::CanvasItem;
use crate::texture_manager::{StampKey, TextureManager};

/// Paints the document's display list onto the screen
pub struct Renderer {
    textures: TextureManager,
    last_version: Option<u64>,
    ctx: egui::Context,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("textures", &self.textures.cache_size())
            .field("last_version", &self.last_version)
            .finish()
    }
}

impl Renderer {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            textures: TextureManager::new(),
            last_version: None,
            ctx: ctx.clone(),
        }
    }

    /// Renders the canvas
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): Screen rectangle of the canvas
    ///     document (Document): What to draw
    pub fn render(&mut self, painter: &Painter, rect: Rect, document: &Document) {
        if self.last_version != Some(document.version()) {
            self.prune_textures(document);
            self.last_version = Some(document.version());
        }

        let painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
        painter.rect_filled(rect, 0.0, document.background());

        let offset = rect.min.to_vec2();
        let background = document.background();
        for item in document.items() {
            let color = item.ink().resolve(background);
            let painter = painter.with_clip_rect(item.clip().translate(offset).intersect(painter.clip_rect()));
            match item {
                CanvasItem::Segment {
                    from, to, width, ..
                } => {
                    let (from, to) = (*from + offset, *to + offset);
                    let radius = width / 2.0;
                    if from != to {
                        painter.line_segment([from, to], Stroke::new(*width, color));
                    }
                    // Round caps
                    painter.circle_filled(from, radius, color);
                    painter.circle_filled(to, radius, color);
                }
                CanvasItem::Text { stamp, .. } => {
                    let texture = self.textures.get_or_create_texture(
                        (stamp.id(), color),
                        || stamp.to_color_image(color),
                        &self.ctx,
                    );
                    painter.image(
                        texture,
                        stamp.rect().translate(offset),
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
            }
        }
    }

    /// Outline of the brush under the cursor
    pub fn render_brush_preview(&self, painter: &Painter, center: Pos2, pen: &PenState) {
        let radius = (pen.size() as f32 / 2.0).max(1.0);
        let outline = if pen.is_erasing() {
            Color32::GRAY
        } else {
            pen.color()
        };
        painter.circle_stroke(center, radius, Stroke::new(1.0, outline));
    }

    fn prune_textures(&mut self, document: &Document) {
        let background = document.background();
        let live: HashSet<StampKey> = document
            .items()
            .iter()
            .filter_map(|item| match item {
                CanvasItem::Text { stamp, .. } => Some((stamp.id(), stamp.ink().resolve(background))),
                CanvasItem::Segment { .. } => None,
            })
            .collect();
        self.textures.retain_stamps(&live);
    }

    pub fn texture_count(&self) -> usize {
        self.textures.cache_size()
    }
}
