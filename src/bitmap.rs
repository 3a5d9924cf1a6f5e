use std::path::Path;

use egui::{Color32, Pos2, Rect};
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::PaintResult;
use crate::geometry::{calculate_bounds, distance_to_line_segment};
use crate::text::GlyphMask;

fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

fn from_rgb(pixel: Rgb<u8>) -> Color32 {
    Color32::from_rgb(pixel[0], pixel[1], pixel[2])
}

/// Off-screen raster mirroring everything drawn on the canvas.
///
/// Pixel `(x, y)` covers the canvas point `(x, y)` to `(x + 1, y + 1)`; its
/// center is at `(x + 0.5, y + 0.5)`.
#[derive(Clone)]
pub struct Bitmap {
    image: RgbImage,
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl Bitmap {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, to_rgb(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Color under a canvas position, `None` outside the image
    pub fn pixel(&self, x: i64, y: i64) -> Option<Color32> {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return None;
        }
        Some(from_rgb(*self.image.get_pixel(x as u32, y as u32)))
    }

    /// Canvas-space rectangle covered by the image
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(self.width() as f32, self.height() as f32))
    }

    /// Pixel range `x0..=x1, y0..=y1` overlapping `area`, limited to the image
    fn pixel_span(&self, area: Rect) -> (i64, i64, i64, i64) {
        (
            (area.min.x.floor() as i64).max(0),
            (area.min.y.floor() as i64).max(0),
            (area.max.x.ceil() as i64).min(self.width() as i64 - 1),
            (area.max.y.ceil() as i64).min(self.height() as i64 - 1),
        )
    }

    /// Fill every pixel whose center is within half the width of the segment
    /// and inside `clip`
    pub fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32, clip: Rect) {
        let radius = (width / 2.0).max(0.5);
        let bounds = calculate_bounds(&[from, to], radius).intersect(clip);
        let (x0, y0, x1, y1) = self.pixel_span(bounds);

        let rgb = to_rgb(color);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if clip.contains(center) && distance_to_line_segment(center, from, to) <= radius {
                    self.image.put_pixel(x as u32, y as u32, rgb);
                }
            }
        }
    }

    /// Composite a text mask at `anchor` using its coverage as alpha.
    /// Pixels whose center falls outside `clip` are left alone.
    pub fn blend_mask(&mut self, mask: &GlyphMask, anchor: Pos2, color: Color32, clip: Rect) {
        let left = anchor.x.round() as i64 + mask.offset[0] as i64;
        let top = anchor.y.round() as i64 + mask.offset[1] as i64;
        let src = [color.r(), color.g(), color.b()];

        for my in 0..mask.height {
            for mx in 0..mask.width {
                let alpha = mask.coverage_at(mx, my);
                if alpha <= 0.0 {
                    continue;
                }
                let x = left + mx as i64;
                let y = top + my as i64;
                if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
                    continue;
                }
                if !clip.contains(Pos2::new(x as f32 + 0.5, y as f32 + 0.5)) {
                    continue;
                }
                let dst = self.image.get_pixel_mut(x as u32, y as u32);
                for c in 0..3 {
                    let mixed = src[c] as f32 * alpha + dst[c] as f32 * (1.0 - alpha);
                    dst[c] = mixed.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }

    /// Reset every pixel to `color`
    pub fn fill(&mut self, color: Color32) {
        let rgb = to_rgb(color);
        for pixel in self.image.pixels_mut() {
            *pixel = rgb;
        }
    }

    /// Encode as PNG
    pub fn save_png(&self, path: &Path) -> PaintResult<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        log::info!(
            "Saved {}x{} image to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}
