use std::collections::{HashMap, HashSet};

use egui::{Color32, ColorImage, Context, TextureHandle, TextureId, TextureOptions};

/// A stamp id and the color it is shown in
pub type StampKey = (usize, Color32);

/// Caches the GPU textures of text stamps
#[derive(Default)]
pub struct TextureManager {
    texture_cache: HashMap<StampKey, TextureHandle>,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets or creates the texture for the given stamp
    pub fn get_or_create_texture<F>(&mut self, key: StampKey, generator: F, ctx: &Context) -> TextureId
    where
        F: FnOnce() -> ColorImage,
    {
        self.texture_cache
            .entry(key)
            .or_insert_with(|| {
                // Nearest keeps the on-screen pixels identical to the bitmap
                ctx.load_texture(format!("stamp_{}", key.0), generator(), TextureOptions::NEAREST)
            })
            .id()
    }

    /// Drops textures of stamps that are gone or now shown in another color
    pub fn retain_stamps(&mut self, live: &HashSet<StampKey>) {
        self.texture_cache.retain(|id, _| live.contains(id));
    }

    #[cfg(test)]
    pub fn contains(&self, key: StampKey) -> bool {
        self.texture_cache.contains_key(&key)
    }

    /// Returns the number of textures currently in the cache
    pub fn cache_size(&self) -> usize {
        self.texture_cache.len()
    }
}
