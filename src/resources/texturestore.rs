//! Texture store.
//!
//! Loaded textures keyed by string IDs. [`Sprite`](crate::components::sprite::Sprite)
//! refers to its image through one of these keys.
//!
//! Note: textures are GPU handles owned by the main thread, so the store is
//! kept by [`Game`](crate::game::Game) rather than inserted in the world.

use log::info;
use raylib::prelude::*;
use rustc_hash::FxHashMap;

pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Load an image file as a texture and store it under `key`.
    ///
    /// Returns the stored texture so callers can read its size.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        key: impl Into<String>,
        path: &str,
    ) -> Result<&Texture2D, String> {
        let texture = rl
            .load_texture(th, path)
            .map_err(|e| format!("Failed to load texture '{}': {}", path, e))?;
        info!(
            "Loaded texture '{}' ({}x{})",
            path, texture.width, texture.height
        );
        let key = key.into();
        self.map.insert(key.clone(), texture);
        self.map
            .get(&key)
            .ok_or_else(|| format!("Texture '{}' missing right after insert", key))
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }
}
