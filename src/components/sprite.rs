use raylib::prelude::Texture2D;

/// Sprite is identified by a texture key in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore) and the
/// size of that texture in pixels.
///
/// The default sprite has no texture and a 0x0 size; it draws nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }

    /// Build a sprite sized after a loaded texture.
    pub fn from_texture(tex_key: impl Into<String>, texture: &Texture2D) -> Self {
        Self::new(tex_key, texture.width as f32, texture.height as f32)
    }

    pub fn is_empty(&self) -> bool {
        self.tex_key.is_empty() || self.width <= 0.0 || self.height <= 0.0
    }
}
