//! Drawing.
//!
//! Scenes draw through the [`Canvas`] trait so the scene model does not
//! depend on a live window. [`RaylibCanvas`] is the implementation used by the
//! frame loop; it resolves sprite texture keys through a [`TextureStore`].

use bevy_ecs::prelude::World;
use raylib::prelude::*;

use crate::components::sprite::Sprite;
use crate::resources::debugmode::DebugMode;
use crate::resources::texturestore::TextureStore;

/// Font size of the FPS label.
pub const FPS_FONT_SIZE: i32 = 15;
/// Color of the FPS label.
pub const FPS_COLOR: Color = Color::YELLOW;

/// Minimal drawing surface used by scenes and overlays.
pub trait Canvas {
    /// Fill the whole frame with `color`.
    fn clear(&mut self, color: Color);

    /// Draw `sprite` with its top-left corner at `position`.
    fn draw_sprite(&mut self, sprite: &Sprite, position: Vector2);

    /// Draw a line of text with its top-left corner at (`x`, `y`).
    fn draw_label(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color);
}

/// Canvas backed by a raylib draw handle.
pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
    textures: &'a TextureStore,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    pub fn new(d: &'a mut D, textures: &'a TextureStore) -> Self {
        Self { d, textures }
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn clear(&mut self, color: Color) {
        self.d.clear_background(color);
    }

    fn draw_sprite(&mut self, sprite: &Sprite, position: Vector2) {
        if sprite.is_empty() {
            return;
        }
        if let Some(tex) = self.textures.get(&sprite.tex_key) {
            self.d.draw_texture_v(tex, position, Color::WHITE);
        }
    }

    fn draw_label(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.d.draw_text(text, x, y, font_size, color);
    }
}

/// Text shown by the debug overlay for a measured frame rate.
pub fn fps_label(fps: u32) -> String {
    format!("FPS : {}", fps)
}

/// Draw the frame rate in the top-left corner when [`DebugMode`] is present.
///
/// Returns whether anything was drawn.
pub fn draw_fps_overlay(world: &World, canvas: &mut dyn Canvas, fps: u32) -> bool {
    if !world.contains_resource::<DebugMode>() {
        return false;
    }
    canvas.draw_label(&fps_label(fps), 0, 0, FPS_FONT_SIZE, FPS_COLOR);
    true
}
