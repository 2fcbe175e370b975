//! Position of a game object on screen.
//!
//! The stored position is the top-left corner of the object's sprite in
//! window pixels. Positions are treated as values: every change produces a
//! fresh [`Vector2`] rather than mutating the previous one in place.

use raylib::prelude::Vector2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vector2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Transform placed at the origin.
    pub fn new() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vector2 { x, y },
        }
    }

    /// Move by `delta`.
    ///
    /// The y component of the delta is read as "up", so it is subtracted
    /// from the screen-space y: `new = (x + delta.x, y - delta.y)`.
    pub fn translate(&mut self, delta: Vector2) {
        self.position = Vector2 {
            x: self.position.x + delta.x,
            y: self.position.y - delta.y,
        };
    }
}
