//! The bouncing cat.
//!
//! The cat walks one pixel per frame along the x axis and turns around when
//! it touches either side of the window. Its reachable range is computed on
//! awake from the window size and the sprite size, and it starts centered in
//! that range heading right.

use bevy_ecs::prelude::World;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::gameobject::GameObject;
use crate::components::script::{Direction, Movable, Scriptable};
use crate::components::sprite::Sprite;
use crate::components::transform::Transform;
use crate::resources::screensize::ScreenSize;

/// Texture key used for the cat image in the texture store.
pub const CAT_TEXTURE_KEY: &str = "cat";
/// Pixels moved per frame.
pub const CAT_STEP: f32 = 1.0;

/// Horizontal bounce behaviour of the cat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatMovement {
    pub direction: Direction,
    /// Largest position the sprite can take while staying fully on screen:
    /// `(window width - sprite width, window height - sprite height)`.
    pub max_move_offset: Vector2,
    pub step: f32,
}

impl Default for CatMovement {
    fn default() -> Self {
        Self::new()
    }
}

impl CatMovement {
    pub fn new() -> Self {
        Self {
            direction: Direction::None,
            max_move_offset: Vector2::zero(),
            step: CAT_STEP,
        }
    }
}

impl Movable for CatMovement {
    fn move_step(&mut self, transform: &mut Transform) {
        match self.direction {
            Direction::Right => {
                transform.translate(Vector2::new(self.step, 0.0));
                if transform.position.x >= self.max_move_offset.x {
                    transform.position = Vector2::new(self.max_move_offset.x, transform.position.y);
                    self.direction = Direction::Left;
                    debug!("cat turns left at x={}", transform.position.x);
                }
            }
            Direction::Left => {
                transform.translate(Vector2::new(-self.step, 0.0));
                if transform.position.x <= 0.0 {
                    transform.position = Vector2::new(0.0, transform.position.y);
                    self.direction = Direction::Right;
                    debug!("cat turns right at x={}", transform.position.x);
                }
            }
            // Vertical headings are never entered by the cat.
            Direction::None | Direction::Up | Direction::Down => {}
        }
    }
}

impl Scriptable for CatMovement {
    fn on_awake(&mut self, _transform: &mut Transform, sprite: &Sprite, world: &World) {
        let Some(screen) = world.get_resource::<ScreenSize>() else {
            warn!("ScreenSize resource missing, cat will not move");
            return;
        };
        self.max_move_offset = Vector2::new(
            screen.w as f32 - sprite.width,
            screen.h as f32 - sprite.height,
        );
        if self.max_move_offset.x < 0.0 || self.max_move_offset.y < 0.0 {
            warn!(
                "Cat sprite {}x{} is larger than the {}x{} window",
                sprite.width, sprite.height, screen.w, screen.h
            );
        }
    }

    fn on_start(&mut self, transform: &mut Transform, _sprite: &Sprite, _world: &World) {
        transform.position = Vector2::new(self.max_move_offset.x / 2.0, self.max_move_offset.y / 2.0);
        self.direction = Direction::Right;
    }

    fn on_update(&mut self, transform: &mut Transform, _sprite: &Sprite, _world: &World) {
        self.move_step(transform);
    }
}

/// Build the cat game object around an already loaded sprite.
pub fn cat(sprite: Sprite) -> GameObject {
    GameObject::new("cat")
        .with_sprite(sprite)
        .with_script(CatMovement::new())
}
