//! Per-object behaviour hooks.
//!
//! A [`GameObject`](crate::components::gameobject::GameObject) carries at most
//! one [`Scriptable`] implementation. The owning
//! [`Scene`](crate::scene::Scene) drives the hooks:
//!
//! - `on_awake` once when the scene becomes active, before any `on_start`
//! - `on_start` once after every object in the scene has been awoken
//! - `on_update` every frame, right after the object has been drawn
//!
//! Hooks get mutable access to the object's [`Transform`], read access to its
//! [`Sprite`] and read access to the shared [`World`] for resources such as
//! [`ScreenSize`](crate::resources::screensize::ScreenSize). Every hook has an
//! empty default body, so implementors only override what they need.

use bevy_ecs::prelude::World;

use crate::components::sprite::Sprite;
use crate::components::transform::Transform;

pub trait Scriptable: Send + Sync {
    fn on_awake(&mut self, _transform: &mut Transform, _sprite: &Sprite, _world: &World) {}

    fn on_start(&mut self, _transform: &mut Transform, _sprite: &Sprite, _world: &World) {}

    fn on_update(&mut self, _transform: &mut Transform, _sprite: &Sprite, _world: &World) {}
}

/// Something that advances a transform by one movement step per call.
pub trait Movable {
    fn move_step(&mut self, transform: &mut Transform);
}

/// Heading of a moving object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}
