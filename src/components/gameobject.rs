use bevy_ecs::prelude::World;
use log::debug;

use crate::components::script::Scriptable;
use crate::components::sprite::Sprite;
use crate::components::transform::Transform;

/// An entity in a scene: a position, something to draw there, and an
/// optional script driving its behaviour.
pub struct GameObject {
    pub name: String,
    pub transform: Transform,
    pub sprite: Sprite,
    script: Option<Box<dyn Scriptable>>,
}

impl GameObject {
    /// Object at the origin with an empty sprite and no script.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            sprite: Sprite::default(),
            script: None,
        }
    }

    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_script(mut self, script: impl Scriptable + 'static) -> Self {
        self.script = Some(Box::new(script));
        self
    }

    pub fn has_script(&self) -> bool {
        self.script.is_some()
    }

    pub fn awake(&mut self, world: &World) {
        debug!("on_awake: {}", self.name);
        if let Some(script) = self.script.as_mut() {
            script.on_awake(&mut self.transform, &self.sprite, world);
        }
    }

    pub fn start(&mut self, world: &World) {
        debug!("on_start: {}", self.name);
        if let Some(script) = self.script.as_mut() {
            script.on_start(&mut self.transform, &self.sprite, world);
        }
    }

    pub fn update(&mut self, world: &World) {
        if let Some(script) = self.script.as_mut() {
            script.on_update(&mut self.transform, &self.sprite, world);
        }
    }
}

impl std::fmt::Debug for GameObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameObject")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("sprite", &self.sprite)
            .field("has_script", &self.script.is_some())
            .finish()
    }
}
