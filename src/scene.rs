//! A named collection of game objects sharing a background and lifecycle.

use bevy_ecs::prelude::World;
use log::debug;
use raylib::prelude::Color;

use crate::components::gameobject::GameObject;
use crate::systems::render::Canvas;

pub struct Scene {
    name: String,
    background: Color,
    objects: Vec<GameObject>,
}

impl Scene {
    /// Empty scene with a black background.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Color::BLACK,
            objects: Vec::new(),
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Append objects. Insertion order is draw order.
    pub fn add_game_objects(&mut self, objects: impl IntoIterator<Item = GameObject>) {
        self.objects.extend(objects);
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn awake(&mut self, world: &World) {
        debug!("Scene '{}' awake", self.name);
        for obj in self.objects.iter_mut() {
            obj.awake(world);
        }
    }

    pub fn start(&mut self, world: &World) {
        debug!("Scene '{}' start", self.name);
        for obj in self.objects.iter_mut() {
            obj.start(world);
        }
    }

    /// Clear to the background, then draw each object at its current
    /// position and run its update hook, in insertion order.
    pub fn update(&mut self, world: &World, canvas: &mut dyn Canvas) {
        canvas.clear(self.background);
        for obj in self.objects.iter_mut() {
            canvas.draw_sprite(&obj.sprite, obj.transform.position);
            obj.update(world);
        }
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("background", &self.background)
            .field("objects", &self.objects.len())
            .finish()
    }
}
