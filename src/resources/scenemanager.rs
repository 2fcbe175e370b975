//! Scene registry.
//!
//! Holds every [`Scene`] of the game and tracks which one is active. A scene
//! switch requested with [`SceneManager::change_scene`] is applied lazily by
//! the next [`SceneManager::handle`] call, which re-runs the awake and start
//! hooks of the newly active scene before updating it.
//!
//! The manager lives in the world as a resource. The frame loop takes it out
//! with `World::resource_scope` so scenes can read other resources while they
//! run.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::scene::Scene;
use crate::systems::render::Canvas;

#[derive(Resource, Debug, Default)]
pub struct SceneManager {
    scenes: Vec<Scene>,
    current_scene: usize,
    previous_scene: usize,
    is_changing_scene: bool,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append scenes to the registry. The first scene ever added is active.
    pub fn add_scenes(&mut self, scenes: impl IntoIterator<Item = Scene>) {
        for scene in scenes {
            debug!("Registered scene '{}' at {}", scene.name(), self.scenes.len());
            self.scenes.push(scene);
        }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_scene
    }

    pub fn previous_index(&self) -> usize {
        self.previous_scene
    }

    pub fn is_changing_scene(&self) -> bool {
        self.is_changing_scene
    }

    pub fn current(&self) -> Option<&Scene> {
        self.scenes.get(self.current_scene)
    }

    fn current_mut(&mut self) -> Result<&mut Scene, String> {
        let index = self.current_scene;
        let count = self.scenes.len();
        self.scenes
            .get_mut(index)
            .ok_or_else(|| format!("No scene at index {} ({} registered)", index, count))
    }

    pub fn awake(&mut self, world: &World) -> Result<(), String> {
        self.current_mut()?.awake(world);
        Ok(())
    }

    pub fn start(&mut self, world: &World) -> Result<(), String> {
        self.current_mut()?.start(world);
        Ok(())
    }

    pub fn update(&mut self, world: &World, canvas: &mut dyn Canvas) -> Result<(), String> {
        self.current_mut()?.update(world, canvas);
        Ok(())
    }

    /// Run one frame of the active scene, first applying a pending switch.
    pub fn handle(&mut self, world: &World, canvas: &mut dyn Canvas) -> Result<(), String> {
        if self.is_changing_scene {
            self.awake(world)?;
            self.start(world)?;
            self.is_changing_scene = false;
            if let Some(scene) = self.current() {
                info!("Switched to scene '{}'", scene.name());
            }
        }
        self.update(world, canvas)
    }

    /// Request a switch to the scene at `index`.
    ///
    /// Out-of-range indices are rejected and leave the manager untouched.
    pub fn change_scene(&mut self, index: usize) -> Result<(), String> {
        if index >= self.scenes.len() {
            return Err(format!(
                "Cannot change to scene {}: only {} scenes registered",
                index,
                self.scenes.len()
            ));
        }
        self.previous_scene = self.current_scene;
        self.current_scene = index;
        self.is_changing_scene = true;
        debug!(
            "Scene change requested: {} -> {}",
            self.previous_scene, self.current_scene
        );
        Ok(())
    }
}
