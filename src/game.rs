//! Game setup and the frame loop.
//!
//! [`Game`] owns the raylib window, the texture store and the world context.
//! [`Game::start_play`] builds the scenes, runs the awake and start hooks of
//! the active scene, then loops until the window is closed:
//!
//! 1. Poll input (the debug key toggles [`DebugMode`](crate::resources::debugmode::DebugMode))
//! 2. Let the [`SceneManager`] apply any pending switch and update the active scene
//! 3. Draw the FPS overlay when debug mode is on
//! 4. Present the frame; raylib then waits for the next tick of the target rate

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::cat::{CAT_TEXTURE_KEY, cat};
use crate::components::sprite::Sprite;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::scenemanager::SceneManager;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::scene::Scene;
use crate::systems::input::update_input_state;
use crate::systems::render::{RaylibCanvas, draw_fps_overlay};

pub const CAT_SCENE_NAME: &str = "Cat Bounce";

/// Create the world context with every resource the scenes expect and the
/// debug toggle observer registered.
pub fn build_world(config: GameConfig, screen: ScreenSize) -> World {
    let mut world = World::new();
    world.insert_resource(screen);
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(SceneManager::new());
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
    world
}

/// The single scene of the game: one cat on a black background.
pub fn cat_scene(cat_sprite: Sprite) -> Scene {
    let mut scene = Scene::new(CAT_SCENE_NAME);
    scene.add_game_objects([cat(cat_sprite)]);
    scene
}

/// Run the awake hooks of the active scene.
pub fn awake_scenes(world: &mut World) -> Result<(), String> {
    world.resource_scope(|world, mut scenes: Mut<SceneManager>| scenes.awake(world))
}

/// Run the start hooks of the active scene.
pub fn start_scenes(world: &mut World) -> Result<(), String> {
    world.resource_scope(|world, mut scenes: Mut<SceneManager>| scenes.start(world))
}

pub struct Game {
    rl: RaylibHandle,
    thread: RaylibThread,
    world: World,
    textures: TextureStore,
}

impl Game {
    /// Open the window described by `config`.
    pub fn new(config: GameConfig) -> Self {
        let (width, height) = config.window_size();
        let (mut rl, thread) = raylib::init()
            .size(width as i32, height as i32)
            .title(&config.title)
            .build();
        rl.set_target_fps(config.target_fps);
        // Only closing the window ends the game.
        rl.set_exit_key(None);

        let screen = ScreenSize {
            w: rl.get_screen_width(),
            h: rl.get_screen_height(),
        };
        info!("Window opened at {}x{}", screen.w, screen.h);

        Self {
            rl,
            thread,
            world: build_world(config, screen),
            textures: TextureStore::new(),
        }
    }

    /// Build the scenes, initialise the active one and run until the window
    /// is closed.
    pub fn start_play(&mut self) -> Result<(), String> {
        self.init_scenes()?;
        awake_scenes(&mut self.world)?;
        start_scenes(&mut self.world)?;
        self.run()
    }

    fn init_scenes(&mut self) -> Result<(), String> {
        let path = self.world.resource::<GameConfig>().cat_image.clone();
        let texture = self
            .textures
            .load(&mut self.rl, &self.thread, CAT_TEXTURE_KEY, &path)?;
        let sprite = Sprite::from_texture(CAT_TEXTURE_KEY, texture);

        self.world
            .resource_mut::<SceneManager>()
            .add_scenes([cat_scene(sprite)]);
        Ok(())
    }

    fn run(&mut self) -> Result<(), String> {
        while !self.rl.window_should_close() {
            update_input_state(&mut self.world, &self.rl);

            let fps = self.rl.get_fps() as u32;
            let mut d = self.rl.begin_drawing(&self.thread);
            let mut canvas = RaylibCanvas::new(&mut d, &self.textures);
            self.world
                .resource_scope(|world, mut scenes: Mut<SceneManager>| {
                    scenes.handle(world, &mut canvas)
                })?;
            draw_fps_overlay(&self.world, &mut canvas, fps);
        }
        info!("Window closed");
        Ok(())
    }
}
