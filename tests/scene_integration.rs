//! Scene and scene manager integration tests.
//!
//! Everything here runs headless: drawing goes to in-memory canvases instead
//! of a raylib window.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use catbounce::components::cat::CAT_TEXTURE_KEY;
use catbounce::components::gameobject::GameObject;
use catbounce::components::script::Scriptable;
use catbounce::components::sprite::Sprite;
use catbounce::components::transform::Transform;
use catbounce::game::{CAT_SCENE_NAME, awake_scenes, build_world, cat_scene, start_scenes};
use catbounce::resources::gameconfig::GameConfig;
use catbounce::resources::scenemanager::SceneManager;
use catbounce::resources::screensize::ScreenSize;
use catbounce::scene::Scene;
use catbounce::systems::render::Canvas;

// =============================================================================
// Test canvases
// =============================================================================

/// Discards everything.
struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self, _color: Color) {}
    fn draw_sprite(&mut self, _sprite: &Sprite, _position: Vector2) {}
    fn draw_label(&mut self, _text: &str, _x: i32, _y: i32, _font_size: i32, _color: Color) {}
}

/// Tiny framebuffer storing, per pixel, the texture key drawn last.
struct PixelCanvas {
    w: usize,
    h: usize,
    pixels: Vec<String>,
}

impl PixelCanvas {
    fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            pixels: vec![String::new(); w * h],
        }
    }

    fn at(&self, x: usize, y: usize) -> &str {
        &self.pixels[y * self.w + x]
    }
}

impl Canvas for PixelCanvas {
    fn clear(&mut self, _color: Color) {
        self.pixels.iter_mut().for_each(|p| p.clear());
    }

    fn draw_sprite(&mut self, sprite: &Sprite, position: Vector2) {
        let x0 = position.x.max(0.0) as usize;
        let y0 = position.y.max(0.0) as usize;
        let x1 = ((position.x + sprite.width) as usize).min(self.w);
        let y1 = ((position.y + sprite.height) as usize).min(self.h);
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels[y * self.w + x] = sprite.tex_key.clone();
            }
        }
    }

    fn draw_label(&mut self, _text: &str, _x: i32, _y: i32, _font_size: i32, _color: Color) {}
}

// =============================================================================
// Helpers
// =============================================================================

#[derive(Default, Clone)]
struct Counts {
    awake: Arc<AtomicUsize>,
    start: Arc<AtomicUsize>,
    update: Arc<AtomicUsize>,
}

impl Counts {
    fn get(&self) -> (usize, usize, usize) {
        (
            self.awake.load(Ordering::SeqCst),
            self.start.load(Ordering::SeqCst),
            self.update.load(Ordering::SeqCst),
        )
    }
}

struct Counting(Counts);

impl Scriptable for Counting {
    fn on_awake(&mut self, _t: &mut Transform, _s: &Sprite, _w: &World) {
        self.0.awake.fetch_add(1, Ordering::SeqCst);
    }
    fn on_start(&mut self, _t: &mut Transform, _s: &Sprite, _w: &World) {
        self.0.start.fetch_add(1, Ordering::SeqCst);
    }
    fn on_update(&mut self, _t: &mut Transform, _s: &Sprite, _w: &World) {
        self.0.update.fetch_add(1, Ordering::SeqCst);
    }
}

fn counted_scene(name: &str, counts: &Counts) -> Scene {
    let mut scene = Scene::new(name);
    scene.add_game_objects([GameObject::new(name).with_script(Counting(counts.clone()))]);
    scene
}

fn handle(world: &mut World, canvas: &mut dyn Canvas) {
    world
        .resource_scope(|world, mut scenes: Mut<SceneManager>| scenes.handle(world, canvas))
        .unwrap();
}

fn cat_world(sprite_w: f32, sprite_h: f32) -> World {
    let mut world = build_world(GameConfig::new(), ScreenSize::new(400, 400));
    world
        .resource_mut::<SceneManager>()
        .add_scenes([cat_scene(Sprite::new(CAT_TEXTURE_KEY, sprite_w, sprite_h))]);
    awake_scenes(&mut world).unwrap();
    start_scenes(&mut world).unwrap();
    world
}

fn cat_position(world: &World) -> Vector2 {
    let manager = world.resource::<SceneManager>();
    let scene = manager.current().unwrap();
    assert_eq!(scene.name(), CAT_SCENE_NAME);
    scene.objects()[0].transform.position
}

// =============================================================================
// Draw order
// =============================================================================

#[test]
fn later_objects_occlude_earlier_ones() {
    let mut world = World::new();
    let mut scene = Scene::new("stacked");
    scene.add_game_objects([
        GameObject::new("bottom")
            .with_sprite(Sprite::new("bottom", 6.0, 6.0))
            .with_transform(Transform::at(0.0, 0.0)),
        GameObject::new("top")
            .with_sprite(Sprite::new("top", 6.0, 6.0))
            .with_transform(Transform::at(3.0, 3.0)),
    ]);
    world.insert_resource(SceneManager::new());
    world.resource_mut::<SceneManager>().add_scenes([scene]);

    let mut canvas = PixelCanvas::new(10, 10);
    handle(&mut world, &mut canvas);

    assert_eq!(canvas.at(1, 1), "bottom");
    assert_eq!(canvas.at(4, 4), "top");
    assert_eq!(canvas.at(8, 8), "top");
    assert_eq!(canvas.at(8, 1), "");
}

#[test]
fn update_clears_previous_frame() {
    let mut world = cat_world(40.0, 40.0);
    let mut canvas = PixelCanvas::new(400, 400);

    handle(&mut world, &mut canvas);
    // Drawn at x=180 before moving to 181.
    assert_eq!(canvas.at(180, 180), CAT_TEXTURE_KEY);

    handle(&mut world, &mut canvas);
    // Drawn at x=181, so column 180 is background again.
    assert_eq!(canvas.at(180, 180), "");
    assert_eq!(canvas.at(181, 180), CAT_TEXTURE_KEY);
}

// =============================================================================
// Scene manager lifecycle
// =============================================================================

#[test]
fn change_scene_reinitialises_once() {
    let first = Counts::default();
    let second = Counts::default();
    let mut world = World::new();
    world.insert_resource(SceneManager::new());
    world
        .resource_mut::<SceneManager>()
        .add_scenes([counted_scene("first", &first), counted_scene("second", &second)]);

    awake_scenes(&mut world).unwrap();
    start_scenes(&mut world).unwrap();
    handle(&mut world, &mut NullCanvas);
    assert_eq!(first.get(), (1, 1, 1));
    assert_eq!(second.get(), (0, 0, 0));

    world.resource_mut::<SceneManager>().change_scene(1).unwrap();
    handle(&mut world, &mut NullCanvas);
    assert_eq!(second.get(), (1, 1, 1));

    handle(&mut world, &mut NullCanvas);
    handle(&mut world, &mut NullCanvas);
    assert_eq!(second.get(), (1, 1, 3));
    assert_eq!(first.get(), (1, 1, 1));
    assert!(!world.resource::<SceneManager>().is_changing_scene());

    world.resource_mut::<SceneManager>().change_scene(0).unwrap();
    handle(&mut world, &mut NullCanvas);
    assert_eq!(first.get(), (2, 2, 2));
    assert_eq!(world.resource::<SceneManager>().previous_index(), 1);
}

#[test]
fn invalid_change_scene_keeps_running_current_scene() {
    let counts = Counts::default();
    let mut world = World::new();
    world.insert_resource(SceneManager::new());
    world
        .resource_mut::<SceneManager>()
        .add_scenes([counted_scene("only", &counts)]);

    assert!(world.resource_mut::<SceneManager>().change_scene(1).is_err());
    handle(&mut world, &mut NullCanvas);
    assert_eq!(counts.get(), (0, 0, 1));
}

#[test]
fn handle_without_scenes_is_an_error() {
    let mut world = World::new();
    world.insert_resource(SceneManager::new());
    let result = world.resource_scope(|world, mut scenes: Mut<SceneManager>| {
        scenes.handle(world, &mut NullCanvas)
    });
    assert!(result.is_err());
}

// =============================================================================
// Cat bounce, end to end
// =============================================================================

#[test]
fn cat_starts_centered() {
    let world = cat_world(40.0, 30.0);
    assert_eq!(cat_position(&world), Vector2::new(180.0, 185.0));
}

#[test]
fn cat_reaches_right_edge_after_180_frames_then_turns() {
    let mut world = cat_world(40.0, 40.0);
    let mut x = cat_position(&world).x;
    for _ in 0..180 {
        handle(&mut world, &mut NullCanvas);
        let next = cat_position(&world).x;
        assert!(next >= x, "moving right must not decrease x");
        x = next;
    }
    assert_eq!(cat_position(&world), Vector2::new(360.0, 180.0));

    handle(&mut world, &mut NullCanvas);
    assert_eq!(cat_position(&world).x, 359.0);
}

#[test]
fn cat_walks_back_to_left_edge_then_turns() {
    let mut world = cat_world(40.0, 40.0);
    for _ in 0..180 {
        handle(&mut world, &mut NullCanvas);
    }
    assert_eq!(cat_position(&world).x, 360.0);

    let mut x = cat_position(&world).x;
    for _ in 0..360 {
        handle(&mut world, &mut NullCanvas);
        let next = cat_position(&world).x;
        assert!(next <= x, "moving left must not increase x");
        x = next;
    }
    assert_eq!(cat_position(&world), Vector2::new(0.0, 180.0));

    handle(&mut world, &mut NullCanvas);
    assert_eq!(cat_position(&world).x, 1.0);
}

#[test]
fn cat_stays_inside_window_for_full_round_trips() {
    let mut world = cat_world(40.0, 40.0);
    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    // Two full widths plus the initial half.
    for _ in 0..(180 + 360 * 2) {
        handle(&mut world, &mut NullCanvas);
        let pos = cat_position(&world);
        assert!((0.0..=360.0).contains(&pos.x));
        assert_eq!(pos.y, 180.0);
        min_x = min_x.min(pos.x);
        max_x = max_x.max(pos.x);
    }
    assert_eq!(min_x, 0.0);
    assert_eq!(max_x, 360.0);
    // 180 frames to the right edge, 360 to the left, 360 back to the right.
    assert_eq!(cat_position(&world).x, 360.0);
}
