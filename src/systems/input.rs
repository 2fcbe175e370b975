//! Input systems.
//!
//! [`update_input_state`] reads the keyboard from raylib each frame, writes
//! the results into [`InputState`] and emits a
//! [`SwitchDebugEvent`] when the debug key is pressed.
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll raylib for the bound keys and update the `InputState` resource.
pub fn update_input_state(world: &mut World, rl: &RaylibHandle) {
    let key = world.resource::<InputState>().mode_debug.key_binding;
    apply_debug_key(
        world,
        rl.is_key_down(key),
        rl.is_key_pressed(key),
        rl.is_key_released(key),
    );
}

/// Store the debug key state and trigger the toggle on a fresh press.
pub fn apply_debug_key(world: &mut World, down: bool, pressed: bool, released: bool) {
    world
        .resource_mut::<InputState>()
        .mode_debug
        .set(down, pressed, released);
    if pressed {
        world.trigger(SwitchDebugEvent {});
        // Apply the observer's commands before the frame is drawn.
        world.flush();
    }
}
