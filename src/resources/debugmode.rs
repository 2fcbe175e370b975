//! Debug toggle resource.
//!
//! The mere presence of this resource in the world means the debug overlay
//! (the FPS counter) is drawn on top of each frame. It is inserted and removed
//! by [`switch_debug_observer`](crate::events::switchdebug::switch_debug_observer).

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the frame loop draws the debug overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
