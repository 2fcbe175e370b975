//! Screen size resource.
//!
//! Stores the dimensions of the display surface in pixels. Scripts read it on
//! awake to work out how far their sprite may travel.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            w: w as i32,
            h: h as i32,
        }
    }
}
