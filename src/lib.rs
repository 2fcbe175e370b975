//! Cat Bounce library.
//!
//! A single scene with a cat sprite bouncing between the left and right edges
//! of the window. The modules are exposed for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod scene;
pub mod systems;
