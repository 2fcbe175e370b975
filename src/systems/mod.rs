//! Per-frame systems.
//!
//! Submodules overview
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – drawing surface abstraction and the debug FPS overlay

pub mod input;
pub mod render;
