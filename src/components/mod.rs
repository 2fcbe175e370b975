//! Building blocks of scene objects.
//!
//! Submodules overview:
//! - [`cat`] – the bouncing cat object and its movement behaviour
//! - [`gameobject`] – an entity owning a transform, a sprite and a script
//! - [`script`] – lifecycle hooks and movement capability traits
//! - [`sprite`] – texture key and size of the image drawn for an object
//! - [`transform`] – on-screen position with a y-inverted translate

pub mod cat;
pub mod gameobject;
pub mod script;
pub mod sprite;
pub mod transform;
