//! Resources stored in the world context.
//!
//! This module groups the long-lived data shared by the frame loop and the
//! scene scripts. Each submodule documents the semantics and intended usage
//! of its resource(s).
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window settings and asset paths loaded from `config.ini`
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `scenemanager` – registry of scenes and the active scene index
//! - `screensize` – display surface dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs (owned by the game)
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod scenemanager;
pub mod screensize;
pub mod texturestore;
