//! Shared tuning values for the scene viewer.
//!
//! Keeps scene dimensions and camera behaviour in one place so the app crate
//! and its tests agree on them.

pub mod camera_settings;
pub mod scene_settings;
