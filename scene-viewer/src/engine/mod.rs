//! Engine glue: application setup, camera navigation, scene content and
//! per-frame overlay systems over the Bevy renderer.

/// Orbit camera resource and controller system for scene navigation.
pub mod camera;

/// Application setup and platform-specific window configuration.
pub mod core;

/// Static scene content: cube, ground plane, axis helpers, lighting.
pub mod scene;

/// Per-frame overlay and notification systems.
pub mod systems;
