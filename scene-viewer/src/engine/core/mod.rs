//! Core application setup.
//!
//! Handles plugin configuration, startup spawning and platform-specific
//! window setup for both native and WASM targets.

/// Application assembly: plugins, resources and system registration.
pub mod app_setup;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
