//! Viewport camera navigation.
//!
//! Orbit-style controls around a focus point: left-drag rotates, the wheel
//! dollies, right-drag pans. Teleport commands write the camera transform
//! directly; the controller re-derives its orbit state from the transform
//! when the next interaction starts, so the two compose.

/// Orbit camera resource and mouse controller system.
pub mod viewport_camera;
