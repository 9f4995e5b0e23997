//! Per-frame runtime systems.
//!
//! Keeps the pose readout and FPS overlays current and forwards the same
//! values to the web frontend at a throttled rate.

/// Pose and FPS overlay text plus frontend notification systems.
pub mod overlay;
