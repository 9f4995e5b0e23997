//! Static scene content.
//!
//! Spawns the demo geometry the viewer orbits around and keeps the cube
//! spinning each frame.

/// Axis helper line meshes along +X, +Y and +Z.
pub mod axes;

/// Cube, ground plane, lighting and the cube spin system.
pub mod world;
