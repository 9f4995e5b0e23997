//! Interactive 3D scene viewer with a command-driven camera teleport.
//!
//! Renders a spinning cube over a ground plane with axis helpers and a
//! directional light, navigated by an orbit camera and a text command bar.

pub mod console;
pub mod engine;
pub mod rpc;
