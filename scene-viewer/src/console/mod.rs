//! Text command console for camera control.
//!
//! Parses whitespace-delimited commands from the in-viewport command bar or
//! the web bridge and applies them to the scene camera.

/// Command grammar: verb enumeration, pose update parsing, error types.
pub mod command;

/// Command bar UI: text field, GO button, focus and keyboard handling.
pub mod command_bar;

/// Submission event and the system applying parsed commands to the camera.
pub mod dispatch;
