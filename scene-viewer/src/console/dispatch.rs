use bevy::prelude::*;

use crate::console::command::Command;
use crate::engine::camera::viewport_camera::SceneCamera;
use crate::rpc::web_rpc::WebRpcInterface;

/// Event carrying one submitted command line, from the command bar or the
/// web bridge.
#[derive(Event, Debug, Clone)]
pub struct CommandSubmitEvent {
    pub text: String,
}

/// Parse submitted command lines and apply recognized ones to the camera.
///
/// Unknown verbs and empty lines are ignored without feedback. Malformed
/// numeric arguments reject the command as a whole; the camera is left
/// untouched and the rejection is logged and forwarded to the web frontend.
pub fn dispatch_commands(
    mut submissions: EventReader<CommandSubmitEvent>,
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for submission in submissions.read() {
        let Ok(mut transform) = camera_query.single_mut() else {
            return;
        };

        match Command::parse(&submission.text) {
            Ok(Some(Command::Teleport(update))) => {
                update.apply_to(&mut transform);
                info!("teleport applied: {:?}", update);
            }
            Ok(None) => {
                if !submission.text.is_empty() {
                    debug!("ignoring unrecognized command: '{}'", submission.text);
                }
            }
            Err(error) => {
                warn!("command rejected: {error}");
                rpc_interface.send_notification(
                    "command_error",
                    serde_json::json!({
                        "command": submission.text,
                        "error": error.to_string(),
                    }),
                );
            }
        }
    }
}
