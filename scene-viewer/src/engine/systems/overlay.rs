use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::math::EulerRot;
use bevy::prelude::*;

use crate::engine::camera::viewport_camera::SceneCamera;
use crate::rpc::web_rpc::WebRpcInterface;

/// Camera pose readout in the top-left corner.
#[derive(Component)]
pub struct PoseText;

/// Frame rate readout in the bottom-right corner.
#[derive(Component)]
pub struct FpsText;

/// Seconds between pose notifications to the frontend.
const POSE_NOTIFY_INTERVAL: f32 = 0.25;

/// Seconds between FPS notifications to the frontend.
const FPS_NOTIFY_INTERVAL: f32 = 0.5;

/// Spawn the overlay text nodes.
pub fn spawn_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("POSITION:\nROTATION:"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                PoseText,
            ));

            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

/// Six pose scalars read from the camera transform, rotation as XYZ Euler.
fn read_pose(transform: &Transform) -> (Vec3, (f32, f32, f32)) {
    (transform.translation, transform.rotation.to_euler(EulerRot::XYZ))
}

/// Refresh the pose readout text every frame.
pub fn pose_text_update_system(
    camera_query: Query<&Transform, With<SceneCamera>>,
    mut query: Query<&mut Text, With<PoseText>>,
) {
    let Ok(transform) = camera_query.single() else {
        return;
    };
    let (position, (rx, ry, rz)) = read_pose(transform);

    for mut text in &mut query {
        text.0 = format!(
            "POSITION: x={:.2}, y={:.2}, z={:.2}\nROTATION: x={:.2}, y={:.2}, z={:.2}",
            position.x, position.y, position.z, rx, ry, rz
        );
    }
}

/// Refresh the FPS readout text from the frame-time diagnostics.
pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

/// Send the camera pose to the frontend at a throttled rate.
pub fn pose_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    camera_query: Query<&Transform, With<SceneCamera>>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();
    if current_time - *last_send_time < POSE_NOTIFY_INTERVAL {
        return;
    }

    let Ok(transform) = camera_query.single() else {
        return;
    };
    let (position, (rx, ry, rz)) = read_pose(transform);

    rpc_interface.send_notification(
        "pose_update",
        serde_json::json!({
            "position": { "x": position.x, "y": position.y, "z": position.z },
            "rotation": { "x": rx, "y": ry, "z": rz },
        }),
    );
    *last_send_time = current_time;
}

/// Send the smoothed FPS to the frontend at a throttled rate.
pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();
    if current_time - *last_send_time < FPS_NOTIFY_INTERVAL {
        return;
    }

    if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
        if let Some(value) = fps.smoothed() {
            rpc_interface.send_notification(
                "fps_update",
                serde_json::json!({
                    "fps": value as f32
                }),
            );
            *last_send_time = current_time;
        }
    }
}
