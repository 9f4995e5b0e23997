use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

// Crate engine modules
use crate::engine::camera::viewport_camera::{OrbitCamera, SceneCamera, camera_controller};
use crate::engine::core::window_config::create_window_config;
use crate::engine::scene::axes::spawn_axis_helpers;
use crate::engine::scene::world::{rotate_cube, spawn_cube, spawn_ground, spawn_lighting};
use crate::engine::systems::overlay::{
    fps_notification_system, fps_text_update_system, pose_notification_system,
    pose_text_update_system, spawn_overlays,
};
// Crate console and web RPC modules
use crate::console::command_bar::CommandBarPlugin;
use crate::rpc::web_rpc::WebRpcPlugin;

use constants::camera_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_POSITION};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin)
        .add_plugins(CommandBarPlugin);

    app.init_resource::<OrbitCamera>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                camera_controller,
                rotate_cube,
                pose_text_update_system,
                fps_text_update_system,
                pose_notification_system,
                fps_notification_system,
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    DefaultPlugins.set(window_config)
}

/// Spawn the scene content, the camera and the overlay UI.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_cube(&mut commands, &mut meshes, &mut materials);
    spawn_ground(&mut commands, &mut meshes, &mut materials);
    spawn_axis_helpers(&mut commands, &mut meshes, &mut materials);
    spawn_lighting(&mut commands);
    spawn_scene_camera(&mut commands);
    spawn_overlays(&mut commands);
}

/// Perspective camera at the start position, looking at the origin.
fn spawn_scene_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(Vec3::from_array(CAMERA_START_POSITION))
            .looking_at(Vec3::ZERO, Vec3::Y),
        SceneCamera,
    ));
}
