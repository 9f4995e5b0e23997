use bevy::prelude::*;

use constants::scene_settings::{CUBE_SIZE, CUBE_SPIN_RATE, GROUND_SIZE, LIGHT_POSITION};

/// Marker for the continuously rotating demo cube.
#[derive(Component)]
pub struct SpinningCube;

/// Spawn the lit cube at the origin.
pub fn spawn_cube(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0, 255, 0),
            ..default()
        })),
        Transform::IDENTITY,
        SpinningCube,
    ));
}

/// Spawn the unlit ground plane in the XZ plane.
pub fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(153, 255, 102),
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
    ));
}

/// Spawn the white directional light aimed at the origin.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(LIGHT_POSITION)).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Spin the cube about all three axes at a fixed rate.
pub fn rotate_cube(mut cubes: Query<&mut Transform, With<SpinningCube>>, time: Res<Time>) {
    let angle = CUBE_SPIN_RATE * time.delta_secs();
    for mut transform in &mut cubes {
        transform.rotate_x(angle);
        transform.rotate_y(angle);
        transform.rotate_z(angle);
    }
}
