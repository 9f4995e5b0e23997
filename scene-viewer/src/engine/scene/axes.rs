use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;

use constants::scene_settings::AXIS_HELPER_LENGTH;

#[derive(Component)]
pub struct AxisHelper;

/// Spawn the three axis helper lines from the origin: +X red, +Y green,
/// +Z blue.
pub fn spawn_axis_helpers(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let axes = [
        (Vec3::X, Color::srgb(1.0, 0.0, 0.0)),
        (Vec3::Y, Color::srgb(0.0, 1.0, 0.0)),
        (Vec3::Z, Color::srgb(0.0, 0.0, 1.0)),
    ];

    for (direction, color) in axes {
        let line_mesh = create_axis_line_mesh(direction * AXIS_HELPER_LENGTH);
        let line_material = materials.add(StandardMaterial {
            base_color: color,
            unlit: true,
            ..default()
        });

        commands.spawn((
            Mesh3d(meshes.add(line_mesh)),
            MeshMaterial3d(line_material),
            Visibility::Visible,
            NoFrustumCulling,
            Transform::IDENTITY,
            AxisHelper,
        ));
    }
}

/// Build a single line-list mesh from the origin to `end`.
fn create_axis_line_mesh(end: Vec3) -> Mesh {
    let vertices = vec![[0.0, 0.0, 0.0], [end.x, end.y, end.z]];
    let indices = vec![0u32, 1u32];

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(bevy::render::mesh::Indices::U32(indices));

    mesh
}
