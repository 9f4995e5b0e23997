use bevy::math::EulerRot;
use bevy::prelude::{Quat, Transform, Vec3};
use scene_viewer::console::command::{Command, PoseUpdate};

#[cfg(test)]
mod pose_update_tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn teleport(raw: &str) -> PoseUpdate {
        match Command::parse(raw) {
            Ok(Some(Command::Teleport(update))) => update,
            other => panic!("expected teleport for '{raw}', got {other:?}"),
        }
    }

    #[test]
    fn test_full_update_sets_position_and_rotation() {
        let mut transform = Transform::IDENTITY;

        teleport("tp 1 2 3 0.4 0.5 0.6").apply_to(&mut transform);

        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
        let (rx, ry, rz) = transform.rotation.to_euler(EulerRot::XYZ);
        assert!((rx - 0.4).abs() < EPSILON);
        assert!((ry - 0.5).abs() < EPSILON);
        assert!((rz - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_skipped_position_slots_keep_prior_values() {
        let mut transform = Transform::from_xyz(9.0, 8.0, 7.0);

        teleport("tp ~ 2 ~").apply_to(&mut transform);

        assert_eq!(transform.translation, Vec3::new(9.0, 2.0, 7.0));
    }

    #[test]
    fn test_position_only_update_keeps_rotation() {
        let rotation = Quat::from_euler(EulerRot::XYZ, 0.1, 0.2, 0.3);
        let mut transform = Transform::from_xyz(0.0, 0.0, 0.0).with_rotation(rotation);

        teleport("tp 1 2 3").apply_to(&mut transform);

        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.rotation, rotation, "rotation must be untouched");
    }

    #[test]
    fn test_partial_rotation_preserves_other_euler_components() {
        let rotation = Quat::from_euler(EulerRot::XYZ, 0.1, 0.2, 0.3);
        let mut transform = Transform::IDENTITY.with_rotation(rotation);

        teleport("tp ~ ~ ~ ~ 1.0 ~").apply_to(&mut transform);

        let (rx, ry, rz) = transform.rotation.to_euler(EulerRot::XYZ);
        assert!((rx - 0.1).abs() < EPSILON, "x component changed: {rx}");
        assert!((ry - 1.0).abs() < EPSILON, "y component not applied: {ry}");
        assert!((rz - 0.3).abs() < EPSILON, "z component changed: {rz}");
    }

    #[test]
    fn test_empty_update_is_noop() {
        let rotation = Quat::from_euler(EulerRot::XYZ, 0.1, 0.2, 0.3);
        let mut transform = Transform::from_xyz(4.0, 5.0, 6.0).with_rotation(rotation);
        let before = transform;

        let update = teleport("tp ~ ~ ~ ~ ~ ~");
        assert!(update.is_empty());
        update.apply_to(&mut transform);

        assert_eq!(transform, before);
    }
}
