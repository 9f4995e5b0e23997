use bevy::prelude::{Transform, Vec3};
use scene_viewer::engine::camera::viewport_camera::OrbitCamera;

#[cfg(test)]
mod orbit_camera_tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_default_reproduces_start_position() {
        let orbit = OrbitCamera::default();
        let mut transform = Transform::IDENTITY;

        orbit.apply_to_transform(&mut transform);

        assert!(
            transform.translation.abs_diff_eq(Vec3::new(0.0, 0.0, 48.0), EPSILON),
            "unexpected start translation: {:?}",
            transform.translation
        );
    }

    #[test]
    fn test_sync_then_apply_round_trips_position() {
        let mut orbit = OrbitCamera::default();
        let mut transform = Transform::from_xyz(10.0, 5.0, -20.0);

        orbit.sync_from_transform(&transform);
        orbit.apply_to_transform(&mut transform);

        assert!(
            transform.translation.abs_diff_eq(Vec3::new(10.0, 5.0, -20.0), EPSILON),
            "round trip drifted: {:?}",
            transform.translation
        );
    }

    #[test]
    fn test_sync_after_teleport_keeps_orbiting_around_focus() {
        let mut orbit = OrbitCamera::default();
        // Teleported pose, written to the transform externally.
        let mut transform = Transform::from_xyz(0.0, 30.0, 30.0);

        orbit.sync_from_transform(&transform);

        assert!((orbit.distance - (1800.0f32).sqrt()).abs() < EPSILON);
        orbit.apply_to_transform(&mut transform);
        assert!(transform.translation.abs_diff_eq(Vec3::new(0.0, 30.0, 30.0), EPSILON));
    }

    #[test]
    fn test_applied_rotation_faces_the_focus_point() {
        let mut orbit = OrbitCamera::default();
        let mut transform = Transform::from_xyz(10.0, 5.0, -20.0);

        orbit.sync_from_transform(&transform);
        orbit.apply_to_transform(&mut transform);

        let forward = transform.rotation * Vec3::NEG_Z;
        let to_focus = (orbit.focus_point - transform.translation).normalize();
        assert!(
            forward.abs_diff_eq(to_focus, EPSILON),
            "camera does not face focus: forward={forward:?}, to_focus={to_focus:?}"
        );
    }

    #[test]
    fn test_pitch_is_clamped_at_the_poles() {
        let mut orbit = OrbitCamera::default();
        let transform = Transform::from_xyz(0.0, 100.0, 0.0);

        orbit.sync_from_transform(&transform);

        assert!(orbit.pitch.abs() <= 1.55 + f32::EPSILON);
    }
}
