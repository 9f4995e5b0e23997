use bevy::input::mouse::MouseScrollUnit;
use bevy::math::EulerRot;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use constants::camera_settings::{
    DOLLY_DISTANCE_MAX, DOLLY_DISTANCE_MIN, DOLLY_PIXEL_SCALE, DOLLY_RATE, ORBIT_PITCH_LIMIT,
    ORBIT_PITCH_SENSITIVITY, ORBIT_YAW_SENSITIVITY, PAN_RATE,
};

/// Marker for the single scene camera whose transform is the pose store.
#[derive(Component)]
pub struct SceneCamera;

/// Orbit navigation state around a focus point.
///
/// Yaw/pitch/distance describe the camera position relative to the focus;
/// they are re-derived from the camera transform whenever an interaction
/// starts, so external transform writes (teleports) are picked up instead of
/// being overwritten.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub is_orbiting: bool,
    pub is_panning: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let start = Vec3::from_array(constants::camera_settings::CAMERA_START_POSITION);
        let mut orbit = Self {
            focus_point: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: start.length(),
            is_orbiting: false,
            is_panning: false,
        };
        orbit.sync_from_transform(&Transform::from_translation(start));
        orbit
    }
}

impl OrbitCamera {
    /// Re-derive yaw, pitch and distance from the camera position relative
    /// to the focus point. Roll set by a teleport is dropped, as the orbit
    /// model has no roll axis.
    pub fn sync_from_transform(&mut self, transform: &Transform) {
        let offset = transform.translation - self.focus_point;
        self.distance = offset.length().clamp(DOLLY_DISTANCE_MIN, DOLLY_DISTANCE_MAX);
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (-offset.y / self.distance)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Rotation placing the camera's view axis toward the focus point.
    pub fn view_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Write the orbit state back into the camera transform.
    pub fn apply_to_transform(&self, transform: &mut Transform) {
        let rotation = self.view_rotation();
        transform.translation = self.focus_point + rotation * (Vec3::Z * self.distance);
        transform.rotation = rotation;
    }
}

/// Mouse-driven orbit controller.
///
/// Only mutates the camera transform in response to input, never
/// continuously, so teleports applied between interactions stick.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        orbit.sync_from_transform(&camera_transform);
        orbit.is_orbiting = true;
    }
    if mouse_button.just_released(MouseButton::Left) {
        orbit.is_orbiting = false;
    }
    if mouse_button.just_pressed(MouseButton::Right) {
        orbit.sync_from_transform(&camera_transform);
        orbit.is_panning = true;
    }
    if mouse_button.just_released(MouseButton::Right) {
        orbit.is_panning = false;
    }

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * DOLLY_PIXEL_SCALE,
        };
    }

    let mut moved = false;

    if orbit.is_orbiting && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * ORBIT_YAW_SENSITIVITY;
        orbit.pitch = (orbit.pitch - mouse_delta.y * ORBIT_PITCH_SENSITIVITY)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        moved = true;
    }

    if orbit.is_panning && mouse_delta != Vec2::ZERO {
        let rotation = orbit.view_rotation();
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        let pan_speed = orbit.distance * PAN_RATE;
        orbit.focus_point += (up * mouse_delta.y - right * mouse_delta.x) * pan_speed;
        moved = true;
    }

    if scroll_accum.abs() > f32::EPSILON {
        if !orbit.is_orbiting && !orbit.is_panning {
            orbit.sync_from_transform(&camera_transform);
        }
        orbit.distance =
            (orbit.distance * (1.0 - scroll_accum * DOLLY_RATE)).clamp(DOLLY_DISTANCE_MIN, DOLLY_DISTANCE_MAX);
        moved = true;
    }

    if moved {
        orbit.apply_to_transform(&mut camera_transform);
    }
}
