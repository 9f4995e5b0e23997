/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Near clip plane distance.
pub const CAMERA_NEAR: f32 = 1.0;

/// Far clip plane distance.
pub const CAMERA_FAR: f32 = 10000.0;

/// Initial camera position looking at the origin.
pub const CAMERA_START_POSITION: [f32; 3] = [0.0, 0.0, 48.0];

/// Orbit sensitivity in radians per pixel of horizontal mouse travel.
pub const ORBIT_YAW_SENSITIVITY: f32 = 0.0035;

/// Orbit sensitivity in radians per pixel of vertical mouse travel.
pub const ORBIT_PITCH_SENSITIVITY: f32 = 0.0030;

/// Pitch is clamped short of the poles to keep the view rotation stable.
pub const ORBIT_PITCH_LIMIT: f32 = 1.55;

/// Fraction of the focus distance dollied per scroll line.
pub const DOLLY_RATE: f32 = 0.1;

/// Pixel scroll events are scaled to line-equivalent units.
pub const DOLLY_PIXEL_SCALE: f32 = 0.05;

/// Focus distance clamp range for dollying.
pub const DOLLY_DISTANCE_MIN: f32 = 2.0;
pub const DOLLY_DISTANCE_MAX: f32 = 2000.0;

/// Pan speed as a fraction of focus distance per pixel of mouse travel.
pub const PAN_RATE: f32 = 0.002;
