/// Edge length of the spinning cube in world units.
pub const CUBE_SIZE: f32 = 16.0;

/// Cube spin rate in radians per second, applied to all three axes.
pub const CUBE_SPIN_RATE: f32 = 0.6;

/// Side length of the square ground plane.
pub const GROUND_SIZE: f32 = 64.0;

/// Length of each axis helper line from the origin.
pub const AXIS_HELPER_LENGTH: f32 = 25.0;

/// Directional light position; the light is aimed at the origin.
pub const LIGHT_POSITION: [f32; 3] = [0.0, 10.0, 30.0];
