use std::fmt;

use bevy::math::EulerRot;
use bevy::prelude::*;

/// Verb selecting the camera teleport operation.
pub const TELEPORT_VERB: &str = "tp";

/// Token meaning "leave this pose field unchanged".
pub const SKIP_SENTINEL: &str = "~";

/// Error raised when a positional token is neither a float nor a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidNumber { slot: usize, token: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidNumber { slot, token } => {
                write!(f, "argument {slot} is not a number: '{token}'")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Partial update of the six camera pose fields.
///
/// Slots map in fixed order to position x/y/z then rotation x/y/z (radians,
/// intrinsic XYZ Euler). `None` slots leave the field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoseUpdate {
    pub position: [Option<f32>; 3],
    pub rotation: [Option<f32>; 3],
}

impl PoseUpdate {
    /// True when every slot is a no-op.
    pub fn is_empty(&self) -> bool {
        self.position.iter().chain(self.rotation.iter()).all(Option::is_none)
    }

    /// Write the provided slots into `transform` in place.
    ///
    /// Rotation slots overwrite individual Euler components: the current
    /// rotation is decomposed, the given components replaced, and the
    /// quaternion rebuilt, so unspecified components keep their values.
    pub fn apply_to(&self, transform: &mut Transform) {
        if let Some(x) = self.position[0] {
            transform.translation.x = x;
        }
        if let Some(y) = self.position[1] {
            transform.translation.y = y;
        }
        if let Some(z) = self.position[2] {
            transform.translation.z = z;
        }

        if self.rotation.iter().any(Option::is_some) {
            let (mut rx, mut ry, mut rz) = transform.rotation.to_euler(EulerRot::XYZ);
            if let Some(v) = self.rotation[0] {
                rx = v;
            }
            if let Some(v) = self.rotation[1] {
                ry = v;
            }
            if let Some(v) = self.rotation[2] {
                rz = v;
            }
            transform.rotation = Quat::from_euler(EulerRot::XYZ, rx, ry, rz);
        }
    }
}

/// Closed set of console commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Teleport the camera to the given pose fields.
    Teleport(PoseUpdate),
}

impl Command {
    /// Parse one raw input line.
    ///
    /// Splits on single spaces without trimming, so consecutive spaces yield
    /// empty tokens that act as sentinels. Returns `Ok(None)` for empty input
    /// or an unrecognized verb (verbs are case-sensitive); tokens past the
    /// sixth argument are ignored. A positional token that is neither a
    /// float, `~`, nor empty fails the whole command: no pose field is
    /// written on error.
    pub fn parse(raw: &str) -> Result<Option<Self>, CommandError> {
        let tokens: Vec<&str> = raw.split(' ').collect();

        match tokens[0] {
            TELEPORT_VERB => {
                let update = PoseUpdate {
                    position: [
                        parse_slot(&tokens, 1)?,
                        parse_slot(&tokens, 2)?,
                        parse_slot(&tokens, 3)?,
                    ],
                    rotation: [
                        parse_slot(&tokens, 4)?,
                        parse_slot(&tokens, 5)?,
                        parse_slot(&tokens, 6)?,
                    ],
                };
                Ok(Some(Command::Teleport(update)))
            }
            _ => Ok(None),
        }
    }
}

/// Resolve one positional slot: missing, empty and `~` tokens skip the
/// field; anything else must parse as a float.
fn parse_slot(tokens: &[&str], slot: usize) -> Result<Option<f32>, CommandError> {
    let token = tokens.get(slot).copied().unwrap_or("");
    if token.is_empty() || token == SKIP_SENTINEL {
        return Ok(None);
    }
    token.parse::<f32>().map(Some).map_err(|_| CommandError::InvalidNumber {
        slot,
        token: token.to_string(),
    })
}
