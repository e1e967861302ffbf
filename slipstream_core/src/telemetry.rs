// slipstream_core/src/telemetry.rs

//! The discrete per-tick sample types consumed from the telemetry feed.
//!
//! These are plain data carriers: the feed's wire format and delivery are
//! someone else's problem. Fields the feed encodes with `-1` sentinels
//! (dodge timeout, demolition countdown, absent touch) are modeled as
//! `Option` so they cannot be misread as live values.

use nalgebra::{Vector2, Vector3};

// =========================================================================
// == Identity ==
// =========================================================================

/// Which side of the field a vehicle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Blue,
    Orange,
}

// =========================================================================
// == Discrete air state ==
// =========================================================================

/// The engine's own coarse classification of where a vehicle is.
///
/// This tag drives the estimator's ground/jump transition logic. It is a
/// closed set: a new engine state must be added here explicitly and every
/// `match` on it will fail to compile until handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirState {
    /// All wheels on a drivable surface.
    OnGround,
    /// Jump was pressed on the ground; the vehicle may still be touching.
    Jumping,
    /// Airborne with no active maneuver.
    InAir,
    /// A directional dodge is in progress.
    Dodging,
    /// A second, non-directional jump is in progress.
    DoubleJumping,
}

// =========================================================================
// == Sample payloads ==
// =========================================================================

/// The controller inputs the vehicle acted on last tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlsSample {
    pub jump: bool,
    pub boost: bool,
    pub handbrake: bool,
}

/// Measured bounding box of a vehicle body, in engine length units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub length: f32,
    pub width: f32,
    pub height: f32,
}

/// The most recent ball touch the feed knows about. The timestamp may
/// predate the current sample interval; the estimator decides whether the
/// touch falls inside the just-elapsed window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchRecord {
    /// Index of the player that touched the ball.
    pub player_index: u32,
    /// Game-time of the touch, in seconds.
    pub game_seconds: f32,
}

/// One entity's raw physics snapshot: total state, not a delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPhysics {
    pub position: Vector3<f32>,
    /// Orientation as pitch/yaw/roll euler angles, in radians.
    pub rotation: Vector3<f32>,
    pub linear_velocity: Vector3<f32>,
    pub angular_velocity: Vector3<f32>,
}

impl Default for RawPhysics {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: Vector3::zeros(),
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

/// Everything the feed reports about one vehicle on one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSample {
    pub team: Team,
    /// Measured hitbox shape, classified once at attach time.
    pub hitbox: BoxShape,
    /// Offset of the hitbox from the body origin.
    pub hitbox_offset: Vector3<f32>,
    pub air_state: AirState,
    /// Remaining boost, in the feed's 0–100 scale.
    pub boost: f32,
    pub last_input: ControlsSample,
    pub has_jumped: bool,
    pub has_dodged: bool,
    pub has_double_jumped: bool,
    /// Seconds since the current dodge was initiated.
    pub dodge_elapsed: f32,
    /// Remaining time to consume the dodge, `None` when no window is open.
    pub dodge_timeout: Option<f32>,
    /// Direction of the current dodge on the ground plane.
    pub dodge_dir: Vector2<f32>,
    /// Respawn countdown, `None` while alive.
    pub demolished_timeout: Option<f32>,
    pub is_supersonic: bool,
    pub latest_touch: Option<TouchRecord>,
    pub physics: RawPhysics,
}
