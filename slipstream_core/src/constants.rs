// slipstream_core/src/constants.rs

//! Reference constants of the source simulation engine.
//!
//! Timing values mirror the engine's own internal constants; the estimator
//! never reads these directly, they seed
//! [`EstimatorConfig::default`](crate::config::EstimatorConfig) so hosts can
//! override them wholesale.

/// Simulation steps per second of game time.
pub const TICKS_PER_SECOND: f32 = 120.0;
/// Duration of one simulation step, in seconds.
pub const TICK_TIME: f32 = 1.0 / TICKS_PER_SECOND;

/// Minimum time boost stays engaged once pressed, even if released sooner.
pub const MIN_BOOST_TIME: f32 = 0.1;

/// Handbrake ramp-up rate while held, in units per second.
pub const POWERSLIDE_RISE_RATE: f32 = 5.0;
/// Handbrake decay rate once released, in units per second.
pub const POWERSLIDE_FALL_RATE: f32 = 2.0;

/// Window after a jump ends during which a dodge or double jump is allowed.
pub const DOUBLEJUMP_MAX_DELAY: f32 = 1.25;
/// Duration flip torque is applied after a dodge is initiated.
pub const FLIP_TORQUE_TIME: f32 = 0.65;
/// Maximum duration a held jump keeps adding velocity.
pub const JUMP_MAX_TIME: f32 = 0.2;

/// Ticks a vehicle typically needs to leave the ground after pressing jump.
/// While the reported air state is Jumping and the jump timer is inside this
/// window, the wheels are still assumed to be in contact.
pub const JUMP_GRACE_TICKS: u32 = 6;

/// Respawn countdown after a demolition, in seconds.
pub const DEMO_RESPAWN_SECONDS: f32 = 3.0;

/// Duration of the automatic recovery roll applied when landing upside down.
pub const CAR_AUTOFLIP_TIME: f32 = 0.4;

// --- Hitbox reference shapes ---
// Measured length/width/height of each body preset, used by the classifier.

pub const OCTANE_HITBOX: [f32; 3] = [118.007_38, 84.199_41, 36.159_073];
pub const DOMINUS_HITBOX: [f32; 3] = [127.926_78, 83.279_95, 31.3];
pub const PLANK_HITBOX: [f32; 3] = [128.819_78, 84.670_364, 29.394_402];
pub const BREAKOUT_HITBOX: [f32; 3] = [131.492_36, 80.521, 30.3];
pub const HYBRID_HITBOX: [f32; 3] = [127.019_19, 82.187_87, 34.159_073];
pub const MERC_HITBOX: [f32; 3] = [120.720_23, 76.710_31, 41.659_073];

/// Default tolerance for matching a measured hitbox against the presets.
pub const HITBOX_SHAPE_TOLERANCE: f32 = 0.5;
