// slipstream_core/src/prelude.rs

// --- Core state types (the "nouns" of the library) ---
pub use crate::ball::BallState;
pub use crate::estimator::VehicleState;
pub use crate::physics::PhysicsView;

// --- Inputs consumed from the telemetry feed ---
pub use crate::telemetry::{
    AirState, BoxShape, ControlsSample, RawPhysics, Team, TouchRecord, VehicleSample,
};

// --- Out-of-band override channel ---
pub use crate::contact::CarContact;
pub use crate::overrides::VehicleOverride;

// --- Configuration and errors ---
pub use crate::config::EstimatorConfig;
pub use crate::error::StateError;
pub use crate::hitbox::HitboxType;
