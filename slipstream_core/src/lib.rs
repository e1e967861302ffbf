// slipstream_core/src/lib.rs

//! Reconstructs continuous vehicle state from the discrete, lossy telemetry
//! snapshots a real-time simulation emits once per control tick. The feed's
//! wire format and the match-wide adapter that assembles full snapshots live
//! outside this crate; everything here is pure, synchronous state arithmetic.

pub mod ball;
pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
pub mod estimator;
pub mod hitbox;
pub mod overrides;
pub mod physics;
pub mod prelude;
pub mod telemetry;
