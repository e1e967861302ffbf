// slipstream_core/src/config.rs

use serde::{Deserialize, Serialize};

use crate::constants;

/// Timing constants the estimator needs, supplied once at attach time.
///
/// Defaults mirror the source engine; hosts running a mutator config (longer
/// demo respawns, different tick rates) deserialize their own values instead
/// of patching constants in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Duration of one simulation tick, in seconds.
    pub tick_time: f32,
    /// Simulation ticks per second of game time.
    pub ticks_per_second: f32,
    /// Minimum time boost stays engaged once activated.
    pub min_boost_time: f32,
    /// Handbrake ramp rate while the input is held, per second.
    pub handbrake_rise_rate: f32,
    /// Handbrake decay rate once the input is released, per second.
    pub handbrake_fall_rate: f32,
    /// Air-time window after a jump during which a dodge is still allowed.
    pub doublejump_max_delay: f32,
    /// Duration flip torque acts after a dodge is initiated.
    pub flip_torque_time: f32,
    /// Ticks after a ground jump during which the wheels still touch.
    pub jump_grace_ticks: u32,
    /// Upper bound of the demolition respawn countdown, in seconds.
    pub demo_respawn_seconds: f32,
    /// Duration of the automatic recovery roll, in seconds.
    pub autoflip_time: f32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            tick_time: constants::TICK_TIME,
            ticks_per_second: constants::TICKS_PER_SECOND,
            min_boost_time: constants::MIN_BOOST_TIME,
            handbrake_rise_rate: constants::POWERSLIDE_RISE_RATE,
            handbrake_fall_rate: constants::POWERSLIDE_FALL_RATE,
            doublejump_max_delay: constants::DOUBLEJUMP_MAX_DELAY,
            flip_torque_time: constants::FLIP_TORQUE_TIME,
            jump_grace_ticks: constants::JUMP_GRACE_TICKS,
            demo_respawn_seconds: constants::DEMO_RESPAWN_SECONDS,
            autoflip_time: constants::CAR_AUTOFLIP_TIME,
        }
    }
}

impl EstimatorConfig {
    /// Ground-contact grace window after pressing jump, in seconds.
    pub fn jump_grace_time(&self) -> f32 {
        self.jump_grace_ticks as f32 * self.tick_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn defaults_match_engine_timing() {
        let config = EstimatorConfig::default();
        assert_abs_diff_eq!(config.tick_time * config.ticks_per_second, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(config.jump_grace_time(), 6.0 / 120.0, epsilon = 1e-6);
    }
}
