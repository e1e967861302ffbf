// slipstream_core/src/estimator.rs

//! The per-entity state reconstruction step.
//!
//! The feed delivers one discrete snapshot per control tick, at a coarser
//! resolution than the underlying physics. [`VehicleState::update`] consumes
//! one snapshot plus the elapsed tick count and advances every timer, flag
//! and derived quantity the snapshot alone does not expose: exact jump
//! timing, boost engagement duration, handbrake ramp, ground-contact
//! hysteresis, touch and bump windows.

use log::{debug, warn};
use nalgebra::Vector3;

use crate::config::EstimatorConfig;
use crate::contact;
use crate::error::StateError;
use crate::hitbox::HitboxType;
use crate::overrides::VehicleOverride;
use crate::physics::PhysicsView;
use crate::telemetry::{AirState, Team, VehicleSample};

/// Reconstructed continuous state of one vehicle.
///
/// Owned exclusively by its estimator timeline: updates must arrive in
/// strictly increasing tick order, and the inverted physics view is a
/// derived cache recomputed on every update, never written from outside.
#[derive(Debug, Clone)]
pub struct VehicleState {
    // --- Identity ---
    /// Externally visible id of this vehicle.
    pub agent_id: u32,
    pub team: Team,
    pub hitbox_type: HitboxType,

    // --- Contact bookkeeping ---
    /// Ball touches since the last external reset. Cumulative: the caller
    /// owns the action-repeat boundary and calls
    /// [`VehicleState::reset_touch_count`] when a window completes.
    pub ball_touches: u32,
    /// External id of the vehicle last bumped into, while the engine's bump
    /// cooldown is still running.
    pub bump_victim_id: Option<u32>,
    /// Best-effort pickup count, incremented whenever the reported boost
    /// amount rises between consecutive samples. Approximate at coarse
    /// sample rates: boost can drain and refill within one interval.
    pub boost_pickups: u32,

    // --- Actual state ---
    /// Seconds until respawn, 0 while alive.
    pub demo_respawn_timer: f32,
    /// Front-left, front-right, back-left, back-right.
    pub wheels_with_contact: [bool; 4],
    /// Seconds since the vehicle entered the supersonic regime, 0 outside it.
    pub supersonic_time: f32,
    /// Remaining boost, normalized to [0, 1].
    pub boost_amount: f32,
    /// Seconds since boost activation started, 0 while not boosting.
    pub boost_active_time: f32,
    /// Handbrake magnitude in [0, 1]; ramps while held, decays once released.
    pub handbrake: f32,

    // --- Jump state ---
    /// Whether the vehicle is in the rising phase of a jump.
    pub is_jumping: bool,
    /// Whether the vehicle has jumped since it was last on the ground.
    pub has_jumped: bool,
    /// Whether jump was held on the last input.
    pub is_holding_jump: bool,
    /// Seconds since jump was pressed while on the ground.
    pub jump_time: f32,

    // --- Flip state ---
    pub has_flipped: bool,
    pub has_double_jumped: bool,
    /// Seconds of air time since the ground jump ended; 0 when no dodge
    /// window is open.
    pub air_time_since_jump: f32,
    /// Seconds since the current flip (or stall) was initiated.
    pub flip_time: f32,
    /// Torque direction applied for the duration of the flip; only
    /// meaningful while a flip is active. The z component is unused.
    pub flip_torque: Vector3<f32>,

    // --- Autoflip state (recovery roll after landing upside down) ---
    pub is_autoflipping: bool,
    /// Seconds until the autoflip force ends.
    pub autoflip_timer: f32,
    /// 1 or -1, the roll direction of the recovery flip.
    pub autoflip_direction: f32,

    // --- Physics ---
    pub physics: PhysicsView,
    inverted_physics: PhysicsView,

    // --- Sample-to-sample bookkeeping ---
    config: EstimatorConfig,
    prev_air_state: AirState,
    game_seconds: f32,
    cur_tick: u64,
}

impl VehicleState {
    /// Builds the initial state from the first snapshot seen for an entity.
    ///
    /// Timers start at zero or at values the first sample carries directly
    /// (dodge elapsed/timeout, demolition countdown); `tick` and
    /// `game_seconds` become the baseline for all future deltas.
    pub fn attach(
        agent_id: u32,
        sample: &VehicleSample,
        tick: u64,
        game_seconds: f32,
        config: EstimatorConfig,
    ) -> Self {
        let mut physics = PhysicsView::default();
        physics.decode(&sample.physics);
        let inverted_physics = physics.inverted();
        let on_ground = sample.air_state == AirState::OnGround;

        let state = Self {
            agent_id,
            team: sample.team,
            hitbox_type: HitboxType::classify(&sample.hitbox),
            ball_touches: 0,
            bump_victim_id: None,
            boost_pickups: 0,
            demo_respawn_timer: sample.demolished_timeout.unwrap_or(0.0),
            wheels_with_contact: [on_ground; 4],
            supersonic_time: 0.0,
            boost_amount: sample.boost / 100.0,
            boost_active_time: 0.0,
            handbrake: 0.0,
            is_jumping: false,
            has_jumped: sample.has_jumped,
            is_holding_jump: sample.last_input.jump,
            jump_time: 0.0,
            has_flipped: sample.has_dodged,
            has_double_jumped: sample.has_double_jumped,
            air_time_since_jump: sample
                .dodge_timeout
                .map_or(0.0, |timeout| config.doublejump_max_delay - timeout),
            flip_time: sample.dodge_elapsed,
            flip_torque: Vector3::new(-sample.dodge_dir.y, sample.dodge_dir.x, 0.0),
            is_autoflipping: false,
            autoflip_timer: 0.0,
            autoflip_direction: 0.0,
            physics,
            inverted_physics,
            config,
            prev_air_state: sample.air_state,
            game_seconds,
            cur_tick: tick,
        };
        debug!(
            "attached vehicle {} ({:?}, {:?}) at tick {}",
            agent_id, state.team, state.hitbox_type, tick
        );
        state
    }

    /// Applies one snapshot as a single atomic state transition.
    ///
    /// `tick` must be strictly greater than the tick of the previous call;
    /// a stale or duplicate sample is rejected so the timers cannot run
    /// backwards. An out-of-band override, when supplied, patches the
    /// freshly computed state field by field as the last step.
    pub fn update(
        &mut self,
        sample: &VehicleSample,
        tick: u64,
        extra: Option<&VehicleOverride>,
    ) -> Result<(), StateError> {
        if tick <= self.cur_tick {
            warn!(
                "vehicle {}: rejecting sample for tick {} at or before tick {}",
                self.agent_id, tick, self.cur_tick
            );
            return Err(StateError::OutOfOrderSample {
                last_tick: self.cur_tick,
                sample_tick: tick,
            });
        }
        let ticks_elapsed = tick - self.cur_tick;
        let time_elapsed = ticks_elapsed as f32 * self.config.tick_time;
        self.cur_tick = tick;
        self.game_seconds += time_elapsed;

        // A touch stamped older than the interval just consumed was already
        // counted on an earlier update.
        if let Some(touch) = &sample.latest_touch {
            if contact::within_elapsed_window(
                self.game_seconds,
                touch.game_seconds,
                self.config.ticks_per_second,
                ticks_elapsed,
            ) {
                self.ball_touches += 1;
            }
        }

        self.demo_respawn_timer = sample.demolished_timeout.unwrap_or(0.0);

        if sample.is_supersonic {
            self.supersonic_time += time_elapsed;
        } else {
            self.supersonic_time = 0.0;
        }

        let boost_amount = sample.boost / 100.0;
        if boost_amount > self.boost_amount {
            self.boost_pickups += 1;
        }
        self.boost_amount = boost_amount;

        // Boost stays engaged for a minimum duration once activated, even if
        // the input is released sooner.
        if self.boost_active_time > 0.0 {
            if !sample.last_input.boost && self.boost_active_time >= self.config.min_boost_time {
                self.boost_active_time = 0.0;
            } else {
                self.boost_active_time += time_elapsed;
            }
        } else if sample.last_input.boost {
            // At least one tick of boosting has already happened.
            self.boost_active_time = time_elapsed;
        }

        if sample.last_input.handbrake {
            self.handbrake += self.config.handbrake_rise_rate * time_elapsed;
        } else {
            self.handbrake -= self.config.handbrake_fall_rate * time_elapsed;
        }
        self.handbrake = self.handbrake.clamp(0.0, 1.0);

        self.is_holding_jump = sample.last_input.jump;

        self.has_jumped = sample.has_jumped;
        self.has_double_jumped = sample.has_double_jumped;
        self.has_flipped = sample.has_dodged;
        self.flip_time = sample.dodge_elapsed;
        self.flip_torque.x = -sample.dodge_dir.y;
        self.flip_torque.y = sample.dodge_dir.x;
        // Not reset here; the air-state transition below owns the reset.
        if self.has_jumped || self.is_jumping {
            self.jump_time += time_elapsed;
        }
        self.air_time_since_jump = sample
            .dodge_timeout
            .map_or(0.0, |timeout| self.config.doublejump_max_delay - timeout);

        match sample.air_state {
            AirState::OnGround => {
                self.set_on_ground(true);
                self.is_jumping = false;
                self.air_time_since_jump = 0.0;
            }
            AirState::Jumping => {
                if self.prev_air_state == AirState::OnGround {
                    // This is the tick the jump began.
                    self.jump_time = 0.0;
                }
                // The wheels stay in contact for a few ticks after pressing
                // jump; this is the only state where ground contact is
                // ambiguous.
                self.set_on_ground(self.jump_time <= self.config.jump_grace_time());
                self.is_jumping = true;
            }
            AirState::InAir | AirState::Dodging | AirState::DoubleJumping => {
                self.set_on_ground(false);
                self.is_jumping = false;
            }
        }

        self.physics.decode(&sample.physics);
        self.inverted_physics = self.physics.inverted();

        if let Some(extra) = extra {
            self.apply_override(extra);
        }

        self.prev_air_state = sample.air_state;
        Ok(())
    }

    /// Patches the just-computed state with authoritative out-of-band
    /// values; absent fields leave the inferred values untouched.
    fn apply_override(&mut self, extra: &VehicleOverride) {
        if let Some(wheels) = extra.wheels_with_contact {
            self.wheels_with_contact = wheels;
        }
        if let Some(handbrake) = extra.handbrake {
            self.handbrake = handbrake;
        }
        if let Some(ball_touches) = extra.ball_touches {
            self.ball_touches = ball_touches;
        }
        if let Some(car_contact) = extra.car_contact {
            self.bump_victim_id = car_contact.active_victim();
        }
        if let Some(is_autoflipping) = extra.is_autoflipping {
            self.is_autoflipping = is_autoflipping;
        }
        if let Some(autoflip_timer) = extra.autoflip_timer {
            self.autoflip_timer = autoflip_timer;
        }
        if let Some(autoflip_direction) = extra.autoflip_direction {
            self.autoflip_direction = autoflip_direction;
        }
    }

    /// Zeroes the cumulative touch counter. Called by the host when its
    /// action-repeat window completes; the estimator cannot know that
    /// boundary itself.
    pub fn reset_touch_count(&mut self) {
        self.ball_touches = 0;
    }

    fn set_on_ground(&mut self, value: bool) {
        self.wheels_with_contact = [value; 4];
    }

    // --- Derived properties ---

    pub fn is_blue(&self) -> bool {
        self.team == Team::Blue
    }

    pub fn is_orange(&self) -> bool {
        self.team == Team::Orange
    }

    pub fn is_demoed(&self) -> bool {
        self.demo_respawn_timer > 0.0
    }

    pub fn is_boosting(&self) -> bool {
        self.boost_active_time > 0.0
    }

    pub fn is_supersonic(&self) -> bool {
        self.supersonic_time > 0.0
    }

    /// Ground contact, with hysteresis: at least 3 of the 4 wheels touching.
    pub fn on_ground(&self) -> bool {
        self.wheels_with_contact.iter().filter(|&&w| w).count() >= 3
    }

    /// Whether a dodge or double jump is still available this airborne
    /// period.
    pub fn has_flip(&self) -> bool {
        !self.has_double_jumped
            && !self.has_flipped
            && self.air_time_since_jump < self.config.doublejump_max_delay
    }

    pub fn can_flip(&self) -> bool {
        !self.on_ground() && !self.is_holding_jump && self.has_flip()
    }

    /// Whether flip torque is currently being applied.
    pub fn is_flipping(&self) -> bool {
        self.has_flipped && self.flip_time < self.config.flip_torque_time
    }

    pub fn had_car_contact(&self) -> bool {
        self.bump_victim_id.is_some()
    }

    /// The team-mirrored physics view, recomputed eagerly on every update.
    pub fn inverted_physics(&self) -> &PhysicsView {
        &self.inverted_physics
    }

    /// Game-time clock, advanced by the tick deltas of the applied samples.
    pub fn game_seconds(&self) -> f32 {
        self.game_seconds
    }

    /// Tick index of the last applied sample.
    pub fn current_tick(&self) -> u64 {
        self.cur_tick
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{OCTANE_HITBOX, TICK_TIME};
    use crate::contact::CarContact;
    use crate::telemetry::{BoxShape, ControlsSample, RawPhysics, TouchRecord};
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;

    const EPS: f32 = 1e-6;

    fn ground_sample() -> VehicleSample {
        VehicleSample {
            team: Team::Blue,
            hitbox: BoxShape {
                length: OCTANE_HITBOX[0],
                width: OCTANE_HITBOX[1],
                height: OCTANE_HITBOX[2],
            },
            hitbox_offset: Vector3::zeros(),
            air_state: AirState::OnGround,
            boost: 50.0,
            last_input: ControlsSample::default(),
            has_jumped: false,
            has_dodged: false,
            has_double_jumped: false,
            dodge_elapsed: 0.0,
            dodge_timeout: None,
            dodge_dir: Vector2::zeros(),
            demolished_timeout: None,
            is_supersonic: false,
            latest_touch: None,
            physics: RawPhysics::default(),
        }
    }

    fn attach_on_ground() -> VehicleState {
        VehicleState::attach(0, &ground_sample(), 0, 10.0, EstimatorConfig::default())
    }

    #[test]
    fn attach_seeds_state_from_first_sample() {
        let mut sample = ground_sample();
        sample.has_jumped = true;
        sample.has_dodged = true;
        sample.dodge_timeout = Some(1.0);
        sample.dodge_elapsed = 0.2;
        sample.dodge_dir = Vector2::new(0.6, 0.8);
        sample.demolished_timeout = Some(2.5);
        let state = VehicleState::attach(3, &sample, 100, 5.0, EstimatorConfig::default());

        assert_eq!(state.agent_id, 3);
        assert_eq!(state.hitbox_type, HitboxType::Octane);
        assert!(state.is_blue());
        assert!(state.has_jumped);
        assert!(state.has_flipped);
        assert_abs_diff_eq!(state.air_time_since_jump, 1.25 - 1.0, epsilon = EPS);
        assert_abs_diff_eq!(state.flip_time, 0.2, epsilon = EPS);
        assert_abs_diff_eq!(state.flip_torque.x, -0.8, epsilon = EPS);
        assert_abs_diff_eq!(state.flip_torque.y, 0.6, epsilon = EPS);
        assert_abs_diff_eq!(state.demo_respawn_timer, 2.5, epsilon = EPS);
        assert!(state.is_demoed());
        assert_abs_diff_eq!(state.boost_amount, 0.5, epsilon = EPS);
        assert_eq!(state.current_tick(), 100);
        assert_abs_diff_eq!(state.game_seconds(), 5.0, epsilon = EPS);
    }

    #[test]
    fn out_of_order_sample_is_rejected() {
        let mut state = attach_on_ground();
        state.update(&ground_sample(), 4, None).unwrap();
        let err = state.update(&ground_sample(), 4, None).unwrap_err();
        assert_eq!(
            err,
            StateError::OutOfOrderSample {
                last_tick: 4,
                sample_tick: 4
            }
        );
        let err = state.update(&ground_sample(), 2, None).unwrap_err();
        assert_eq!(
            err,
            StateError::OutOfOrderSample {
                last_tick: 4,
                sample_tick: 2
            }
        );
        // The rejected samples must not have advanced the clock.
        assert_eq!(state.current_tick(), 4);
    }

    #[test]
    fn on_ground_requires_three_wheels() {
        let mut state = attach_on_ground();
        let cases = [
            ([true, true, true, true], true),
            ([true, true, true, false], true),
            ([false, true, true, true], true),
            ([true, true, false, false], false),
            ([false, false, false, false], false),
        ];
        for (wheels, expected) in cases {
            let patch = VehicleOverride {
                wheels_with_contact: Some(wheels),
                ..VehicleOverride::default()
            };
            let tick = state.current_tick() + 1;
            state.update(&ground_sample(), tick, Some(&patch)).unwrap();
            assert_eq!(state.on_ground(), expected, "wheels {:?}", wheels);
        }
    }

    #[test]
    fn supersonic_timer_accumulates_and_resets() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.is_supersonic = true;

        let mut previous = 0.0;
        for tick in 1..=5 {
            state.update(&sample, tick, None).unwrap();
            assert!(state.supersonic_time > previous);
            assert!(state.is_supersonic());
            previous = state.supersonic_time;
        }
        assert_abs_diff_eq!(state.supersonic_time, 5.0 * TICK_TIME, epsilon = EPS);

        sample.is_supersonic = false;
        state.update(&sample, 6, None).unwrap();
        assert_eq!(state.supersonic_time, 0.0);
        assert!(!state.is_supersonic());
    }

    #[test]
    fn boost_timer_accumulates_over_eight_ticks_on_ground() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.last_input.boost = true;

        for tick in 1..=8 {
            state.update(&sample, tick, None).unwrap();
            assert!(state.on_ground());
            assert!(!state.is_jumping);
        }
        assert_abs_diff_eq!(state.boost_active_time, 8.0 / 120.0, epsilon = EPS);
        assert!(state.is_boosting());
    }

    #[test]
    fn boost_stays_engaged_until_minimum_duration() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.last_input.boost = true;
        for tick in 1..=8 {
            state.update(&sample, tick, None).unwrap();
        }

        // Released before the minimum engagement time: keeps accumulating.
        sample.last_input.boost = false;
        state.update(&sample, 14, None).unwrap();
        assert_abs_diff_eq!(state.boost_active_time, 14.0 / 120.0, epsilon = EPS);

        // Past the minimum and still released: resets.
        state.update(&sample, 15, None).unwrap();
        assert_eq!(state.boost_active_time, 0.0);
        assert!(!state.is_boosting());
    }

    #[test]
    fn boost_timer_starts_at_elapsed_time_not_zero() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.last_input.boost = true;
        state.update(&sample, 3, None).unwrap();
        assert_abs_diff_eq!(state.boost_active_time, 3.0 * TICK_TIME, epsilon = EPS);
    }

    #[test]
    fn handbrake_ramps_and_stays_in_unit_range() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();

        sample.last_input.handbrake = true;
        state.update(&sample, 10, None).unwrap();
        let after_10 = state.handbrake;
        assert_abs_diff_eq!(after_10, 5.0 * 10.0 * TICK_TIME, epsilon = 1e-5);

        // A long held interval saturates at 1.
        state.update(&sample, 200, None).unwrap();
        assert_abs_diff_eq!(state.handbrake, 1.0, epsilon = EPS);

        // Released: decays, then clamps at 0.
        sample.last_input.handbrake = false;
        state.update(&sample, 210, None).unwrap();
        assert!(state.handbrake < 1.0 && state.handbrake > 0.0);
        state.update(&sample, 400, None).unwrap();
        assert_eq!(state.handbrake, 0.0);
    }

    #[test]
    fn jump_timer_resets_on_ground_to_jumping_edge() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();

        sample.air_state = AirState::Jumping;
        sample.has_jumped = true;
        sample.last_input.jump = true;
        state.update(&sample, 1, None).unwrap();
        assert_eq!(state.jump_time, 0.0);
        assert!(state.is_jumping);
        assert!(state.on_ground());

        sample.air_state = AirState::InAir;
        sample.last_input.jump = false;
        state.update(&sample, 7, None).unwrap();
        assert_abs_diff_eq!(state.jump_time, 6.0 / 120.0, epsilon = EPS);
        assert!(!state.on_ground());
        assert!(!state.is_jumping);
    }

    #[test]
    fn ground_contact_grace_window_while_jumping() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.air_state = AirState::Jumping;
        sample.has_jumped = true;

        state.update(&sample, 1, None).unwrap();
        // Six ticks into the jump the wheels are still assumed touching.
        state.update(&sample, 7, None).unwrap();
        assert!(state.on_ground());
        assert!(state.is_jumping);

        // One tick later the grace window is over.
        state.update(&sample, 8, None).unwrap();
        assert!(!state.on_ground());
        assert!(state.is_jumping);
    }

    #[test]
    fn jump_timer_monotonic_while_jump_holds() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.air_state = AirState::Jumping;
        sample.has_jumped = true;
        state.update(&sample, 1, None).unwrap();

        sample.air_state = AirState::InAir;
        let mut previous = state.jump_time;
        for tick in 2..=10 {
            state.update(&sample, tick, None).unwrap();
            assert!(state.jump_time > previous);
            previous = state.jump_time;
        }
    }

    #[test]
    fn landing_clears_jump_state() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.air_state = AirState::Jumping;
        sample.has_jumped = true;
        state.update(&sample, 1, None).unwrap();
        sample.air_state = AirState::InAir;
        sample.dodge_timeout = Some(1.0);
        state.update(&sample, 20, None).unwrap();
        assert!(state.air_time_since_jump > 0.0);

        sample.air_state = AirState::OnGround;
        sample.has_jumped = false;
        sample.dodge_timeout = None;
        state.update(&sample, 21, None).unwrap();
        assert!(state.on_ground());
        assert!(!state.is_jumping);
        assert_eq!(state.air_time_since_jump, 0.0);
    }

    #[test]
    fn dodging_and_double_jumping_are_airborne() {
        for air_state in [AirState::Dodging, AirState::DoubleJumping, AirState::InAir] {
            let mut state = attach_on_ground();
            let mut sample = ground_sample();
            sample.air_state = air_state;
            state.update(&sample, 1, None).unwrap();
            assert!(!state.on_ground(), "{:?}", air_state);
            assert!(!state.is_jumping, "{:?}", air_state);
        }
    }

    #[test]
    fn flip_torque_is_dodge_direction_rotated_quarter_turn() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.air_state = AirState::Dodging;
        sample.has_dodged = true;
        sample.dodge_elapsed = 0.1;
        sample.dodge_dir = Vector2::new(0.6, 0.8);
        state.update(&sample, 1, None).unwrap();

        assert_abs_diff_eq!(state.flip_torque.x, -0.8, epsilon = EPS);
        assert_abs_diff_eq!(state.flip_torque.y, 0.6, epsilon = EPS);
        assert!(state.has_flipped);
        assert!(state.is_flipping());
        assert!(!state.has_flip());
    }

    #[test]
    fn ball_touch_counts_once_per_touch_timestamp() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();

        // Touch 2 ticks before the end of an 8-tick interval: inside it.
        let touch_seconds = 10.0 + 6.0 / 120.0;
        sample.latest_touch = Some(TouchRecord {
            player_index: 0,
            game_seconds: touch_seconds,
        });
        state.update(&sample, 8, None).unwrap();
        assert_eq!(state.ball_touches, 1);

        // Same touch reported again next interval: now stale, not recounted.
        state.update(&sample, 16, None).unwrap();
        assert_eq!(state.ball_touches, 1);

        state.reset_touch_count();
        assert_eq!(state.ball_touches, 0);

        // A fresh touch inside the next interval counts again.
        sample.latest_touch = Some(TouchRecord {
            player_index: 0,
            game_seconds: 10.0 + 23.0 / 120.0,
        });
        state.update(&sample, 24, None).unwrap();
        assert_eq!(state.ball_touches, 1);
    }

    #[test]
    fn no_touch_record_is_not_an_error() {
        let mut state = attach_on_ground();
        state.update(&ground_sample(), 1, None).unwrap();
        assert_eq!(state.ball_touches, 0);
    }

    #[test]
    fn bump_victim_clears_when_cooldown_expires() {
        let mut state = attach_on_ground();
        let sample = ground_sample();

        // The out-of-band source decays the cooldown from 0.3s tick by tick.
        for tick in 1u64..=36 {
            let cooldown = 0.3 - tick as f32 * TICK_TIME;
            let patch = VehicleOverride {
                car_contact: Some(CarContact {
                    victim_id: 5,
                    cooldown,
                }),
                ..VehicleOverride::default()
            };
            state.update(&sample, tick, Some(&patch)).unwrap();
            if cooldown > 0.0 {
                assert_eq!(state.bump_victim_id, Some(5), "tick {}", tick);
                assert!(state.had_car_contact());
            } else {
                assert_eq!(state.bump_victim_id, None, "tick {}", tick);
                assert!(!state.had_car_contact());
            }
        }
        assert_eq!(state.bump_victim_id, None);
    }

    #[test]
    fn override_patches_only_present_fields() {
        let mut state = attach_on_ground();
        let patch = VehicleOverride {
            handbrake: Some(0.5),
            ball_touches: Some(7),
            is_autoflipping: Some(true),
            autoflip_timer: Some(0.25),
            autoflip_direction: Some(-1.0),
            ..VehicleOverride::default()
        };
        state.update(&ground_sample(), 1, Some(&patch)).unwrap();

        assert_abs_diff_eq!(state.handbrake, 0.5, epsilon = EPS);
        assert_eq!(state.ball_touches, 7);
        assert!(state.is_autoflipping);
        assert_abs_diff_eq!(state.autoflip_timer, 0.25, epsilon = EPS);
        assert_abs_diff_eq!(state.autoflip_direction, -1.0, epsilon = EPS);
        // Absent fields kept the inferred values.
        assert!(state.on_ground());
        assert_eq!(state.bump_victim_id, None);

        // An empty override changes nothing.
        state
            .update(&ground_sample(), 2, Some(&VehicleOverride::default()))
            .unwrap();
        assert!(state.is_autoflipping);
        assert_abs_diff_eq!(state.autoflip_timer, 0.25, epsilon = EPS);
    }

    #[test]
    fn boost_pickups_heuristic_counts_rises_only() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();

        sample.boost = 30.0;
        state.update(&sample, 1, None).unwrap();
        assert_eq!(state.boost_pickups, 0);

        sample.boost = 42.0;
        state.update(&sample, 2, None).unwrap();
        assert_eq!(state.boost_pickups, 1);

        sample.boost = 42.0;
        state.update(&sample, 3, None).unwrap();
        assert_eq!(state.boost_pickups, 1);

        sample.boost = 100.0;
        state.update(&sample, 4, None).unwrap();
        assert_eq!(state.boost_pickups, 2);
    }

    #[test]
    fn inverted_physics_tracks_every_update() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.physics.position = Vector3::new(1000.0, -2000.0, 17.0);
        sample.physics.linear_velocity = Vector3::new(300.0, 400.0, -5.0);
        state.update(&sample, 1, None).unwrap();

        let inverted = state.inverted_physics();
        assert_abs_diff_eq!(inverted.position.x, -1000.0, epsilon = EPS);
        assert_abs_diff_eq!(inverted.position.y, 2000.0, epsilon = EPS);
        assert_abs_diff_eq!(inverted.position.z, 17.0, epsilon = EPS);
        assert_abs_diff_eq!(inverted.linear_velocity.x, -300.0, epsilon = EPS);
        assert_abs_diff_eq!(inverted.linear_velocity.y, -400.0, epsilon = EPS);
    }

    #[test]
    fn demo_respawn_timer_follows_the_sample() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.demolished_timeout = Some(2.5);
        state.update(&sample, 1, None).unwrap();
        assert_abs_diff_eq!(state.demo_respawn_timer, 2.5, epsilon = EPS);
        assert!(state.is_demoed());

        sample.demolished_timeout = None;
        state.update(&sample, 2, None).unwrap();
        assert_eq!(state.demo_respawn_timer, 0.0);
        assert!(!state.is_demoed());
    }

    #[test]
    fn flip_availability_window() {
        let mut state = attach_on_ground();
        let mut sample = ground_sample();
        sample.air_state = AirState::InAir;
        sample.has_jumped = true;
        sample.dodge_timeout = Some(0.9);
        state.update(&sample, 1, None).unwrap();
        assert!(state.has_flip());
        assert!(state.can_flip());

        // Dodge window expired: 1.25s of air time since the jump.
        sample.dodge_timeout = Some(0.0);
        state.update(&sample, 2, None).unwrap();
        assert!(!state.has_flip());
        assert!(!state.can_flip());
    }
}
