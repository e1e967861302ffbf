// slipstream_core/src/contact.rs

//! Timestamp-delta arithmetic for ball touches and vehicle-vehicle bumps.
//!
//! The feed reports the latest touch with a game-time stamp that may predate
//! the interval just consumed; converting the delta back to whole ticks and
//! comparing against the elapsed tick count is what keeps a stale touch from
//! being counted twice.

/// Whole ticks between `now_seconds` and an earlier event, rounded to the
/// nearest tick. Negative values mean the event timestamp is ahead of the
/// local clock (float drift on the feed side).
pub fn ticks_since(now_seconds: f32, event_seconds: f32, ticks_per_second: f32) -> i64 {
    ((now_seconds - event_seconds) * ticks_per_second).round() as i64
}

/// Whether an event with the given timestamp falls inside the interval of
/// `ticks_elapsed` ticks that just completed.
pub fn within_elapsed_window(
    now_seconds: f32,
    event_seconds: f32,
    ticks_per_second: f32,
    ticks_elapsed: u64,
) -> bool {
    ticks_since(now_seconds, event_seconds, ticks_per_second) < ticks_elapsed as i64
}

/// A vehicle-vehicle contact as reported by the out-of-band channel: who was
/// hit, and how long the engine's bump cooldown has left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarContact {
    /// External id of the vehicle that was bumped into.
    pub victim_id: u32,
    /// Remaining cooldown before another bump can register, in seconds.
    pub cooldown: f32,
}

impl CarContact {
    /// The victim is only considered active while the cooldown is running;
    /// at zero the contact is over and the reference is dropped.
    pub fn active_victim(&self) -> Option<u32> {
        (self.cooldown > 0.0).then_some(self.victim_id)
    }
}
