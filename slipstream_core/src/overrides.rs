// slipstream_core/src/overrides.rs

use crate::contact::CarContact;

/// Authoritative values from a higher-fidelity out-of-band source, applied
/// over the inferred state field by field. Every field is optional: `None`
/// leaves the estimator's own value untouched. This is a sparse patch, not
/// a full record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleOverride {
    /// Per-wheel contact flags: front-left, front-right, back-left,
    /// back-right.
    pub wheels_with_contact: Option<[bool; 4]>,
    pub handbrake: Option<f32>,
    pub ball_touches: Option<u32>,
    /// Bump victim and its cooldown, always supplied as a pair; the victim
    /// reference is dropped once the cooldown reaches zero.
    pub car_contact: Option<CarContact>,
    pub is_autoflipping: Option<bool>,
    pub autoflip_timer: Option<f32>,
    /// 1 or -1, the roll direction of the recovery flip.
    pub autoflip_direction: Option<f32>,
}
