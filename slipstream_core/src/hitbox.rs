// slipstream_core/src/hitbox.rs

use crate::constants::{
    BREAKOUT_HITBOX, DOMINUS_HITBOX, HITBOX_SHAPE_TOLERANCE, HYBRID_HITBOX, MERC_HITBOX,
    OCTANE_HITBOX, PLANK_HITBOX,
};
use crate::telemetry::BoxShape;

/// The known vehicle body categories, keyed by hitbox shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitboxType {
    Octane,
    Dominus,
    Plank,
    Breakout,
    Hybrid,
    Merc,
}

/// Reference shapes in match priority order; earlier entries win ties.
const REFERENCE_SHAPES: [(HitboxType, [f32; 3]); 6] = [
    (HitboxType::Octane, OCTANE_HITBOX),
    (HitboxType::Dominus, DOMINUS_HITBOX),
    (HitboxType::Plank, PLANK_HITBOX),
    (HitboxType::Breakout, BREAKOUT_HITBOX),
    (HitboxType::Hybrid, HYBRID_HITBOX),
    (HitboxType::Merc, MERC_HITBOX),
];

impl HitboxType {
    /// Classifies a measured bounding box against the known presets,
    /// falling back to [`HitboxType::Octane`] when nothing matches. Pure
    /// shape matching: all three dimensions must agree within `tolerance`.
    pub fn classify_with_tolerance(shape: &BoxShape, tolerance: f32) -> HitboxType {
        REFERENCE_SHAPES
            .iter()
            .find(|(_, reference)| shape_matches(shape, reference, tolerance))
            .map(|(hitbox_type, _)| *hitbox_type)
            .unwrap_or(HitboxType::Octane)
    }

    /// [`HitboxType::classify_with_tolerance`] with the standard tolerance.
    pub fn classify(shape: &BoxShape) -> HitboxType {
        Self::classify_with_tolerance(shape, HITBOX_SHAPE_TOLERANCE)
    }
}

fn shape_matches(shape: &BoxShape, reference: &[f32; 3], tolerance: f32) -> bool {
    (shape.length - reference[0]).abs() <= tolerance
        && (shape.width - reference[1]).abs() <= tolerance
        && (shape.height - reference[2]).abs() <= tolerance
}
