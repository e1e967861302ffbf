// slipstream_core/src/ball.rs

//! Ball and boost-pad views for the adapter layer. No estimation happens
//! here: the ball is a plain mirrored physics pair and pad activity is pure
//! slice reversal, kept next to the vehicle estimator because the adapter
//! consumes them together.

use crate::physics::PhysicsView;
use crate::telemetry::RawPhysics;

/// The ball's physics view plus its team-mirrored twin.
#[derive(Debug, Clone, Default)]
pub struct BallState {
    pub physics: PhysicsView,
    inverted_physics: PhysicsView,
}

impl BallState {
    /// Overwrites the ball state from a raw sample and refreshes the
    /// mirrored view.
    pub fn update(&mut self, raw: &RawPhysics) {
        self.physics.decode_ball(raw);
        self.inverted_physics = self.physics.inverted();
    }

    pub fn inverted_physics(&self) -> &PhysicsView {
        &self.inverted_physics
    }
}

/// The pad layout is symmetric about the field center, so the mirrored
/// activity view is the original in reverse order.
pub fn mirrored_pads(pads: &[bool]) -> Vec<bool> {
    pads.iter().rev().copied().collect()
}
