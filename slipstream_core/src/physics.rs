// slipstream_core/src/physics.rs

use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3};

use crate::telemetry::RawPhysics;

/// Mirror applied to positions and velocities when switching sides.
const INVERT_VEC: Vector3<f32> = Vector3::new(-1.0, -1.0, 1.0);

/// Position, orientation and velocities of one entity, with the orientation
/// kept in all three representations the consumers ask for (euler angles,
/// rotation matrix, quaternion).
///
/// Decoding is total replacement of every field from a raw sample; there is
/// no interpolation between samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsView {
    pub position: Vector3<f32>,
    pub linear_velocity: Vector3<f32>,
    pub angular_velocity: Vector3<f32>,
    /// Pitch/yaw/roll, in radians, as reported by the feed.
    euler_angles: Vector3<f32>,
    rotation: Rotation3<f32>,
    quaternion: UnitQuaternion<f32>,
}

impl Default for PhysicsView {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            euler_angles: Vector3::zeros(),
            rotation: Rotation3::identity(),
            quaternion: UnitQuaternion::identity(),
        }
    }
}

impl PhysicsView {
    /// Overwrites the full state from a vehicle physics sample.
    pub fn decode(&mut self, raw: &RawPhysics) {
        self.position = raw.position;
        self.linear_velocity = raw.linear_velocity;
        self.angular_velocity = raw.angular_velocity;
        self.set_euler_angles(raw.rotation);
    }

    /// Overwrites position and velocities from a ball physics sample.
    /// The ball's orientation is not observable through the feed, so the
    /// rotation fields are left as they are.
    pub fn decode_ball(&mut self, raw: &RawPhysics) {
        self.position = raw.position;
        self.linear_velocity = raw.linear_velocity;
        self.angular_velocity = raw.angular_velocity;
    }

    /// Returns the team-mirrored view: a 180° yaw rotation about the field
    /// center, with velocities mirrored consistently. Applying it twice
    /// reproduces the original view up to float tolerance.
    pub fn inverted(&self) -> PhysicsView {
        let mut out = PhysicsView {
            position: self.position.component_mul(&INVERT_VEC),
            linear_velocity: self.linear_velocity.component_mul(&INVERT_VEC),
            angular_velocity: self.angular_velocity.component_mul(&INVERT_VEC),
            ..PhysicsView::default()
        };
        out.set_euler_angles(self.euler_angles + Vector3::new(0.0, std::f32::consts::PI, 0.0));
        out
    }

    fn set_euler_angles(&mut self, pyr: Vector3<f32>) {
        self.euler_angles = pyr;
        self.rotation = euler_to_rotation(&pyr);
        self.quaternion = UnitQuaternion::from_rotation_matrix(&self.rotation);
    }

    // --- Orientation accessors ---

    /// Pitch/yaw/roll, in radians.
    pub fn euler_angles(&self) -> Vector3<f32> {
        self.euler_angles
    }

    pub fn pitch(&self) -> f32 {
        self.euler_angles.x
    }

    pub fn yaw(&self) -> f32 {
        self.euler_angles.y
    }

    pub fn roll(&self) -> f32 {
        self.euler_angles.z
    }

    pub fn rotation_mtx(&self) -> &Rotation3<f32> {
        &self.rotation
    }

    pub fn quaternion(&self) -> &UnitQuaternion<f32> {
        &self.quaternion
    }

    /// Unit vector out the nose of the body.
    pub fn forward(&self) -> Vector3<f32> {
        self.rotation.matrix().column(0).into_owned()
    }

    /// Unit vector out the left side of the body.
    pub fn left(&self) -> Vector3<f32> {
        self.rotation.matrix().column(1).into_owned()
    }

    pub fn right(&self) -> Vector3<f32> {
        -self.left()
    }

    /// Unit vector out the roof of the body.
    pub fn up(&self) -> Vector3<f32> {
        self.rotation.matrix().column(2).into_owned()
    }
}

/// Builds the body-to-world rotation matrix from pitch/yaw/roll, using the
/// source engine's axis convention (columns are forward, left, up).
fn euler_to_rotation(pyr: &Vector3<f32>) -> Rotation3<f32> {
    let (sp, cp) = pyr.x.sin_cos();
    let (sy, cy) = pyr.y.sin_cos();
    let (sr, cr) = pyr.z.sin_cos();

    Rotation3::from_matrix_unchecked(Matrix3::new(
        // forward              left                        up
        cp * cy, cy * sp * sr - cr * sy, -cr * cy * sp - sr * sy, //
        cp * sy, sy * sp * sr + cr * cy, -cr * sy * sp + sr * cy, //
        sp, -cp * sr, cp * cr,
    ))
}
