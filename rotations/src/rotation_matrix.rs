use super::*;
use nalgebra::{Matrix3, Vector3};
use std::ops::Mul;

/// A struct representing a 3x3 rotation matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationMatrix(pub Matrix3<f64>);

impl RotationMatrix {
    /// Creates the active rotation by `angle` radians about the +Z axis.
    ///
    /// Transforming with it expresses a vector in a frame that has turned by
    /// `angle` about Z, which is how an inertial position is carried into a
    /// frame spinning with the Earth.
    ///
    /// # Arguments
    ///
    /// * `angle` - Right-handed angle about +Z, in radians.
    ///
    /// # Returns
    ///
    /// A new `RotationMatrix`.
    pub fn about_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self(Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0))
    }

    pub fn get_value(&self) -> Matrix3<f64> {
        self.0
    }
}

impl From<Matrix3<f64>> for RotationMatrix {
    fn from(value: Matrix3<f64>) -> Self {
        Self(value)
    }
}

impl RotationTrait for RotationMatrix {
    /// Rotates a vector by the rotation matrix.
    ///
    /// # Arguments
    ///
    /// * `v` - The vector to be rotated.
    ///
    /// # Returns
    ///
    /// The rotated vector.
    fn rotate(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.0 * v
    }

    /// Transforms a vector by the transpose of the rotation matrix.
    ///
    /// # Arguments
    ///
    /// * `v` - The vector to be transformed.
    ///
    /// # Returns
    ///
    /// The transformed vector.
    fn transform(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.0.transpose() * v
    }

    fn inv(&self) -> Self {
        RotationMatrix::from(self.0.transpose())
    }

    /// Creates an identity `RotationMatrix`.
    ///
    /// # Returns
    ///
    /// A new `RotationMatrix` representing the identity matrix.
    fn identity() -> Self {
        Self(Matrix3::identity())
    }
}

impl Mul<RotationMatrix> for RotationMatrix {
    type Output = RotationMatrix;

    /// Multiplies two rotation matrices.
    ///
    /// # Arguments
    ///
    /// * `rhs` - The right-hand side rotation matrix.
    ///
    /// # Returns
    ///
    /// A new `RotationMatrix` representing the product of the two rotation matrices.
    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        RotationMatrix::from(self.0 * rhs.0)
    }
}
