use cgmath::{Deg, Matrix4, Vector3};

/// Scale, Euler rotation and position of one primitive draw.
///
/// Rotations are in degrees and applied X, then Y, then Z. The model matrix
/// is always `T * Rx * Ry * Rz * S`; rotations don't commute, so this order
/// is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    pub rotation_degrees: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation_degrees: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

impl Transform {
    pub fn new(scale: [f32; 3], rotation_degrees: [f32; 3], position: [f32; 3]) -> Self {
        Self {
            scale: scale.into(),
            rotation_degrees: rotation_degrees.into(),
            position: position.into(),
        }
    }

    /// Same transform moved by `offset`; scale and rotation are untouched.
    pub fn translated(&self, offset: Vector3<f32>) -> Self {
        Self {
            position: self.position + offset,
            ..*self
        }
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        let translation = Matrix4::from_translation(self.position);
        let rotation_x = Matrix4::from_angle_x(Deg(self.rotation_degrees.x));
        let rotation_y = Matrix4::from_angle_y(Deg(self.rotation_degrees.y));
        let rotation_z = Matrix4::from_angle_z(Deg(self.rotation_degrees.z));
        let scale = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);

        translation * rotation_x * rotation_y * rotation_z * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{SquareMatrix, Vector4};

    fn assert_matrix_close(a: Matrix4<f32>, b: Matrix4<f32>) {
        let a: [[f32; 4]; 4] = a.into();
        let b: [[f32; 4]; 4] = b.into();
        for (col_a, col_b) in a.iter().zip(b.iter()) {
            for (x, y) in col_a.iter().zip(col_b.iter()) {
                assert!((x - y).abs() < 1e-5, "{:?} != {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_identity_transform() {
        assert_eq!(Transform::default().model_matrix(), Matrix4::identity());
    }

    #[test]
    fn test_composition_order() {
        let transform = Transform::new([2.0, 0.5, 3.0], [30.0, 45.0, 60.0], [1.0, -2.0, 5.0]);

        let expected = Matrix4::from_translation(Vector3::new(1.0, -2.0, 5.0))
            * Matrix4::from_angle_x(Deg(30.0))
            * Matrix4::from_angle_y(Deg(45.0))
            * Matrix4::from_angle_z(Deg(60.0))
            * Matrix4::from_nonuniform_scale(2.0, 0.5, 3.0);

        assert_matrix_close(transform.model_matrix(), expected);
    }

    #[test]
    fn test_rotation_order_matters() {
        let x_then_y = Transform::new([1.0; 3], [90.0, 90.0, 0.0], [0.0; 3]).model_matrix();
        let y_then_x = Matrix4::from_angle_y(Deg(90.0)) * Matrix4::from_angle_x(Deg(90.0));

        let probe = Vector4::new(0.0, 0.0, 1.0, 0.0);
        let a = x_then_y * probe;
        let b = y_then_x * probe;
        assert!((a - b).x.abs() + (a - b).y.abs() + (a - b).z.abs() > 0.5);
    }

    #[test]
    fn test_translated_keeps_scale_and_rotation() {
        let base = Transform::new([0.7, 2.8, 0.7], [0.0, -25.0, 90.0], [0.0, 0.7, 0.0]);
        let moved = base.translated(Vector3::new(3.8, 0.3, -3.0));

        assert_eq!(moved.scale, base.scale);
        assert_eq!(moved.rotation_degrees, base.rotation_degrees);
        let diff = moved.position - Vector3::new(3.8, 1.0, -3.0);
        assert!(diff.x.abs() < 1e-6 && diff.y.abs() < 1e-6 && diff.z.abs() < 1e-6);
    }

    #[test]
    fn test_translation_column() {
        let m = Transform::new([1.0; 3], [0.0, 0.0, 0.0], [4.0, 5.0, 6.0]).model_matrix();
        assert_eq!(m.w.truncate(), Vector3::new(4.0, 5.0, 6.0));
    }
}
