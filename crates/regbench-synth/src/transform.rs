/// A 2D rigid transform: rotation about the origin followed by a translation.
///
/// Angles are in degrees, translations in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform2D {
    /// Translation along x (columns).
    pub tx: f64,
    /// Translation along y (rows).
    pub ty: f64,
    /// Rotation angle in degrees.
    pub angle_deg: f64,
}

impl RigidTransform2D {
    /// The transform that leaves every pixel in place.
    pub const IDENTITY: Self = Self {
        tx: 0.0,
        ty: 0.0,
        angle_deg: 0.0,
    };

    /// Create a new rigid transform.
    pub fn new(tx: f64, ty: f64, angle_deg: f64) -> Self {
        Self { tx, ty, angle_deg }
    }

    /// The 2x3 affine matrix of the transform.
    pub fn matrix(&self) -> AffineMatrix {
        AffineMatrix::from(self)
    }
}

/// A 2x3 affine matrix stored row-major as `[a, b, c, d, e, f]`.
///
/// It maps a source pixel `(x, y)` to `(a*x + b*y + c, d*x + e*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix([f32; 6]);

impl AffineMatrix {
    /// Wrap a raw row-major matrix.
    pub fn from_array(m: [f32; 6]) -> Self {
        Self(m)
    }

    /// The raw row-major matrix.
    pub fn as_array(&self) -> &[f32; 6] {
        &self.0
    }

    /// Determinant of the linear 2x2 part.
    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        m[0] * m[4] - m[1] * m[3]
    }
}

impl From<&RigidTransform2D> for AffineMatrix {
    /// Builds `[[cos, -sin, tx], [sin, cos, ty]]`.
    ///
    /// The trigonometry runs in double precision and the result is rounded to
    /// single precision once.
    fn from(transform: &RigidTransform2D) -> Self {
        let (s, c) = transform.angle_deg.to_radians().sin_cos();
        Self([
            c as f32,
            -s as f32,
            transform.tx as f32,
            s as f32,
            c as f32,
            transform.ty as f32,
        ])
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{AffineMatrix, RigidTransform2D};

    #[test]
    fn identity_matrix() {
        let m = RigidTransform2D::IDENTITY.matrix();
        assert_eq!(m.as_array(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn matrix_layout() {
        let m = AffineMatrix::from(&RigidTransform2D::new(3.0, -4.5, 90.0));
        let m = m.as_array();

        assert_relative_eq!(m[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(m[1], -1.0);
        assert_relative_eq!(m[2], 3.0);
        assert_relative_eq!(m[3], 1.0);
        assert_relative_eq!(m[4], 0.0, epsilon = 1e-6);
        assert_relative_eq!(m[5], -4.5);
    }

    #[test]
    fn rigid_matrix_is_a_rotation() {
        for angle in [-10.0, -3.3, 0.0, 7.25, 10.0] {
            let m = RigidTransform2D::new(1.0, 2.0, angle).matrix();
            assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-6);
        }
    }
}
