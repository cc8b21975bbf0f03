use std::ops::{Mul};

///
/// Represents a 2D affine transformation matrix
///
/// Transforms are applied right-to-left: `a * b` applies `b` to a point and then `a`.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform2D(pub [[f32; 3]; 3]);

impl Transform2D {
    ///
    /// Creates the identity transform
    ///
    pub fn identity() -> Transform2D {
        Transform2D([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0]
        ])
    }

    ///
    /// Creates a translation transform
    ///
    pub fn translate(x: f32, y: f32) -> Transform2D {
        Transform2D([
            [1.0, 0.0, x],
            [0.0, 1.0, y],
            [0.0, 0.0, 1.0]
        ])
    }

    ///
    /// Creates a scale transform
    ///
    pub fn scale(x: f32, y: f32) -> Transform2D {
        Transform2D([
            [x,   0.0, 0.0],
            [0.0, y,   0.0],
            [0.0, 0.0, 1.0]
        ])
    }

    ///
    /// Creates a rotation transform (anticlockwise, in radians)
    ///
    pub fn rotate(radians: f32) -> Transform2D {
        let (sin, cos) = radians.sin_cos();

        Transform2D([
            [cos, -sin, 0.0],
            [sin, cos,  0.0],
            [0.0, 0.0,  1.0]
        ])
    }

    ///
    /// Creates a rotation transform with an angle in degrees
    ///
    pub fn rotate_degrees(degrees: f32) -> Transform2D {
        Self::rotate(degrees.to_radians())
    }

    ///
    /// Applies this transform to a point
    ///
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let Transform2D([[a, b, c], [d, e, f], [_, _, _]]) = *self;

        (a*x + b*y + c, d*x + e*y + f)
    }

    ///
    /// Returns the inverse of this transform, if it has one
    ///
    pub fn invert(&self) -> Option<Transform2D> {
        let Transform2D([[a, b, c], [d, e, f], [_, _, _]]) = *self;

        let det = a*e - b*d;
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0 / det;

        Some(Transform2D([
            [e*inv_det,     -b*inv_det,     (b*f - c*e)*inv_det],
            [-d*inv_det,    a*inv_det,      (c*d - a*f)*inv_det],
            [0.0,           0.0,            1.0]
        ]))
    }
}

impl Default for Transform2D {
    fn default() -> Transform2D {
        Transform2D::identity()
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    fn mul(self, other: Transform2D) -> Transform2D {
        let Transform2D(a) = self;
        let Transform2D(b) = other;

        let mut result = [[0.0; 3]; 3];

        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = a[row][0]*b[0][col] + a[row][1]*b[1][col] + a[row][2]*b[2][col];
            }
        }

        Transform2D(result)
    }
}
