use crate::transform2d::*;

///
/// A row-major 4x4 matrix, as supplied by a scene graph
///
/// `Matrix4x4(m)` stores row `r`, column `c` in `m[r][c]`, so the translation lives in the last column.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Matrix4x4(pub [[f32; 4]; 4]);

///
/// A 2D transform stored as separate position, rotation and scale values
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgTransform2D {
    pub position:   (f32, f32),

    /// Rotation about the z axis, in degrees
    pub rotation:   f32,

    pub scale:      (f32, f32),
}

impl Matrix4x4 {
    pub fn identity() -> Matrix4x4 {
        Matrix4x4([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    ///
    /// Creates a translate-rotate-scale matrix, rotating about the z axis
    ///
    pub fn trs(position: (f32, f32), rotation_degrees: f32, scale: (f32, f32)) -> Matrix4x4 {
        let (sin, cos)  = rotation_degrees.to_radians().sin_cos();
        let (sx, sy)    = scale;
        let (px, py)    = position;

        Matrix4x4([
            [cos*sx,    -sin*sy,    0.0,    px],
            [sin*sx,    cos*sy,     0.0,    py],
            [0.0,       0.0,        1.0,    0.0],
            [0.0,       0.0,        0.0,    1.0],
        ])
    }
}

impl Default for Matrix4x4 {
    fn default() -> Matrix4x4 {
        Matrix4x4::identity()
    }
}

impl SvgTransform2D {
    pub fn new(position: (f32, f32), rotation: f32, scale: (f32, f32)) -> SvgTransform2D {
        SvgTransform2D { position, rotation, scale }
    }

    ///
    /// The 4x4 matrix for this transform
    ///
    pub fn matrix4x4(&self) -> Matrix4x4 {
        Matrix4x4::trs(self.position, self.rotation, self.scale)
    }

    ///
    /// The 2D affine matrix for this transform
    ///
    pub fn matrix(&self) -> Transform2D {
        Transform2D::translate(self.position.0, self.position.1)
            * Transform2D::rotate_degrees(self.rotation)
            * Transform2D::scale(self.scale.0, self.scale.1)
    }
}

impl Default for SvgTransform2D {
    fn default() -> SvgTransform2D {
        SvgTransform2D {
            position:   (0.0, 0.0),
            rotation:   0.0,
            scale:      (1.0, 1.0),
        }
    }
}

///
/// Splits a matrix into its position, rotation and scale
///
/// The rotation is read from the direction of the y basis vector and is returned in the range `[0, 360)`
///
pub fn decompose_matrix(matrix: &Matrix4x4) -> SvgTransform2D {
    let Matrix4x4(m) = matrix;

    let position    = (m[0][3], m[1][3]);
    let scale_x     = (m[0][0]*m[0][0] + m[1][0]*m[1][0]).sqrt();
    let scale_y     = (m[0][1]*m[0][1] + m[1][1]*m[1][1]).sqrt();

    let rotation    = (-m[0][1]).atan2(m[1][1]).to_degrees();
    let rotation    = if rotation < 0.0 { rotation + 360.0 } else { rotation };
    let rotation    = if rotation >= 360.0 { rotation - 360.0 } else { rotation };

    SvgTransform2D {
        position:   position,
        rotation:   rotation,
        scale:      (scale_x, scale_y),
    }
}
