use core::ops::Mul;

use crate::coords::Point;

/// 3×3 homogeneous matrix for 2D affine transforms, column-major.
///
/// Invariant for affine transforms: the bottom row `(0, 0, 1)` lives at
/// indices 2, 5 and 8. Every builder returns a fresh value; nothing here
/// mutates a matrix in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    m: [f32; 9],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Wraps a column-major array as-is.
    #[inline]
    pub const fn from_cols_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 9] {
        self.m
    }

    /// Element at column `col`, row `row`.
    #[inline]
    pub const fn at(&self, col: usize, row: usize) -> f32 {
        self.m[3 * col + row]
    }

    /// Translation by `(tx, ty)`: identity with indices 6 and 7 set.
    pub fn translation(tx: f32, ty: f32) -> Self {
        let mut m = Self::IDENTITY.m;
        m[6] = tx;
        m[7] = ty;
        Self { m }
    }

    /// Scale about the origin: identity with indices 0 and 4 set.
    pub fn scale(sx: f32, sy: f32) -> Self {
        let mut m = Self::IDENTITY.m;
        m[0] = sx;
        m[4] = sy;
        Self { m }
    }

    /// Rotation about the origin by `degrees`.
    ///
    /// The angle is converted to radians before the trigonometry. With the
    /// canvas' +Y-down axis a positive angle turns clockwise on screen.
    pub fn rotation(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let mut m = Self::IDENTITY.m;
        m[0] = c;
        m[1] = s;
        m[3] = -s;
        m[4] = c;
        Self { m }
    }

    /// `self · rhs`: the result applies `rhs` first, then `self`.
    ///
    /// Entry (column `c`, row `r`) is `Σk self[3k + r] * rhs[3c + k]`.
    pub fn multiply(&self, rhs: &Mat3) -> Mat3 {
        let a = &self.m;
        let b = &rhs.m;
        let mut out = [0.0f32; 9];
        for c in 0..3 {
            for r in 0..3 {
                out[3 * c + r] =
                    a[r] * b[3 * c] + a[3 + r] * b[3 * c + 1] + a[6 + r] * b[3 * c + 2];
            }
        }
        Mat3 { m: out }
    }

    /// Maps `p` through this matrix as the column `(p.x, p.y, 1)`.
    ///
    /// Only affine matrices are supported; the homogeneous `w'` is assumed
    /// to be 1 and is not divided through.
    pub fn transform_point(&self, p: Point) -> Point {
        debug_assert!(self.is_affine(), "transform_point called with a non-affine matrix");
        let m = &self.m;
        Point::new(
            m[0] * p.x + m[3] * p.y + m[6],
            m[1] * p.x + m[4] * p.y + m[7],
        )
    }

    /// True when the bottom row is exactly `(0, 0, 1)`.
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.m[2] == 0.0 && self.m[5] == 0.0 && self.m[8] == 1.0
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        self.multiply(&rhs)
    }
}

impl Mul<Point> for Mat3 {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        self.transform_point(rhs)
    }
}
