/// 4×4 column-major matrix. Only used for the orthographic projection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    #[rustfmt::skip]
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    /// Element at column `col`, row `row`.
    #[inline]
    pub const fn at(&self, col: usize, row: usize) -> f32 {
        self.m[4 * col + row]
    }

    /// Orthographic projection of the box `[l, r] × [b, t] × [n, f]` onto
    /// the canonical `[-1, 1]` cube.
    ///
    /// Degenerate bounds (`r == l`, `t == b` or `f == n`) divide by zero and
    /// return non-finite entries; callers validate their volume.
    pub fn ortho(b: f32, t: f32, l: f32, r: f32, n: f32, f: f32) -> Self {
        let a1 = 2.0 / (r - l);
        let b1 = 2.0 / (t - b);
        let c1 = -2.0 / (f - n);
        let a2 = -(r + l) / (r - l);
        let b2 = -(t + b) / (t - b);
        let c2 = -(f + n) / (f - n);

        #[rustfmt::skip]
        let m = [
            a1, 0.0, 0.0, 0.0,
            0.0, b1, 0.0, 0.0,
            0.0, 0.0, c1, 0.0,
            a2, b2, c2, 1.0,
        ];
        Self { m }
    }

    /// [`ortho`](Self::ortho) with the default depth range `n = -1`, `f = 1`.
    #[inline]
    pub fn ortho_2d(b: f32, t: f32, l: f32, r: f32) -> Self {
        Self::ortho(b, t, l, r, -1.0, 1.0)
    }

    /// Multiplies the column vector `v` by this matrix.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let m = &self.m;
        let mut out = [0.0f32; 4];
        for (r, o) in out.iter_mut().enumerate() {
            *o = m[r] * v[0] + m[4 + r] * v[1] + m[8 + r] * v[2] + m[12 + r] * v[3];
        }
        out
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn ortho_reference_volume() {
        let m = Mat4::ortho_2d(0.0, 100.0, 0.0, 200.0).to_cols_array();
        assert!(close(m[0], 0.01));
        assert!(close(m[5], 0.02));
        assert!(close(m[10], -1.0));
        assert!(close(m[12], -1.0));
        assert!(close(m[13], -1.0));
        assert!(close(m[14], 0.0));
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn ortho_off_diagonal_is_zero() {
        let m = Mat4::ortho(-3.0, 7.0, 2.0, 9.0, 0.5, 20.0);
        for c in 0..3 {
            for r in 0..4 {
                if c != r {
                    assert_eq!(m.at(c, r), 0.0, "col {c} row {r}");
                }
            }
        }
        assert_eq!(m.at(3, 3), 1.0);
    }

    #[test]
    fn ortho_maps_bounds_to_unit_cube() {
        let (b, t, l, r, n, f) = (-5.0, 15.0, 10.0, 50.0, -2.0, 8.0);
        let m = Mat4::ortho(b, t, l, r, n, f);

        // Eye space looks down -Z: z = -n lands on -1, z = -f on +1.
        let lo = m.transform([l, b, -n, 1.0]);
        let hi = m.transform([r, t, -f, 1.0]);
        assert!(close(lo[0], -1.0) && close(lo[1], -1.0) && close(lo[2], -1.0));
        assert!(close(hi[0], 1.0) && close(hi[1], 1.0) && close(hi[2], 1.0));
    }

    #[test]
    fn degenerate_bounds_are_not_clamped() {
        assert!(!Mat4::ortho_2d(0.0, 100.0, 5.0, 5.0).is_finite());
        assert!(!Mat4::ortho_2d(3.0, 3.0, 0.0, 10.0).is_finite());
        assert!(!Mat4::ortho(0.0, 1.0, 0.0, 1.0, 2.0, 2.0).is_finite());
    }
}
