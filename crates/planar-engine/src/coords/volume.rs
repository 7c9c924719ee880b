use crate::math::Mat4;

use super::Viewport;

/// Near/far clip bounds of the orthographic volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthRange {
    pub near: f32,
    pub far: f32,
}

impl DepthRange {
    #[inline]
    pub const fn new(near: f32, far: f32) -> Self {
        Self { near, far }
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

/// Axis-aligned viewing volume mapped to clip space by [`Mat4::ortho`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewVolume {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl ViewVolume {
    /// Volume covering a canvas with origin top-left and +Y down.
    ///
    /// `top = 0` and `bottom = height`, so the projection flips Y into the
    /// +Y-up clip space.
    pub fn from_viewport(viewport: Viewport, depth: DepthRange) -> Self {
        Self {
            left: 0.0,
            right: viewport.width,
            bottom: viewport.height,
            top: 0.0,
            near: depth.near,
            far: depth.far,
        }
    }

    /// True when any extent is zero; `projection()` then yields non-finite values.
    pub fn is_degenerate(&self) -> bool {
        self.right == self.left || self.top == self.bottom || self.far == self.near
    }

    /// Orthographic projection for this volume.
    ///
    /// Bounds are not validated; see [`is_degenerate`](Self::is_degenerate).
    pub fn projection(&self) -> Mat4 {
        Mat4::ortho(self.bottom, self.top, self.left, self.right, self.near, self.far)
    }
}
