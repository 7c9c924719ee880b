/// Canvas size in logical pixels.
///
/// The render loop compares successive viewports to detect resizes and
/// derives the projection's viewing volume from it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A viewport is valid when both sides are finite and strictly positive.
    ///
    /// Minimized windows report a zero-area viewport; nothing is drawn then.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
