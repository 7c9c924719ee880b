use core::ops::Range;

use crate::coords::{Point, Viewport};
use crate::math::{Mat3, Mat4};
use crate::paint::Color;

use super::{DrawMode, RenderBackend};

/// One recorded draw: bound state at the time of the call plus its vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub model: Mat3,
    pub color: Color,
    pub mode: DrawMode,
    /// Range into [`ShapeBatch::vertices`].
    pub vertices: Range<usize>,
}

/// CPU-side recording of one frame's backend calls.
///
/// The render loop writes into a batch; the GPU renderer replays it in a
/// single pass. Reused across frames via [`reset`](Self::reset).
#[derive(Debug, Default, Clone)]
pub struct ShapeBatch {
    viewport: Viewport,
    clear_color: Option<Color>,
    projection: Mat4,

    model: Mat3,
    color: Color,

    vertices: Vec<Point>,
    items: Vec<DrawItem>,
}

impl ShapeBatch {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded draws and bound state. Keeps allocated capacity.
    pub fn reset(&mut self) {
        self.viewport = Viewport::default();
        self.clear_color = None;
        self.projection = Mat4::IDENTITY;
        self.model = Mat3::IDENTITY;
        self.color = Color::default();
        self.vertices.clear();
        self.items.clear();
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Clear color, if the frame asked for a clear.
    #[inline]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Vertices of one recorded draw.
    #[inline]
    pub fn item_vertices(&self, item: &DrawItem) -> &[Point] {
        &self.vertices[item.vertices.clone()]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RenderBackend for ShapeBatch {
    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn clear(&mut self, color: Color) {
        // A clear discards everything recorded before it.
        self.vertices.clear();
        self.items.clear();
        self.clear_color = Some(color);
    }

    fn set_projection(&mut self, projection: &Mat4) {
        self.projection = *projection;
    }

    fn set_model(&mut self, model: &Mat3) {
        self.model = *model;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw(&mut self, mode: DrawMode, vertices: &[Point]) {
        let start = self.vertices.len();
        self.vertices.extend_from_slice(vertices);
        self.items.push(DrawItem {
            model: self.model,
            color: self.color,
            mode,
            vertices: start..self.vertices.len(),
        });
    }
}
