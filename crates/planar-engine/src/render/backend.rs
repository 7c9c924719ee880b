use crate::coords::{Point, Viewport};
use crate::math::{Mat3, Mat4};
use crate::paint::Color;
use crate::scene::ShapeKind;

/// Draw primitive for one shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawMode {
    /// Closed outline through every vertex.
    LineLoop,
    /// First vertex is the hub; each consecutive rim pair forms a triangle.
    TriangleFan,
    /// Independent segments, two vertices each.
    Lines,
    /// Independent triangles, three vertices each.
    Triangles,
}

impl DrawMode {
    /// Primitive for a shape of `kind` with the given fill state.
    ///
    /// Lines are always raw segments. Any other outline is a loop.
    pub fn select(kind: ShapeKind, filled: bool) -> Self {
        match (kind, filled) {
            (ShapeKind::Line, _) => DrawMode::Lines,
            (_, false) => DrawMode::LineLoop,
            (ShapeKind::Circle, true) => DrawMode::TriangleFan,
            (ShapeKind::Triangle, true) => DrawMode::Triangles,
        }
    }
}

/// Rendering pipeline capabilities the render loop drives.
///
/// Bound state (`set_projection`, `set_model`, `set_color`) persists until
/// overwritten and applies to every subsequent `draw`.
pub trait RenderBackend {
    fn set_viewport(&mut self, viewport: Viewport);

    /// Clears the framebuffer to `color`.
    fn clear(&mut self, color: Color);

    fn set_projection(&mut self, projection: &Mat4);

    fn set_model(&mut self, model: &Mat3);

    /// Per-shape color upload.
    fn set_color(&mut self, color: Color);

    /// Draws local-space `vertices` with the currently bound state.
    fn draw(&mut self, mode: DrawMode, vertices: &[Point]);
}
