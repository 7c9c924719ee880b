use crate::coords::Point;
use crate::math::Mat3;
use crate::paint::Color;

use super::geometry::{ShapeGeometry, ShapeKind};
use super::transform::{rebuild_transformation_matrix, TransformProps, TransformTarget};

/// A drawable shape: local geometry, fill state, color and transform.
///
/// `model` is always derived from `transform` and the geometry's centroid.
/// Every mutator that touches the transform rebuilds it before returning.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: ShapeGeometry,
    filled: bool,
    color: Color,
    transform: TransformProps,
    model: Mat3,
    vertices: Vec<Point>,
}

impl Shape {
    pub fn new(geometry: ShapeGeometry, filled: bool, color: Color) -> Self {
        let vertices = geometry.vertices(filled);
        Self {
            geometry,
            filled,
            color,
            transform: TransformProps::default(),
            model: Mat3::IDENTITY,
            vertices,
        }
    }

    pub fn line(a: Point, b: Point, color: Color) -> Self {
        Self::new(ShapeGeometry::Line { a, b }, false, color)
    }

    pub fn triangle(a: Point, b: Point, c: Point, filled: bool, color: Color) -> Self {
        Self::new(ShapeGeometry::Triangle { a, b, c }, filled, color)
    }

    pub fn circle(center: Point, radius: f32, segments: u32, filled: bool, color: Color) -> Self {
        Self::new(ShapeGeometry::Circle { center, radius, segments }, filled, color)
    }

    /// Builder-style transform setup.
    pub fn with_transform(mut self, transform: TransformProps) -> Self {
        self.transform = transform;
        self.rebuild_transformation_matrix();
        self
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    #[inline]
    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    #[inline]
    pub fn filled(&self) -> bool {
        self.filled
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn transform(&self) -> &TransformProps {
        &self.transform
    }

    /// Current composite model matrix.
    #[inline]
    pub fn model(&self) -> &Mat3 {
        &self.model
    }

    /// Local-space vertices in draw order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Switches between outline and fill; regenerates the vertex list.
    pub fn set_filled(&mut self, filled: bool) {
        if self.filled != filled {
            self.filled = filled;
            self.vertices = self.geometry.vertices(filled);
        }
    }

    /// Applies `f` to the transform parameters, then rebuilds the model matrix.
    pub fn update_transform<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TransformProps),
    {
        f(&mut self.transform);
        self.rebuild_transformation_matrix();
    }

    pub fn set_translation(&mut self, tx: f32, ty: f32) {
        self.update_transform(|t| {
            t.tx = tx;
            t.ty = ty;
        });
    }

    pub fn set_scale(&mut self, sx: f32, sy: f32) {
        self.update_transform(|t| {
            t.sx = sx;
            t.sy = sy;
        });
    }

    /// Sets the rotation angle in degrees.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.update_transform(|t| t.rot_angle = degrees);
    }

    pub fn set_rotate_around_center(&mut self, around_center: bool) {
        self.update_transform(|t| t.rot_around_center = around_center);
    }

    /// Recomputes the model matrix from scratch.
    pub fn rebuild_transformation_matrix(&mut self) {
        rebuild_transformation_matrix(self);
    }

    /// Centroid after the model matrix is applied.
    pub fn world_centroid(&self) -> Point {
        self.model.transform_point(self.geometry.centroid())
    }
}

impl TransformTarget for Shape {
    fn transform_props(&self) -> TransformProps {
        self.transform
    }

    fn compute_centroid(&self) -> Point {
        self.geometry.centroid()
    }

    fn set_model_matrix(&mut self, model: Mat3) {
        self.model = model;
    }
}
