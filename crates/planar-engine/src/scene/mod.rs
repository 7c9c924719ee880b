//! Scene model: shapes, their transform parameters and draw order.
//!
//! Responsibilities:
//! - hold local-space shape geometry and per-shape transform parameters
//! - derive each shape's model matrix (`rotate → scale about center → translate`)
//! - keep a stable draw order and a "scene changed" signal for the render loop

mod geometry;
mod list;
mod shape;
mod transform;

pub use geometry::{ShapeGeometry, ShapeKind, MIN_CIRCLE_SEGMENTS};
pub use list::Scene;
pub use shape::Shape;
pub use transform::{rebuild_transformation_matrix, TransformProps, TransformTarget};
