//! Coordinate and geometry types shared by the math, scene and render layers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The projection built from a [`ViewVolume`] maps this space to clip space.

mod point;
mod viewport;
mod volume;

pub use point::Point;
pub use viewport::Viewport;
pub use volume::{DepthRange, ViewVolume};
