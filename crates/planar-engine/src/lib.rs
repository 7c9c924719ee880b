//! Planar engine crate.
//!
//! 2D shapes (lines, triangles, circles) with per-shape affine transforms,
//! drawn through an orthographic projection with wgpu.
//!
//! - [`math`]: 3x3 and 4x4 matrices.
//! - [`scene`]: shapes, their transforms and the ordered scene.
//! - [`render`]: the frame loop and the wgpu renderer.
//! - [`window`]: the event loop, frame scheduling and context recovery.

pub mod core;
pub mod device;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod scene;
