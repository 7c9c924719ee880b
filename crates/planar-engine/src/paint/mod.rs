//! Paint model for shape fills and outlines.
//!
//! Shapes carry a single solid color; the renderer uploads it per draw
//! through the color hook of the render backend.

pub mod color;

pub use color::Color;
