//! Homogeneous matrices for the 2D transform pipeline.
//!
//! Layout: column-major flat arrays. Element (column `c`, row `r`) sits at
//! index `3c + r` in a [`Mat3`] and `4c + r` in a [`Mat4`], which is also the
//! layout WGSL expects for uniform matrices.
//!
//! Composition convention: `a * b` applies `b` first, then `a`, when the
//! product transforms a column point (`(a * b) * p == a * (b * p)`).

mod mat3;
mod mat4;

pub use mat3::Mat3;
pub use mat4::Mat4;
