//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single window, schedules frames, and
//! rebuilds the rendering context when it is lost.

mod lifecycle;
mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
