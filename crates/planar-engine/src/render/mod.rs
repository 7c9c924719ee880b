//! GPU rendering subsystem.
//!
//! The frame loop ([`RenderLoop`]) walks a [`Scene`](crate::scene::Scene) and
//! drives a [`RenderBackend`]. The wgpu path records into a [`ShapeBatch`]
//! and replays it with [`ShapeRenderer`]; tests drive the same loop with
//! recording backends and no GPU.
//!
//! Convention:
//! - Vertices are in shape-local logical pixels.
//! - The vertex shader applies the per-shape model matrix, then the
//!   orthographic projection (top-left origin, +Y down).

mod backend;
mod batch;
mod common;
mod ctx;
mod frame_loop;
mod shape_renderer;
mod topology;

pub use backend::{DrawMode, RenderBackend};
pub use batch::{DrawItem, ShapeBatch};
pub use ctx::{RenderCtx, RenderTarget};
pub use frame_loop::{FrameOutcome, RenderLoop};
pub use shape_renderer::ShapeRenderer;
pub use topology::{expand_into, Primitive};
