//! Contracts between the runtime loop and applications.
//!
//! [`App`] is what an application implements; [`FrameCtx`] is what it sees
//! each frame; [`RenderContext`] is the per-device state the runtime
//! rebuilds after a context loss, with [`SceneState`] as its CPU half.

mod app;
mod ctx;
mod render_context;
mod scene_state;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub use render_context::RenderContext;
pub use scene_state::SceneState;

pub(crate) use ctx::logical_viewport;
