use winit::event::WindowEvent;

use crate::scene::Scene;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Builds the initial shape list.
    ///
    /// Called whenever a rendering context is created, including after a
    /// context loss, so it must be repeatable.
    fn build_scene(&mut self) -> Scene;

    /// Called for window events, before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per scheduled frame, before the scene is drawn.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
