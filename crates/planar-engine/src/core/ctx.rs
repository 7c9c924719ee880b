use winit::window::Window;

use crate::coords::Viewport;
use crate::scene::Scene;
use crate::time::FrameTime;

/// Borrowed handle on the runtime's window.
#[derive(Clone, Copy)]
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Logical inner size of the window.
    pub fn viewport(&self) -> Viewport {
        logical_viewport(self.window)
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Mutating shapes through `scene` marks it changed; the frame that follows
/// the callback repaints.
pub struct FrameCtx<'a> {
    pub window: WindowCtx<'a>,
    pub scene: &'a mut Scene,
    pub time: FrameTime,
    /// Logical viewport this frame is drawn into.
    pub viewport: Viewport,
}

impl<'a> FrameCtx<'a> {
    /// Forces a repaint even though no shape was touched.
    pub fn request_repaint(&mut self) {
        self.scene.mark_changed();
    }
}

pub(crate) fn logical_viewport(window: &Window) -> Viewport {
    let phys = window.inner_size();
    let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(window.scale_factor());
    Viewport::new(logi.width as f32, logi.height as f32)
}
