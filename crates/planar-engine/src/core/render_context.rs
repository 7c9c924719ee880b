use anyhow::Result;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::device::{Gpu, GpuInit};
use crate::render::{FrameOutcome, RenderCtx, RenderTarget, ShapeRenderer};
use crate::scene::Scene;

use super::app::AppControl;
use super::ctx::logical_viewport;
use super::scene_state::SceneState;

/// Everything that lives exactly as long as one GPU device.
///
/// Built in one piece and never patched: when the device or surface is lost
/// the whole value is dropped and [`RenderContext::new`] runs again.
pub struct RenderContext<'w> {
    gpu: Gpu<'w>,
    renderer: ShapeRenderer,
    state: SceneState,
}

impl<'w> RenderContext<'w> {
    pub fn new(window: &'w Window, gpu_init: GpuInit, state: SceneState) -> Result<Self> {
        let gpu = pollster::block_on(Gpu::new(window, gpu_init))?;
        log::info!("render context ready ({} shapes)", state.scene().len());

        Ok(Self {
            gpu,
            renderer: ShapeRenderer::new(),
            state,
        })
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        self.state.scene_mut()
    }

    /// Whether the device was lost; the context must then be rebuilt.
    pub fn is_lost(&self) -> bool {
        self.gpu.is_lost()
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.gpu.resize(size);
    }

    /// Runs the frame loop and, when it repainted, presents the result.
    pub fn render_frame(&mut self, window: &Window) -> AppControl {
        let viewport = logical_viewport(window);

        match self.state.record(viewport) {
            FrameOutcome::Skipped => return AppControl::Continue,
            FrameOutcome::Rendered { draws } => log::trace!("frame recorded: {draws} draws"),
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                if !action.wants_retry() {
                    return AppControl::Exit;
                }
                // Nothing reached the screen.
                self.state.request_repaint();
                return AppControl::Continue;
            }
        };

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.renderer.render(&rctx, &mut target, self.state.batch());
        }

        window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
