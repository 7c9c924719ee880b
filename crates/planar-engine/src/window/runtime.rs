use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::DepthRange;
use crate::core::{
    logical_viewport, App as CoreApp, AppControl, FrameCtx, RenderContext, SceneState, WindowCtx,
};
use crate::device::GpuInit;
use crate::paint::Color;
use crate::time::FrameClock;

use super::lifecycle::{plan_frame, ContextState, FrameAction};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Delay between the end of one frame and the start of the next.
    pub frame_interval: Duration,
    /// Near/far planes of the orthographic projection.
    pub depth: DepthRange,
    pub clear_color: Color,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "planar".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            frame_interval: Duration::from_millis(16),
            depth: DepthRange::default(),
            clear_color: Color::black(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until it exits or the window closes.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    /// `None` while suspended, or after a failed creation.
    #[borrows(window)]
    #[covariant]
    context: Option<RenderContext<'this>>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    next_frame: Option<Instant>,
    suspended: bool,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            next_frame: None,
            suspended: false,
            exit_requested: false,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        self.entry = Some(
            WindowEntryBuilder {
                clock: FrameClock::default(),
                window,
                context_builder: |_| None,
            }
            .build(),
        );
        Ok(())
    }

    /// Drops any existing context and builds a fresh one, scene included.
    ///
    /// Only called for a window with a non-zero area.
    fn rebuild_context(&mut self) -> Result<()> {
        let Some(entry) = self.entry.as_mut() else {
            return Ok(());
        };
        let (app, config) = (&mut self.app, &self.config);
        let gpu_init = self.gpu_init.clone();

        entry.with_mut(|fields| -> Result<()> {
            // Old device first, so two never coexist.
            *fields.context = None;

            let state = SceneState::from_app(app, config.clear_color, config.depth);
            *fields.context = Some(RenderContext::new(fields.window, gpu_init, state)?);
            fields.clock.reset();
            Ok(())
        })
    }

    fn release_context(&mut self) {
        if let Some(entry) = self.entry.as_mut() {
            entry.with_context_mut(|c| *c = None);
        }
    }

    fn schedule_next_frame(&mut self) {
        self.next_frame = Some(Instant::now() + self.config.frame_interval);
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.request_exit(event_loop);
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    /// One scheduled frame: context upkeep, app update, then draw.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.entry.as_ref() else {
            return;
        };
        let context = entry.with_context(|c| match c {
            None => ContextState::Missing,
            Some(c) if c.is_lost() => ContextState::Lost,
            Some(_) => ContextState::Live,
        });
        let viewport_valid = entry.with_window(|w| logical_viewport(w).is_valid());

        match plan_frame(self.suspended, context, viewport_valid) {
            FrameAction::Idle => return,
            FrameAction::Defer => {
                self.schedule_next_frame();
                return;
            }
            FrameAction::Release => {
                log::warn!("gpu device lost while the window has no area; rebuild deferred");
                self.release_context();
                self.schedule_next_frame();
                return;
            }
            FrameAction::Rebuild => {
                if context == ContextState::Lost {
                    log::warn!("gpu device lost; rebuilding render context");
                }
                if let Err(e) = self.rebuild_context() {
                    self.fail(event_loop, e);
                    return;
                }
            }
            FrameAction::Draw => {}
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        let app = &mut self.app;

        let control = entry.with_mut(|fields| {
            let Some(context) = fields.context.as_mut() else {
                return AppControl::Continue;
            };

            let window = WindowCtx {
                window: fields.window,
            };
            let time = fields.clock.tick();

            let mut ctx = FrameCtx {
                window,
                viewport: window.viewport(),
                scene: context.scene_mut(),
                time,
            };
            if app.on_frame(&mut ctx) == AppControl::Exit {
                return AppControl::Exit;
            }

            context.render_frame(fields.window)
        });

        if control == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        // The next frame is scheduled only once this one is done.
        self.schedule_next_frame();
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            if self.next_frame.take().is_some() {
                if let Some(entry) = self.entry.as_ref() {
                    entry.with_window(|w| w.request_redraw());
                }
            }
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.suspended = false;

        if self.entry.is_none() {
            if let Err(e) = self.create_window_entry(event_loop) {
                self.fail(event_loop, e);
                return;
            }
        }

        // The first frame builds the context, or defers while the window has no area.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        log::warn!("suspended; render context released");
        self.suspended = true;
        self.release_context();
        self.next_frame = None;
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match self.next_frame {
            Some(at) => event_loop.set_control_flow(ControlFlow::WaitUntil(at)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        match &event {
            WindowEvent::CloseRequested => {
                self.release_context();
                self.next_frame = None;
                self.entry = None;
                self.request_exit(event_loop);
            }

            // No redraw here: the next scheduled frame sees the new viewport.
            WindowEvent::Resized(new_size) => {
                log::debug!("resized to {}x{}", new_size.width, new_size.height);
                entry.with_context_mut(|c| {
                    if let Some(c) = c {
                        c.resize(*new_size);
                    }
                });
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_context_mut(|c| {
                    if let Some(c) = c {
                        c.resize(new_size);
                    }
                });
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
