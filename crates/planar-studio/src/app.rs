use winit::event::WindowEvent;

use planar_engine::core::{App, AppControl, FrameCtx};
use planar_engine::scene::{Scene, Shape};

use crate::config::StudioConfig;
use crate::controls::{Command, Editor};

/// Studio application: a configured scene plus keyboard editing.
pub struct StudioApp {
    /// Shapes as loaded; every new render context starts from these.
    template: Vec<Shape>,
    title: String,
    editor: Editor,
    pending: Vec<Command>,
    shown_selection: Option<usize>,
}

impl StudioApp {
    pub fn new(config: &StudioConfig) -> anyhow::Result<Self> {
        let template = config.build_scene()?.shapes().to_vec();
        Ok(Self {
            template,
            title: config.window.title.clone(),
            editor: Editor::new(
                config.animation.spin,
                config.animation.spin_degrees_per_second,
            ),
            pending: Vec::new(),
            shown_selection: None,
        })
    }
}

impl App for StudioApp {
    fn build_scene(&mut self) -> Scene {
        self.pending.clear();
        self.shown_selection = None;
        self.template.iter().cloned().collect()
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            match Command::from_key(event) {
                Some(Command::Exit) => return AppControl::Exit,
                Some(cmd) => self.pending.push(cmd),
                None => {}
            }
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        for cmd in self.pending.drain(..) {
            self.editor.apply(cmd, ctx.scene);
        }
        self.editor.animate(ctx.time.dt, ctx.scene);

        let selected = self.editor.selected();
        if self.shown_selection != Some(selected) {
            if let Some(shape) = ctx.scene.get(selected) {
                ctx.window
                    .set_title(&format!("{} [#{selected} {:?}]", self.title, shape.kind()));
            }
            self.shown_selection = Some(selected);
        }

        AppControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_context_gets_the_loaded_scene() {
        let config = StudioConfig::builtin().unwrap();
        let mut app = StudioApp::new(&config).unwrap();

        let mut first = app.build_scene();
        first.shape_mut(0).unwrap().set_translation(100.0, 100.0);

        let second = app.build_scene();
        assert_eq!(second.len(), config.shapes.len());
        assert!(second.is_changed());
        assert_ne!(first.get(0), second.get(0));
        assert_eq!(second.get(0).unwrap().transform().tx, config.shapes[0].translate[0]);
    }
}
