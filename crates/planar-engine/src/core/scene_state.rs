use crate::coords::{DepthRange, Viewport};
use crate::paint::Color;
use crate::render::{FrameOutcome, RenderLoop, ShapeBatch};
use crate::scene::Scene;

use super::app::App;

/// CPU half of a render context: the scene, its frame loop and the batch
/// the GPU renderer replays.
///
/// Created together with the GPU half and dropped with it. A fresh value has
/// no projection yet and repaints on its first frame.
pub struct SceneState {
    scene: Scene,
    render_loop: RenderLoop,
    batch: ShapeBatch,
}

impl SceneState {
    pub fn new(scene: Scene, clear_color: Color, depth: DepthRange) -> Self {
        Self {
            scene,
            render_loop: RenderLoop::new(clear_color, depth),
            batch: ShapeBatch::new(),
        }
    }

    /// Asks `app` for a new scene.
    pub fn from_app<A>(app: &mut A, clear_color: Color, depth: DepthRange) -> Self
    where
        A: App + ?Sized,
    {
        Self::new(app.build_scene(), clear_color, depth)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn batch(&self) -> &ShapeBatch {
        &self.batch
    }

    /// Runs the frame loop into the batch.
    pub fn record(&mut self, viewport: Viewport) -> FrameOutcome {
        self.render_loop.frame(viewport, &mut self.scene, &mut self.batch)
    }

    /// Marks the recorded frame as not shown.
    pub fn request_repaint(&mut self) {
        self.render_loop.request_repaint();
    }
}
