use crate::coords::{DepthRange, ViewVolume, Viewport};
use crate::math::Mat4;
use crate::paint::Color;
use crate::scene::Scene;

use super::{DrawMode, RenderBackend};

/// Result of one [`RenderLoop::frame`] call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// Nothing changed (or the viewport is unusable); no draw calls issued.
    Skipped,
    /// The framebuffer was cleared and every shape drawn.
    Rendered { draws: usize },
}

/// Per-frame driver: resize detection, projection refresh and scene drawing.
///
/// Holds the shared projection matrix and the repaint flag. One instance
/// belongs to one render context and is discarded with it.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    depth: DepthRange,
    clear_color: Color,
    viewport: Option<Viewport>,
    projection: Mat4,
    repaint: bool,
}

impl RenderLoop {
    /// A fresh loop repaints on its first frame.
    pub fn new(clear_color: Color, depth: DepthRange) -> Self {
        Self {
            depth,
            clear_color,
            viewport: None,
            projection: Mat4::IDENTITY,
            repaint: true,
        }
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Last viewport the projection was built for.
    #[inline]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.repaint
    }

    /// External "scene changed" signal.
    #[inline]
    pub fn request_repaint(&mut self) {
        self.repaint = true;
    }

    /// Rebuilds the projection when `viewport` differs from the last one seen.
    ///
    /// Returns `true` on a resize; a repaint is then pending.
    pub fn check_resize(&mut self, viewport: Viewport) -> bool {
        if self.viewport == Some(viewport) {
            return false;
        }

        let volume = ViewVolume::from_viewport(viewport, self.depth);
        self.projection = volume.projection();
        self.viewport = Some(viewport);
        self.repaint = true;

        log::debug!("viewport {}x{}: projection rebuilt", viewport.width, viewport.height);
        true
    }

    /// Runs one frame against `backend`.
    ///
    /// Shapes are drawn in scene order with their current model matrix.
    pub fn frame<B>(
        &mut self,
        viewport: Viewport,
        scene: &mut Scene,
        backend: &mut B,
    ) -> FrameOutcome
    where
        B: RenderBackend + ?Sized,
    {
        if !viewport.is_valid() {
            return FrameOutcome::Skipped;
        }

        self.check_resize(viewport);

        if scene.take_changed() {
            self.repaint = true;
        }
        if !self.repaint {
            return FrameOutcome::Skipped;
        }

        backend.set_viewport(viewport);
        backend.clear(self.clear_color);
        backend.set_projection(&self.projection);

        for shape in scene.iter() {
            backend.set_model(shape.model());
            backend.set_color(shape.color());
            backend.draw(DrawMode::select(shape.kind(), shape.filled()), shape.vertices());
        }

        self.repaint = false;
        FrameOutcome::Rendered { draws: scene.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;
    use crate::math::Mat3;
    use crate::scene::Shape;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Viewport(Viewport),
        Clear(Color),
        Projection(Mat4),
        Model(Mat3),
        Color(Color),
        Draw(DrawMode, usize),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl RenderBackend for Recorder {
        fn set_viewport(&mut self, viewport: Viewport) {
            self.calls.push(Call::Viewport(viewport));
        }
        fn clear(&mut self, color: Color) {
            self.calls.push(Call::Clear(color));
        }
        fn set_projection(&mut self, projection: &Mat4) {
            self.calls.push(Call::Projection(*projection));
        }
        fn set_model(&mut self, model: &Mat3) {
            self.calls.push(Call::Model(*model));
        }
        fn set_color(&mut self, color: Color) {
            self.calls.push(Call::Color(color));
        }
        fn draw(&mut self, mode: DrawMode, vertices: &[Point]) {
            self.calls.push(Call::Draw(mode, vertices.len()));
        }
    }

    fn scene() -> Scene {
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        let blue = Color::from_straight(0.0, 0.0, 1.0, 1.0);
        let mut scene = Scene::new();
        scene.push(Shape::line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), red));
        scene.push(
            Shape::circle(Point::new(50.0, 50.0), 5.0, 6, true, blue)
                .with_transform(Default::default()),
        );
        scene.push(Shape::triangle(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
            false,
            red,
        ));
        scene
    }

    const VP: Viewport = Viewport::new(200.0, 100.0);

    #[test]
    fn first_frame_draws_everything_in_scene_order() {
        let mut rl = RenderLoop::new(Color::black(), DepthRange::default());
        let mut scene = scene();
        let mut rec = Recorder::default();

        let out = rl.frame(VP, &mut scene, &mut rec);
        assert_eq!(out, FrameOutcome::Rendered { draws: 3 });

        let draws: Vec<&Call> = rec.calls.iter().filter(|c| matches!(c, Call::Draw(..))).collect();
        assert_eq!(
            draws,
            vec![
                &Call::Draw(DrawMode::Lines, 2),
                &Call::Draw(DrawMode::TriangleFan, 8),
                &Call::Draw(DrawMode::LineLoop, 3),
            ]
        );
    }

    #[test]
    fn frame_binds_state_before_each_draw() {
        let mut rl = RenderLoop::new(Color::white(), DepthRange::default());
        let mut scene = scene();
        scene.shape_mut(0).unwrap().set_translation(7.0, 0.0);
        let mut rec = Recorder::default();
        rl.frame(VP, &mut scene, &mut rec);

        assert_eq!(rec.calls[0], Call::Viewport(VP));
        assert_eq!(rec.calls[1], Call::Clear(Color::white()));
        assert_eq!(rec.calls[2], Call::Projection(Mat4::ortho_2d(100.0, 0.0, 0.0, 200.0)));
        assert_eq!(rec.calls[3], Call::Model(Mat3::translation(7.0, 0.0)));
        assert!(matches!(rec.calls[4], Call::Color(_)));
        assert!(matches!(rec.calls[5], Call::Draw(DrawMode::Lines, 2)));
    }

    #[test]
    fn unchanged_frame_is_skipped() {
        let mut rl = RenderLoop::new(Color::black(), DepthRange::default());
        let mut scene = scene();
        let mut rec = Recorder::default();

        rl.frame(VP, &mut scene, &mut rec);
        rec.calls.clear();

        assert_eq!(rl.frame(VP, &mut scene, &mut rec), FrameOutcome::Skipped);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn scene_change_triggers_repaint() {
        let mut rl = RenderLoop::new(Color::black(), DepthRange::default());
        let mut scene = scene();
        let mut rec = Recorder::default();
        rl.frame(VP, &mut scene, &mut rec);

        scene.shape_mut(1).unwrap().set_rotation(30.0);
        assert!(matches!(rl.frame(VP, &mut scene, &mut rec), FrameOutcome::Rendered { .. }));
    }

    #[test]
    fn external_signal_triggers_repaint() {
        let mut rl = RenderLoop::new(Color::black(), DepthRange::default());
        let mut scene = scene();
        let mut rec = Recorder::default();
        rl.frame(VP, &mut scene, &mut rec);

        rl.request_repaint();
        assert!(matches!(rl.frame(VP, &mut scene, &mut rec), FrameOutcome::Rendered { .. }));
    }

    #[test]
    fn resize_rebuilds_projection_and_repaints() {
        let mut rl = RenderLoop::new(Color::black(), DepthRange::default());
        let mut scene = scene();
        let mut rec = Recorder::default();
        rl.frame(VP, &mut scene, &mut rec);

        let bigger = Viewport::new(400.0, 300.0);
        assert!(matches!(rl.frame(bigger, &mut scene, &mut rec), FrameOutcome::Rendered { .. }));
        assert_eq!(rl.viewport(), Some(bigger));
        assert_eq!(*rl.projection(), Mat4::ortho_2d(300.0, 0.0, 0.0, 400.0));
        assert!(!rl.check_resize(bigger));
    }

    #[test]
    fn zero_area_viewport_is_skipped_without_touching_projection() {
        let mut rl = RenderLoop::new(Color::black(), DepthRange::default());
        let mut scene = scene();
        let mut rec = Recorder::default();

        assert_eq!(rl.frame(Viewport::new(0.0, 0.0), &mut scene, &mut rec), FrameOutcome::Skipped);
        assert_eq!(rl.viewport(), None);
        assert!(rl.needs_repaint());
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn empty_scene_still_clears() {
        let mut rl = RenderLoop::new(Color::black(), DepthRange::default());
        let mut scene = Scene::new();
        let mut rec = Recorder::default();

        assert_eq!(rl.frame(VP, &mut scene, &mut rec), FrameOutcome::Rendered { draws: 0 });
        assert!(rec.calls.contains(&Call::Clear(Color::black())));
    }
}
