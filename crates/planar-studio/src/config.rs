//! Studio configuration, loaded from a TOML scene file.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;

use planar_engine::coords::{DepthRange, Point};
use planar_engine::paint::Color;
use planar_engine::scene::{Scene, Shape, ShapeGeometry, TransformProps, MIN_CIRCLE_SEGMENTS};
use planar_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Scene shipped with the binary, used when no path is given.
pub const DEFAULT_SCENE: &str = include_str!("../assets/scene.toml");

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StudioConfig {
    pub window: WindowConfig,
    pub view: ViewConfig,
    pub animation: AnimationConfig,
    pub shapes: Vec<ShapeConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Milliseconds between frames.
    pub frame_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub near: f32,
    pub far: f32,
    /// Straight (non-premultiplied) RGBA.
    pub clear_color: [f32; 4],
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Whether the selected shape spins at startup.
    pub spin: bool,
    pub spin_degrees_per_second: f32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKindConfig {
    Line,
    Triangle,
    Circle,
}

/// One `[[shapes]]` entry. Which geometry fields are required depends on `kind`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShapeConfig {
    pub kind: ShapeKindConfig,
    #[serde(default)]
    pub points: Vec<[f32; 2]>,
    #[serde(default)]
    pub center: Option<[f32; 2]>,
    #[serde(default)]
    pub radius: Option<f32>,
    #[serde(default = "default_segments")]
    pub segments: u32,
    #[serde(default)]
    pub filled: bool,
    #[serde(default = "default_shape_color")]
    pub color: [f32; 4],
    #[serde(default)]
    pub translate: [f32; 2],
    #[serde(default = "default_scale")]
    pub scale: [f32; 2],
    /// Degrees.
    #[serde(default)]
    pub rotate: f32,
    #[serde(default = "default_true")]
    pub rotate_around_center: bool,
}

fn default_segments() -> u32 {
    48
}

fn default_shape_color() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_scale() -> [f32; 2] {
    [1.0, 1.0]
}

fn default_true() -> bool {
    true
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "planar studio".to_string(),
            width: 960.0,
            height: 640.0,
            frame_interval_ms: 16,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            near: -1.0,
            far: 1.0,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            spin: false,
            spin_degrees_per_second: 45.0,
        }
    }
}

impl StudioConfig {
    /// Parses and validates a TOML scene description.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("failed to parse scene TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
    }

    /// The embedded default scene.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_SCENE).context("embedded default scene is invalid")
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.window.width > 0.0 && self.window.height > 0.0,
            "window size must be positive, got {}x{}",
            self.window.width,
            self.window.height
        );
        ensure!(
            self.view.near != self.view.far,
            "view near and far planes must differ (both {})",
            self.view.near
        );
        for (i, shape) in self.shapes.iter().enumerate() {
            shape.geometry().with_context(|| format!("shape #{i}"))?;
        }
        Ok(())
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.window.title.clone(),
            initial_size: LogicalSize::new(self.window.width, self.window.height),
            frame_interval: Duration::from_millis(self.window.frame_interval_ms),
            depth: DepthRange::new(self.view.near, self.view.far),
            clear_color: color(self.view.clear_color),
        }
    }

    /// Builds a fresh scene, shapes in file order.
    pub fn build_scene(&self) -> Result<Scene> {
        self.shapes.iter().map(ShapeConfig::build).collect()
    }
}

impl ShapeConfig {
    pub fn geometry(&self) -> Result<ShapeGeometry> {
        let pt = |p: [f32; 2]| Point::new(p[0], p[1]);

        let geometry = match self.kind {
            ShapeKindConfig::Line => match self.points.as_slice() {
                [a, b] => ShapeGeometry::Line { a: pt(*a), b: pt(*b) },
                other => bail!("a line needs 2 points, got {}", other.len()),
            },
            ShapeKindConfig::Triangle => match self.points.as_slice() {
                [a, b, c] => ShapeGeometry::Triangle {
                    a: pt(*a),
                    b: pt(*b),
                    c: pt(*c),
                },
                other => bail!("a triangle needs 3 points, got {}", other.len()),
            },
            ShapeKindConfig::Circle => {
                let center = self.center.context("a circle needs a center")?;
                let radius = self.radius.context("a circle needs a radius")?;
                ensure!(radius > 0.0, "circle radius must be positive, got {radius}");
                ShapeGeometry::Circle {
                    center: pt(center),
                    radius,
                    segments: self.segments.max(MIN_CIRCLE_SEGMENTS),
                }
            }
        };
        Ok(geometry)
    }

    pub fn transform(&self) -> TransformProps {
        TransformProps {
            tx: self.translate[0],
            ty: self.translate[1],
            sx: self.scale[0],
            sy: self.scale[1],
            rot_angle: self.rotate,
            rot_around_center: self.rotate_around_center,
        }
    }

    pub fn build(&self) -> Result<Shape> {
        // Lines are never filled.
        let filled = self.filled && self.kind != ShapeKindConfig::Line;
        Ok(Shape::new(self.geometry()?, filled, color(self.color)).with_transform(self.transform()))
    }
}

fn color(c: [f32; 4]) -> Color {
    Color::from_straight(c[0], c[1], c[2], c[3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_engine::scene::ShapeKind;

    #[test]
    fn builtin_scene_parses() {
        let config = StudioConfig::builtin().unwrap();
        let scene = config.build_scene().unwrap();
        assert_eq!(scene.len(), config.shapes.len());
        assert!(!scene.is_empty());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = StudioConfig::from_toml_str("").unwrap();
        assert_eq!(config.window.title, "planar studio");
        assert!(config.shapes.is_empty());

        let rt = config.runtime_config();
        assert_eq!(rt.depth, DepthRange::default());
        assert_eq!(rt.frame_interval, Duration::from_millis(16));
    }

    #[test]
    fn shape_fields_map_to_transform() {
        let config = StudioConfig::from_toml_str(
            r#"
            [[shapes]]
            kind = "triangle"
            points = [[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]]
            filled = true
            translate = [3.0, 4.0]
            scale = [2.0, 0.5]
            rotate = 90.0
            rotate_around_center = false
            "#,
        )
        .unwrap();

        let t = config.shapes[0].transform();
        assert_eq!((t.tx, t.ty, t.sx, t.sy), (3.0, 4.0, 2.0, 0.5));
        assert_eq!(t.rot_angle, 90.0);
        assert!(!t.rot_around_center);

        let scene = config.build_scene().unwrap();
        let shape = scene.get(0).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Triangle);
        assert!(shape.filled());
    }

    #[test]
    fn lines_ignore_fill() {
        let config = StudioConfig::from_toml_str(
            r#"
            [[shapes]]
            kind = "line"
            points = [[0.0, 0.0], [1.0, 1.0]]
            filled = true
            "#,
        )
        .unwrap();
        let scene = config.build_scene().unwrap();
        assert!(!scene.get(0).unwrap().filled());
    }

    #[test]
    fn circle_segments_are_clamped() {
        let config = StudioConfig::from_toml_str(
            r#"
            [[shapes]]
            kind = "circle"
            center = [0.0, 0.0]
            radius = 4.0
            segments = 1
            "#,
        )
        .unwrap();
        match config.shapes[0].geometry().unwrap() {
            ShapeGeometry::Circle { segments, .. } => assert_eq!(segments, MIN_CIRCLE_SEGMENTS),
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        let wrong_points = r#"
            [[shapes]]
            kind = "triangle"
            points = [[0.0, 0.0], [1.0, 1.0]]
        "#;
        let err = StudioConfig::from_toml_str(wrong_points).unwrap_err();
        assert!(format!("{err:#}").contains("3 points"));

        let no_radius = r#"
            [[shapes]]
            kind = "circle"
            center = [0.0, 0.0]
        "#;
        assert!(StudioConfig::from_toml_str(no_radius).is_err());

        let unknown_kind = r#"
            [[shapes]]
            kind = "hexagon"
        "#;
        assert!(StudioConfig::from_toml_str(unknown_kind).is_err());
    }

    #[test]
    fn flat_depth_range_is_rejected() {
        let err = StudioConfig::from_toml_str("[view]\nnear = 0.5\nfar = 0.5\n").unwrap_err();
        assert!(format!("{err:#}").contains("near and far"));
    }
}
