//! Keyboard controls for editing the scene.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use planar_engine::scene::Scene;

pub const MOVE_STEP: f32 = 10.0;
pub const ROTATE_STEP: f32 = 15.0;
pub const SCALE_STEP: f32 = 1.1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    SelectNext,
    Translate { dx: f32, dy: f32 },
    /// Degrees, counter-clockwise on screen is negative (+Y is down).
    Rotate(f32),
    Scale(f32),
    ToggleRotateAroundCenter,
    ToggleFill,
    ToggleSpin,
    Exit,
}

impl Command {
    pub fn from_key(event: &KeyEvent) -> Option<Self> {
        if event.state != ElementState::Pressed {
            return None;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        Self::from_code(code, event.repeat)
    }

    /// Toggles ignore key repeat; movement keys honour it.
    pub fn from_code(code: KeyCode, repeat: bool) -> Option<Self> {
        let cmd = match code {
            KeyCode::Tab => Command::SelectNext,
            KeyCode::ArrowLeft => Command::Translate { dx: -MOVE_STEP, dy: 0.0 },
            KeyCode::ArrowRight => Command::Translate { dx: MOVE_STEP, dy: 0.0 },
            KeyCode::ArrowUp => Command::Translate { dx: 0.0, dy: -MOVE_STEP },
            KeyCode::ArrowDown => Command::Translate { dx: 0.0, dy: MOVE_STEP },
            KeyCode::KeyQ => Command::Rotate(-ROTATE_STEP),
            KeyCode::KeyE => Command::Rotate(ROTATE_STEP),
            KeyCode::Equal | KeyCode::NumpadAdd => Command::Scale(SCALE_STEP),
            KeyCode::Minus | KeyCode::NumpadSubtract => Command::Scale(1.0 / SCALE_STEP),
            KeyCode::KeyC => Command::ToggleRotateAroundCenter,
            KeyCode::KeyF => Command::ToggleFill,
            KeyCode::Space => Command::ToggleSpin,
            KeyCode::Escape => Command::Exit,
            _ => return None,
        };

        let toggles = matches!(
            cmd,
            Command::SelectNext
                | Command::ToggleRotateAroundCenter
                | Command::ToggleFill
                | Command::ToggleSpin
        );
        if repeat && toggles {
            return None;
        }
        Some(cmd)
    }
}

/// Editing state: the selected shape and the spin animation.
#[derive(Debug, Clone)]
pub struct Editor {
    selected: usize,
    spin: bool,
    spin_speed: f32,
}

impl Editor {
    pub fn new(spin: bool, spin_speed: f32) -> Self {
        Self {
            selected: 0,
            spin,
            spin_speed,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn spinning(&self) -> bool {
        self.spin
    }

    /// Applies a command to `scene`. `Exit` is not handled here.
    pub fn apply(&mut self, cmd: Command, scene: &mut Scene) {
        if scene.is_empty() {
            if cmd == Command::ToggleSpin {
                self.spin = !self.spin;
            }
            return;
        }
        self.selected %= scene.len();

        match cmd {
            Command::SelectNext => {
                self.selected = (self.selected + 1) % scene.len();
                log::info!("selected shape #{}", self.selected);
            }
            Command::ToggleSpin => self.spin = !self.spin,
            Command::Exit => {}
            _ => {
                let Some(shape) = scene.shape_mut(self.selected) else {
                    return;
                };
                match cmd {
                    Command::Translate { dx, dy } => shape.update_transform(|t| {
                        t.tx += dx;
                        t.ty += dy;
                    }),
                    Command::Rotate(deg) => shape.update_transform(|t| {
                        t.rot_angle = (t.rot_angle + deg).rem_euclid(360.0);
                    }),
                    Command::Scale(k) => shape.update_transform(|t| {
                        t.sx *= k;
                        t.sy *= k;
                    }),
                    Command::ToggleRotateAroundCenter => {
                        shape.update_transform(|t| t.rot_around_center = !t.rot_around_center)
                    }
                    Command::ToggleFill => {
                        let filled = !shape.filled();
                        shape.set_filled(filled);
                    }
                    _ => {}
                }
            }
        }
    }

    /// Advances the spin animation of the selected shape by `dt` seconds.
    pub fn animate(&mut self, dt: f32, scene: &mut Scene) {
        if !self.spin || scene.is_empty() {
            return;
        }
        self.selected %= scene.len();
        let step = self.spin_speed * dt;
        if let Some(shape) = scene.shape_mut(self.selected) {
            shape.update_transform(|t| t.rot_angle = (t.rot_angle + step).rem_euclid(360.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_engine::coords::Point;
    use planar_engine::paint::Color;
    use planar_engine::scene::Shape;

    fn scene() -> Scene {
        [
            Shape::triangle(
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 10.0),
                true,
                Color::white(),
            ),
            Shape::circle(Point::new(50.0, 50.0), 5.0, 16, false, Color::white()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::from_code(KeyCode::Tab, false), Some(Command::SelectNext));
        assert_eq!(Command::from_code(KeyCode::KeyE, false), Some(Command::Rotate(ROTATE_STEP)));
        assert_eq!(Command::from_code(KeyCode::Escape, false), Some(Command::Exit));
        assert_eq!(Command::from_code(KeyCode::KeyZ, false), None);
    }

    #[test]
    fn repeated_toggles_are_ignored() {
        assert_eq!(Command::from_code(KeyCode::KeyF, true), None);
        assert_eq!(
            Command::from_code(KeyCode::ArrowRight, true),
            Some(Command::Translate { dx: MOVE_STEP, dy: 0.0 })
        );
    }

    #[test]
    fn selection_wraps() {
        let mut scene = scene();
        let mut ed = Editor::new(false, 0.0);
        ed.apply(Command::SelectNext, &mut scene);
        assert_eq!(ed.selected(), 1);
        ed.apply(Command::SelectNext, &mut scene);
        assert_eq!(ed.selected(), 0);
    }

    #[test]
    fn edits_touch_only_the_selected_shape() {
        let mut scene = scene();
        scene.take_changed();
        let mut ed = Editor::new(false, 0.0);

        ed.apply(Command::Translate { dx: 10.0, dy: -5.0 }, &mut scene);
        assert!(scene.take_changed());

        let moved = scene.get(0).unwrap();
        assert_eq!((moved.transform().tx, moved.transform().ty), (10.0, -5.0));
        assert_eq!(scene.get(1).unwrap().transform().tx, 0.0);
    }

    #[test]
    fn rotation_wraps_into_a_turn() {
        let mut scene = scene();
        let mut ed = Editor::new(false, 0.0);
        ed.apply(Command::Rotate(-ROTATE_STEP), &mut scene);
        assert_eq!(scene.get(0).unwrap().transform().rot_angle, 360.0 - ROTATE_STEP);
    }

    #[test]
    fn fill_toggle_regenerates_vertices() {
        let mut scene = scene();
        let mut ed = Editor::new(false, 0.0);
        ed.apply(Command::SelectNext, &mut scene);

        let before = scene.get(1).unwrap().vertices().len();
        ed.apply(Command::ToggleFill, &mut scene);
        let circle = scene.get(1).unwrap();
        assert!(circle.filled());
        // hub + closing rim vertex
        assert_eq!(circle.vertices().len(), before + 2);
    }

    #[test]
    fn spin_advances_with_time() {
        let mut scene = scene();
        let mut ed = Editor::new(true, 90.0);
        ed.animate(0.5, &mut scene);
        assert!((scene.get(0).unwrap().transform().rot_angle - 45.0).abs() < 1e-4);

        ed.apply(Command::ToggleSpin, &mut scene);
        scene.take_changed();
        ed.animate(0.5, &mut scene);
        assert!(!scene.is_changed());
    }
}
