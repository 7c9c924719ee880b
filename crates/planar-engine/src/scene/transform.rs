use crate::coords::Point;
use crate::math::Mat3;

/// Declarative transform parameters of a shape.
///
/// `rot_angle` is in degrees. Defaults describe the identity transform with
/// rotation pivoting at the shape's center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformProps {
    pub tx: f32,
    pub ty: f32,
    pub sx: f32,
    pub sy: f32,
    pub rot_angle: f32,
    pub rot_around_center: bool,
}

impl Default for TransformProps {
    fn default() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            sx: 1.0,
            sy: 1.0,
            rot_angle: 0.0,
            rot_around_center: true,
        }
    }
}

impl TransformProps {
    /// Composite model matrix for these parameters around `centroid`.
    ///
    /// Applied to a point in this order:
    /// 1. rotation, about `centroid` or about the origin
    /// 2. scale about `centroid`
    /// 3. translation by `(tx, ty)` in world space
    ///
    /// i.e. `T · S_c · R` with `X_c = T(c) · X · T(-c)`.
    pub fn model_matrix(&self, centroid: Point) -> Mat3 {
        let to_origin = Mat3::translation(-centroid.x, -centroid.y);
        let back = Mat3::translation(centroid.x, centroid.y);

        let rotation = Mat3::rotation(self.rot_angle);
        let rotation = if self.rot_around_center {
            back * rotation * to_origin
        } else {
            rotation
        };

        let scale = back * Mat3::scale(self.sx, self.sy) * to_origin;

        Mat3::translation(self.tx, self.ty) * scale * rotation
    }
}

/// Anything whose model matrix is derived from [`TransformProps`].
pub trait TransformTarget {
    fn transform_props(&self) -> TransformProps;

    /// Pivot for scaling and, optionally, rotation.
    fn compute_centroid(&self) -> Point;

    fn set_model_matrix(&mut self, model: Mat3);
}

/// Recomputes `target`'s model matrix from its current parameters.
///
/// The previous matrix is discarded, never multiplied into the result, so
/// repeated calls with unchanged parameters produce identical matrices.
pub fn rebuild_transformation_matrix<T: TransformTarget + ?Sized>(target: &mut T) {
    let model = target.transform_props().model_matrix(target.compute_centroid());
    target.set_model_matrix(model);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        props: TransformProps,
        centroid: Point,
        model: Mat3,
        rebuilds: u32,
    }

    impl Probe {
        fn new(props: TransformProps, centroid: Point) -> Self {
            Self { props, centroid, model: Mat3::IDENTITY, rebuilds: 0 }
        }
    }

    impl TransformTarget for Probe {
        fn transform_props(&self) -> TransformProps {
            self.props
        }

        fn compute_centroid(&self) -> Point {
            self.centroid
        }

        fn set_model_matrix(&mut self, model: Mat3) {
            self.model = model;
            self.rebuilds += 1;
        }
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn default_props_build_identity() {
        let mut p = Probe::new(TransformProps::default(), Point::new(3.0, 7.0));
        rebuild_transformation_matrix(&mut p);
        assert_eq!(p.model, Mat3::IDENTITY);
    }

    #[test]
    fn scale_then_translate_keeps_centroid_relative() {
        let props = TransformProps {
            tx: 10.0,
            ty: 0.0,
            sx: 2.0,
            sy: 2.0,
            rot_angle: 0.0,
            rot_around_center: false,
        };
        let mut p = Probe::new(props, Point::new(5.0, 5.0));
        rebuild_transformation_matrix(&mut p);
        assert_eq!(p.model.transform_point(Point::new(5.0, 5.0)), Point::new(15.0, 5.0));
    }

    #[test]
    fn scale_pivots_at_centroid() {
        let c = Point::new(-4.0, 12.5);
        for (sx, sy) in [(2.0, 2.0), (0.5, 3.0), (-1.0, 1.0), (0.0, 0.0)] {
            let props = TransformProps { sx, sy, ..Default::default() };
            let mut p = Probe::new(props, c);
            rebuild_transformation_matrix(&mut p);
            assert!(close(p.model.transform_point(c), c), "scale ({sx}, {sy})");
        }
    }

    #[test]
    fn scale_stretches_away_from_centroid() {
        let c = Point::new(5.0, 5.0);
        let props = TransformProps { sx: 3.0, sy: 1.0, ..Default::default() };
        let mut p = Probe::new(props, c);
        rebuild_transformation_matrix(&mut p);
        assert_eq!(p.model.transform_point(Point::new(6.0, 6.0)), Point::new(8.0, 6.0));
    }

    #[test]
    fn rotation_around_center_keeps_centroid() {
        let c = Point::new(20.0, 30.0);
        for deg in [15.0, 90.0, 180.0, -270.0] {
            let props = TransformProps {
                rot_angle: deg,
                rot_around_center: true,
                ..Default::default()
            };
            let mut p = Probe::new(props, c);
            rebuild_transformation_matrix(&mut p);
            assert!(close(p.model.transform_point(c), c), "{deg}");
        }
    }

    #[test]
    fn rotation_without_center_pivots_at_origin() {
        let c = Point::new(10.0, 0.0);
        let props = TransformProps {
            rot_angle: 90.0,
            rot_around_center: false,
            ..Default::default()
        };
        let mut p = Probe::new(props, c);
        rebuild_transformation_matrix(&mut p);
        // Centroid swings around the world origin: (10, 0) -> (0, 10).
        assert!(close(p.model.transform_point(c), Point::new(0.0, 10.0)));
        assert!(close(p.model.transform_point(Point::origin()), Point::origin()));
    }

    #[test]
    fn translation_is_applied_last_in_world_space() {
        let c = Point::new(1.0, 1.0);
        let props = TransformProps {
            tx: 100.0,
            ty: -50.0,
            sx: 4.0,
            sy: 4.0,
            rot_angle: 90.0,
            rot_around_center: true,
        };
        let mut p = Probe::new(props, c);
        rebuild_transformation_matrix(&mut p);
        // Rotation and scale pivot at c, so c itself only sees the translation.
        assert!(close(p.model.transform_point(c), Point::new(101.0, -49.0)));
        // (2, 1): rotate about c -> (1, 2); scale about c -> (1, 5); translate -> (101, -45).
        assert!(close(p.model.transform_point(Point::new(2.0, 1.0)), Point::new(101.0, -45.0)));
    }

    #[test]
    fn rebuild_replaces_previous_matrix() {
        let props = TransformProps { tx: 3.0, ..Default::default() };
        let mut p = Probe::new(props, Point::origin());
        p.model = Mat3::scale(9.0, 9.0);
        rebuild_transformation_matrix(&mut p);
        assert_eq!(p.model, Mat3::translation(3.0, 0.0));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let props = TransformProps {
            tx: 12.25,
            ty: -7.5,
            sx: 1.3,
            sy: 0.7,
            rot_angle: 33.0,
            rot_around_center: true,
        };
        let mut p = Probe::new(props, Point::new(4.0, 9.0));
        rebuild_transformation_matrix(&mut p);
        let first = p.model.to_cols_array();
        rebuild_transformation_matrix(&mut p);
        let second = p.model.to_cols_array();

        assert_eq!(p.rebuilds, 2);
        for (a, b) in first.iter().zip(second) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
