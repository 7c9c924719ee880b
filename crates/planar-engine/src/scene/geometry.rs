use core::f32::consts::TAU;

use crate::coords::Point;

/// Shape category; selects the draw primitive together with the fill flag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Line,
    Triangle,
    Circle,
}

/// Minimum tessellation for circles.
pub const MIN_CIRCLE_SEGMENTS: u32 = 3;

/// Local-space geometry of a shape, before its model matrix is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Line { a: Point, b: Point },
    Triangle { a: Point, b: Point, c: Point },
    Circle { center: Point, radius: f32, segments: u32 },
}

impl ShapeGeometry {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Line { .. } => ShapeKind::Line,
            ShapeGeometry::Triangle { .. } => ShapeKind::Triangle,
            ShapeGeometry::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Geometric center, used as the scale and rotation pivot.
    pub fn centroid(&self) -> Point {
        match *self {
            ShapeGeometry::Line { a, b } => (a + b) / 2.0,
            ShapeGeometry::Triangle { a, b, c } => (a + b + c) / 3.0,
            ShapeGeometry::Circle { center, .. } => center,
        }
    }

    /// Vertex list in the order the shape's draw primitive consumes it.
    ///
    /// A filled circle is a fan: center first, then the rim, closed by
    /// repeating the first rim vertex. An outlined circle is the bare rim,
    /// drawn as a loop.
    pub fn vertices(&self, filled: bool) -> Vec<Point> {
        match *self {
            ShapeGeometry::Line { a, b } => vec![a, b],
            ShapeGeometry::Triangle { a, b, c } => vec![a, b, c],
            ShapeGeometry::Circle { center, radius, segments } => {
                let rim = circle_rim(center, radius, segments);
                if filled {
                    let mut out = Vec::with_capacity(rim.len() + 2);
                    out.push(center);
                    out.extend_from_slice(&rim);
                    out.push(rim[0]);
                    out
                } else {
                    rim
                }
            }
        }
    }
}

fn circle_rim(center: Point, radius: f32, segments: u32) -> Vec<Point> {
    let n = segments.max(MIN_CIRCLE_SEGMENTS);
    (0..n)
        .map(|i| {
            let (s, c) = (TAU * i as f32 / n as f32).sin_cos();
            Point::new(center.x + c * radius, center.y + s * radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_centroid_is_midpoint() {
        let g = ShapeGeometry::Line { a: Point::new(0.0, 0.0), b: Point::new(10.0, 4.0) };
        assert_eq!(g.centroid(), Point::new(5.0, 2.0));
        assert_eq!(g.kind(), ShapeKind::Line);
    }

    #[test]
    fn triangle_centroid_is_vertex_mean() {
        let g = ShapeGeometry::Triangle {
            a: Point::new(0.0, 0.0),
            b: Point::new(9.0, 0.0),
            c: Point::new(0.0, 6.0),
        };
        assert_eq!(g.centroid(), Point::new(3.0, 2.0));
    }

    #[test]
    fn filled_circle_is_closed_fan() {
        let center = Point::new(5.0, 5.0);
        let g = ShapeGeometry::Circle { center, radius: 2.0, segments: 8 };
        let v = g.vertices(true);
        assert_eq!(v.len(), 10);
        assert_eq!(v[0], center);
        assert_eq!(v[1], v[9]);
        for p in &v[1..] {
            assert!((p.distance(center) - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn outlined_circle_is_bare_rim() {
        let g = ShapeGeometry::Circle { center: Point::origin(), radius: 1.0, segments: 12 };
        let v = g.vertices(false);
        assert_eq!(v.len(), 12);
        assert!(!v.contains(&Point::origin()));
    }

    #[test]
    fn circle_segments_are_clamped() {
        let g = ShapeGeometry::Circle { center: Point::origin(), radius: 1.0, segments: 0 };
        assert_eq!(g.vertices(false).len(), MIN_CIRCLE_SEGMENTS as usize);
    }
}
