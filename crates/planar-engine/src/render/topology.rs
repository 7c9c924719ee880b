//! Conversion of [`DrawMode`]s to the list primitives wgpu supports.
//!
//! wgpu has no line-loop or triangle-fan topology, so both are expanded on
//! the CPU into line lists and triangle lists.

use crate::coords::Point;

use super::DrawMode;

/// GPU primitive topology after expansion.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Primitive {
    LineList,
    TriangleList,
}

impl DrawMode {
    #[inline]
    pub fn primitive(self) -> Primitive {
        match self {
            DrawMode::LineLoop | DrawMode::Lines => Primitive::LineList,
            DrawMode::TriangleFan | DrawMode::Triangles => Primitive::TriangleList,
        }
    }
}

/// Appends the list-primitive expansion of `vertices` to `out`.
///
/// Returns the number of vertices appended. Input too short for a single
/// primitive appends nothing; trailing vertices that do not complete a
/// primitive are dropped.
pub fn expand_into(mode: DrawMode, vertices: &[Point], out: &mut Vec<Point>) -> usize {
    let start = out.len();
    match mode {
        DrawMode::Lines => {
            let n = vertices.len() - vertices.len() % 2;
            out.extend_from_slice(&vertices[..n]);
        }
        DrawMode::Triangles => {
            let n = vertices.len() - vertices.len() % 3;
            out.extend_from_slice(&vertices[..n]);
        }
        DrawMode::LineLoop => {
            if vertices.len() >= 2 {
                for (i, &a) in vertices.iter().enumerate() {
                    let b = vertices[(i + 1) % vertices.len()];
                    out.push(a);
                    out.push(b);
                }
            }
        }
        DrawMode::TriangleFan => {
            if let Some((&hub, rim)) = vertices.split_first() {
                for pair in rim.windows(2) {
                    out.extend_from_slice(&[hub, pair[0], pair[1]]);
                }
            }
        }
    }
    out.len() - start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f32, 0.0)).collect()
    }

    fn expand(mode: DrawMode, v: &[Point]) -> Vec<Point> {
        let mut out = Vec::new();
        let n = expand_into(mode, v, &mut out);
        assert_eq!(n, out.len());
        out
    }

    #[test]
    fn line_loop_closes_back_to_first_vertex() {
        let v = pts(3);
        assert_eq!(expand(DrawMode::LineLoop, &v), vec![v[0], v[1], v[1], v[2], v[2], v[0]]);
    }

    #[test]
    fn line_loop_of_one_vertex_is_empty() {
        assert!(expand(DrawMode::LineLoop, &pts(1)).is_empty());
    }

    #[test]
    fn fan_shares_the_hub() {
        let v = pts(5);
        let out = expand(DrawMode::TriangleFan, &v);
        assert_eq!(out.len(), 9);
        assert_eq!(&out[..3], &[v[0], v[1], v[2]]);
        assert_eq!(&out[6..], &[v[0], v[3], v[4]]);
    }

    #[test]
    fn fan_with_fewer_than_three_vertices_is_empty() {
        assert!(expand(DrawMode::TriangleFan, &pts(2)).is_empty());
        assert!(expand(DrawMode::TriangleFan, &[]).is_empty());
    }

    #[test]
    fn lists_drop_incomplete_primitives() {
        assert_eq!(expand(DrawMode::Lines, &pts(5)).len(), 4);
        assert_eq!(expand(DrawMode::Triangles, &pts(7)).len(), 6);
        assert!(expand(DrawMode::Triangles, &pts(2)).is_empty());
    }

    #[test]
    fn expansion_appends_after_existing_output() {
        let mut out = vec![Point::new(-1.0, -1.0)];
        let n = expand_into(DrawMode::Lines, &pts(2), &mut out);
        assert_eq!(n, 2);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], Point::new(-1.0, -1.0));
    }

    #[test]
    fn primitive_mapping() {
        assert_eq!(DrawMode::LineLoop.primitive(), Primitive::LineList);
        assert_eq!(DrawMode::Lines.primitive(), Primitive::LineList);
        assert_eq!(DrawMode::TriangleFan.primitive(), Primitive::TriangleList);
        assert_eq!(DrawMode::Triangles.primitive(), Primitive::TriangleList);
    }
}
