//! GPU-side types shared by the shape pipelines.

use bytemuck::{Pod, Zeroable};

use crate::coords::Point;
use crate::math::{Mat3, Mat4};
use crate::paint::Color;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── projection uniform (group 0) ──────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ProjectionUniform {
    pub m: [f32; 16],
}

impl ProjectionUniform {
    pub(super) fn new(projection: &Mat4) -> Self {
        Self { m: projection.to_cols_array() }
    }
}

// ── per-draw uniform (group 1, dynamic offset) ────────────────────────────

/// WGSL `struct { model: mat3x3<f32>, color: vec4<f32> }` (64 bytes).
///
/// A uniform `mat3x3<f32>` stores each column as a 16-byte `vec3` slot, so
/// the fourth lane of every column is padding.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct DrawUniform {
    pub model: [[f32; 4]; 3],
    pub color: [f32; 4],
}

impl DrawUniform {
    pub(super) fn new(model: &Mat3, color: Color) -> Self {
        let m = model.to_cols_array();
        Self {
            model: [
                [m[0], m[1], m[2], 0.0],
                [m[3], m[4], m[5], 0.0],
                [m[6], m[7], m[8], 0.0],
            ],
            color: color.to_array(),
        }
    }
}

/// Rounds `size` up to a multiple of `alignment` (a power of two).
#[inline]
pub(super) fn align_to(size: u64, alignment: u64) -> u64 {
    debug_assert!(alignment.is_power_of_two());
    (size + alignment - 1) & !(alignment - 1)
}

/// Minimum binding size for a uniform of type `T`.
pub(super) fn min_binding_size<T>() -> wgpu::BufferSize {
    wgpu::BufferSize::new(std::mem::size_of::<T>() as u64)
        .expect("uniform type is zero-sized")
}

// ── vertex ────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ShapeVertex {
    pub pos: [f32; 2], // local space, logical px
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<Point> for ShapeVertex {
    #[inline]
    fn from(p: Point) -> Self {
        Self { pos: [p.x, p.y] }
    }
}
