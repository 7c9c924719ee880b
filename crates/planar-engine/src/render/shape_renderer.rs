use core::ops::Range;

use crate::coords::Point;
use crate::render::{RenderCtx, RenderTarget, ShapeBatch};

use super::common::{
    align_to, min_binding_size, premul_alpha_blend, DrawUniform, ProjectionUniform, ShapeVertex,
};
use super::topology::{expand_into, Primitive};

/// wgpu renderer replaying a [`ShapeBatch`].
///
/// One render pass per frame: clear, then one draw per recorded item. The
/// projection lives in a shared uniform (group 0); model matrix and color
/// live in a per-draw uniform slot bound with a dynamic offset (group 1).
///
/// All GPU resources are created lazily and dropped with the renderer; a
/// lost context is recovered by building a new renderer, never by patching
/// this one.
#[derive(Default)]
pub struct ShapeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    line_pipeline: Option<wgpu::RenderPipeline>,
    triangle_pipeline: Option<wgpu::RenderPipeline>,

    projection_bgl: Option<wgpu::BindGroupLayout>,
    draw_bgl: Option<wgpu::BindGroupLayout>,

    projection_ubo: Option<wgpu::Buffer>,
    projection_bind_group: Option<wgpu::BindGroup>,

    draw_ubo: Option<wgpu::Buffer>,
    draw_bind_group: Option<wgpu::BindGroup>,
    draw_capacity: usize,
    draw_stride: u64,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    // Per-frame scratch, reused across frames.
    expanded: Vec<Point>,
    runs: Vec<Run>,
    draw_bytes: Vec<u8>,
}

/// Expanded vertex range of one batch item.
#[derive(Debug, Clone)]
struct Run {
    primitive: Primitive,
    vertices: Range<u32>,
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears `target` with the batch's clear color and draws every item in order.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        batch: &ShapeBatch,
    ) {
        self.ensure_pipelines(ctx);
        self.ensure_projection_binding(ctx);

        self.expand_batch(batch);

        // Mutating methods must happen before borrowing pipelines/buffers immutably.
        self.write_projection_uniform(ctx, batch);
        self.write_draw_uniforms(ctx, batch);
        self.write_vertices(ctx);

        let Some(line_pipeline) = self.line_pipeline.as_ref() else { return };
        let Some(triangle_pipeline) = self.triangle_pipeline.as_ref() else { return };
        let Some(projection_bg) = self.projection_bind_group.as_ref() else { return };

        let load = match batch.clear_color() {
            Some(c) => wgpu::LoadOp::Clear(wgpu::Color {
                r: c.r as f64,
                g: c.g as f64,
                b: c.b as f64,
                a: c.a as f64,
            }),
            None => wgpu::LoadOp::Load,
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("planar shape pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if self.runs.iter().all(|r| r.vertices.is_empty()) {
            return;
        }

        let Some(draw_bg) = self.draw_bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        // The pass covers the whole surface, which is the canvas; no explicit viewport.
        rpass.set_bind_group(0, projection_bg, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));

        let mut bound: Option<Primitive> = None;
        for (i, run) in self.runs.iter().enumerate() {
            if run.vertices.is_empty() {
                continue;
            }
            if bound != Some(run.primitive) {
                rpass.set_pipeline(match run.primitive {
                    Primitive::LineList => line_pipeline,
                    Primitive::TriangleList => triangle_pipeline,
                });
                bound = Some(run.primitive);
            }
            let offset = (i as u64 * self.draw_stride) as u32;
            rpass.set_bind_group(1, draw_bg, &[offset]);
            rpass.draw(run.vertices.clone(), 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn expand_batch(&mut self, batch: &ShapeBatch) {
        self.expanded.clear();
        self.runs.clear();

        for item in batch.items() {
            let start = self.expanded.len() as u32;
            let n = expand_into(item.mode, batch.item_vertices(item), &mut self.expanded) as u32;
            self.runs.push(Run {
                primitive: item.mode.primitive(),
                vertices: start..start + n,
            });
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.line_pipeline.is_some()
            && self.triangle_pipeline.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("planar shape shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shape.wgsl").into()),
        });

        let projection_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("planar projection bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(min_binding_size::<ProjectionUniform>()),
                },
                count: None,
            }],
        });

        let draw_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("planar draw bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: Some(min_binding_size::<DrawUniform>()),
                },
                count: None,
            }],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("planar shape pipeline layout"),
            bind_group_layouts: &[&projection_bgl, &draw_bgl],
            immediate_size: 0,
        });

        let make = |label: &str, topology: wgpu::PrimitiveTopology| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[ShapeVertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(premul_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    // Mirrored (negative) scales flip winding; never cull.
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        self.line_pipeline = Some(make("planar line pipeline", wgpu::PrimitiveTopology::LineList));
        self.triangle_pipeline =
            Some(make("planar triangle pipeline", wgpu::PrimitiveTopology::TriangleList));
        self.pipeline_format = Some(ctx.surface_format);

        self.projection_bgl = Some(projection_bgl);
        self.draw_bgl = Some(draw_bgl);

        // Bind groups belong to the old layouts.
        self.projection_ubo = None;
        self.projection_bind_group = None;
        self.draw_ubo = None;
        self.draw_bind_group = None;
        self.draw_capacity = 0;
    }

    fn ensure_projection_binding(&mut self, ctx: &RenderCtx<'_>) {
        if self.projection_bind_group.is_some() && self.projection_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.projection_bgl.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("planar projection ubo"),
            size: std::mem::size_of::<ProjectionUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("planar projection bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.projection_ubo = Some(ubo);
        self.projection_bind_group = Some(bind_group);
    }

    fn ensure_draw_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        let alignment = ctx.device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = align_to(std::mem::size_of::<DrawUniform>() as u64, alignment);

        if required <= self.draw_capacity
            && stride == self.draw_stride
            && self.draw_bind_group.is_some()
        {
            return;
        }
        let Some(bgl) = self.draw_bgl.as_ref() else { return };

        let new_cap = required.next_power_of_two().max(16);
        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("planar draw ubo"),
            size: new_cap as u64 * stride,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("planar draw bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &ubo,
                    offset: 0,
                    size: Some(min_binding_size::<DrawUniform>()),
                }),
            }],
        });

        self.draw_ubo = Some(ubo);
        self.draw_bind_group = Some(bind_group);
        self.draw_capacity = new_cap;
        self.draw_stride = stride;
    }

    fn write_projection_uniform(&mut self, ctx: &RenderCtx<'_>, batch: &ShapeBatch) {
        let Some(ubo) = self.projection_ubo.as_ref() else { return };
        let u = ProjectionUniform::new(batch.projection());
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn write_draw_uniforms(&mut self, ctx: &RenderCtx<'_>, batch: &ShapeBatch) {
        if batch.items().is_empty() {
            return;
        }
        self.ensure_draw_capacity(ctx, batch.items().len());

        let stride = self.draw_stride as usize;
        if stride == 0 || self.draw_ubo.is_none() {
            return;
        }
        self.draw_bytes.clear();
        self.draw_bytes.resize(stride * batch.items().len(), 0);

        for (slot, item) in self.draw_bytes.chunks_exact_mut(stride).zip(batch.items()) {
            let u = DrawUniform::new(&item.model, item.color);
            let bytes = bytemuck::bytes_of(&u);
            slot[..bytes.len()].copy_from_slice(bytes);
        }

        let Some(ubo) = self.draw_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, &self.draw_bytes);
    }

    fn write_vertices(&mut self, ctx: &RenderCtx<'_>) {
        if self.expanded.is_empty() {
            return;
        }

        let raw: Vec<ShapeVertex> = self.expanded.iter().map(|&p| ShapeVertex::from(p)).collect();

        if raw.len() > self.vbo_capacity || self.vbo.is_none() {
            let new_cap = raw.len().next_power_of_two().max(256);
            self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("planar shape vbo"),
                size: (new_cap * std::mem::size_of::<ShapeVertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vbo_capacity = new_cap;
        }

        let Some(vbo) = self.vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&raw));
    }
}
