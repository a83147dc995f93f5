//! GPU types and helpers shared by the renderers.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::RenderCtx;
use crate::scene::Layer;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub size: [f32; 2],
    pub scale: f32,
    pub _pad: f32,
}

impl ViewportUniform {
    pub(super) fn from_ctx(ctx: &RenderCtx<'_>) -> Self {
        Self {
            size: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            scale: ctx.scale_factor,
            _pad: 0.0,
        }
    }

    pub(super) fn min_binding_size() -> Option<std::num::NonZeroU64> {
        std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
    }
}

pub(super) fn viewport_layout_entry() -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: ViewportUniform::min_binding_size(),
        },
        count: None,
    }
}

pub(super) fn create_viewport_ubo(ctx: &RenderCtx<'_>, label: &'static str) -> wgpu::Buffer {
    ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<ViewportUniform>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

// ── unit quad ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub corner: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { corner: [0.0, 0.0] },
    QuadVertex { corner: [1.0, 0.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [0.0, 1.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Vertex and index buffers of the unit quad every instance is stretched from.
pub(super) struct UnitQuad {
    pub vbo: wgpu::Buffer,
    pub ibo: wgpu::Buffer,
}

impl UnitQuad {
    pub(super) fn new(ctx: &RenderCtx<'_>, label: &'static str) -> Self {
        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self { vbo, ibo }
    }
}

// ── instance buffer ───────────────────────────────────────────────────────

/// Growable instance buffer plus the instance range of each layer.
pub(super) struct InstanceBuffer {
    label: &'static str,
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
    ranges: [Range<u32>; Layer::COUNT],
}

impl InstanceBuffer {
    pub(super) fn new(label: &'static str) -> Self {
        Self { label, buffer: None, capacity: 0, ranges: Default::default() }
    }

    /// Uploads `instances`; `ranges` index into it per layer.
    pub(super) fn upload<T: Pod>(
        &mut self,
        ctx: &RenderCtx<'_>,
        instances: &[T],
        ranges: [Range<u32>; Layer::COUNT],
    ) {
        self.ranges = ranges;
        if instances.is_empty() {
            return;
        }
        if instances.len() > self.capacity || self.buffer.is_none() {
            let cap = instances.len().next_power_of_two().max(64);
            self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: (cap * std::mem::size_of::<T>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = cap;
        }
        if let Some(buf) = self.buffer.as_ref() {
            ctx.queue.write_buffer(buf, 0, bytemuck::cast_slice(instances));
        }
    }

    pub(super) fn range(&self, layer: Layer) -> Range<u32> {
        self.ranges[layer.index()].clone()
    }

    pub(super) fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }
}

/// Runs `emit` for each layer in paint order and records which slice of
/// `out` each layer produced.
pub(super) fn collect_by_layer<T>(
    out: &mut Vec<T>,
    mut emit: impl FnMut(Layer, &mut Vec<T>),
) -> [Range<u32>; Layer::COUNT] {
    let mut ranges: [Range<u32>; Layer::COUNT] = Default::default();
    for layer in Layer::ALL {
        let start = out.len() as u32;
        emit(layer, out);
        ranges[layer.index()] = start..out.len() as u32;
    }
    ranges
}

// ── pipeline ──────────────────────────────────────────────────────────────

/// Instanced alpha-blended pipeline over the unit quad.
pub(super) fn create_pipeline(
    ctx: &RenderCtx<'_>,
    label: &'static str,
    shader: &wgpu::ShaderModule,
    bgl: &wgpu::BindGroupLayout,
    instance_layout: wgpu::VertexBufferLayout<'static>,
) -> wgpu::RenderPipeline {
    let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &[bgl],
        immediate_size: 0,
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[QuadVertex::layout(), instance_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(premul_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_by_layer_records_contiguous_ranges() {
        let mut out = Vec::new();
        let ranges = collect_by_layer(&mut out, |layer, out| {
            if layer != Layer::Content {
                out.push(layer.index());
                out.push(layer.index());
            }
        });
        assert_eq!(out, vec![0, 0, 2, 2, 3, 3]);
        assert_eq!(ranges[Layer::Background.index()], 0..2);
        assert_eq!(ranges[Layer::Content.index()], 2..2);
        assert_eq!(ranges[Layer::Overlay.index()], 2..4);
        assert_eq!(ranges[Layer::Modal.index()], 4..6);
    }

    #[test]
    fn viewport_uniform_is_16_bytes() {
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 16);
    }
}
