use bytemuck::{Pod, Zeroable};

use crate::paint::Paint;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawList, Layer, QuadCmd};

use super::common::{
    collect_by_layer, create_pipeline, create_viewport_ubo, viewport_layout_entry,
    InstanceBuffer, UnitQuad, ViewportUniform,
};

/// Renderer for [`QuadCmd`]s: rounded rects with solid or two-stop linear
/// gradient fill, optional inner border and optional edge blur.
pub struct QuadRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    unit_quad: Option<UnitQuad>,
    instances: InstanceBuffer,
    scratch: Vec<QuadInstance>,
    warned_multi_stop: bool,
}

impl Default for QuadRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            viewport_ubo: None,
            unit_quad: None,
            instances: InstanceBuffer::new("studio quad instances"),
            scratch: Vec::new(),
            warned_multi_stop: false,
        }
    }
}

impl QuadRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds pipelines on first use and uploads every quad of `list`.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, list: &DrawList) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        if self.unit_quad.is_none() {
            self.unit_quad = Some(UnitQuad::new(ctx, "studio quad unit"));
        }

        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
        }

        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        let warned = &mut self.warned_multi_stop;
        let ranges = collect_by_layer(&mut scratch, |layer, out| {
            out.extend(list.quads(layer).map(|q| QuadInstance::from_cmd(q, warned)));
        });
        self.instances.upload(ctx, &scratch, ranges);
        self.scratch = scratch;
    }

    /// Draws the quads of `layer` uploaded by the last [`prepare`](Self::prepare).
    pub fn draw(&self, target: &mut RenderTarget<'_>, layer: Layer) {
        let range = self.instances.range(layer);
        if range.is_empty() {
            return;
        }

        let Some(pipeline)   = self.pipeline.as_ref()   else { return; };
        let Some(bind_group) = self.bind_group.as_ref() else { return; };
        let Some(unit_quad)  = self.unit_quad.as_ref()  else { return; };
        let Some(instances)  = self.instances.buffer()  else { return; };

        let mut rpass = target.load_pass("studio quad pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, unit_quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instances.slice(..));
        rpass.set_index_buffer(unit_quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, range);
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("studio quad shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/quad.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("studio quad bgl"),
            entries: &[viewport_layout_entry()],
        });

        let pipeline = create_pipeline(ctx, "studio quad pipeline", &shader, &bgl, QuadInstance::layout());

        log::debug!("quad pipeline built for {:?}", ctx.surface_format);
        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return; };

        let viewport_ubo = create_viewport_ubo(ctx, "studio quad viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("studio quad bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (104 bytes):
///
///  offset  0  origin        [f32; 2]   loc 1
///  offset  8  size          [f32; 2]   loc 2
///  offset 16  radii         [f32; 4]   loc 3  (tl, tr, br, bl)
///  offset 32  color0        [f32; 4]   loc 4
///  offset 48  color1        [f32; 4]   loc 5
///  offset 64  grad_p0       [f32; 2]   loc 6
///  offset 72  grad_p1       [f32; 2]   loc 7
///  offset 80  border_blur   [f32; 2]   loc 8  (.x = border width, .y = blur)
///  offset 88  border_color  [f32; 4]   loc 9
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadInstance {
    origin: [f32; 2],
    size: [f32; 2],
    radii: [f32; 4],
    color0: [f32; 4],
    color1: [f32; 4],
    grad_p0: [f32; 2],
    grad_p1: [f32; 2],
    border_blur: [f32; 2],
    border_color: [f32; 4],
}

impl QuadInstance {
    const ATTRS: [wgpu::VertexAttribute; 9] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x2,
        7 => Float32x2,
        8 => Float32x2,
        9 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    fn from_cmd(cmd: &QuadCmd, warned_multi_stop: &mut bool) -> Self {
        let (color0, color1, grad_p0, grad_p1) = resolve_paint(&cmd.paint, warned_multi_stop);
        let (border_width, border_color) = match cmd.border {
            Some(b) => (b.width.max(0.0), b.color.to_array()),
            None => (0.0, [0.0; 4]),
        };
        Self {
            origin: [cmd.rect.origin.x, cmd.rect.origin.y],
            size: [cmd.rect.size.x, cmd.rect.size.y],
            radii: cmd.radii.clamped_to(cmd.rect).to_array(),
            color0,
            color1,
            grad_p0,
            grad_p1,
            border_blur: [border_width, cmd.blur.max(0.0)],
            border_color,
        }
    }
}

/// `(color0, color1, grad_p0, grad_p1)` for the shader.
///
/// Solid fills get a zero-length axis, which the shader reads as "use
/// color0". Only the first and last stop of a gradient reach the GPU.
fn resolve_paint(
    paint: &Paint,
    warned_multi_stop: &mut bool,
) -> ([f32; 4], [f32; 4], [f32; 2], [f32; 2]) {
    match paint {
        Paint::Solid(c) => {
            let col = c.to_array();
            (col, col, [0.0; 2], [0.0; 2])
        }
        Paint::LinearGradient(g) if g.is_valid() => {
            if g.stops.len() > 2 && !*warned_multi_stop {
                log::debug!("quad renderer draws 2-stop gradients; using first and last stop");
                *warned_multi_stop = true;
            }
            (
                g.start_color().to_array(),
                g.end_color().to_array(),
                [g.start.x, g.start.y],
                [g.end.x, g.end.y],
            )
        }
        Paint::LinearGradient(g) => {
            let col = g.start_color().to_array();
            (col, col, [0.0; 2], [0.0; 2])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::{Color, LinearGradient};

    #[test]
    fn instance_layout_is_104_bytes() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), 104);
    }

    #[test]
    fn solid_paint_has_degenerate_axis() {
        let mut warned = false;
        let (c0, c1, p0, p1) = resolve_paint(&Paint::Solid(Color::WHITE), &mut warned);
        assert_eq!(c0, c1);
        assert_eq!(p0, p1);
    }

    #[test]
    fn gradient_paint_passes_endpoints() {
        let g = LinearGradient::even(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 50.0),
            &[Color::BLACK, Color::WHITE, Color::BLACK],
        );
        let mut warned = false;
        let (c0, c1, p0, p1) = resolve_paint(&Paint::LinearGradient(g), &mut warned);
        assert_eq!(c0, Color::BLACK.to_array());
        assert_eq!(c1, Color::BLACK.to_array());
        assert_eq!(p0, [0.0, 0.0]);
        assert_eq!(p1, [0.0, 50.0]);
        assert!(warned);
    }

    #[test]
    fn instance_clamps_radii_and_blur() {
        let cmd = QuadCmd::new(Rect::new(0.0, 0.0, 40.0, 40.0), Color::BLACK)
            .radius(100.0)
            .border(2.0, Color::WHITE);
        let inst = QuadInstance::from_cmd(&cmd, &mut false);
        assert_eq!(inst.radii, [20.0; 4]);
        assert_eq!(inst.border_blur, [2.0, 0.0]);
    }
}
