use std::collections::HashMap;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawList, Layer, TextCmd};
use crate::text::FontSystem;

use super::common::{
    collect_by_layer, create_pipeline, create_viewport_ubo, viewport_layout_entry,
    InstanceBuffer, UnitQuad, ViewportUniform,
};

// ── atlas ─────────────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 1024;
const GLYPH_PADDING: u32 = 1;

#[derive(Copy, Clone)]
struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// Shelf-packed single-channel glyph atlas.
///
/// When a glyph no longer fits, the atlas is wiped and refilled from the
/// glyphs of the current frame; the generation counter tells the renderer
/// that cached UVs are stale.
struct GlyphAtlas {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    cache: HashMap<GlyphRasterConfig, CachedGlyph>,
}

impl GlyphAtlas {
    fn new(ctx: &RenderCtx<'_>) -> Self {
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("studio glyph atlas"),
            size: wgpu::Extent3d { width: ATLAS_SIZE, height: ATLAS_SIZE, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            texture,
            view,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            cache: HashMap::new(),
        }
    }

    fn reset(&mut self) {
        self.cursor_x = GLYPH_PADDING;
        self.cursor_y = GLYPH_PADDING;
        self.row_height = 0;
        self.cache.clear();
    }

    /// Returns the cached glyph or rasterizes and uploads it. `None` when
    /// the atlas is full.
    fn glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        font: &fontdue::Font,
        key: GlyphRasterConfig,
    ) -> Option<CachedGlyph> {
        if let Some(g) = self.cache.get(&key) {
            return Some(*g);
        }

        let (metrics, bitmap) = font.rasterize_config(key);
        let (w, h) = (metrics.width as u32, metrics.height as u32);
        if w == 0 || h == 0 {
            return None;
        }

        if self.cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }
        if self.cursor_y + h + GLYPH_PADDING > ATLAS_SIZE {
            return None;
        }

        let (gx, gy) = (self.cursor_x, self.cursor_y);
        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            &bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);

        let size = ATLAS_SIZE as f32;
        let glyph = CachedGlyph {
            uv_min: [gx as f32 / size, gy as f32 / size],
            uv_max: [(gx + w) as f32 / size, (gy + h) as f32 / size],
        };
        self.cache.insert(key, glyph);
        Some(glyph)
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for [`TextCmd`]s.
///
/// Glyphs are rasterized with fontdue at the window's scale factor so text
/// stays crisp on HiDPI displays, then cached in a glyph atlas keyed by
/// `GlyphRasterConfig` (font, glyph and pixel size).
pub struct TextRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,
    atlas: Option<GlyphAtlas>,
    unit_quad: Option<UnitQuad>,
    instances: InstanceBuffer,
    scratch: Vec<GlyphInstance>,
    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            viewport_ubo: None,
            sampler: None,
            atlas: None,
            unit_quad: None,
            instances: InstanceBuffer::new("studio glyph instances"),
            scratch: Vec::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out and uploads every text run of `list`.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, list: &DrawList, fonts: &FontSystem) {
        self.ensure_pipeline(ctx);
        if self.atlas.is_none() {
            self.atlas = Some(GlyphAtlas::new(ctx));
        }
        if self.unit_quad.is_none() {
            self.unit_quad = Some(UnitQuad::new(ctx, "studio text unit"));
        }
        self.ensure_bindings(ctx);

        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
        }

        let mut scratch = std::mem::take(&mut self.scratch);
        let (mut ranges, complete) = self.build_instances(ctx, list, fonts, &mut scratch);
        if !complete {
            log::debug!("glyph atlas full, rebuilding");
            if let Some(atlas) = self.atlas.as_mut() {
                atlas.reset();
            }
            let (retry_ranges, complete) = self.build_instances(ctx, list, fonts, &mut scratch);
            if !complete {
                log::warn!("glyph atlas ({ATLAS_SIZE}x{ATLAS_SIZE}) cannot hold this frame's text; some glyphs are missing");
            }
            ranges = retry_ranges;
        }
        self.instances.upload(ctx, &scratch, ranges);
        self.scratch = scratch;
    }

    /// Draws the text of `layer` uploaded by the last [`prepare`](Self::prepare).
    pub fn draw(&self, target: &mut RenderTarget<'_>, layer: Layer) {
        let range = self.instances.range(layer);
        if range.is_empty() {
            return;
        }

        let Some(pipeline)   = self.pipeline.as_ref()   else { return; };
        let Some(bind_group) = self.bind_group.as_ref() else { return; };
        let Some(unit_quad)  = self.unit_quad.as_ref()  else { return; };
        let Some(instances)  = self.instances.buffer()  else { return; };

        let mut rpass = target.load_pass("studio text pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, unit_quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instances.slice(..));
        rpass.set_index_buffer(unit_quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, range);
    }

    /// Fills `out` with glyph instances grouped by layer. The flag is
    /// `false` if some glyph did not fit in the atlas.
    fn build_instances(
        &mut self,
        ctx: &RenderCtx<'_>,
        list: &DrawList,
        fonts: &FontSystem,
        out: &mut Vec<GlyphInstance>,
    ) -> ([Range<u32>; Layer::COUNT], bool) {
        out.clear();
        let Some(atlas) = self.atlas.as_mut() else {
            return (Default::default(), true);
        };
        let layout = &mut self.layout;
        let scale = ctx.scale_factor;
        let mut complete = true;

        let ranges = collect_by_layer(out, |layer, out| {
            for cmd in list.texts(layer) {
                complete &= layout_run(ctx, atlas, layout, fonts, cmd, scale, out);
            }
        });
        (ranges, complete)
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("studio text shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("studio text bgl"),
            entries: &[
                viewport_layout_entry(),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline = create_pipeline(ctx, "studio text pipeline", &shader, &bgl, GlyphInstance::layout());

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

        if self.sampler.is_none() {
            self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("studio text sampler"),
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                address_mode_w: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                mipmap_filter: wgpu::MipmapFilterMode::Nearest,
                ..Default::default()
            }));
        }

        let Some(bgl)     = self.bind_group_layout.as_ref() else { return; };
        let Some(atlas)   = self.atlas.as_ref()             else { return; };
        let Some(sampler) = self.sampler.as_ref()           else { return; };

        let viewport_ubo = create_viewport_ubo(ctx, "studio text viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("studio text bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: viewport_ubo.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(&atlas.view) },
                wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(sampler) },
            ],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }
}

/// Lays out one run at physical size and appends its glyphs in logical
/// coordinates. Returns `false` if a glyph could not be placed.
fn layout_run(
    ctx: &RenderCtx<'_>,
    atlas: &mut GlyphAtlas,
    layout: &mut Layout<()>,
    fonts: &FontSystem,
    cmd: &TextCmd,
    scale: f32,
    out: &mut Vec<GlyphInstance>,
) -> bool {
    let Some(font) = fonts.get(cmd.font) else {
        log::warn!("unknown {:?}, skipping text run", cmd.font);
        return true;
    };

    layout.reset(&LayoutSettings {
        x: (cmd.origin.x * scale).round(),
        y: (cmd.origin.y * scale).round(),
        ..LayoutSettings::default()
    });
    layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size * scale, 0));

    let color = cmd.color.to_array();
    let mut complete = true;
    for g in layout.glyphs() {
        if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
            continue;
        }
        let Some(cached) = atlas.glyph(ctx, font, g.key) else {
            complete = false;
            continue;
        };
        out.push(GlyphInstance {
            dst_min: [g.x / scale, g.y / scale],
            dst_max: [(g.x + g.width as f32) / scale, (g.y + g.height as f32) / scale],
            uv_min: cached.uv_min,
            uv_max: cached.uv_max,
            color,
        });
    }
    complete
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min:  [f32; 2],
    uv_max:  [f32; 2],
    color:   [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32x2,
        4 => Float32x2,
        5 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
