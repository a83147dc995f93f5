use std::fmt;
use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned when a font file cannot be read or parsed.
#[derive(Debug, Clone)]
pub struct FontLoadError {
    pub source_name: String,
    pub reason: String,
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load font {}: {}", self.source_name, self.reason)
    }
}

impl std::error::Error for FontLoadError {}

/// Handle to a font loaded into a [`FontSystem`]. The default handle is the
/// first font loaded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Loaded fonts. Immutable after loading.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType/OpenType font from memory.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        self.load_named("<memory>", bytes)
    }

    /// Reads and parses a font file.
    pub fn load_font_file(&mut self, path: &Path) -> Result<FontId, FontLoadError> {
        let name = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|e| FontLoadError {
            source_name: name.clone(),
            reason: e.to_string(),
        })?;
        self.load_named(&name, &bytes)
    }

    fn load_named(&mut self, name: &str, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError { source_name: name.to_string(), reason: e.to_string() })?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {name} as {id:?}");
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Height of one line box at `size`, in the same units as `size`.
    pub fn line_height(&self, id: FontId, size: f32) -> f32 {
        self.get(id)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map(|m| m.ascent - m.descent)
            .unwrap_or(size * 1.2)
    }

    /// Size of a single-line string in logical pixels.
    ///
    /// Layout runs at `size * scale` (the renderer's raster size) and the
    /// result is scaled back, so widths match what is actually drawn.
    /// Height is the font's line box, independent of the glyphs present, so
    /// labels with and without descenders line up.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, scale: f32) -> Vec2 {
        let scale = scale.max(0.01);
        let height = self.line_height(id, size);

        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, height);
        };

        let phys_size = size * scale;
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, phys_size, 0));

        // Pen position after the last glyph, not the bitmap edge, so trailing
        // whitespace and side bearings count.
        let width = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, phys_size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max)
            / scale;

        Vec2::new(width, height)
    }
}
