use std::fmt;

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// `FontId::default()` names the first loaded font.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts. Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Bounding box of `text` laid out on a single line, in logical pixels.
    ///
    /// Width is the pen advance after the last glyph; height is at least the
    /// font's line height. An unknown `id` yields a zero-width line.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.fonts.get(id.0) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let line_h = font
            .horizontal_line_metrics(size)
            .map(|m| m.new_line_size)
            .unwrap_or(size * 1.2);

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, line_h);
        }

        // Advance extent rather than bitmap edge, so trailing spaces count.
        let w = glyphs.iter().map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, size);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        }).fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(line_h, f32::max);
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
