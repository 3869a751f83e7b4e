use plume_engine::coords::Vec2;
use plume_engine::text::{FontId, FontSystem};

use crate::images::ImageStore;

// ── TextMeasure ───────────────────────────────────────────────────────────

/// Text measurement and font selection used by layout and painting.
///
/// Implementations return whole-pixel sizes.
pub trait TextMeasure {
    /// Single-line extent of `text` at `size` points.
    fn measure(&self, text: &str, size: f32, bold: bool) -> Vec2;

    /// Font used to draw regular or bold labels.
    fn font(&self, bold: bool) -> FontId;
}

/// [`TextMeasure`] backed by fonts loaded into a [`FontSystem`].
pub struct FontMetrics<'a> {
    pub fonts: &'a FontSystem,
    pub regular: FontId,
    /// Falls back to `regular` when no bold face is loaded.
    pub bold: FontId,
}

impl<'a> FontMetrics<'a> {
    pub fn new(fonts: &'a FontSystem, regular: FontId) -> Self {
        Self { fonts, regular, bold: regular }
    }

    pub fn with_bold(mut self, bold: FontId) -> Self {
        self.bold = bold;
        self
    }
}

impl TextMeasure for FontMetrics<'_> {
    fn measure(&self, text: &str, size: f32, bold: bool) -> Vec2 {
        self.fonts.measure_text(text, self.font(bold), size).floor()
    }

    fn font(&self, bold: bool) -> FontId {
        if bold { self.bold } else { self.regular }
    }
}

// ── LayoutCtx ─────────────────────────────────────────────────────────────

/// Read-only services available while measuring items.
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub text: &'a dyn TextMeasure,
    pub images: &'a ImageStore,
}

impl<'a> LayoutCtx<'a> {
    pub fn new(text: &'a dyn TextMeasure, images: &'a ImageStore) -> Self {
        Self { text, images }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Every glyph advances half the font size; lines are 1.25 × size tall.
    pub(crate) struct FixedAdvance;

    impl TextMeasure for FixedAdvance {
        fn measure(&self, text: &str, size: f32, _bold: bool) -> Vec2 {
            let w = text.chars().count() as f32 * size * 0.5;
            Vec2::new(w, size * 1.25).floor()
        }

        fn font(&self, _bold: bool) -> FontId {
            FontId::default()
        }
    }
}
