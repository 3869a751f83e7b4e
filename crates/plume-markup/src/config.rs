use crate::palette;

/// Straight-alpha RGBA bytes.
pub type Rgba = [u8; 4];

// ── Padding ───────────────────────────────────────────────────────────────

/// Insets on all four sides, in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    #[inline]
    pub fn all(v: u32) -> Self {
        Self { top: v, bottom: v, left: v, right: v }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> u32 {
        self.left + self.right
    }
}

// ── Align ─────────────────────────────────────────────────────────────────

/// Horizontal placement of a single-item row inside the content width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

// ── DialogConfig ──────────────────────────────────────────────────────────

/// Dialog-wide settings read from the `#global` line.
///
/// Built once by the parser and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogConfig {
    /// Space between the content and the dialog edge.
    pub margin: Padding,
    /// Text wider than this shrinks its font.
    pub max_width: u32,
    /// Content taller than this is reported, not clipped.
    pub max_height: u32,
    /// Font size for items without a `fontsize` option.
    pub font_size: u32,
    /// Top padding given to items that do not set one.
    pub space_before: u32,
    /// Alignment for items without their own override.
    pub align: Align,
    pub border_width: u32,
    pub border_color: Rgba,
    pub background: Rgba,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            margin: Padding::all(10),
            max_width: 800,
            max_height: 800,
            font_size: 14,
            space_before: 20,
            align: Align::Left,
            border_width: 3,
            border_color: palette::BRICK,
            background: palette::WHITE,
        }
    }
}
