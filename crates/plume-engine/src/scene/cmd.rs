use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::text::FontId;

/// Opaque handle to a decoded image owned by the painting side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageId(pub usize);

/// Stroke drawn along the inner edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Solid rectangle fill.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Unfilled rectangle outline.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameCmd {
    pub rect: Rect,
    pub border: Border,
}

/// Straight line segment with a square cap.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

/// Single-line text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the text line in logical pixels.
    pub origin: Vec2,
}

/// Image blitted unscaled at `rect.origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub rect: Rect,
    pub image: ImageId,
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Frame(FrameCmd),
    Line(LineCmd),
    Text(TextCmd),
    Image(ImageCmd),
}
