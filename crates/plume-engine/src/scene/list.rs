use core::cmp::Ordering;

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::text::FontId;

use super::{Border, DrawCmd, FrameCmd, ImageCmd, ImageId, LineCmd, RectCmd, TextCmd};

/// Z-ordering key for draw items. Higher values appear on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BACKGROUND: ZIndex = ZIndex(0);
    pub const CONTENT: ZIndex = ZIndex(10);
    pub const OVERLAY: ZIndex = ZIndex(20);
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single draw item: z-index, insertion order and command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one paint.
///
/// Paint order is z-index first, then insertion order, so items pushed at the
/// same z keep their relative order.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { z, order, cmd });
    }

    /// Commands back-to-front.
    pub fn in_paint_order(&self) -> Vec<&DrawCmd> {
        let mut sorted: Vec<&DrawItem> = self.items.iter().collect();
        sorted.sort_by(|a, b| a.z.cmp(&b.z).then(a.order.cmp(&b.order)));
        sorted.into_iter().map(|i| &i.cmd).collect()
    }

    // ── push helpers ──────────────────────────────────────────────────────

    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, color }));
    }

    pub fn push_frame(&mut self, z: ZIndex, rect: Rect, border: Border) {
        self.push(z, DrawCmd::Frame(FrameCmd { rect, border }));
    }

    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, color }));
    }

    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd { text: text.into(), font, size, color, origin }));
    }

    pub fn push_image(&mut self, z: ZIndex, rect: Rect, image: ImageId) {
        self.push(z, DrawCmd::Image(ImageCmd { rect, image }));
    }
}
