use plume_engine::coords::{Rect, Vec2};
use plume_engine::paint::Color;
use plume_engine::scene::{Border, DrawList, ZIndex};
use plume_markup::{palette, ItemKind};

use crate::dialog::Dialog;
use crate::layout::LaidItem;
use crate::metrics::TextMeasure;

/// Width of the frame drawn around a hovered image link.
const IMAGE_HOVER_BORDER: f32 = 3.0;

/// Thin wrapper over a [`DrawList`] that knows how to draw dialog items.
pub struct Painter<'a> {
    list: &'a mut DrawList,
    text: &'a dyn TextMeasure,
}

impl<'a> Painter<'a> {
    pub fn new(list: &'a mut DrawList, text: &'a dyn TextMeasure) -> Self {
        Self { list, text }
    }

    pub fn fill(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.list.push_solid_rect(z, rect, color);
    }

    pub fn frame(&mut self, z: ZIndex, rect: Rect, width: f32, color: Color) {
        if width > 0.0 {
            self.list.push_frame(z, rect, Border::new(width, color));
        }
    }

    /// Label text at the top-left of `rect`, optionally underlined.
    pub fn label(&mut self, rect: Rect, text: &str, size: u32, bold: bool, underline: bool) {
        let font = self.text.font(bold);
        self.list.push_text(ZIndex::CONTENT, text, font, size as f32, Color::BLACK, rect.origin);
        if underline {
            let y = rect.max().y - 1.0;
            self.list.push_line(
                ZIndex::CONTENT,
                Vec2::new(rect.origin.x, y),
                Vec2::new(rect.max().x, y),
                1.0,
                Color::BLACK,
            );
        }
    }

    /// Horizontal rule centered in `rect`, `rect.size.y` thick.
    pub fn rule(&mut self, rect: Rect, color: Color) {
        let y = rect.origin.y + rect.size.y / 2.0;
        self.list.push_line(
            ZIndex::CONTENT,
            Vec2::new(rect.origin.x, y),
            Vec2::new(rect.max().x, y),
            rect.size.y,
            color,
        );
    }

    fn item(&mut self, it: &LaidItem, hovered: bool) {
        let item = &it.item;
        let rect = it.bounds;
        match &item.kind {
            ItemKind::Separator { color, .. } => self.rule(rect, Color::from_rgba8(*color)),
            ItemKind::Image { .. } => {
                if let Some(id) = it.image {
                    self.list.push_image(ZIndex::CONTENT, rect, id);
                }
                if hovered {
                    self.frame(ZIndex::OVERLAY, rect, IMAGE_HOVER_BORDER, Color::from_rgba8(palette::BRICK));
                }
            }
            _ => {
                let bg = if hovered { Some(palette::HIGHLIGHT) } else { item.background };
                if let Some(bg) = bg {
                    self.fill(ZIndex::BACKGROUND, rect, Color::from_rgba8(bg));
                }
                let text = item.display_text().unwrap_or_default();
                self.label(rect, &text, it.font_size, item.bold, item.underline);
            }
        }
    }
}

/// Draws `dialog`: background, items, then the outer border on top.
pub fn paint_dialog(dialog: &Dialog, list: &mut DrawList, text: &dyn TextMeasure) {
    let config = dialog.config();
    let pane = Rect::from_origin_size(Vec2::zero(), dialog.size());
    let hovered = dialog.hovered();

    let mut p = Painter::new(list, text);
    p.fill(ZIndex::BACKGROUND, pane, Color::from_rgba8(config.background));

    for (r, row) in dialog.layout().rows.iter().enumerate() {
        for (i, it) in row.items.iter().enumerate() {
            p.item(it, hovered == Some((r, i)));
        }
    }

    p.frame(
        ZIndex::OVERLAY,
        pane,
        config.border_width as f32,
        Color::from_rgba8(config.border_color),
    );
}
