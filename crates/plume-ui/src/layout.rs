//! Two-pass dialog layout.
//!
//! [`stack`] places every item at its natural size, top to bottom and left
//! to right within a row. [`align`] then shifts single-item rows to their
//! alignment inside the content width and stretches fill separators. Both
//! are pure functions of their inputs; [`layout`] runs them in order.

use plume_engine::coords::{Rect, Vec2};
use plume_engine::scene::ImageId;
use plume_markup::{Align, DialogConfig, Document, Item, ItemKind};

use crate::metrics::LayoutCtx;

// ── Laid-out items ────────────────────────────────────────────────────────

/// An item together with its measured and final geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidItem {
    pub item: Item,
    /// Font size after overflow shrinking; equals `item.font_size` otherwise.
    pub font_size: u32,
    /// Decoded image, for image items whose source loaded.
    pub image: Option<ImageId>,
    /// Position and natural size from the stacking pass.
    pub natural: Rect,
    /// Final position and size after alignment.
    pub bounds: Rect,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidRow {
    pub items: Vec<LaidItem>,
}

/// Geometry of a whole dialog. `size` is the content pane including margins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub rows: Vec<LaidRow>,
    pub size: Vec2,
}

impl Layout {
    /// Content width between the left and right margins.
    pub fn available_width(&self, config: &DialogConfig) -> f32 {
        (self.size.x - config.margin.h() as f32).max(0.0)
    }

    pub fn items(&self) -> impl Iterator<Item = &LaidItem> {
        self.rows.iter().flat_map(|r| r.items.iter())
    }

    /// Row and index of the topmost item whose bounds contain `pos`.
    pub fn hit(&self, pos: Vec2) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.items.iter().position(|it| it.bounds.contains(pos)).map(|i| (r, i))
        })
    }
}

// ── Pass 1: measure and stack ─────────────────────────────────────────────

/// Natural size of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    pub size: Vec2,
    pub font_size: u32,
    pub image: Option<ImageId>,
}

/// Measures `item` on its own.
///
/// Text wider than `config.max_width` gets a proportionally smaller font, never
/// below 1pt, and is measured again once. Images keep their pixel size; a
/// missing image measures zero. Fill separators measure zero wide.
pub fn measure(item: &Item, config: &DialogConfig, ctx: &LayoutCtx) -> Measured {
    match &item.kind {
        ItemKind::Separator { length, stroke, .. } => Measured {
            size: Vec2::new(*length as f32, *stroke as f32),
            font_size: item.font_size,
            image: None,
        },
        ItemKind::Image { source, resize, .. } => {
            let image = ctx.images.lookup(source, *resize);
            let size = image.map(|id| ctx.images.size(id)).unwrap_or_default();
            Measured { size, font_size: item.font_size, image }
        }
        _ => {
            let text = item.display_text().unwrap_or_default();
            let mut font_size = item.font_size;
            let mut size = ctx.text.measure(&text, font_size as f32, item.bold);
            let max_w = config.max_width as f32;
            if size.x > max_w && max_w > 0.0 {
                font_size = (font_size as f32 * max_w / size.x).floor().max(1.0) as u32;
                log::debug!("shrinking {text:?} from {} to {font_size}pt", item.font_size);
                size = ctx.text.measure(&text, font_size as f32, item.bold);
            }
            Measured { size, font_size, image: None }
        }
    }
}

/// First pass: natural positions, with `bounds == natural`.
///
/// The first item of a row starts at the left margin below everything laid
/// out so far; later items follow the previous one after their left padding
/// and share the row's top. Top padding is ignored on the first row.
pub fn stack(doc: &Document, ctx: &LayoutCtx) -> Layout {
    let config = &doc.config;
    let margin = config.margin;

    let mut cursor_y = margin.top as f32;
    let mut max_w = 0.0f32;
    let mut rows = Vec::with_capacity(doc.rows.len());

    for (r, row) in doc.rows.iter().enumerate() {
        let row_top = cursor_y;
        let mut prev_right = margin.left as f32;
        let mut laid = Vec::with_capacity(row.len());

        for (i, item) in row.items().iter().enumerate() {
            let m = measure(item, config, ctx);
            let pad_top = if r == 0 { 0.0 } else { item.padding.top as f32 };

            let (x, y) = if i == 0 {
                (margin.left as f32, row_top + pad_top)
            } else {
                (prev_right + item.padding.left as f32, row_top + pad_top)
            };
            let rect = Rect::from_origin_size(Vec2::new(x, y), m.size);

            cursor_y = if i == 0 { y + m.size.y } else { cursor_y.max(y + m.size.y) };
            prev_right = x + m.size.x;
            max_w = max_w.max(prev_right + margin.right as f32);

            laid.push(LaidItem {
                item: item.clone(),
                font_size: m.font_size,
                image: m.image,
                natural: rect,
                bounds: rect,
            });
        }
        rows.push(LaidRow { items: laid });
    }

    Layout { rows, size: Vec2::new(max_w, cursor_y + margin.bottom as f32) }
}

// ── Pass 2: align ─────────────────────────────────────────────────────────

/// Second pass: horizontal alignment of single-item rows.
///
/// Recomputes every `bounds` from `natural`, so running it again gives the
/// same result. Multi-item rows keep their packed positions.
pub fn align(layout: &mut Layout, config: &DialogConfig) {
    let available = layout.available_width(config);

    for row in &mut layout.rows {
        if row.items.len() != 1 {
            for it in &mut row.items {
                it.bounds = it.natural;
            }
            continue;
        }

        let it = &mut row.items[0];
        if it.item.is_fill() {
            it.bounds = Rect::new(it.natural.origin.x, it.natural.origin.y, available, it.natural.size.y);
            continue;
        }

        let w = it.natural.size.x;
        let offset = match it.item.effective_align(config) {
            Align::Left => 0.0,
            Align::Center => ((available - w) / 2.0).floor(),
            Align::Right => available - w,
        };
        it.bounds = it.natural.shifted_x(offset.max(0.0));
    }
}

/// Runs both passes. Content taller than `max_height` is logged, not clipped.
pub fn layout(doc: &Document, ctx: &LayoutCtx) -> Layout {
    let mut out = stack(doc, ctx);
    align(&mut out, &doc.config);
    if out.size.y > doc.config.max_height as f32 {
        log::warn!(
            "dialog content is {}px tall, more than max height {}",
            out.size.y,
            doc.config.max_height
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{png_bytes, ImageStore};
    use crate::metrics::testing::FixedAdvance;
    use crate::resource::MemoryLoader;
    use plume_markup::{parse_str, Variables};

    fn run(src: &str) -> (Document, Layout) {
        let doc = parse_str(src, &Variables::default());
        let images = ImageStore::new();
        let out = layout(&doc, &LayoutCtx::new(&FixedAdvance, &images));
        (doc, out)
    }

    fn bounds(l: &Layout, row: usize, idx: usize) -> Rect {
        l.rows[row].items[idx].bounds
    }

    #[test]
    fn scenario_centered_rows_and_packed_buttons() {
        let (doc, l) = run("#global;margin 5;center\nHello\n#action;Go;show other\n#buttons;OK|Cancel");

        assert_eq!(l.size, Vec2::new(114.0, 101.0));
        assert_eq!(l.available_width(&doc.config), 104.0);

        assert_eq!(bounds(&l, 0, 0), Rect::new(39.0, 5.0, 35.0, 17.0));
        assert_eq!(bounds(&l, 1, 0), Rect::new(50.0, 42.0, 14.0, 17.0));
        // Button rows stay left-packed even in a centered dialog.
        assert_eq!(bounds(&l, 2, 0), Rect::new(5.0, 79.0, 28.0, 17.0));
        assert_eq!(bounds(&l, 2, 1), Rect::new(53.0, 79.0, 56.0, 17.0));
    }

    #[test]
    fn first_row_ignores_top_padding() {
        let (_, l) = run("First;top 50\nSecond");
        assert_eq!(bounds(&l, 0, 0).origin.y, 10.0);
        assert_eq!(bounds(&l, 1, 0).origin.y, 10.0 + 17.0 + 20.0);
    }

    #[test]
    fn left_aligned_rows_start_at_margin() {
        let (doc, l) = run("short\na much longer line\nmid");
        for it in l.items() {
            assert_eq!(it.bounds.origin.x, doc.config.margin.left as f32);
        }
    }

    #[test]
    fn right_alignment_touches_right_margin() {
        let (doc, l) = run("wide wide wide\nx;right");
        let b = bounds(&l, 1, 0);
        assert_eq!(b.max().x, l.size.x - doc.config.margin.right as f32);
    }

    #[test]
    fn fill_separator_spans_available_width() {
        let (doc, l) = run("some text here\n---\n--- 10");
        let fill = bounds(&l, 1, 0);
        assert_eq!(fill.origin.x, 10.0);
        assert_eq!(fill.size.x, l.available_width(&doc.config));
        assert_eq!(fill.size.y, 5.0);

        let fixed = bounds(&l, 2, 0);
        assert_eq!(fixed.size.x, 10.0);
    }

    #[test]
    fn fill_separator_alone_keeps_zero_content_width() {
        let (doc, l) = run("---");
        assert_eq!(l.size.x, 20.0);
        assert_eq!(bounds(&l, 0, 0).size.x, l.available_width(&doc.config));
    }

    #[test]
    fn align_is_idempotent() {
        let (doc, mut l) = run("#global;center\nHello\n---\nx;right\n#buttons;A|B");
        let once = l.clone();
        align(&mut l, &doc.config);
        assert_eq!(l, once);
    }

    #[test]
    fn align_never_changes_natural_sizes_of_non_fill_items() {
        let (_, l) = run("#global;center\nHello\nworld wide");
        for it in l.items() {
            assert_eq!(it.bounds.size, it.natural.size);
            assert_eq!(it.bounds.origin.y, it.natural.origin.y);
        }
    }

    #[test]
    fn next_row_starts_below_tallest_item() {
        let (_, l) = run("top\n#buttons;small|big;fontsize 28\nafter");
        let small = bounds(&l, 1, 0);
        let big = bounds(&l, 1, 1);
        assert_eq!(small.size.y, 35.0);
        assert_eq!(big.origin.y, small.origin.y);
        assert_eq!(bounds(&l, 2, 0).origin.y, big.max().y + 20.0);
    }

    #[test]
    fn wide_text_shrinks_font_to_max_width() {
        let line = "x".repeat(40);
        let (_, l) = run(&format!("#global;size 100 800\n{line}"));
        let it = &l.rows[0].items[0];
        assert_eq!(it.font_size, 5);
        assert!(it.natural.size.x <= 100.0);
        assert_eq!(it.item.font_size, 14);
    }

    #[test]
    fn shrunk_font_stays_at_least_one_point() {
        let (_, l) = run("#global;size 1 800\nhello world");
        let it = &l.rows[0].items[0];
        assert_eq!(it.font_size, 1);
        assert!(!it.bounds.is_empty());
    }

    #[test]
    fn overflowing_height_is_not_clipped() {
        let (doc, l) = run("#global;size 800 30\none\ntwo\nthree");
        assert_eq!(l.rows.len(), 3);
        assert_eq!(bounds(&l, 2, 0).origin.y, 10.0 + 2.0 * (17.0 + 20.0));
        assert!(l.size.y > doc.config.max_height as f32);
        assert_eq!(l.size.y, bounds(&l, 2, 0).max().y + 10.0);
    }

    #[test]
    fn image_wider_than_max_width_keeps_pixel_size() {
        let doc = parse_str("#global;size 50 800\n#image;/wide.png", &Variables::default());
        let loader = MemoryLoader::new().with("/wide.png", png_bytes(120, 10));
        let mut images = ImageStore::new();
        assert!(images.load_document(&doc, &loader).is_empty());

        let l = layout(&doc, &LayoutCtx::new(&FixedAdvance, &images));
        assert_eq!(bounds(&l, 0, 0), Rect::new(10.0, 10.0, 120.0, 10.0));
        assert_eq!(l.size, Vec2::new(140.0, 30.0));
    }

    #[test]
    fn image_uses_decoded_size() {
        let doc = parse_str("#image;/pic.png", &Variables::default());
        let loader = MemoryLoader::new().with("/pic.png", png_bytes(30, 20));
        let mut images = ImageStore::new();
        assert!(images.load_document(&doc, &loader).is_empty());

        let l = layout(&doc, &LayoutCtx::new(&FixedAdvance, &images));
        let it = &l.rows[0].items[0];
        assert!(it.image.is_some());
        assert_eq!(it.bounds, Rect::new(10.0, 10.0, 30.0, 20.0));
        assert_eq!(l.size, Vec2::new(50.0, 40.0));
    }

    #[test]
    fn missing_image_lays_out_empty() {
        let (_, l) = run("#image;/nowhere.png\nafter");
        assert_eq!(bounds(&l, 0, 0).size, Vec2::zero());
        assert_eq!(bounds(&l, 1, 0).origin.y, 30.0);
    }

    #[test]
    fn hit_finds_item_under_point() {
        let (_, l) = run("#buttons;OK|Cancel");
        assert_eq!(l.hit(Vec2::new(12.0, 12.0)), Some((0, 0)));
        assert_eq!(l.hit(Vec2::new(60.0, 12.0)), Some((0, 1)));
        assert_eq!(l.hit(Vec2::new(1.0, 1.0)), None);
    }
}
