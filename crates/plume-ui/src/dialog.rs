use plume_engine::coords::{Rect, Vec2};
use plume_engine::scene::{DrawList, ImageId};
use plume_markup::{parse_str, DialogConfig, Diagnostic, Item, ItemKind, ToggleState, Variables};

use crate::event::{EventResult, Key, UiEvent};
use crate::images::ImageStore;
use crate::layout::{layout, Layout};
use crate::metrics::{LayoutCtx, TextMeasure};
use crate::painter;
use crate::resource::{resolve_dialog_name, ResourceError, ResourceLoader};

// ── Placement ─────────────────────────────────────────────────────────────

/// Which point of the dialog sits on the anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Position {
    /// Anchor at the middle of the top edge.
    Top,
    #[default]
    TopLeft,
    /// Anchor at the top-right corner: the dialog extends to the left of it,
    /// mirroring `TopLeft`.
    TopRight,
    Center,
}

impl Position {
    /// Top-left corner of a dialog of `size` placed at `anchor`.
    pub fn origin(self, anchor: Vec2, size: Vec2) -> Vec2 {
        let half_w = (size.x / 2.0).floor();
        let half_h = (size.y / 2.0).floor();
        match self {
            Position::Top => Vec2::new(anchor.x - half_w, anchor.y),
            Position::TopLeft => anchor,
            Position::TopRight => Vec2::new(anchor.x - size.x, anchor.y),
            Position::Center => Vec2::new(anchor.x - half_w, anchor.y - half_h),
        }
    }
}

/// Where a dialog window appears. Without an anchor, the screen center is used.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    pub anchor: Option<Vec2>,
    pub position: Position,
}

impl Placement {
    /// Centered on the screen.
    pub fn centered() -> Self {
        Self { anchor: None, position: Position::Center }
    }

    pub fn at(anchor: Vec2, position: Position) -> Self {
        Self { anchor: Some(anchor), position }
    }

    /// Screen position of a window of `size` on `screen`.
    pub fn origin(&self, size: Vec2, screen: Rect) -> Vec2 {
        let anchor = self.anchor.unwrap_or_else(|| screen.center().floor());
        self.position.origin(anchor, size)
    }
}

// ── DialogAction ──────────────────────────────────────────────────────────

/// Effects a dialog asks its host to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Hide and dispose the dialog window.
    Close,
    /// Open `url` in the system browser.
    Browse(String),
    /// Open another dialog resource, usually with [`Placement::centered`].
    Show(String),
    /// An option item changed state.
    Toggled { row: usize, index: usize, state: ToggleState },
}

enum Click {
    Close,
    Browse(String),
    Show(String),
    Toggle,
    Nothing,
}

// ── Dialog ────────────────────────────────────────────────────────────────

/// A parsed, laid-out dialog and its interaction state.
///
/// The dialog never talks to a window system. The host forwards input via
/// [`on_event`](Self::on_event), paints via [`paint`](Self::paint), and
/// drains requested effects with [`take_actions`](Self::take_actions).
#[derive(Debug)]
pub struct Dialog {
    resource: Option<String>,
    config: DialogConfig,
    layout: Layout,
    images: ImageStore,
    diagnostics: Vec<Diagnostic>,
    resource_errors: Vec<ResourceError>,
    placement: Placement,
    open: bool,
    hovered: Option<(usize, usize)>,
    actions: Vec<DialogAction>,
}

impl Dialog {
    /// Loads dialog resource `res` (see [`resolve_dialog_name`]) and lays it
    /// out. A missing or unreadable resource yields an empty dialog; the
    /// failure is logged and kept in [`resource_errors`](Self::resource_errors).
    pub fn open(
        res: &str,
        placement: Placement,
        loader: &dyn ResourceLoader,
        text: &dyn TextMeasure,
        vars: &Variables,
    ) -> Self {
        let name = resolve_dialog_name(res);
        let (source, error) = match loader.load_text(&name) {
            Ok(s) => (s, None),
            Err(e) => {
                log::error!("dialog {name}: {e}");
                (String::new(), Some(e))
            }
        };
        let mut dialog = Self::from_source(&source, placement, loader, text, vars);
        dialog.resource = Some(name);
        dialog.resource_errors.extend(error);
        dialog
    }

    /// Builds a dialog from markup text. Images are still fetched through `loader`.
    pub fn from_source(
        source: &str,
        placement: Placement,
        loader: &dyn ResourceLoader,
        text: &dyn TextMeasure,
        vars: &Variables,
    ) -> Self {
        let doc = parse_str(source, vars);
        log::debug!("dialog markup read with {} diagnostics", doc.diagnostics.len());

        let mut images = ImageStore::new();
        let resource_errors = images.load_document(&doc, loader);
        let layout = layout(&doc, &LayoutCtx::new(text, &images));
        log::debug!("dialog laid out at {}x{}", layout.size.x, layout.size.y);

        Self {
            resource: None,
            config: doc.config,
            layout,
            images,
            diagnostics: doc.diagnostics,
            resource_errors,
            placement,
            open: true,
            hovered: None,
            actions: Vec::new(),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    /// Resolved resource name, for dialogs created with [`open`](Self::open).
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Window content size.
    pub fn size(&self) -> Vec2 {
        self.layout.size
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn resource_errors(&self) -> &[ResourceError] {
        &self.resource_errors
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    pub fn image(&self, id: ImageId) -> Option<&image::RgbaImage> {
        self.images.get(id)
    }

    pub fn item(&self, row: usize, index: usize) -> Option<&Item> {
        self.layout.rows.get(row)?.items.get(index).map(|it| &it.item)
    }

    pub fn hovered(&self) -> Option<(usize, usize)> {
        self.hovered
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Top-left screen position of the window on `screen`.
    pub fn window_origin(&self, screen: Rect) -> Vec2 {
        self.placement.origin(self.size(), screen)
    }

    // ── interaction ───────────────────────────────────────────────────────

    /// Closes the dialog and queues [`DialogAction::Close`]. No-op when
    /// already closed.
    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            self.hovered = None;
            self.actions.push(DialogAction::Close);
        }
    }

    /// Drains the effects requested since the last call.
    pub fn take_actions(&mut self) -> Vec<DialogAction> {
        std::mem::take(&mut self.actions)
    }

    pub fn on_event(&mut self, event: &UiEvent) -> EventResult {
        if !self.open {
            return EventResult::Ignored;
        }
        match event {
            UiEvent::Click { pos } => match self.active_at(*pos) {
                Some((r, i)) => {
                    self.click(r, i);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            UiEvent::Hover { pos } => {
                self.hovered = self.active_at(*pos);
                EventResult::Ignored
            }
            UiEvent::Leave => {
                self.hovered = None;
                EventResult::Ignored
            }
            UiEvent::KeyPress { key: Key::Escape } => {
                self.close();
                EventResult::Consumed
            }
            UiEvent::KeyPress { .. } => EventResult::Ignored,
        }
    }

    fn active_at(&self, pos: Vec2) -> Option<(usize, usize)> {
        self.layout
            .hit(pos)
            .filter(|&(r, i)| self.item(r, i).is_some_and(|it| it.active))
    }

    fn click(&mut self, row: usize, index: usize) {
        let Some(item) = self.item(row, index) else {
            return;
        };
        let outcome = match &item.kind {
            ItemKind::Link { target, .. } => Click::Browse(target.clone()),
            ItemKind::Image { link: Some(url), .. } => Click::Browse(url.clone()),
            ItemKind::Action { command: Some(cmd), arg, .. } if cmd == "show" => {
                if arg.is_empty() { Click::Nothing } else { Click::Show(arg.clone()) }
            }
            ItemKind::Action { command: Some(cmd), .. } => {
                log::warn!("action {cmd}: not implemented");
                Click::Nothing
            }
            ItemKind::Action { command: None, .. } => Click::Nothing,
            ItemKind::Toggle { .. } => Click::Toggle,
            ItemKind::Text { .. } | ItemKind::Button { .. } => Click::Close,
            ItemKind::Image { link: None, .. } | ItemKind::Separator { .. } => Click::Nothing,
        };

        match outcome {
            Click::Close => self.close(),
            Click::Browse(url) => {
                log::info!("opening {url}");
                self.close();
                self.actions.push(DialogAction::Browse(url));
            }
            Click::Show(res) => self.actions.push(DialogAction::Show(res)),
            Click::Toggle => {
                let state = self.layout.rows[row].items[index].item.toggle_state();
                if let Some(state) = state {
                    self.actions.push(DialogAction::Toggled { row, index, state });
                }
            }
            Click::Nothing => {}
        }
    }

    // ── painting ──────────────────────────────────────────────────────────

    /// Appends the dialog's draw commands to `list`, in dialog-local
    /// coordinates. `text` must be the measurer the dialog was laid out with.
    pub fn paint(&self, list: &mut DrawList, text: &dyn TextMeasure) {
        painter::paint_dialog(self, list, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::png_bytes;
    use crate::metrics::testing::FixedAdvance;
    use crate::resource::MemoryLoader;
    use plume_markup::DiagnosticKind;

    fn dialog(src: &str) -> Dialog {
        Dialog::from_source(src, Placement::default(), &MemoryLoader::new(), &FixedAdvance, &Variables::default())
    }

    fn center_of(d: &Dialog, row: usize, index: usize) -> Vec2 {
        d.layout().rows[row].items[index].bounds.center()
    }

    fn click(d: &mut Dialog, row: usize, index: usize) -> EventResult {
        let pos = center_of(d, row, index);
        d.on_event(&UiEvent::Click { pos })
    }

    #[test]
    fn link_click_closes_then_browses() {
        let mut d = dialog("#link;Docs|https://example.org");
        assert_eq!(click(&mut d, 0, 0), EventResult::Consumed);
        assert_eq!(
            d.take_actions(),
            vec![DialogAction::Close, DialogAction::Browse("https://example.org".into())]
        );
        assert!(!d.is_open());
    }

    #[test]
    fn close_label_closes() {
        let mut d = dialog("#close;Dismiss");
        click(&mut d, 0, 0);
        assert_eq!(d.take_actions(), vec![DialogAction::Close]);
    }

    #[test]
    fn plain_text_is_not_clickable() {
        let mut d = dialog("just words");
        assert_eq!(click(&mut d, 0, 0), EventResult::Ignored);
        assert!(d.take_actions().is_empty());
        assert!(d.is_open());
    }

    #[test]
    fn show_action_requests_other_dialog_and_stays_open() {
        let mut d = dialog("#action;More;show other");
        click(&mut d, 0, 0);
        assert_eq!(d.take_actions(), vec![DialogAction::Show("other".into())]);
        assert!(d.is_open());
    }

    #[test]
    fn unknown_action_does_nothing() {
        let mut d = dialog("#action;Run;launch rockets");
        assert_eq!(click(&mut d, 0, 0), EventResult::Consumed);
        assert!(d.take_actions().is_empty());
        assert!(d.is_open());
    }

    #[test]
    fn option_click_flips_state_each_time() {
        let mut d = dialog("#option;Enable;optA;on");
        click(&mut d, 0, 0);
        click(&mut d, 0, 0);
        assert_eq!(
            d.take_actions(),
            vec![
                DialogAction::Toggled { row: 0, index: 0, state: ToggleState::Off },
                DialogAction::Toggled { row: 0, index: 0, state: ToggleState::On },
            ]
        );
        assert_eq!(d.item(0, 0).and_then(Item::display_text).as_deref(), Some("(X) Enable"));
    }

    #[test]
    fn every_button_closes() {
        for index in 0..2 {
            let mut d = dialog("#buttons;OK|Cancel");
            click(&mut d, 0, index);
            assert_eq!(d.take_actions(), vec![DialogAction::Close]);
        }
    }

    #[test]
    fn escape_closes_once() {
        let mut d = dialog("text");
        let esc = UiEvent::KeyPress { key: Key::Escape };
        assert!(d.on_event(&esc).is_consumed());
        assert_eq!(d.on_event(&esc), EventResult::Ignored);
        assert_eq!(d.take_actions(), vec![DialogAction::Close]);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut d = dialog("text");
        assert_eq!(d.on_event(&UiEvent::KeyPress { key: Key::Enter }), EventResult::Ignored);
        assert!(d.is_open());
    }

    #[test]
    fn hover_tracks_active_items_only() {
        let mut d = dialog("plain\n#link;Go|u");
        d.on_event(&UiEvent::Hover { pos: center_of(&d, 0, 0) });
        assert_eq!(d.hovered(), None);
        d.on_event(&UiEvent::Hover { pos: center_of(&d, 1, 0) });
        assert_eq!(d.hovered(), Some((1, 0)));
        d.on_event(&UiEvent::Leave);
        assert_eq!(d.hovered(), None);
    }

    #[test]
    fn image_link_browses() {
        let loader = MemoryLoader::new().with("/pic.png", png_bytes(20, 10));
        let mut d = Dialog::from_source(
            "#image;/pic.png|https://example.org/pic",
            Placement::default(),
            &loader,
            &FixedAdvance,
            &Variables::default(),
        );
        assert!(d.resource_errors().is_empty());
        click(&mut d, 0, 0);
        assert_eq!(
            d.take_actions(),
            vec![DialogAction::Close, DialogAction::Browse("https://example.org/pic".into())]
        );
    }

    #[test]
    fn open_resolves_name_through_loader() {
        let loader = MemoryLoader::new().with_text("/Settings/about.txt", "About\n#buttons;OK");
        let d = Dialog::open("about", Placement::centered(), &loader, &FixedAdvance, &Variables::default());
        assert_eq!(d.resource(), Some("/Settings/about.txt"));
        assert_eq!(d.layout().rows.len(), 2);
        assert!(d.resource_errors().is_empty());
    }

    #[test]
    fn markup_diagnostics_are_kept() {
        let d = dialog("#global;wobble\n#shiny;Thing\nok");
        let kinds: Vec<_> = d.diagnostics().iter().map(|x| x.kind).collect();
        assert_eq!(kinds, vec![DiagnosticKind::UnknownOption, DiagnosticKind::UnknownDirective]);
        assert_eq!(d.layout().rows.len(), 2);
    }

    #[test]
    fn missing_resource_gives_empty_dialog() {
        let d = Dialog::open("nope", Placement::centered(), &MemoryLoader::new(), &FixedAdvance, &Variables::default());
        assert!(d.layout().rows.is_empty());
        assert_eq!(d.resource_errors().len(), 1);
        assert!(d.is_open());
    }

    #[test]
    fn positions_shift_relative_to_anchor() {
        let anchor = Vec2::new(100.0, 100.0);
        let size = Vec2::new(40.0, 30.0);
        assert_eq!(Position::TopLeft.origin(anchor, size), anchor);
        assert_eq!(Position::Top.origin(anchor, size), Vec2::new(80.0, 100.0));
        assert_eq!(Position::TopRight.origin(anchor, size), Vec2::new(60.0, 100.0));
        assert_eq!(Position::Center.origin(anchor, size), Vec2::new(80.0, 85.0));
    }

    #[test]
    fn centered_placement_uses_screen_center() {
        let screen = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let origin = Placement::centered().origin(Vec2::new(200.0, 100.0), screen);
        assert_eq!(origin, Vec2::new(400.0, 350.0));
    }
}
