use crate::config::{Align, DialogConfig, Padding, Rgba};
use crate::palette;

/// Link target used when a `#link` line names no URL.
pub const FALLBACK_URL: &str = "https://sikulix.github.io";

/// Default separator stroke in pixels.
pub const DEFAULT_STROKE: u32 = 5;

// ── ToggleState ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    On,
    Off,
}

impl ToggleState {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ToggleState::On => ToggleState::Off,
            ToggleState::Off => ToggleState::On,
        }
    }
}

// ── ItemKind ──────────────────────────────────────────────────────────────

/// Variant payload of a dialog item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Text {
        content: String,
    },
    /// Horizontal rule. `length == 0` fills the available row width.
    Separator {
        length: u32,
        stroke: u32,
        color: Rgba,
    },
    /// Image resource, optionally scaled to `resize` pixels wide. With a
    /// `link` the image behaves like a `#link` label.
    Image {
        source: String,
        resize: Option<u32>,
        link: Option<String>,
    },
    Link {
        label: String,
        target: String,
    },
    /// `command` is `None` when the action clause is empty.
    Action {
        label: String,
        command: Option<String>,
        arg: String,
    },
    /// `#option` on/off toggle. `command_arg` is informational only.
    Toggle {
        label: String,
        state: ToggleState,
        command_arg: String,
    },
    /// One entry of a `#buttons` bar. `command_arg` is generated but unused.
    Button {
        label: String,
        command_arg: String,
    },
}

// ── Item ──────────────────────────────────────────────────────────────────

/// One visual element of a dialog: variant payload plus shared style.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub padding: Padding,
    /// Own alignment; `None` falls back to [`DialogConfig::align`].
    pub align: Option<Align>,
    /// Reacts to clicks.
    pub active: bool,
    /// Fill behind the label. `None` shows the dialog background.
    pub background: Option<Rgba>,
    pub font_size: u32,
    pub bold: bool,
    pub underline: bool,
}

impl Item {
    fn new(kind: ItemKind, font_size: u32) -> Self {
        Self {
            kind,
            padding: Padding::default(),
            align: None,
            active: false,
            background: None,
            font_size,
            bold: false,
            underline: false,
        }
    }

    pub fn text(content: impl Into<String>, config: &DialogConfig) -> Self {
        Self::new(ItemKind::Text { content: content.into() }, config.font_size)
    }

    /// `#close` label: clicking it dismisses the dialog.
    pub fn close_label(content: impl Into<String>, config: &DialogConfig) -> Self {
        let mut item = Self::text(content, config);
        item.active = true;
        item.background = Some(palette::SAND);
        item
    }

    /// `length == 0` means fill; `stroke == 0` selects [`DEFAULT_STROKE`].
    pub fn separator(length: u32, stroke: u32, config: &DialogConfig) -> Self {
        let stroke = if stroke == 0 { DEFAULT_STROKE } else { stroke };
        Self::new(
            ItemKind::Separator { length, stroke, color: palette::BRICK },
            config.font_size,
        )
    }

    pub fn image(source: impl Into<String>, link: Option<String>, config: &DialogConfig) -> Self {
        let mut item = Self::new(
            ItemKind::Image { source: source.into(), resize: None, link },
            config.font_size,
        );
        item.active = matches!(&item.kind, ItemKind::Image { link: Some(_), .. });
        item
    }

    pub fn link(label: impl Into<String>, target: impl Into<String>, config: &DialogConfig) -> Self {
        let mut item = Self::new(
            ItemKind::Link { label: label.into(), target: target.into() },
            config.font_size,
        );
        item.active = true;
        item.underline = true;
        item
    }

    /// Splits `action` into command word and argument.
    ///
    /// Only `show <resource>` does anything on click; other commands are kept
    /// but reported.
    pub fn action(label: impl Into<String>, action: &str, config: &DialogConfig) -> Self {
        let label: String = label.into();
        let mut parts = action.split_whitespace();
        let command = parts.next().map(str::to_string);
        let arg = parts.next().unwrap_or("").to_string();
        match command.as_deref() {
            Some("show") if arg.is_empty() => log::error!("action show: no dialog named"),
            Some("show") | None => {}
            Some(_) => log::error!("action not implemented: {}", action.trim()),
        }
        Self::clickable(ItemKind::Action { label: label.trim().to_string(), command, arg }, config)
    }

    pub fn toggle(
        label: impl Into<String>,
        command_arg: impl Into<String>,
        state: ToggleState,
        config: &DialogConfig,
    ) -> Self {
        Self::clickable(
            ItemKind::Toggle { label: label.into(), state, command_arg: command_arg.into() },
            config,
        )
    }

    pub fn button(label: impl Into<String>, config: &DialogConfig) -> Self {
        let label = label.into();
        let command_arg = format!("action{label}");
        Self::clickable(ItemKind::Button { label, command_arg }, config)
    }

    fn clickable(kind: ItemKind, config: &DialogConfig) -> Self {
        let mut item = Self::new(kind, config.font_size);
        item.active = true;
        item.bold = true;
        item
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// The string a label-like item shows, including toggle and button
    /// markers. `None` for separators and images.
    pub fn display_text(&self) -> Option<String> {
        match &self.kind {
            ItemKind::Text { content } => Some(content.clone()),
            ItemKind::Link { label, .. } | ItemKind::Action { label, .. } => Some(label.clone()),
            ItemKind::Toggle { label, state: ToggleState::On, .. } => Some(format!("(X) {label}")),
            ItemKind::Toggle { label, state: ToggleState::Off, .. } => Some(format!("( ) {label}")),
            ItemKind::Button { label, .. } => Some(format!("({label})")),
            ItemKind::Separator { .. } | ItemKind::Image { .. } => None,
        }
    }

    /// Separator whose width is decided by the layout.
    pub fn is_fill(&self) -> bool {
        matches!(self.kind, ItemKind::Separator { length: 0, .. })
    }

    /// Own alignment if set, else the dialog default.
    pub fn effective_align(&self, config: &DialogConfig) -> Align {
        self.align.unwrap_or(config.align)
    }

    /// Flips an option toggle in place and returns the new state.
    /// Other variants are left untouched.
    pub fn toggle_state(&mut self) -> Option<ToggleState> {
        match &mut self.kind {
            ItemKind::Toggle { state, .. } => {
                *state = state.flipped();
                Some(*state)
            }
            _ => None,
        }
    }
}

// ── Row ───────────────────────────────────────────────────────────────────

/// Items sharing one horizontal band. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    items: Vec<Item>,
}

impl Row {
    pub fn single(item: Item) -> Self {
        Self { items: vec![item] }
    }

    /// Left-to-right packed row; `None` when `items` is empty.
    pub fn packed(items: Vec<Item>) -> Option<Self> {
        if items.is_empty() { None } else { Some(Self { items }) }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_single(&self) -> bool {
        self.items.len() == 1
    }

    pub fn first(&self) -> &Item {
        &self.items[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> DialogConfig {
        DialogConfig::default()
    }

    #[test]
    fn toggle_display_tracks_state() {
        let mut item = Item::toggle("Enable", "optA", ToggleState::On, &cfg());
        assert_eq!(item.display_text().as_deref(), Some("(X) Enable"));
        assert_eq!(item.toggle_state(), Some(ToggleState::Off));
        assert_eq!(item.display_text().as_deref(), Some("( ) Enable"));
        assert_eq!(item.toggle_state(), Some(ToggleState::On));
        assert_eq!(item.display_text().as_deref(), Some("(X) Enable"));
    }

    #[test]
    fn toggle_state_ignores_other_variants() {
        let mut item = Item::text("plain", &cfg());
        assert_eq!(item.toggle_state(), None);
    }

    #[test]
    fn button_is_bracketed_and_carries_command_arg() {
        let item = Item::button("OK", &cfg());
        assert_eq!(item.display_text().as_deref(), Some("(OK)"));
        assert!(item.active && item.bold);
        match item.kind {
            ItemKind::Button { command_arg, .. } => assert_eq!(command_arg, "actionOK"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn action_splits_command_and_argument() {
        let item = Item::action("Go", " show other ", &cfg());
        assert_eq!(
            item.kind,
            ItemKind::Action { label: "Go".into(), command: Some("show".into()), arg: "other".into() }
        );
    }

    #[test]
    fn empty_action_has_no_command() {
        let item = Item::action("Idle", "", &cfg());
        assert!(matches!(item.kind, ItemKind::Action { command: None, .. }));
    }

    #[test]
    fn separator_zero_stroke_uses_default() {
        let item = Item::separator(0, 0, &cfg());
        assert!(item.is_fill());
        assert!(matches!(item.kind, ItemKind::Separator { stroke: DEFAULT_STROKE, .. }));
    }

    #[test]
    fn image_without_link_is_inactive() {
        assert!(!Item::image("/a.png", None, &cfg()).active);
        assert!(Item::image("/a.png", Some("https://x".into()), &cfg()).active);
    }

    #[test]
    fn packed_rejects_empty_rows() {
        assert!(Row::packed(Vec::new()).is_none());
        assert_eq!(Row::packed(vec![Item::button("A", &cfg())]).map(|r| r.len()), Some(1));
    }

    #[test]
    fn own_align_overrides_default() {
        let config = DialogConfig { align: Align::Center, ..cfg() };
        let mut item = Item::text("x", &config);
        assert_eq!(item.effective_align(&config), Align::Center);
        item.align = Some(Align::Right);
        assert_eq!(item.effective_align(&config), Align::Right);
    }
}
