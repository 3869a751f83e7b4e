use crate::clause::{split_clauses, OptionClause};
use crate::config::{Align, DialogConfig};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::document::Document;
use crate::item::{Item, ItemKind, Row, ToggleState, FALLBACK_URL};
use crate::palette;
use crate::vars::Variables;

// ── Parser ────────────────────────────────────────────────────────────────

/// Reads dialog markup line by line into a [`Document`].
///
/// Best effort: every problem becomes a [`Diagnostic`] (also logged) and the
/// parse continues with the next clause or line.
pub struct Parser<'v> {
    vars: &'v Variables,
    config: DialogConfig,
    rows: Vec<Row>,
    diagnostics: Vec<Diagnostic>,
    /// 1-based number of the line being read.
    line: usize,
}

impl<'v> Parser<'v> {
    pub fn new(vars: &'v Variables) -> Self {
        Self {
            vars,
            config: DialogConfig::default(),
            rows: Vec::new(),
            diagnostics: Vec::new(),
            line: 0,
        }
    }

    fn warn(&mut self, kind: DiagnosticKind, msg: impl Into<String>) {
        let diag = Diagnostic::new(self.line, kind, msg);
        log::warn!("{diag}");
        self.diagnostics.push(diag);
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(mut self, src: &str) -> Document {
        let mut first = true;
        for (idx, raw) in src.lines().enumerate() {
            self.line = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if first && line.starts_with("#global") {
                first = false;
                self.read_global(line);
                continue;
            }
            first = false;

            log::debug!("{line}");
            let line = self.vars.substitute(line);
            if let Some(rest) = line.strip_prefix("---") {
                let item = self.read_separator(rest);
                self.push(item);
            } else if line.starts_with('#') {
                self.read_typed(&line);
            } else {
                self.read_plain(&line);
            }
        }

        Document { config: self.config, rows: self.rows, diagnostics: self.diagnostics }
    }

    // ── #global ───────────────────────────────────────────────────────────

    fn read_global(&mut self, line: &str) {
        for clause in split_clauses(line).into_iter().skip(1) {
            if let Some(opt) = OptionClause::parse(clause) {
                self.apply_global(&opt);
            }
        }
    }

    fn apply_global(&mut self, opt: &OptionClause<'_>) {
        match opt.keyword.as_str() {
            "size" => {
                if let (Some(w), Some(h)) = (self.pixels(opt, 0), self.pixels(opt, 1)) {
                    self.config.max_width = w;
                    self.config.max_height = h;
                }
            }
            "margin" => {
                if let Some(v) = self.pixels(opt, 0) {
                    self.config.margin = crate::config::Padding::all(v);
                }
            }
            "center" => self.config.align = Align::Center,
            "font" => {
                if let Some(v) = self.pixels(opt, 0) {
                    self.config.font_size = v;
                }
            }
            "before" => {
                if let Some(v) = self.pixels(opt, 0) {
                    self.config.space_before = v;
                }
            }
            "border" => {
                if opt.args.is_empty() {
                    self.warn(DiagnosticKind::BadNumber, "border: expected a width or a color name");
                }
                for arg in &opt.args {
                    if let Ok(width) = arg.parse::<u32>() {
                        self.config.border_width = width;
                    } else if let Some(color) = palette::lookup(arg) {
                        self.config.border_color = color;
                    } else {
                        self.warn(DiagnosticKind::UnknownColor, format!("border: unknown color {arg:?}"));
                    }
                }
            }
            other => {
                self.warn(DiagnosticKind::UnknownOption, format!("#global: unknown option {other:?}"));
            }
        }
    }

    // ── --- ───────────────────────────────────────────────────────────────

    /// `---` fills the row; `--- N` is N pixels long; `--- -N` is a filling
    /// rule with an N pixel stroke.
    fn read_separator(&mut self, rest: &str) -> Item {
        let rest = rest.trim();
        if rest.is_empty() {
            return Item::separator(0, 0, &self.config);
        }
        match rest.parse::<i64>() {
            Ok(n) if n < 0 => {
                let stroke = u32::try_from(n.unsigned_abs()).unwrap_or(u32::MAX);
                Item::separator(0, stroke, &self.config)
            }
            Ok(n) => Item::separator(u32::try_from(n).unwrap_or(u32::MAX), 0, &self.config),
            Err(_) => {
                self.warn(DiagnosticKind::BadNumber, format!("separator: not a number: {rest:?}"));
                Item::separator(0, 0, &self.config)
            }
        }
    }

    // ── #<type> ───────────────────────────────────────────────────────────

    fn read_typed(&mut self, line: &str) {
        let clauses = split_clauses(line);
        let feature = clauses[0].to_lowercase();
        let title = match clauses.get(1) {
            Some(t) if !t.is_empty() => *t,
            _ => {
                if !feature.starts_with("#buttons") {
                    self.warn(DiagnosticKind::MissingText, format!("{feature}: no text given"));
                }
                ""
            }
        };

        // Index of the first per-item option clause.
        let (item, options_from) = if feature.starts_with("#link") {
            let (label, target) = split_pipe(title);
            let target = target.unwrap_or(FALLBACK_URL);
            (Item::link(label, target, &self.config), 2)
        } else if feature.starts_with("#image") {
            let (source, link) = split_pipe(title);
            (Item::image(source, link.map(str::to_string), &self.config), 2)
        } else if feature.starts_with("#close") {
            (Item::close_label(title, &self.config), 2)
        } else if feature.starts_with("#action") {
            let action = clauses.get(2).copied().unwrap_or("");
            (Item::action(title, action, &self.config), 3)
        } else if feature.starts_with("#option") {
            let arg = clauses.get(2).copied().unwrap_or("");
            let state = match clauses.get(3) {
                Some(s) if s.eq_ignore_ascii_case("on") => ToggleState::On,
                _ => ToggleState::Off,
            };
            (Item::toggle(title, arg, state, &self.config), 4)
        } else if feature.starts_with("#buttons") {
            self.read_buttons(title, &clauses[2.min(clauses.len())..]);
            return;
        } else {
            self.warn(DiagnosticKind::UnknownDirective, format!("unknown feature {feature}"));
            let shown = if title.is_empty() { clauses[0] } else { title };
            let item = Item::text(format!("? {shown} ?"), &self.config);
            self.push(item);
            return;
        };

        let mut item = item;
        let options = clauses.get(options_from..).unwrap_or(&[]);
        self.apply_item_options(&mut item, options);
        self.push(item);
    }

    /// `#buttons;A|B|C` becomes one packed row of three buttons.
    fn read_buttons(&mut self, title: &str, options: &[&str]) {
        let mut buttons = Vec::new();
        for label in title.split('|').map(str::trim) {
            if label.is_empty() {
                self.warn(DiagnosticKind::MalformedButtons, "#buttons: empty label skipped");
                continue;
            }
            let mut button = Item::button(label, &self.config);
            self.apply_item_options(&mut button, options);
            buttons.push(button);
        }
        self.push_packed(buttons);
    }

    // ── plain text ────────────────────────────────────────────────────────

    fn read_plain(&mut self, line: &str) {
        let clauses = split_clauses(line);
        if clauses.len() > 1 {
            let mut item = Item::text(clauses[0], &self.config);
            self.apply_item_options(&mut item, &clauses[1..]);
            self.push(item);
        } else {
            let item = Item::text(line, &self.config);
            self.push(item);
        }
    }

    // ── per-item options ──────────────────────────────────────────────────

    fn apply_item_options(&mut self, item: &mut Item, clauses: &[&str]) {
        for clause in clauses {
            let Some(opt) = OptionClause::parse(clause) else {
                continue;
            };
            match opt.keyword.as_str() {
                "resize" => {
                    if let Some(width) = self.pixels(&opt, 0) {
                        match &mut item.kind {
                            ItemKind::Image { resize, .. } => *resize = Some(width),
                            _ => log::debug!("resize ignored on non-image item"),
                        }
                    }
                }
                "fontsize" => {
                    if let Some(v) = self.pixels(&opt, 0) {
                        item.font_size = v;
                    }
                }
                "top" => {
                    if let Some(v) = self.pixels(&opt, 0) {
                        item.padding.top = v;
                    }
                }
                "bold" => item.bold = true,
                "center" => item.align = Some(Align::Center),
                "right" => item.align = Some(Align::Right),
                "left" => item.align = Some(Align::Left),
                other => {
                    self.warn(DiagnosticKind::UnknownOption, format!("unknown item option {other:?}"));
                }
            }
        }
    }

    fn pixels(&mut self, opt: &OptionClause<'_>, idx: usize) -> Option<u32> {
        match opt.pixels(idx) {
            Ok(v) => Some(v),
            Err(e) => {
                self.warn(DiagnosticKind::BadNumber, format!("{}: {e}", opt.keyword));
                None
            }
        }
    }

    // ── rows ──────────────────────────────────────────────────────────────

    fn push(&mut self, mut item: Item) {
        if item.padding.top == 0 {
            item.padding.top = self.config.space_before;
        }
        self.rows.push(Row::single(item));
    }

    fn push_packed(&mut self, mut items: Vec<Item>) {
        for item in &mut items {
            if item.padding.top == 0 {
                item.padding.top = self.config.space_before;
            }
            if item.padding.left == 0 {
                item.padding.left = self.config.space_before;
            }
        }
        if let Some(row) = Row::packed(items) {
            self.rows.push(row);
        } else {
            self.warn(DiagnosticKind::MalformedButtons, "#buttons: no labels given");
        }
    }
}

/// `label|url` → (`label`, `Some(url)`); no `|` → (`text`, `None`).
fn split_pipe(text: &str) -> (&str, Option<&str>) {
    match text.split_once('|') {
        Some((a, b)) => (a.trim(), Some(b.trim()).filter(|s| !s.is_empty())),
        None => (text.trim(), None),
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse dialog markup into a [`Document`], substituting `{name}`
/// placeholders from `vars` line by line.
pub fn parse_str(src: &str, vars: &Variables) -> Document {
    Parser::new(vars).parse_document(src)
}
