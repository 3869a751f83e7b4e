//! plume-studio: opens a dialog resource without a window, prints its
//! layout and replays clicks and key presses against it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use plume_engine::logging::{init_logging, LoggingConfig};
use plume_ui::prelude::*;

/// Preview a plume dialog from a resource directory.
#[derive(Parser, Debug)]
#[command(name = "plume-studio")]
#[command(about = "Lay out a plume dialog and replay input against it")]
struct Args {
    /// Dialog resource, e.g. `about` for /Settings/about.txt
    dialog: String,

    /// Directory that resource names are resolved against
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// TrueType/OpenType font for labels (glyph widths are estimated without one)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font for bold labels; defaults to --font
    #[arg(long)]
    bold: Option<PathBuf>,

    /// Screen size used for placement, as WIDTHxHEIGHT
    #[arg(long, default_value = "1920x1080", value_parser = parse_size)]
    screen: Vec2,

    /// Click at X,Y in dialog coordinates (repeatable)
    #[arg(long = "click", value_parser = parse_point)]
    clicks: Vec<Vec2>,

    /// Press Escape after the clicks
    #[arg(long)]
    escape: bool,

    /// Bind a {name} placeholder, as NAME=VALUE (repeatable)
    #[arg(long = "var", value_parser = parse_var)]
    vars: Vec<(String, String)>,

    /// Open dialogs requested by `show` actions
    #[arg(long)]
    follow: bool,

    /// Log filter in env_logger syntax
    #[arg(long)]
    log: Option<String>,
}

fn parse_pair(s: &str, sep: char) -> Result<(f32, f32), String> {
    let (a, b) = s.split_once(sep).ok_or_else(|| format!("expected two numbers separated by {sep:?}"))?;
    let a = a.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let b = b.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok((a, b))
}

fn parse_size(s: &str) -> Result<Vec2, String> {
    parse_pair(s, 'x').map(|(w, h)| Vec2::new(w, h))
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    parse_pair(s, ',').map(|(x, y)| Vec2::new(x, y))
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    let (name, value) = s.split_once('=').ok_or("expected NAME=VALUE")?;
    Ok((name.trim().to_string(), value.to_string()))
}

// ── text measurement ──────────────────────────────────────────────────────

/// Stand-in measurer when no font file is given: 0.55 em per glyph.
struct Estimate;

impl TextMeasure for Estimate {
    fn measure(&self, text: &str, size: f32, bold: bool) -> Vec2 {
        let advance = if bold { 0.6 } else { 0.55 };
        Vec2::new(text.chars().count() as f32 * size * advance, size * 1.2).floor()
    }

    fn font(&self, _bold: bool) -> FontId {
        FontId::default()
    }
}

fn load_font(fonts: &mut FontSystem, path: &Path) -> Result<FontId> {
    let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    fonts.load_font(&bytes).with_context(|| format!("parsing font {}", path.display()))
}

// ── output ────────────────────────────────────────────────────────────────

fn describe(item: &plume_markup::Item) -> String {
    use plume_markup::ItemKind;
    match &item.kind {
        ItemKind::Separator { length: 0, stroke, .. } => format!("separator fill x{stroke}"),
        ItemKind::Separator { length, stroke, .. } => format!("separator {length}x{stroke}"),
        ItemKind::Image { source, link, .. } => match link {
            Some(url) => format!("image {source} -> {url}"),
            None => format!("image {source}"),
        },
        _ => format!("{:?}", item.display_text().unwrap_or_default()),
    }
}

fn print_dialog(dialog: &Dialog, screen: Rect) {
    let size = dialog.size();
    let origin = dialog.window_origin(screen);
    println!(
        "{}: {}x{} at ({}, {})",
        dialog.resource().unwrap_or("<inline>"),
        size.x,
        size.y,
        origin.x,
        origin.y
    );
    for d in dialog.diagnostics() {
        println!("  ! {d}");
    }
    for e in dialog.resource_errors() {
        println!("  ! {e}");
    }
    for (r, row) in dialog.layout().rows.iter().enumerate() {
        for (i, it) in row.items.iter().enumerate() {
            let b = it.bounds;
            println!(
                "  [{r}.{i}] {:>5} {:>5} {:>5} {:>5}  {}",
                b.origin.x,
                b.origin.y,
                b.size.x,
                b.size.y,
                describe(&it.item)
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig { env_filter: args.log.clone(), ..LoggingConfig::default() });

    let mut fonts = FontSystem::new();
    let regular = args.font.as_ref().map(|p| load_font(&mut fonts, p)).transpose()?;
    let bold = args.bold.as_ref().map(|p| load_font(&mut fonts, p)).transpose()?;

    let estimate = Estimate;
    let metrics = regular.map(|id| {
        let m = FontMetrics::new(&fonts, id);
        match bold {
            Some(b) => m.with_bold(b),
            None => m,
        }
    });
    let text: &dyn TextMeasure = match &metrics {
        Some(m) => m,
        None => &estimate,
    };

    let vars = args
        .vars
        .iter()
        .fold(Variables::default(), |v, (name, value)| v.with(name.as_str(), value.as_str()));
    let loader = DirLoader::new(&args.root);
    let screen = Rect::from_origin_size(Vec2::zero(), args.screen);

    let mut pending = vec![(args.dialog.clone(), Placement::centered())];
    let mut first = true;

    while let Some((name, placement)) = pending.pop() {
        log::info!("opening dialog {name}");
        let mut dialog = Dialog::open(&name, placement, &loader, text, &vars);
        print_dialog(&dialog, screen);

        // Input is replayed against the first dialog only.
        if first {
            for &pos in &args.clicks {
                let result = dialog.on_event(&UiEvent::Click { pos });
                println!("  click ({}, {}): {result:?}", pos.x, pos.y);
            }
            if args.escape {
                dialog.on_event(&UiEvent::KeyPress { key: Key::Escape });
            }
            first = false;
        }

        for action in dialog.take_actions() {
            println!("  -> {action:?}");
            if let DialogAction::Show(res) = action {
                if args.follow {
                    pending.push((res, Placement::centered()));
                } else {
                    log::info!("not following show {res}; pass --follow to open it");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_and_sizes() {
        assert_eq!(parse_point("12, 40").unwrap(), Vec2::new(12.0, 40.0));
        assert_eq!(parse_size("1024x768").unwrap(), Vec2::new(1024.0, 768.0));
        assert!(parse_point("12").is_err());
    }

    #[test]
    fn var_keeps_value_verbatim() {
        assert_eq!(parse_var("who=a=b").unwrap(), ("who".to_string(), "a=b".to_string()));
        assert!(parse_var("novalue").is_err());
    }

    #[test]
    fn follow_flag_parses() {
        let args = Args::try_parse_from(["plume-studio", "about", "--follow", "--click", "5,5"]).unwrap();
        assert!(args.follow);
        assert_eq!(args.clicks, vec![Vec2::new(5.0, 5.0)]);
    }
}
