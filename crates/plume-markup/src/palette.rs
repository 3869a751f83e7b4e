//! Named colors accepted by the `border` option.

use crate::config::Rgba;

/// Brick red used for the dialog border, separators and image hover frames.
pub const BRICK: Rgba = [0x9d, 0x42, 0x30, 208];
/// Sand background of `#close` labels.
pub const SAND: Rgba = [241, 230, 206, 255];
/// Pointer-over highlight for active labels.
pub const HIGHLIGHT: Rgba = [167, 192, 220, 255];
pub const WHITE: Rgba = [255, 255, 255, 255];
pub const BLACK: Rgba = [0, 0, 0, 255];

const NAMED: &[(&str, Rgba)] = &[
    ("white", WHITE),
    ("lightgray", [192, 192, 192, 255]),
    ("light_gray", [192, 192, 192, 255]),
    ("gray", [128, 128, 128, 255]),
    ("darkgray", [64, 64, 64, 255]),
    ("dark_gray", [64, 64, 64, 255]),
    ("black", BLACK),
    ("red", [255, 0, 0, 255]),
    ("pink", [255, 175, 175, 255]),
    ("orange", [255, 200, 0, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("green", [0, 255, 0, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("blue", [0, 0, 255, 255]),
];

/// Case-insensitive lookup of a palette color.
pub fn lookup(name: &str) -> Option<Rgba> {
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(lookup("Blue"), Some([0, 0, 255, 255]));
        assert_eq!(lookup("LIGHT_GRAY"), lookup("lightgray"));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(lookup("chartreuse"), None);
    }
}
