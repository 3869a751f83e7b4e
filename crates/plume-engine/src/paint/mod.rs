//! Paint model shared between the dialog painter and host renderers.

pub mod color;

pub use color::Color;
