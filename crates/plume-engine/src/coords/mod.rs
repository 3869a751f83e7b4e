//! Coordinate and geometry types shared by layout, painting and hit-testing.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left of the dialog content pane
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
