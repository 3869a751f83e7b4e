//! Recorded draw stream.
//!
//! The dialog painter records renderer-agnostic commands; the host toolkit
//! replays them in paint order onto its own surface.

mod cmd;
mod list;

pub use cmd::{Border, DrawCmd, FrameCmd, ImageCmd, ImageId, LineCmd, RectCmd, TextCmd};
pub use list::{DrawItem, DrawList, ZIndex};
