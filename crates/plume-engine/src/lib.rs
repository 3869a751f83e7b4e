//! Plume engine crate.
//!
//! Host-agnostic primitives shared by the dialog layers: geometry, colors,
//! font metrics, the recorded draw stream and logger setup. Window creation
//! and pixel output belong to the host toolkit.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
