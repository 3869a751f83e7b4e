//! Reader and item model for **plume** dialog markup.
//!
//! This crate depends only on the `log` facade so it can be used by tooling
//! that never opens a window.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`clause`] | `;` clause splitting, `OptionClause` |
//! | [`config`] | `DialogConfig`, `Padding`, `Align`, `Rgba` |
//! | [`diagnostic`] | `Diagnostic`, `DiagnosticKind` |
//! | [`document`] | `Document` |
//! | [`item`] | `Item`, `ItemKind`, `Row`, `ToggleState` |
//! | [`palette`] | named border colors and the dialog's fixed colors |
//! | [`parser`] | `parse_str` entry point |
//! | [`vars`] | `{name}` placeholder substitution |
//!
//! # Format
//!
//! ```text
//! #global;margin 5;center;border 2 blue
//! Welcome to {sxversion};bold;fontsize 18
//! ---
//! #link;Documentation|https://example.org
//! #action;More...;show more
//! #option;Start minimized;minimized;off
//! #buttons;OK|Cancel
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use plume_markup::{parse_str, Variables};
//!
//! let doc = parse_str("#global;center\nHello\n#buttons;OK|Cancel", &Variables::default());
//! assert_eq!(doc.rows.len(), 2);
//! assert_eq!(doc.rows[1].len(), 2);
//! ```

pub mod clause;
pub mod config;
pub mod diagnostic;
pub mod document;
pub mod item;
pub mod palette;
pub mod parser;
pub mod vars;

pub use config::{Align, DialogConfig, Padding, Rgba};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use document::Document;
pub use item::{Item, ItemKind, Row, ToggleState};
pub use parser::parse_str;
pub use vars::Variables;
