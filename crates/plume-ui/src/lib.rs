//! Plume UI: layout, interaction and painting for popup dialogs written in
//! plume markup.
//!
//! The crate is window-system agnostic. A host loads fonts into a
//! `FontSystem`, opens a [`Dialog`], forwards input as [`UiEvent`]s, paints
//! the resulting `DrawList` with its own renderer and carries out the
//! [`DialogAction`]s the dialog requests.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use plume_ui::prelude::*;
//!
//! let mut fonts = FontSystem::new();
//! let regular = fonts.load_font(include_bytes!("my_font.ttf")).unwrap();
//! let metrics = FontMetrics::new(&fonts, regular);
//!
//! let loader = DirLoader::new("resources");
//! let mut dialog = Dialog::open("about", Placement::centered(), &loader, &metrics, &Variables::default());
//!
//! // In your event loop:
//! dialog.on_event(&UiEvent::Click { pos });
//! for action in dialog.take_actions() {
//!     match action {
//!         DialogAction::Close => { /* hide the window */ }
//!         DialogAction::Browse(url) => { /* open the browser */ }
//!         DialogAction::Show(res) => { /* Dialog::open(&res, Placement::centered(), ...) */ }
//!         DialogAction::Toggled { .. } => {}
//!     }
//! }
//!
//! let mut list = DrawList::new();
//! dialog.paint(&mut list, &metrics);
//! ```

pub mod dialog;
pub mod event;
pub mod images;
pub mod layout;
pub mod metrics;
pub mod painter;
pub mod resource;

pub use dialog::{Dialog, DialogAction, Placement, Position};
pub use event::{EventResult, Key, UiEvent};

/// Everything a host needs to show dialogs.
pub mod prelude {
    pub use crate::dialog::{Dialog, DialogAction, Placement, Position};
    pub use crate::event::{EventResult, Key, UiEvent};
    pub use crate::images::ImageStore;
    pub use crate::layout::{Layout, LaidItem};
    pub use crate::metrics::{FontMetrics, LayoutCtx, TextMeasure};
    pub use crate::resource::{DirLoader, MemoryLoader, ResourceError, ResourceLoader};

    pub use plume_engine::coords::{Rect, Vec2};
    pub use plume_engine::paint::Color;
    pub use plume_engine::scene::{DrawCmd, DrawList, ZIndex};
    pub use plume_engine::text::{FontId, FontSystem};
    pub use plume_markup::{Diagnostic, ToggleState, Variables};
}
