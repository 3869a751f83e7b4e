use plume_engine::coords::Vec2;

/// Keys a dialog reacts to. Anything else arrives as `Other` with the
/// host's key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other(u32),
}

/// Input events delivered by the host, in dialog-local logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary mouse button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Mouse moved to `pos`.
    Hover { pos: Vec2 },
    /// Pointer left the dialog.
    Leave,
    KeyPress { key: Key },
}

/// Result returned by [`Dialog::on_event`](crate::dialog::Dialog::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Event did not hit anything interactive.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
