use crate::config::DialogConfig;
use crate::diagnostic::Diagnostic;
use crate::item::{Item, Row};

/// The parsed dialog: configuration, rows in display order and any warnings
/// raised while reading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub config: DialogConfig,
    pub rows: Vec<Row>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Document {
    /// All items, row by row.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.rows.iter().flat_map(|r| r.items().iter())
    }
}
