use std::fmt;

/// Category of a recoverable markup problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `#<type>` with a type the reader does not know.
    UnknownDirective,
    /// A clause that needed an integer argument did not get one.
    BadNumber,
    /// A `#global` or per-item option keyword that is not recognised.
    UnknownOption,
    /// A `border` color name not in the palette.
    UnknownColor,
    /// `#buttons` without any usable label.
    MalformedButtons,
    /// A typed item line without its primary text clause.
    MissingText,
}

/// A warning produced while reading dialog markup.
///
/// Diagnostics never stop the parse; the offending line degrades to a
/// placeholder item or the clause is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based source line number.
    pub line: usize,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn new(line: usize, kind: DiagnosticKind, msg: impl Into<String>) -> Self {
        Self { line, kind, message: msg.into() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dialog markup line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for Diagnostic {}
