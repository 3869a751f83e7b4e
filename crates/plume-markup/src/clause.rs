//! Line and clause splitting.

/// Splits a line on `;` into trimmed clauses. Always yields at least one.
pub fn split_clauses(line: &str) -> Vec<&str> {
    line.split(';').map(str::trim).collect()
}

// ── OptionClause ──────────────────────────────────────────────────────────

/// An option clause such as `size 400 300` or `bold`: a keyword followed by
/// space-separated arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionClause<'c> {
    /// Lower-cased first word.
    pub keyword: String,
    pub args: Vec<&'c str>,
}

impl<'c> OptionClause<'c> {
    /// `None` for an empty clause (e.g. a trailing `;`).
    pub fn parse(clause: &'c str) -> Option<Self> {
        let mut words = clause.split_whitespace();
        let keyword = words.next()?.to_ascii_lowercase();
        Some(Self { keyword, args: words.collect() })
    }

    /// Integer argument at `idx`.
    pub fn int(&self, idx: usize) -> Result<i64, NumberError> {
        let raw = self.args.get(idx).ok_or(NumberError::Missing)?;
        raw.parse::<i64>().map_err(|_| NumberError::Invalid(raw.to_string()))
    }

    /// Non-negative pixel argument at `idx`.
    pub fn pixels(&self, idx: usize) -> Result<u32, NumberError> {
        let n = self.int(idx)?;
        u32::try_from(n).map_err(|_| NumberError::Invalid(n.to_string()))
    }
}

/// Why a numeric option argument could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    Missing,
    Invalid(String),
}

impl std::fmt::Display for NumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberError::Missing => write!(f, "missing number"),
            NumberError::Invalid(raw) => write!(f, "not a valid number: {raw:?}"),
        }
    }
}
