//! `{name}` placeholder substitution.

use std::collections::HashMap;

/// Recognised placeholder names and their values.
///
/// `Variables::default()` binds `sxversion` to this crate's version. Hosts
/// add the runtime version (`javaversion`) and anything else with [`with`].
///
/// [`with`]: Variables::with
#[derive(Debug, Clone)]
pub struct Variables {
    values: HashMap<String, String>,
}

impl Variables {
    /// No names recognised; every placeholder substitutes to "".
    pub fn empty() -> Self {
        Self { values: HashMap::new() }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Replaces every `{name}` in `line`.
    ///
    /// Each `{` pairs with the first `}` after it (no nesting). Unknown names
    /// become "". A `{` without a closing `}` ends substitution and is kept
    /// verbatim together with the rest of the line. Inserted values are not
    /// rescanned, so the loop runs at most once per `{` in the input.
    pub fn substitute(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut rest = line;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            out.push_str(&rest[..open]);
            out.push_str(self.get(&after[..close]));
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }
}

impl Default for Variables {
    fn default() -> Self {
        Self::empty().with("sxversion", env!("CARGO_PKG_VERSION"))
    }
}
