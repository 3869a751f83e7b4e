use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::PathBuf;

// ── ResourceError ─────────────────────────────────────────────────────────

/// Failure to fetch or decode a named resource.
#[derive(Debug)]
pub enum ResourceError {
    NotFound(String),
    Io { name: String, source: io::Error },
    /// The resource is not valid UTF-8 text.
    Encoding(String),
    /// The bytes could not be decoded as an image.
    Decode { name: String, message: String },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::NotFound(name) => write!(f, "resource not found: {name}"),
            ResourceError::Io { name, source } => write!(f, "reading {name}: {source}"),
            ResourceError::Encoding(name) => write!(f, "resource {name} is not UTF-8 text"),
            ResourceError::Decode { name, message } => write!(f, "decoding image {name}: {message}"),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ── ResourceLoader ────────────────────────────────────────────────────────

/// Resolves resource names (dialog texts, images) to bytes.
///
/// Names are `/`-separated and usually absolute (`/Settings/about.txt`).
pub trait ResourceLoader {
    fn load(&self, name: &str) -> Result<Vec<u8>, ResourceError>;

    fn load_text(&self, name: &str) -> Result<String, ResourceError> {
        let bytes = self.load(name)?;
        String::from_utf8(bytes).map_err(|_| ResourceError::Encoding(name.to_string()))
    }
}

/// Expands a short dialog name: `about` → `/Settings/about.txt`.
///
/// A name containing `.` keeps its extension; a name starting with `/` keeps
/// its directory.
pub fn resolve_dialog_name(res: &str) -> String {
    let mut name = res.trim().to_string();
    if !name.contains('.') {
        name.push_str(".txt");
    }
    if !name.starts_with('/') {
        name = format!("/Settings/{name}");
    }
    name
}

fn relative(name: &str) -> &str {
    name.trim_start_matches('/')
}

// ── DirLoader ─────────────────────────────────────────────────────────────

/// Serves resources from a directory: `/a/b.txt` maps to `<root>/a/b.txt`.
#[derive(Debug, Clone)]
pub struct DirLoader {
    root: PathBuf,
}

impl DirLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceLoader for DirLoader {
    fn load(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        let path = self.root.join(relative(name));
        std::fs::read(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ResourceError::NotFound(name.to_string())
            } else {
                ResourceError::Io { name: name.to_string(), source: e }
            }
        })
    }
}

// ── MemoryLoader ──────────────────────────────────────────────────────────

/// In-memory resource table, for embedded dialogs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(relative(name).to_string(), bytes.into());
        self
    }

    pub fn with_text(self, name: &str, text: &str) -> Self {
        self.with(name, text.as_bytes())
    }
}

impl ResourceLoader for MemoryLoader {
    fn load(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        self.entries
            .get(relative(name))
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_get_settings_prefix_and_extension() {
        assert_eq!(resolve_dialog_name("about"), "/Settings/about.txt");
        assert_eq!(resolve_dialog_name("about.dlg"), "/Settings/about.dlg");
        assert_eq!(resolve_dialog_name("/help/intro"), "/help/intro.txt");
        assert_eq!(resolve_dialog_name("/help/intro.txt"), "/help/intro.txt");
    }

    #[test]
    fn memory_loader_ignores_leading_slash() {
        let loader = MemoryLoader::new().with_text("Settings/a.txt", "hi");
        assert_eq!(loader.load_text("/Settings/a.txt").unwrap(), "hi");
    }

    #[test]
    fn memory_loader_missing_is_not_found() {
        let err = MemoryLoader::new().load("/nope").unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(n) if n == "/nope"));
    }

    #[test]
    fn invalid_utf8_is_encoding_error() {
        let loader = MemoryLoader::new().with("/bin", vec![0xff, 0xfe]);
        assert!(matches!(loader.load_text("/bin"), Err(ResourceError::Encoding(_))));
    }

    #[test]
    fn dir_loader_reads_relative_to_root() {
        let root = std::env::temp_dir().join(format!("plume-dir-loader-{}", std::process::id()));
        std::fs::create_dir_all(root.join("Settings")).unwrap();
        std::fs::write(root.join("Settings/x.txt"), "line").unwrap();

        let loader = DirLoader::new(&root);
        assert_eq!(loader.load_text("/Settings/x.txt").unwrap(), "line");
        assert!(matches!(loader.load("/Settings/missing.txt"), Err(ResourceError::NotFound(_))));

        std::fs::remove_dir_all(&root).unwrap();
    }
}
