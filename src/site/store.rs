use std::collections::HashMap;
use std::path::PathBuf;

/// Page lookup over a flat, relative key namespace.
///
/// A return of `None` covers both "no such page" and "page unreadable";
/// the connection handler turns either into the fixed 404 body and the
/// underlying I/O error never reaches the client.
pub trait Site: Send + Sync {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Serves pages from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSite {
    root: PathBuf,
}

impl DirSite {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Site for DirSite {
    fn lookup(&self, key: &str) -> Option<String> {
        let path = self.root.join(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!("page lookup miss for {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Serves pages from an in-memory map.
///
/// The analogue of an embedded resource bundle; also the store used by the
/// integration tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySite {
    pages: HashMap<String, String>,
}

impl MemorySite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, key: impl Into<String>, content: impl Into<String>) -> Self {
        self.pages.insert(key.into(), content.into());
        self
    }
}

impl Site for MemorySite {
    fn lookup(&self, key: &str) -> Option<String> {
        self.pages.get(key).cloned()
    }
}
