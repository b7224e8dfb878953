use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Where rendered documents land. Keys are `/`-separated, e.g. `receipt/2025-05-23-…-777815.pdf`.
pub trait ArtifactStore {
    fn exists(&self, key: &str) -> bool;

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Every key directly under `folder`, sorted by name.
    fn list(&self, folder: &str) -> Result<Vec<String>>;
}

pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        key.split('/').fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl ArtifactStore for FsStore {
    fn exists(&self, key: &str) -> bool {
        self.path(key).is_file()
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))
    }

    fn list(&self, folder: &str) -> Result<Vec<String>> {
        let folder = folder.trim_end_matches('/');
        let dir = self.path(folder);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut keys = Vec::new();
        for entry in fs::read_dir(&dir).with_context(|| format!("failed to list {}", dir.display()))? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                keys.push(format!("{folder}/{}", entry.file_name().to_string_lossy()));
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// A bare HTML page linking every artifact in `folder`, newest date first.
pub fn index_page(store: &dyn ArtifactStore, folder: &str, title: &str) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html><head><meta charset=\"utf-8\"><title>{title}</title></head><body>")?;
    writeln!(out, "<h1>{title}</h1>")?;
    for key in store.list(folder)?.iter().rev() {
        let name = key.rsplit_once('/').map_or(key.as_str(), |(_, name)| name);
        writeln!(out, "<a href=\"{key}\">{name}</a></br>")?;
    }
    writeln!(out, "</body></html>")?;
    Ok(out)
}
