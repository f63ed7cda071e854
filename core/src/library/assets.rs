//! Read-only bundled asset access.

use std::io;
use std::path::PathBuf;

/// Source of read-only files packaged with the application.
pub trait AssetSource {
    /// List the file names inside `dir`, relative to the asset root.
    fn list(&self, dir: &str) -> io::Result<Vec<String>>;
}

/// Bundled assets stored as a plain directory tree.
///
/// Listings contain regular files only and are sorted by name, so the
/// catalog order of built-in titles is stable across platforms.
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory that bundled references are relative to.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl AssetSource for DirAssetSource {
    fn list(&self, dir: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(self.root.join(dir))? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Asset source for builds that ship no bundled titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetSource for NoAssets {
    fn list(&self, _dir: &str) -> io::Result<Vec<String>> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no bundled assets"))
    }
}
