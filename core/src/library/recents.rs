//! Category bookkeeping ("recently launched")
//!
//! The library only ever calls [`CategoryStore::add_to_category`]; how the
//! lists are stored belongs to the store implementation.

use std::path::{Path, PathBuf};

use andrones_shared::{CategoryFile, RecordedEntry};
use anyhow::{Context, Result};
use chrono::Utc;

use super::CatalogEntry;

/// Collaborator that remembers entries per named category.
pub trait CategoryStore {
    /// Add `entry` to `category`, promoting it to the front if present.
    fn add_to_category(&mut self, entry: &CatalogEntry, category: &str) -> Result<()>;
}

/// Category store persisted as a JSON file.
///
/// Entries are keyed by source path. Re-adding an entry moves it to the
/// front; each category is capped at `limit` entries.
#[derive(Debug, Clone)]
pub struct JsonCategoryStore {
    path: PathBuf,
    limit: usize,
}

impl JsonCategoryStore {
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the category file.
    ///
    /// A missing or unparsable file reads as empty.
    pub fn load(&self) -> CategoryFile {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Entries of one category, most recent first.
    pub fn entries(&self, category: &str) -> Vec<RecordedEntry> {
        self.load()
            .categories
            .remove(category)
            .unwrap_or_default()
    }

    fn save(&self, file: &CategoryFile) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        let content =
            serde_json::to_string_pretty(file).context("Failed to serialize category file")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write category file: {}", self.path.display()))
    }
}

impl CategoryStore for JsonCategoryStore {
    fn add_to_category(&mut self, entry: &CatalogEntry, category: &str) -> Result<()> {
        let mut file = self.load();
        let list = file.categories.entry(category.to_string()).or_default();

        list.retain(|recorded| recorded.source_path != entry.source_path);
        list.insert(
            0,
            RecordedEntry {
                display_name: entry.display_name.clone(),
                source_path: entry.source_path.clone(),
                added_at: Utc::now(),
            },
        );
        list.truncate(self.limit);

        self.save(&file)
    }
}
