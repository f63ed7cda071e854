//! Catalog scanning
//!
//! Builds a fresh [`Catalog`] from private storage and the bundled asset
//! directory. Scanning never fails: unreadable directories contribute no
//! entries.

use std::path::{Path, PathBuf};

use andrones_shared::{BUNDLED_ROM_DIR, rom_format_for_name};

use super::{Catalog, CatalogEntry};
use crate::library::{AssetSource, StorageProvider};

/// Enumerates cartridge images from private storage and bundled assets.
pub struct CatalogScanner<'a> {
    storage: &'a dyn StorageProvider,
    assets: &'a dyn AssetSource,
}

impl<'a> CatalogScanner<'a> {
    pub fn new(storage: &'a dyn StorageProvider, assets: &'a dyn AssetSource) -> Self {
        Self { storage, assets }
    }

    /// Private storage root, if available.
    pub fn private_dir(&self) -> Option<PathBuf> {
        self.storage.private_dir()
    }

    /// Build the catalog: private entries first, then bundled entries.
    pub fn scan(&self) -> Catalog {
        let private = match self.storage.private_dir() {
            Some(dir) => scan_private_dir(&dir),
            None => Vec::new(),
        };
        let bundled = scan_bundled(self.assets);

        tracing::debug!(
            "Scanned catalog: {} private, {} bundled",
            private.len(),
            bundled.len()
        );

        Catalog::from_sources(private, bundled)
    }
}

/// Internal: List cartridge files directly inside `dir`.
/// Extracted for testability.
///
/// Subdirectories, files without a recognized extension and names that
/// are not valid UTF-8 are skipped.
/// Order follows filesystem enumeration.
pub(super) fn scan_private_dir(dir: &Path) -> Vec<CatalogEntry> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return vec![];
    };

    entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if !path.is_file() {
                return None;
            }

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                // A lossy name would not open again at launch
                tracing::debug!("Skipping non-UTF-8 file name: {}", path.display());
                return None;
            };
            rom_format_for_name(file_name)?;

            Some(CatalogEntry::private(&path, file_name))
        })
        .collect()
}

/// Internal: Turn the bundled `roms` listing into entries.
///
/// A listing failure means no bundled titles.
pub(super) fn scan_bundled(assets: &dyn AssetSource) -> Vec<CatalogEntry> {
    match assets.list(BUNDLED_ROM_DIR) {
        Ok(names) => names.iter().map(|name| CatalogEntry::bundled(name)).collect(),
        Err(e) => {
            tracing::debug!("No bundled titles: {}", e);
            vec![]
        }
    }
}
