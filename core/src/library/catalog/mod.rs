//! Cartridge catalog
//!
//! The catalog is rebuilt from scratch on every scan. Entries come from two
//! places:
//! - Cartridge files in private storage (absolute paths)
//! - Files in the bundled `roms` asset directory (`roms/<name>` references)
//!
//! Private-storage entries always come first. Nothing is de-duplicated.

use std::path::Path;

use andrones_shared::{BUNDLED_ROM_PREFIX, RomFormat, rom_format_for_name};

mod lookup;
mod naming;
mod scanning;


pub use lookup::LookupError;
pub use naming::clean_display_name;
pub use scanning::CatalogScanner;

/// Where a catalog entry was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    /// Imported into private storage
    Private,
    /// Packaged with the application
    Bundled,
}

/// A playable item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Reserved opaque identifier
    pub id: Option<String>,
    /// Cleaned human-readable title
    pub display_name: String,
    /// Absolute private path or `roms/`-prefixed bundled reference
    pub source_path: String,
}

impl CatalogEntry {
    /// Entry for a cartridge file in private storage.
    pub fn private(path: &Path, file_name: &str) -> Self {
        Self {
            id: None,
            display_name: clean_display_name(file_name),
            source_path: path.to_string_lossy().into_owned(),
        }
    }

    /// Entry for a file in the bundled `roms` directory.
    pub fn bundled(file_name: &str) -> Self {
        Self {
            id: None,
            display_name: clean_display_name(file_name),
            source_path: format!("{}{}", BUNDLED_ROM_PREFIX, file_name),
        }
    }

    /// Which source produced this entry, derived from the path class.
    pub fn source(&self) -> EntrySource {
        if self.source_path.starts_with(BUNDLED_ROM_PREFIX) {
            EntrySource::Bundled
        } else {
            EntrySource::Private
        }
    }

    /// Cartridge format recognized from the source path, if any.
    pub fn format(&self) -> Option<&'static RomFormat> {
        let file_name = self
            .source_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.source_path);
        rom_format_for_name(file_name)
    }

    /// Whether the engine is expected to boot this entry.
    pub fn is_launchable(&self) -> bool {
        self.format().is_none_or(|format| format.launchable)
    }
}

/// Ordered list of catalog entries, private storage first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Concatenate private-storage entries followed by bundled entries.
    pub fn from_sources(private: Vec<CatalogEntry>, bundled: Vec<CatalogEntry>) -> Self {
        let mut entries = private;
        entries.extend(bundled);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Find the first entry with the given source path.
    pub fn find_by_source(&self, source_path: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.source_path == source_path)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
