//! Importing external cartridge files into private storage
//!
//! An import copies the bytes of an opaque [`ContentReference`] into the
//! private storage root and then rescans the catalog. The file name comes
//! from the reference's display-name metadata when it has one, otherwise a
//! timestamped synthetic name is used.
//!
//! Formats are not validated. A file whose name has no recognized cartridge
//! extension is still copied, it just won't show up in the catalog.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use andrones_shared::{
    NES_ROM_FORMAT, SYNTHETIC_NAME_PREFIX, copy_buffered, is_safe_file_name, rom_format_for_name,
};
use chrono::{DateTime, Utc};

use super::{Catalog, CatalogEntry, CatalogScanner};

/// Generic message shown to the user when an import fails.
pub const IMPORT_FAILED_MESSAGE: &str = "Import failed";

/// A file selected outside the library, e.g. through a system picker.
pub trait ContentReference {
    /// Display-name metadata, if the source exposes any.
    ///
    /// Errors are treated the same as `Ok(None)`.
    fn display_name(&self) -> io::Result<Option<String>>;

    /// Open the content for reading.
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// Content reference backed by a local file path.
#[derive(Debug, Clone)]
pub struct FileReference {
    path: PathBuf,
}

impl FileReference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentReference for FileReference {
    fn display_name(&self) -> io::Result<Option<String>> {
        Ok(self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string))
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

/// Errors that abort an import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// No private storage root is configured
    #[error("private storage is not available")]
    NoStorage,

    /// The private storage root could not be created
    #[error("failed to prepare private storage {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The reference could not be opened
    #[error("failed to open import source: {0}")]
    Open(#[source] io::Error),

    /// The destination file could not be created
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the source or writing the destination failed mid-copy
    #[error("failed to copy into {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Synthetic file name used when the reference has no usable name.
pub fn synthetic_file_name(now: DateTime<Utc>) -> String {
    format!(
        "{}{}.{}",
        SYNTHETIC_NAME_PREFIX,
        now.timestamp_millis(),
        NES_ROM_FORMAT.extension
    )
}

/// User-visible confirmation for a finished import.
pub fn import_confirmation(entry: &CatalogEntry) -> String {
    format!("Imported: {}", entry.display_name)
}

/// Import `reference` into private storage and rescan into `catalog`.
///
/// Returns the entry for the new file. On failure nothing is rolled back:
/// a partially written file stays where it is and `catalog` is left as it
/// was.
///
/// A metadata name that matches an existing file replaces that file.
pub fn import_file(
    reference: &dyn ContentReference,
    scanner: &CatalogScanner<'_>,
    catalog: &mut Catalog,
) -> Result<CatalogEntry, ImportError> {
    import_file_at(reference, scanner, catalog, Utc::now())
}

/// Internal: Import with an explicit clock.
/// Extracted for testability.
pub(crate) fn import_file_at(
    reference: &dyn ContentReference,
    scanner: &CatalogScanner<'_>,
    catalog: &mut Catalog,
    now: DateTime<Utc>,
) -> Result<CatalogEntry, ImportError> {
    let root = scanner.private_dir().ok_or(ImportError::NoStorage)?;
    let file_name = resolve_file_name(reference, now);
    let dest = root.join(&file_name);

    copy_into(reference, &root, &dest)?;

    if rom_format_for_name(&file_name).is_none() {
        tracing::warn!(
            "Imported '{}' has no recognized cartridge extension; it will not be listed",
            file_name
        );
    }

    *catalog = scanner.scan();
    let entry = CatalogEntry::private(&dest, &file_name);
    tracing::info!("{}", import_confirmation(&entry));
    Ok(entry)
}

/// Pick the destination file name for an import.
///
/// Metadata wins when it is present, non-empty and safe to use as a single
/// path component. Everything else falls back to the synthetic name.
fn resolve_file_name(reference: &dyn ContentReference, now: DateTime<Utc>) -> String {
    match reference.display_name() {
        Ok(Some(name)) if is_safe_file_name(&name) => name,
        Ok(Some(name)) if !name.is_empty() => {
            tracing::warn!("Ignoring unsafe import name '{}'", name);
            synthetic_file_name(now)
        }
        Ok(_) => synthetic_file_name(now),
        Err(e) => {
            tracing::debug!("Display name lookup failed: {}", e);
            synthetic_file_name(now)
        }
    }
}

/// Copy the reference into `dest`, creating `root` if needed.
///
/// Both streams are dropped on every path out of this function.
fn copy_into(
    reference: &dyn ContentReference,
    root: &Path,
    dest: &Path,
) -> Result<(), ImportError> {
    std::fs::create_dir_all(root).map_err(|source| ImportError::Storage {
        path: root.to_path_buf(),
        source,
    })?;

    let mut input = reference.open().map_err(ImportError::Open)?;

    if dest.exists() {
        tracing::warn!("Import replaces existing file: {}", dest.display());
    }
    let mut output = File::create(dest).map_err(|source| ImportError::Create {
        path: dest.to_path_buf(),
        source,
    })?;

    let copied = copy_buffered(&mut input, &mut output).map_err(|source| ImportError::Copy {
        path: dest.to_path_buf(),
        source,
    })?;
    tracing::debug!("Copied {} bytes into {}", copied, dest.display());
    Ok(())
}
