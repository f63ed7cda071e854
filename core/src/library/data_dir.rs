//! Storage directory abstraction

use std::path::{Path, PathBuf};

/// Trait for providing the directories the library reads and writes.
///
/// Front ends decide where private storage and the external files
/// directory live; the library code only asks for them. Either may be
/// unavailable, in which case the caller treats the data as absent.
///
/// # Example
///
/// ```rust
/// use andrones_core::library::{StorageLayout, StorageProvider};
/// use std::path::PathBuf;
///
/// let layout = StorageLayout {
///     private_dir: Some(PathBuf::from("/data/andrones/library")),
///     external_dir: None,
/// };
/// assert!(layout.private_dir().is_some());
/// assert!(layout.external_files_dir().is_none());
/// ```
pub trait StorageProvider {
    /// Application-exclusive directory holding imported cartridge images.
    fn private_dir(&self) -> Option<PathBuf>;

    /// App-scoped external directory for companion assets.
    ///
    /// Implementations create the directory on demand. Returns `None` if
    /// it is not configured or cannot be created.
    fn external_files_dir(&self) -> Option<PathBuf>;
}

/// Concrete directory layout resolved from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageLayout {
    /// Private storage root
    pub private_dir: Option<PathBuf>,
    /// External files directory (companion scripts)
    pub external_dir: Option<PathBuf>,
}

impl StorageLayout {
    /// Layout rooted in a single base directory.
    ///
    /// Private storage lives in `<base>/library`, external files in
    /// `<base>/external`.
    pub fn under(base: &Path) -> Self {
        Self {
            private_dir: Some(base.join("library")),
            external_dir: Some(base.join("external")),
        }
    }
}

impl StorageProvider for StorageLayout {
    fn private_dir(&self) -> Option<PathBuf> {
        self.private_dir.clone()
    }

    fn external_files_dir(&self) -> Option<PathBuf> {
        let dir = self.external_dir.as_ref()?;
        match std::fs::create_dir_all(dir) {
            Ok(()) => Some(dir.clone()),
            Err(e) => {
                tracing::debug!(
                    "External files directory unavailable: {}: {}",
                    dir.display(),
                    e
                );
                None
            }
        }
    }
}
