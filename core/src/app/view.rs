//! Library view state
//!
//! One owned [`LibraryView`] holds the current catalog. It is refreshed
//! explicitly and rendered through the pure [`render`] function.

use std::fmt;

use crate::library::{
    Catalog, CatalogEntry, CatalogScanner, ContentReference, EntrySource, IMPORT_FAILED_MESSAGE,
    import_confirmation, import_file,
};

/// Text shown when the catalog has no entries.
pub const EMPTY_LIBRARY_MESSAGE: &str = "No games found. Import a .nes file to get started.";

/// Short user-facing message after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Import succeeded; carries the confirmation text.
    Imported(String),
    /// Import failed; details are in the log only.
    ImportFailed,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imported(message) => f.write_str(message),
            Self::ImportFailed => f.write_str(IMPORT_FAILED_MESSAGE),
        }
    }
}

/// One rendered catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub title: String,
    pub source_path: String,
    pub source: EntrySource,
}

impl From<&CatalogEntry> for CatalogRow {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            title: entry.display_name.clone(),
            source_path: entry.source_path.clone(),
            source: entry.source(),
        }
    }
}

/// Rendered catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Empty,
    Populated(Vec<CatalogRow>),
}

impl Presentation {
    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => writeln!(f, "{}", EMPTY_LIBRARY_MESSAGE),
            Self::Populated(rows) => {
                for row in rows {
                    let tag = match row.source {
                        EntrySource::Private => "library",
                        EntrySource::Bundled => "bundled",
                    };
                    writeln!(f, "  {:<40} [{}] {}", row.title, tag, row.source_path)?;
                }
                Ok(())
            }
        }
    }
}

/// Render a catalog. An empty catalog selects the empty-library presentation.
pub fn render(catalog: &Catalog) -> Presentation {
    if catalog.is_empty() {
        Presentation::Empty
    } else {
        Presentation::Populated(catalog.iter().map(CatalogRow::from).collect())
    }
}

/// Owned library state.
#[derive(Debug, Clone, Default)]
pub struct LibraryView {
    catalog: Catalog,
}

impl LibraryView {
    /// Build a view from a fresh scan.
    pub fn scanned(scanner: &CatalogScanner<'_>) -> Self {
        Self {
            catalog: scanner.scan(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rescan and replace the catalog.
    pub fn refresh(&mut self, scanner: &CatalogScanner<'_>) {
        self.catalog = scanner.scan();
    }

    pub fn is_empty_state(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn presentation(&self) -> Presentation {
        render(&self.catalog)
    }

    /// Import a file and report the result as a notification.
    ///
    /// Failures are logged in full; the notification stays generic.
    pub fn import(
        &mut self,
        reference: &dyn ContentReference,
        scanner: &CatalogScanner<'_>,
    ) -> Notification {
        match import_file(reference, scanner, &mut self.catalog) {
            Ok(entry) => Notification::Imported(import_confirmation(&entry)),
            Err(e) => {
                tracing::error!("Import failed: {}", e);
                Notification::ImportFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{DirAssetSource, FileReference, NoAssets, StorageLayout};
    use tempfile::TempDir;

    #[test]
    fn test_empty_catalog_renders_empty_state() {
        let presentation = render(&Catalog::default());
        assert!(presentation.is_empty_state());
        assert_eq!(presentation.to_string(), format!("{}\n", EMPTY_LIBRARY_MESSAGE));
    }

    #[test]
    fn test_populated_rows_keep_order() {
        let catalog = Catalog::from_sources(
            vec![CatalogEntry::private(
                std::path::Path::new("/lib/Zelda.nes"),
                "Zelda.nes",
            )],
            vec![CatalogEntry::bundled("Contra_(U).nes")],
        );

        let Presentation::Populated(rows) = render(&catalog) else {
            panic!("expected rows");
        };
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Zelda", "Contra"]);
        assert_eq!(rows[1].source, EntrySource::Bundled);
    }

    #[test]
    fn test_import_then_refresh() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StorageLayout::under(temp_dir.path());
        let scanner = CatalogScanner::new(&storage, &NoAssets);
        let mut view = LibraryView::scanned(&scanner);
        assert!(view.is_empty_state());

        let source = temp_dir.path().join("Zelda.nes");
        std::fs::write(&source, b"NES\x1a").unwrap();

        let notification = view.import(&FileReference::new(&source), &scanner);
        assert_eq!(notification, Notification::Imported("Imported: Zelda".into()));
        assert!(!view.is_empty_state());
        assert_eq!(view.catalog().entries()[0].display_name, "Zelda");
    }

    #[test]
    fn test_failed_import_is_generic() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StorageLayout::under(temp_dir.path());
        let scanner = CatalogScanner::new(&storage, &NoAssets);
        let mut view = LibraryView::default();

        let notification =
            view.import(&FileReference::new(temp_dir.path().join("missing.nes")), &scanner);
        assert_eq!(notification, Notification::ImportFailed);
        assert_eq!(notification.to_string(), "Import failed");
        assert!(view.is_empty_state());
    }

    #[test]
    fn test_refresh_picks_up_bundled() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StorageLayout::default();
        std::fs::create_dir_all(temp_dir.path().join("roms")).unwrap();
        let assets = DirAssetSource::new(temp_dir.path());
        let scanner = CatalogScanner::new(&storage, &assets);

        let mut view = LibraryView::scanned(&scanner);
        assert!(view.presentation().is_empty_state());

        std::fs::write(temp_dir.path().join("roms/Tetris.nes"), b"NES\x1a").unwrap();
        view.refresh(&scanner);
        assert_eq!(view.catalog().len(), 1);
    }
}
