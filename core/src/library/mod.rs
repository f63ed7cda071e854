//! Cartridge library management
//!
//! Discovery of cartridge images in private storage and bundled assets,
//! importing external files, and recents bookkeeping.

mod assets;
mod catalog;
mod data_dir;
mod import;
mod recents;

pub use assets::{AssetSource, DirAssetSource, NoAssets};
pub use catalog::{
    Catalog, CatalogEntry, CatalogScanner, EntrySource, LookupError, clean_display_name,
};
pub use data_dir::{StorageLayout, StorageProvider};
pub use import::{
    ContentReference, FileReference, IMPORT_FAILED_MESSAGE, ImportError, import_confirmation,
    import_file, synthetic_file_name,
};
pub use recents::{CategoryStore, JsonCategoryStore};
