//! Shared types for the AndroNES cartridge library.
//!
//! Everything here is a single source of truth that both the library core
//! and the front end agree on: which file extensions are cartridges, how
//! bundled references are spelled, and the on-disk shape of recents records.

pub mod constants;
pub mod fs;
pub mod ids;
pub mod local;
pub mod rom_format;

pub use constants::*;
pub use fs::{IMPORT_BUFFER_BYTES, copy_buffered};
pub use ids::is_safe_file_name;
pub use local::{CategoryFile, RecordedEntry};
pub use rom_format::{NES_ROM_FORMAT, NSF_ROM_FORMAT, ROM_FORMATS, RomFormat, rom_format_for_name};
