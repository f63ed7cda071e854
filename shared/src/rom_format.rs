//! Cartridge file formats recognized by the library.
//!
//! `RomFormat` is the single source of truth for which file extensions the
//! catalog picks up and which of those the engine is expected to boot.
//!
//! # Example
//!
//! ```
//! use andrones_shared::{NES_ROM_FORMAT, rom_format_for_name};
//!
//! assert_eq!(NES_ROM_FORMAT.extension, "nes");
//! assert!(rom_format_for_name("Zelda.NES").is_some());
//! assert!(rom_format_for_name("notes.txt").is_none());
//! ```

/// File format description for a cartridge image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomFormat {
    /// File extension without dot (e.g., "nes")
    pub extension: &'static str,

    /// Human-readable format name
    pub description: &'static str,

    /// Whether the launch path is expected to boot this format.
    ///
    /// Sound-only images are listed in the catalog but are not guaranteed
    /// to play.
    pub launchable: bool,
}

impl RomFormat {
    pub const fn new(extension: &'static str, description: &'static str, launchable: bool) -> Self {
        Self {
            extension,
            description,
            launchable,
        }
    }

    /// Returns true if `file_name` ends in `.<extension>`, ignoring case.
    pub fn matches(&self, file_name: &str) -> bool {
        let Some((stem, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        !stem.is_empty() && ext.eq_ignore_ascii_case(self.extension)
    }
}

/// iNES cartridge image (`.nes`).
pub const NES_ROM_FORMAT: RomFormat = RomFormat::new("nes", "iNES cartridge image", true);

/// NES Sound Format image (`.nsf`), catalog inclusion only.
pub const NSF_ROM_FORMAT: RomFormat = RomFormat::new("nsf", "NES sound image", false);

/// All formats included in the catalog, in priority order.
pub const ROM_FORMATS: &[RomFormat] = &[NES_ROM_FORMAT, NSF_ROM_FORMAT];

/// Look up the format of a file by its name (case-insensitive extension).
pub fn rom_format_for_name(file_name: &str) -> Option<&'static RomFormat> {
    ROM_FORMATS.iter().find(|format| format.matches(file_name))
}
