//! Centralized constants for the AndroNES library.
//!
//! Values the engine or the companion scripting engine depend on live here
//! so that every crate spells them the same way.

/// Directory inside the bundled assets root reserved for built-in titles.
pub const BUNDLED_ROM_DIR: &str = "roms";

/// Prefix that marks a source path as a bundled-asset reference.
///
/// Private-storage entries always carry absolute paths, so a relative path
/// starting with this prefix can never be mistaken for one.
pub const BUNDLED_ROM_PREFIX: &str = "roms/";

/// Overlay cartridge appended to the engine arguments in alternate mode.
pub const OVERLAY_ROM_REFERENCE: &str = "roms/GENIE.nes";

/// Category name used when recording a launch.
pub const RECENT_CATEGORY: &str = "recent";

/// Prefix of the synthetic name given to imports without usable metadata.
pub const SYNTHETIC_NAME_PREFIX: &str = "game_";

/// File name of the companion script written on first start.
pub const DEFAULT_SCRIPT_FILE_NAME: &str = "hitbox.lua";

/// Default name of the engine executable.
pub const DEFAULT_ENGINE_BINARY: &str = "andrones-engine";
