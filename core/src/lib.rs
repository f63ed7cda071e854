//! AndroNES Core - cartridge library and launch bridge
//!
//! This crate holds everything between the user's files and the emulation
//! engine process:
//!
//! - [`library`] - catalog scanning, importing, recents bookkeeping
//! - [`launch`] - display probing and engine argument assembly
//! - [`provision`] - companion script provisioning on startup
//! - [`app`] - configuration and the owned library view state
//!
//! The engine itself is opaque. It receives a positional argument vector
//! built by [`launch::LaunchConfiguration::args`] and owns its own lifecycle.

pub mod app;
pub mod launch;
pub mod library;
pub mod provision;

pub use app::{LibraryView, Notification, Presentation};
pub use launch::{
    HostContext, LaunchConfiguration, ProbeError, build_launch_configuration, launch_entry,
};
pub use library::{Catalog, CatalogEntry, CatalogScanner, ImportError, import_file};
pub use provision::{ProvisionOutcome, ensure_default_script};
