//! Engine launch configuration

use std::fmt;

use andrones_shared::OVERLAY_ROM_REFERENCE;

use super::host::{HostContext, ProbeError};
use super::probe::select_probe;
use crate::library::CatalogEntry;

/// Everything the engine receives on its command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfiguration {
    pub rom_reference: String,
    pub width: u32,
    pub height: u32,
    pub tv_mode: bool,
    /// Fixed overlay cartridge, only set in alternate mode.
    pub overlay_reference: Option<String>,
}

impl LaunchConfiguration {
    /// Positional engine arguments.
    ///
    /// Always `[rom, width, height, tv]`, with the overlay reference appended
    /// as a fifth element in alternate mode.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.rom_reference.clone(),
            self.width.to_string(),
            self.height.to_string(),
            if self.tv_mode { "1" } else { "0" }.to_string(),
        ];
        if let Some(overlay) = &self.overlay_reference {
            args.push(overlay.clone());
        }
        args
    }

    pub fn is_alternate(&self) -> bool {
        self.overlay_reference.is_some()
    }
}

impl fmt::Display for LaunchConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args().join(" "))
    }
}

/// Probe the host and assemble the engine configuration for `entry`.
///
/// Probe failures propagate unrecovered.
pub fn build_launch_configuration(
    entry: &CatalogEntry,
    host: &dyn HostContext,
    alternate: bool,
) -> Result<LaunchConfiguration, ProbeError> {
    let (width, height) = select_probe(host.api_level()).dimensions(host)?;

    Ok(LaunchConfiguration {
        rom_reference: entry.source_path.clone(),
        width,
        height,
        tv_mode: host.is_television(),
        overlay_reference: alternate.then(|| OVERLAY_ROM_REFERENCE.to_string()),
    })
}
