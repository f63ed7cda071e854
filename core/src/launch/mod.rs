//! Launch configuration
//!
//! Turns a catalog entry plus the host's display state into the argument
//! vector the engine expects, and performs the launch-time side effects
//! (recents bookkeeping, orientation lock).

mod configuration;
mod host;
mod probe;

#[cfg(test)]
mod tests;

pub use configuration::{LaunchConfiguration, build_launch_configuration};
pub use host::{DisplayMetrics, HostContext, Orientation, ProbeError, Rect};
pub use probe::{
    DimensionProbe, LegacyMetricsProbe, WINDOW_METRICS_API_LEVEL, WindowBoundsProbe, select_probe,
};

use andrones_shared::RECENT_CATEGORY;

use crate::library::{CatalogEntry, CategoryStore};

/// Prepare `entry` for launch.
///
/// Records the entry as recent, builds the configuration and requests the
/// landscape lock. A recents failure is logged and does not block the
/// launch; a probe failure does.
pub fn launch_entry(
    entry: &CatalogEntry,
    host: &mut dyn HostContext,
    recents: &mut dyn CategoryStore,
    alternate: bool,
) -> Result<LaunchConfiguration, ProbeError> {
    if !entry.is_launchable() {
        tracing::warn!(
            "{} is not a launchable cartridge, the engine may reject it",
            entry.source_path
        );
    }

    if let Err(e) = recents.add_to_category(entry, RECENT_CATEGORY) {
        tracing::warn!("Failed to record {} as recent: {:#}", entry.display_name, e);
    }

    let config = build_launch_configuration(entry, host, alternate)?;
    host.request_orientation(Orientation::SensorLandscape);

    tracing::info!("Launching {} ({})", entry.display_name, config);
    Ok(config)
}
