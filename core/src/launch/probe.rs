//! Display dimension probing
//!
//! Two providers behind one capability, chosen by host API level.

use super::host::{HostContext, ProbeError};

/// First API level that exposes current window bounds.
pub const WINDOW_METRICS_API_LEVEL: u32 = 30;

/// Yields the `(width, height)` handed to the engine.
pub trait DimensionProbe {
    fn dimensions(&self, host: &dyn HostContext) -> Result<(u32, u32), ProbeError>;
}

/// Reads the current window bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowBoundsProbe;

impl DimensionProbe for WindowBoundsProbe {
    fn dimensions(&self, host: &dyn HostContext) -> Result<(u32, u32), ProbeError> {
        let bounds = host.current_window_bounds()?;
        positive(bounds.width(), bounds.height())
    }
}

/// Reads the legacy display metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyMetricsProbe;

impl DimensionProbe for LegacyMetricsProbe {
    fn dimensions(&self, host: &dyn HostContext) -> Result<(u32, u32), ProbeError> {
        let metrics = host.legacy_display_metrics()?;
        positive(
            i64::from(metrics.width_pixels),
            i64::from(metrics.height_pixels),
        )
    }
}

/// Pick the probe for a host API level.
pub fn select_probe(api_level: u32) -> &'static dyn DimensionProbe {
    if api_level >= WINDOW_METRICS_API_LEVEL {
        &WindowBoundsProbe
    } else {
        &LegacyMetricsProbe
    }
}

/// Both sides must be positive and fit a `u32`.
fn positive(width: i64, height: i64) -> Result<(u32, u32), ProbeError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(ProbeError::Degenerate { width, height }),
    }
}
