//! Desktop host context
//!
//! There is no platform window service on the desktop, so the display
//! values come from configuration and command-line overrides.

use andrones_core::app::config::DisplayConfig;
use andrones_core::launch::{DisplayMetrics, HostContext, Orientation, ProbeError, Rect};

/// Host context backed by [`DisplayConfig`].
#[derive(Debug, Clone)]
pub struct DesktopHost {
    display: DisplayConfig,
    requested_orientation: Option<Orientation>,
}

impl DesktopHost {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            display,
            requested_orientation: None,
        }
    }

    /// Last orientation lock requested by the launch path.
    pub fn requested_orientation(&self) -> Option<Orientation> {
        self.requested_orientation
    }
}

impl HostContext for DesktopHost {
    fn api_level(&self) -> u32 {
        self.display.api_level
    }

    fn current_window_bounds(&self) -> Result<Rect, ProbeError> {
        Ok(Rect::new(0, 0, self.display.width, self.display.height))
    }

    fn legacy_display_metrics(&self) -> Result<DisplayMetrics, ProbeError> {
        Ok(DisplayMetrics {
            width_pixels: self.display.width,
            height_pixels: self.display.height,
        })
    }

    fn is_television(&self) -> bool {
        self.display.tv_mode
    }

    fn request_orientation(&mut self, orientation: Orientation) {
        tracing::debug!("Orientation lock requested: {:?}", orientation);
        self.requested_orientation = Some(orientation);
    }
}
