//! Host capabilities used when launching
//!
//! The launch path never touches a real windowing system directly. Whatever
//! runs the library (a desktop binary, a test) implements [`HostContext`].

/// Window bounds in pixels, edges inclusive of `left`/`top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels. Widened so any pair of edges subtracts without overflow.
    pub const fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    pub const fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }
}

/// Legacy whole-display metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayMetrics {
    pub width_pixels: i32,
    pub height_pixels: i32,
}

/// Orientation lock requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Landscape, either way up, following the sensor.
    SensorLandscape,
}

/// Failure while querying display dimensions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to query window bounds: {0}")]
    WindowBounds(String),
    #[error("Failed to query display metrics: {0}")]
    DisplayMetrics(String),
    #[error("Display reported unusable dimensions {width}x{height}")]
    Degenerate { width: i64, height: i64 },
}

/// What the launch path needs from the host.
pub trait HostContext {
    /// Host platform API level, used to pick a dimension probe.
    fn api_level(&self) -> u32;

    /// Current window bounds (newer hosts).
    fn current_window_bounds(&self) -> Result<Rect, ProbeError>;

    /// Whole-display metrics (older hosts).
    fn legacy_display_metrics(&self) -> Result<DisplayMetrics, ProbeError>;

    /// Whether the host is a television-class device.
    fn is_television(&self) -> bool;

    fn request_orientation(&mut self, orientation: Orientation);
}
