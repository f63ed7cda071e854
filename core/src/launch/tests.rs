use std::path::Path;

use anyhow::bail;

use super::*;

// =============================================================
// Fakes
// =============================================================

/// Host with fixed answers for both probe paths.
struct FakeHost {
    api_level: u32,
    bounds: Result<Rect, ProbeError>,
    metrics: Result<DisplayMetrics, ProbeError>,
    television: bool,
    orientation_requests: Vec<Orientation>,
}

impl FakeHost {
    fn modern(width: i32, height: i32) -> Self {
        Self {
            api_level: 34,
            bounds: Ok(Rect::new(0, 0, width, height)),
            metrics: Err(ProbeError::DisplayMetrics("not expected".into())),
            television: false,
            orientation_requests: vec![],
        }
    }

    fn legacy(width: i32, height: i32) -> Self {
        Self {
            api_level: 29,
            bounds: Err(ProbeError::WindowBounds("not expected".into())),
            metrics: Ok(DisplayMetrics {
                width_pixels: width,
                height_pixels: height,
            }),
            television: false,
            orientation_requests: vec![],
        }
    }
}

impl HostContext for FakeHost {
    fn api_level(&self) -> u32 {
        self.api_level
    }

    fn current_window_bounds(&self) -> Result<Rect, ProbeError> {
        self.bounds.clone()
    }

    fn legacy_display_metrics(&self) -> Result<DisplayMetrics, ProbeError> {
        self.metrics.clone()
    }

    fn is_television(&self) -> bool {
        self.television
    }

    fn request_orientation(&mut self, orientation: Orientation) {
        self.orientation_requests.push(orientation);
    }
}

#[derive(Default)]
struct RecordingStore {
    added: Vec<(String, String)>,
    fail: bool,
}

impl CategoryStore for RecordingStore {
    fn add_to_category(&mut self, entry: &CatalogEntry, category: &str) -> anyhow::Result<()> {
        if self.fail {
            bail!("disk full");
        }
        self.added
            .push((entry.source_path.clone(), category.to_string()));
        Ok(())
    }
}

fn entry() -> CatalogEntry {
    CatalogEntry::private(Path::new("/data/library/Zelda.nes"), "Zelda.nes")
}

// =============================================================
// Probe selection
// =============================================================

#[test]
fn test_modern_host_uses_window_bounds() {
    let host = FakeHost::modern(1920, 1080);
    let config = build_launch_configuration(&entry(), &host, false).unwrap();
    assert_eq!((config.width, config.height), (1920, 1080));
}

#[test]
fn test_threshold_api_level_uses_window_bounds() {
    let mut host = FakeHost::modern(1280, 720);
    host.api_level = WINDOW_METRICS_API_LEVEL;
    let config = build_launch_configuration(&entry(), &host, false).unwrap();
    assert_eq!((config.width, config.height), (1280, 720));
}

#[test]
fn test_legacy_host_uses_display_metrics() {
    let host = FakeHost::legacy(800, 480);
    let config = build_launch_configuration(&entry(), &host, false).unwrap();
    assert_eq!((config.width, config.height), (800, 480));
}

#[test]
fn test_window_bounds_use_edges() {
    let mut host = FakeHost::modern(0, 0);
    host.bounds = Ok(Rect::new(100, 50, 1380, 770));
    let config = build_launch_configuration(&entry(), &host, false).unwrap();
    assert_eq!((config.width, config.height), (1280, 720));
}

#[test]
fn test_probe_failure_propagates() {
    let mut host = FakeHost::modern(0, 0);
    host.bounds = Err(ProbeError::WindowBounds("no window".into()));
    let err = build_launch_configuration(&entry(), &host, false).unwrap_err();
    assert!(matches!(err, ProbeError::WindowBounds(_)));
}

#[test]
fn test_degenerate_dimensions_rejected() {
    let host = FakeHost::legacy(0, 480);
    let err = build_launch_configuration(&entry(), &host, false).unwrap_err();
    assert!(matches!(
        err,
        ProbeError::Degenerate {
            width: 0,
            height: 480
        }
    ));
}

#[test]
fn test_extreme_window_edges_do_not_overflow() {
    let mut host = FakeHost::modern(0, 0);
    host.bounds = Ok(Rect::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN));
    let err = build_launch_configuration(&entry(), &host, false).unwrap_err();
    assert!(matches!(
        err,
        ProbeError::Degenerate { width, height }
            if width == i64::from(i32::MIN) - i64::from(i32::MAX) && width == height
    ));
}

#[test]
fn test_rect_extents_are_widened() {
    let rect = Rect::new(i32::MIN, -10, i32::MAX, 10);
    assert_eq!(rect.width(), i64::from(u32::MAX));
    assert_eq!(rect.height(), 20);
}

// =============================================================
// Argument vector
// =============================================================

#[test]
fn test_standard_args() {
    let host = FakeHost::modern(1920, 1080);
    let config = build_launch_configuration(&entry(), &host, false).unwrap();
    assert_eq!(
        config.args(),
        vec!["/data/library/Zelda.nes", "1920", "1080", "0"]
    );
    assert!(!config.is_alternate());
}

#[test]
fn test_alternate_mode_appends_overlay() {
    let host = FakeHost::modern(1920, 1080);
    let config = build_launch_configuration(&entry(), &host, true).unwrap();
    let args = config.args();
    assert_eq!(args.len(), 5);
    assert_eq!(args[4], "roms/GENIE.nes");
    assert!(config.is_alternate());
}

#[test]
fn test_tv_mode_flag() {
    let mut host = FakeHost::legacy(1920, 1080);
    host.television = true;
    let config = build_launch_configuration(&CatalogEntry::bundled("Tetris.nes"), &host, false)
        .unwrap();
    assert_eq!(config.args(), vec!["roms/Tetris.nes", "1920", "1080", "1"]);
}

// =============================================================
// launch_entry
// =============================================================

#[test]
fn test_launch_records_recent_and_locks_orientation() {
    let mut host = FakeHost::modern(1920, 1080);
    let mut store = RecordingStore::default();

    let config = launch_entry(&entry(), &mut host, &mut store, false).unwrap();

    assert_eq!(config.rom_reference, "/data/library/Zelda.nes");
    assert_eq!(
        store.added,
        vec![("/data/library/Zelda.nes".to_string(), "recent".to_string())]
    );
    assert_eq!(host.orientation_requests, vec![Orientation::SensorLandscape]);
}

#[test]
fn test_recents_failure_does_not_block_launch() {
    let mut host = FakeHost::modern(1920, 1080);
    let mut store = RecordingStore {
        fail: true,
        ..Default::default()
    };

    assert!(launch_entry(&entry(), &mut host, &mut store, true).is_ok());
    assert_eq!(host.orientation_requests.len(), 1);
}

#[test]
fn test_probe_failure_skips_orientation_lock() {
    let mut host = FakeHost::legacy(-1, -1);
    let mut store = RecordingStore::default();

    assert!(launch_entry(&entry(), &mut host, &mut store, false).is_err());
    assert!(host.orientation_requests.is_empty());
}
