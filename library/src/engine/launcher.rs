//! EngineLauncher builder.

use std::path::{Path, PathBuf};

use anyhow::Result;

use andrones_core::LaunchConfiguration;
use andrones_shared::DEFAULT_ENGINE_BINARY;

use super::process::{find_engine_binary, launch_engine, run_engine};

/// Options for the engine process.
#[derive(Debug, Clone)]
struct EngineOptions {
    /// Engine binary name or path
    binary: String,
    /// Working directory; `roms/...` references resolve against it
    assets_root: Option<PathBuf>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            binary: DEFAULT_ENGINE_BINARY.to_string(),
            assets_root: None,
        }
    }
}

/// Builder for starting the engine with a fluent API.
///
/// # Examples
///
/// ```ignore
/// // Spawn and return immediately
/// EngineLauncher::new(config)
///     .assets_root("/usr/share/andrones/assets")
///     .launch()?;
///
/// // Run with a custom binary and wait for it to exit
/// EngineLauncher::new(config)
///     .binary("/opt/engine/bin/andrones-engine")
///     .run()?;
/// ```
#[derive(Debug, Clone)]
pub struct EngineLauncher {
    config: LaunchConfiguration,
    options: EngineOptions,
}

impl EngineLauncher {
    pub fn new(config: LaunchConfiguration) -> Self {
        Self {
            config,
            options: EngineOptions::default(),
        }
    }

    /// Set the engine binary name or path.
    pub fn binary(mut self, binary: impl Into<String>) -> Self {
        self.options.binary = binary.into();
        self
    }

    /// Set the bundled assets root used as working directory.
    pub fn assets_root(mut self, dir: impl AsRef<Path>) -> Self {
        self.options.assets_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Resolved engine executable.
    pub fn engine_path(&self) -> PathBuf {
        find_engine_binary(&self.options.binary)
    }

    /// Launch the engine (spawns and returns immediately).
    pub fn launch(self) -> Result<()> {
        let engine = self.engine_path();
        launch_engine(&engine, &self.config, self.options.assets_root.as_deref())
    }

    /// Run the engine and wait for it to finish.
    pub fn run(self) -> Result<()> {
        let engine = self.engine_path();
        run_engine(&engine, &self.config, self.options.assets_root.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LaunchConfiguration {
        LaunchConfiguration {
            rom_reference: "roms/Tetris.nes".to_string(),
            width: 1280,
            height: 720,
            tv_mode: false,
            overlay_reference: None,
        }
    }

    #[test]
    fn test_default_binary() {
        let launcher = EngineLauncher::new(config());
        assert_eq!(launcher.options.binary, DEFAULT_ENGINE_BINARY);
        assert!(launcher.options.assets_root.is_none());
    }

    #[test]
    fn test_explicit_binary_path_is_used() {
        let launcher = EngineLauncher::new(config())
            .binary("/opt/engine/andrones-engine")
            .assets_root("/usr/share/andrones/assets");
        assert_eq!(
            launcher.engine_path(),
            PathBuf::from("/opt/engine/andrones-engine")
        );
        assert_eq!(
            launcher.options.assets_root.as_deref(),
            Some(Path::new("/usr/share/andrones/assets"))
        );
    }
}
