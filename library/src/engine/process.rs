//! Engine process launching and command building.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use andrones_core::LaunchConfiguration;

/// Find the engine binary.
///
/// A value containing a path separator is used as is. Otherwise searches in
/// order:
/// 1. Same directory as the running executable
/// 2. System PATH
///
/// Returns the bare executable name if neither has it, so that spawning
/// reports the failure.
pub fn find_engine_binary(binary: &str) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    find_engine_binary_in(binary, exe_dir.as_deref())
}

/// Internal: Engine lookup relative to an explicit executable directory.
/// Extracted for testability.
pub(crate) fn find_engine_binary_in(binary: &str, exe_dir: Option<&Path>) -> PathBuf {
    let as_path = Path::new(binary);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        return as_path.to_path_buf();
    }

    let exe_name = if cfg!(windows) && as_path.extension().is_none() {
        format!("{}.exe", binary)
    } else {
        binary.to_string()
    };

    if let Some(dir) = exe_dir {
        let sibling = dir.join(&exe_name);
        if sibling.is_file() {
            return sibling;
        }
    }

    if let Ok(path) = which::which(&exe_name) {
        return path;
    }

    PathBuf::from(exe_name)
}

/// Build the engine command: positional arguments, assets root as cwd.
pub(crate) fn build_engine_command(
    engine: &Path,
    config: &LaunchConfiguration,
    assets_root: Option<&Path>,
) -> Command {
    let mut cmd = Command::new(engine);
    cmd.args(config.args());
    if let Some(dir) = assets_root {
        cmd.current_dir(dir);
    }
    cmd
}

fn not_found_hint(engine: &Path) -> String {
    format!(
        "Failed to start engine '{}'. Make sure it exists next to andrones, in your PATH, or set [engine] binary in config.toml.",
        engine.display()
    )
}

/// Spawn the engine and return immediately.
pub(crate) fn launch_engine(
    engine: &Path,
    config: &LaunchConfiguration,
    assets_root: Option<&Path>,
) -> Result<()> {
    let mut cmd = build_engine_command(engine, config, assets_root);

    tracing::info!("Launching engine: {:?}", cmd);

    match cmd.spawn() {
        Ok(child) => {
            tracing::debug!("Engine started with pid {}", child.id());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(e).with_context(|| not_found_hint(engine))
        }
        Err(e) => Err(e).context("Failed to spawn engine process"),
    }
}

/// Run the engine and wait for it to exit.
///
/// A non-zero exit code is logged, not returned as an error.
pub(crate) fn run_engine(
    engine: &Path,
    config: &LaunchConfiguration,
    assets_root: Option<&Path>,
) -> Result<()> {
    let mut cmd = build_engine_command(engine, config, assets_root);

    tracing::info!("Running engine: {:?}", cmd);

    let status = match cmd.status() {
        Ok(status) => status,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(e).with_context(|| not_found_hint(engine));
        }
        Err(e) => return Err(e).context("Failed to run engine process"),
    };

    if !status.success() {
        match status.code() {
            Some(code) => tracing::warn!("Engine exited with code: {}", code),
            None => tracing::warn!("Engine terminated by signal"),
        }
    }

    Ok(())
}
