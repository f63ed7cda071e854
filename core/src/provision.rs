//! Companion script provisioning
//!
//! On startup the library makes sure the engine's scripting directory holds
//! a default example script. Provisioning is best effort and never fails the
//! caller.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use andrones_shared::DEFAULT_SCRIPT_FILE_NAME;

/// Example script written on first run. Byte-identical on every host.
pub const DEFAULT_SCRIPT: &str = concat!(
    "-- Exemplo de Script Lua para AndroNES\n",
    "-- Desenha uma caixa ao redor do Mario (Super Mario Bros)\n",
    "while true do\n",
    "    -- 0x0086 = Posicao X, 0x00CE = Posicao Y (na memoria RAM)\n",
    "    local x = memory.readbyte(0x0086)\n",
    "    local y = memory.readbyte(0x00CE)\n",
    "    \n",
    "    if x > 0 and y > 0 then\n",
    "        gui.drawbox(x, y, x+16, y+24, \"green\")\n",
    "        gui.text(x, y-10, \"Mario\")\n",
    "    end\n",
    "    \n",
    "    FCEU.frameadvance()\n",
    "end\n",
);

/// Storage for companion scripts.
pub trait ScriptStore {
    fn exists(&self, path: &Path) -> bool;
    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Writes scripts straight to disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskScriptStore;

impl ScriptStore for DiskScriptStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// What [`ensure_default_script`] did. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Written(PathBuf),
    AlreadyPresent(PathBuf),
    NoDirectory,
    Failed(PathBuf),
}

impl fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written(path) => write!(f, "Wrote default script to {}", path.display()),
            Self::AlreadyPresent(path) => write!(f, "Script already present at {}", path.display()),
            Self::NoDirectory => write!(f, "No external files directory available"),
            Self::Failed(path) => write!(f, "Failed to write {}", path.display()),
        }
    }
}

/// Write the default script into `external_dir` unless it is already there.
///
/// Idempotent. An unavailable directory or a failed write is logged and
/// otherwise ignored.
pub fn ensure_default_script(
    store: &mut dyn ScriptStore,
    external_dir: Option<&Path>,
) -> ProvisionOutcome {
    let Some(dir) = external_dir else {
        tracing::debug!("Skipping script provisioning, no external files directory");
        return ProvisionOutcome::NoDirectory;
    };

    let path = dir.join(DEFAULT_SCRIPT_FILE_NAME);
    if store.exists(&path) {
        return ProvisionOutcome::AlreadyPresent(path);
    }

    tracing::info!("Creating default script at {}", path.display());
    match store.write(&path, DEFAULT_SCRIPT.as_bytes()) {
        Ok(()) => ProvisionOutcome::Written(path),
        Err(e) => {
            tracing::warn!("Failed to create default script {}: {}", path.display(), e);
            ProvisionOutcome::Failed(path)
        }
    }
}
