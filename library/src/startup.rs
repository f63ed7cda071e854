//! Work done on every start, before any command runs.

use andrones_core::library::StorageProvider;
use andrones_core::provision::{DiskScriptStore, ProvisionOutcome, ensure_default_script};

/// Make sure the companion script exists in the external files directory.
pub fn provision_companion_script(storage: &dyn StorageProvider) -> ProvisionOutcome {
    let external = storage.external_files_dir();
    let outcome = ensure_default_script(&mut DiskScriptStore, external.as_deref());
    tracing::debug!("{}", outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use andrones_core::library::StorageLayout;
    use andrones_core::provision::DEFAULT_SCRIPT;
    use tempfile::TempDir;

    #[test]
    fn test_first_start_writes_script() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StorageLayout::under(temp_dir.path());

        let outcome = provision_companion_script(&storage);

        let script = temp_dir.path().join("external/hitbox.lua");
        assert_eq!(outcome, ProvisionOutcome::Written(script.clone()));
        assert_eq!(std::fs::read_to_string(script).unwrap(), DEFAULT_SCRIPT);
    }

    #[test]
    fn test_later_starts_leave_script_alone() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StorageLayout::under(temp_dir.path());

        provision_companion_script(&storage);
        let outcome = provision_companion_script(&storage);

        assert!(matches!(outcome, ProvisionOutcome::AlreadyPresent(_)));
    }

    #[test]
    fn test_no_external_dir() {
        assert_eq!(
            provision_companion_script(&StorageLayout::default()),
            ProvisionOutcome::NoDirectory
        );
    }
}
