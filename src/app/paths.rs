// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first of these wins:
//! 1. a directory passed explicitly (tests)
//! 2. `--config-dir`, recorded once at startup by [`init_cli_overrides`]
//! 3. the `POWERSWITCH_CONFIG_DIR` environment variable, when non-empty
//! 4. `<platform config dir>/Powerswitch`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "Powerswitch";

pub const ENV_CONFIG_DIR: &str = "POWERSWITCH_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

/// The config directory, or `None` when the platform has no config home.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

pub fn config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(|| {
            std::env::var_os(ENV_CONFIG_DIR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_DIR_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching the environment must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_directory_wins() {
        let explicit = PathBuf::from("/tmp/powerswitch-explicit");
        assert_eq!(config_dir_with_override(Some(explicit.clone())), Some(explicit));
    }

    #[test]
    fn environment_overrides_platform_default() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/srv/vehicle/config");
        assert_eq!(config_dir(), Some(PathBuf::from("/srv/vehicle/config")));
        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");
        if let Some(path) = config_dir() {
            assert!(path.ends_with(APP_DIR_NAME));
        }
        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
