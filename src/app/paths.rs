// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! Single source of truth for where configuration and state live, so every
//! component resolves the same directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`TRIPSHARE_DATA_DIR`, `TRIPSHARE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the app folder appended
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.data_dir, flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "TripShare";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "TRIPSHARE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TRIPSHARE_CONFIG_DIR";

/// Global CLI override for data directory (set once at startup).
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for data and config directories.
///
/// Must be called at most once, before any path resolution happens.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// Resolves one directory through the override chain.
fn resolve_dir(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform_default: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_default.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application data directory path.
///
/// Holds application-managed state (`state.cbor`), not user preferences.
///
/// - Linux: `~/.local/share/TripShare/`
/// - macOS: `~/Library/Application Support/TripShare/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\TripShare\`
///
/// Returns `None` if the data directory cannot be determined (rare edge case).
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
///
/// The `override_path` parameter takes priority over CLI, environment, and
/// platform defaults; it exists for tests and portable deployments.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

/// Returns the application config directory path.
///
/// Holds user preferences (`settings.toml`).
///
/// - Linux: `~/.config/TripShare/`
/// - macOS: `~/Library/Application Support/TripShare/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\TripShare\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}
