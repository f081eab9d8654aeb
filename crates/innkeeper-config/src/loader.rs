// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./innkeeper.toml` > `~/.config/innkeeper/innkeeper.toml`
//! > `/etc/innkeeper/innkeeper.toml` with environment variable overrides via
//! the `INNKEEPER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::InnkeeperConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG: &str = "/etc/innkeeper/innkeeper.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG: &str = "innkeeper.toml";

/// Per-user config file under the XDG config directory, if one can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("innkeeper/innkeeper.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/innkeeper/innkeeper.toml` (system-wide)
/// 3. `~/.config/innkeeper/innkeeper.toml` (user XDG config)
/// 4. `./innkeeper.toml` (local directory)
/// 5. `INNKEEPER_*` environment variables
pub fn load_config() -> Result<InnkeeperConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<InnkeeperConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(InnkeeperConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<InnkeeperConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(InnkeeperConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(InnkeeperConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `INNKEEPER_STORAGE_ROOMS_PATH` must map to `storage.rooms_path`,
/// not `storage.rooms.path`.
pub(crate) fn env_provider() -> Env {
    Env::prefixed("INNKEEPER_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to its dotted config key.
pub(crate) fn map_env_key(key: &str) -> String {
    key.replacen("hotel_", "hotel.", 1)
        .replacen("storage_", "storage.", 1)
        .replacen("logging_", "logging.", 1)
}
