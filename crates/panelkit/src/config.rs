//! CLI configuration: a thin wrapper around `panelkit_config` shared types.
//!
//! Re-exports the shared types and layers `GlobalOpts` flag overrides
//! (--gateway, --timeout, --insecure, --output, --color) on top.

use clap::ValueEnum;

use panelkit_core::SettingsConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use panelkit_config::{Config, config_path, load_config, load_config_or_default, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Fill unset `--output` / `--color` from the config file defaults.
///
/// Unrecognized values in the file fall back to table / auto.
pub fn apply_defaults(global: &mut GlobalOpts, cfg: &Config) {
    if global.output.is_none() {
        global.output = OutputFormat::from_str(&cfg.defaults.output, true).ok();
    }
    if global.color.is_none() {
        global.color = ColorMode::from_str(&cfg.defaults.color, true).ok();
    }
}

/// Translate the file config + global flags into a `SettingsConfig`.
///
/// Flag (or env) values take priority over the file.
pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<SettingsConfig, CliError> {
    let mut cfg = cfg.clone();
    if let Some(ref url) = global.gateway {
        cfg.gateway.url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        cfg.gateway.timeout_secs = timeout;
    }
    if global.insecure {
        cfg.gateway.insecure = true;
    }
    Ok(panelkit_config::to_settings_config(&cfg)?)
}
