//! Shared configuration for panelkit front ends.
//!
//! TOML file + `PANELKIT_*` environment layering, and translation to
//! `panelkit_core::SettingsConfig`. The CLI adds `GlobalOpts`-aware
//! overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use panelkit_core::{NetworkPlaceholders, SettingsConfig, TlsMode};

/// Prefix for environment overrides. Nested keys use `__`, e.g.
/// `PANELKIT_GATEWAY__URL` or `PANELKIT_DEFAULTS__OUTPUT`.
pub const ENV_PREFIX: &str = "PANELKIT_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewaySection,

    /// Static values shown on network detail pages.
    #[serde(default)]
    pub network: NetworkSection,

    #[serde(default)]
    pub defaults: Defaults,
}

/// Where the command bridge lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewaySection {
    /// Bridge base URL (e.g., "http://127.0.0.1:7878").
    #[serde(default = "default_gateway_url")]
    pub url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Path to a custom CA certificate for `https` bridges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    /// Accept any certificate.
    #[serde(default)]
    pub insecure: bool,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            url: default_gateway_url(),
            timeout_secs: default_timeout(),
            ca_cert: None,
            insecure: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkSection {
    #[serde(default = "default_ip_address")]
    pub ip_address: String,
    #[serde(default = "default_subnet_mask")]
    pub subnet_mask: String,
    #[serde(default = "default_network_gateway")]
    pub gateway: String,
}

impl Default for NetworkSection {
    fn default() -> Self {
        Self {
            ip_address: default_ip_address(),
            subnet_mask: default_subnet_mask(),
            gateway: default_network_gateway(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_gateway_url() -> String {
    "http://127.0.0.1:7878".into()
}
fn default_timeout() -> u64 {
    SettingsConfig::DEFAULT_TIMEOUT.as_secs()
}
fn default_ip_address() -> String {
    NetworkPlaceholders::default().ip_address
}
fn default_subnet_mask() -> String {
    NetworkPlaceholders::default().subnet_mask
}
fn default_network_gateway() -> String {
    NetworkPlaceholders::default().gateway
}
fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "panelkit", "panelkit").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("panelkit");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path, still layering the environment.
///
/// A missing file is not an error: defaults and env apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation to core config ──────────────────────────────────────

/// Build a `SettingsConfig` from the loaded file, no CLI overrides.
pub fn to_settings_config(cfg: &Config) -> Result<SettingsConfig, ConfigError> {
    let url: url::Url = cfg
        .gateway
        .url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "gateway.url".into(),
            reason: format!("invalid URL: {}", cfg.gateway.url),
        })?;

    if cfg.gateway.timeout_secs == 0 {
        return Err(ConfigError::Validation {
            field: "gateway.timeout_secs".into(),
            reason: "must be at least 1".into(),
        });
    }

    let tls = if cfg.gateway.insecure {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = cfg.gateway.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    Ok(SettingsConfig {
        gateway_url: url,
        timeout: Duration::from_secs(cfg.gateway.timeout_secs),
        tls,
        placeholders: NetworkPlaceholders {
            ip_address: cfg.network.ip_address.clone(),
            subnet_mask: cfg.network.subnet_mask.clone(),
            gateway: cfg.network.gateway.clone(),
        },
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_translate_cleanly() {
        let settings = to_settings_config(&Config::default()).unwrap();
        assert_eq!(settings.gateway_url.as_str(), "http://127.0.0.1:7878/");
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert!(matches!(settings.tls, TlsMode::System));
        assert_eq!(settings.placeholders, NetworkPlaceholders::default());
    }

    #[test]
    fn bad_url_is_a_validation_error() {
        let mut cfg = Config::default();
        cfg.gateway.url = "not a url".into();
        let err = to_settings_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("gateway.url"));
    }

    #[test]
    fn insecure_wins_over_ca_cert() {
        let mut cfg = Config::default();
        cfg.gateway.insecure = true;
        cfg.gateway.ca_cert = Some(PathBuf::from("/etc/ca.pem"));
        let settings = to_settings_config(&cfg).unwrap();
        assert!(matches!(settings.tls, TlsMode::DangerAcceptInvalid));
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut cfg = Config::default();
        cfg.gateway.timeout_secs = 0;
        assert!(to_settings_config(&cfg).is_err());
    }
}
