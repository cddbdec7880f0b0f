// ── Runtime configuration ──
//
// Describes *how* to reach the settings backend and which static values
// the detail pages display. Core never touches disk: the CLI (or any other
// embedder) builds a `SettingsConfig` and hands it in.

use std::time::Duration;

use panelkit_api::TlsMode;
use serde::{Deserialize, Serialize};
use url::Url;

/// Static network values shown on detail pages.
///
/// The backend does not report addressing for arbitrary networks, so the
/// detail pages show these configured values verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPlaceholders {
    pub ip_address: String,
    pub subnet_mask: String,
    pub gateway: String,
}

impl Default for NetworkPlaceholders {
    fn default() -> Self {
        Self {
            ip_address: "192.168.1.100".into(),
            subnet_mask: "255.255.255.0".into(),
            gateway: "192.168.1.1".into(),
        }
    }
}

/// Configuration for one settings session.
#[derive(Debug, Clone)]
pub struct SettingsConfig {
    /// Base URL of the command bridge (e.g. `http://127.0.0.1:7878`).
    pub gateway_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Certificate policy for `https` bridges.
    pub tls: TlsMode,
    /// Static values for the detail pages.
    pub placeholders: NetworkPlaceholders,
}

impl SettingsConfig {
    /// Default timeout applied when the embedder doesn't choose one.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(gateway_url: Url) -> Self {
        Self {
            gateway_url,
            timeout: Self::DEFAULT_TIMEOUT,
            tls: TlsMode::System,
            placeholders: NetworkPlaceholders::default(),
        }
    }
}
