// ── Page data loaders ──
//
// Per-page functions that trigger the fetches a page needs and shape the
// result into display payloads. A failed fetch degrades to the store's
// last known value. A failed reconciliation is terminal (`NotFound`).

mod network;
mod pages;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::CoreError;

pub use network::{
    WirelessOverview, available_network_detail, known_network_detail, wireless_overview,
};
pub use pages::{battery_page, bluetooth_page, display_page, security_page, sound_page};

/// One label/value line on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub title: String,
    pub value: Value,
}

impl DetailRow {
    pub fn new(title: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }

    /// The value as display text: strings unquoted, null as `-`.
    pub fn display_value(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Null => "-".into(),
            other => other.to_string(),
        }
    }
}

/// Payload of a network detail route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDetailPage {
    pub title: String,
    pub network_detail: Vec<Vec<DetailRow>>,
    pub is_connected: Option<String>,
}

/// Payload of a plain settings page: titled groups of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsPage {
    pub title: String,
    pub sections: Vec<Vec<DetailRow>>,
}

/// Use a fresh value, or fall back to the last published one.
pub(crate) fn or_stale<T>(
    page: &'static str,
    fetched: Result<T, CoreError>,
    stale: impl FnOnce() -> T,
) -> T {
    fetched.unwrap_or_else(|err| {
        warn!(page, error = %err, "fetch failed, showing last known state");
        stale()
    })
}
