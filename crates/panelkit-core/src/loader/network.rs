// Network detail and overview loaders

use serde::Serialize;
use serde_json::Value;

use super::{DetailRow, NetworkDetailPage, or_stale};
use crate::config::NetworkPlaceholders;
use crate::error::CoreError;
use crate::model::{KnownNetwork, ReconciledNetworkView, ScannedNetwork};
use crate::reconcile::{reconcile, reconcile_by_name};
use crate::settings::Settings;

/// Everything the Wi-Fi landing page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WirelessOverview {
    pub enabled: bool,
    pub connected: Option<ScannedNetwork>,
    pub available: Vec<ScannedNetwork>,
    pub known: Vec<KnownNetwork>,
}

/// Detail page for a saved network, by backend id.
///
/// `NotFound` when the id is unknown or the network is out of range.
pub async fn known_network_detail(
    settings: &Settings,
    network_id: &str,
) -> Result<NetworkDetailPage, CoreError> {
    let (known, scanned, connected) = tokio::join!(
        settings.fetch_known_networks(),
        settings.fetch_available_networks(),
        settings.fetch_connected_wifi_info(),
    );
    let store = settings.store();
    let known = or_stale("known network detail", known, || store.known_networks().to_vec());
    let scanned = or_stale("known network detail", scanned, || {
        store.available_networks().to_vec()
    });
    let connected = or_stale("known network detail", connected, || {
        (*store.connected_network()).clone()
    });

    let view = reconcile(&known, &scanned, network_id)?;
    let status = if is_current(&view, connected.as_ref()) {
        "Connected"
    } else {
        "Saved"
    };
    Ok(detail_page(&view, status, None, &settings.config().placeholders))
}

/// Detail page for a network seen in the scan, by name.
///
/// `connected` is the route's query value and is echoed back as-is.
pub async fn available_network_detail(
    settings: &Settings,
    name: &str,
    connected: Option<&str>,
) -> Result<NetworkDetailPage, CoreError> {
    let scanned = or_stale(
        "available network detail",
        settings.fetch_available_networks().await,
        || settings.store().available_networks().to_vec(),
    );

    let view = reconcile_by_name(&scanned, name)?;
    let status = if connected == Some("true") {
        "Connected"
    } else {
        "Available"
    };
    Ok(detail_page(
        &view,
        status,
        connected.map(str::to_owned),
        &settings.config().placeholders,
    ))
}

pub async fn wireless_overview(settings: &Settings) -> WirelessOverview {
    let (enabled, connected, available, known) = tokio::join!(
        settings.fetch_wifi_status(),
        settings.fetch_connected_wifi_info(),
        settings.fetch_available_networks(),
        settings.fetch_known_networks(),
    );
    let store = settings.store();
    WirelessOverview {
        enabled: or_stale("wireless", enabled, || store.wifi_status()),
        connected: or_stale("wireless", connected, || (*store.connected_network()).clone()),
        available: or_stale("wireless", available, || store.available_networks().to_vec()),
        known: or_stale("wireless", known, || store.known_networks().to_vec()),
    }
}

fn is_current(view: &ReconciledNetworkView, connected: Option<&ScannedNetwork>) -> bool {
    connected.is_some_and(|c| c.name == view.name)
}

fn detail_page(
    view: &ReconciledNetworkView,
    status: &str,
    is_connected: Option<String>,
    placeholders: &NetworkPlaceholders,
) -> NetworkDetailPage {
    let security = view
        .security
        .map_or_else(|| "Open".into(), |p| p.to_string());
    let encryption = view
        .encryption
        .map_or(Value::Null, |e| Value::from(e.to_string()));

    NetworkDetailPage {
        title: view.name.clone(),
        network_detail: vec![
            vec![
                DetailRow::new("Name", view.name.as_str()),
                DetailRow::new("Status", status),
                DetailRow::new("Signal", view.signal_strength.to_string()),
            ],
            vec![
                DetailRow::new("Frequency", view.frequency.as_str()),
                DetailRow::new("Security", security),
                DetailRow::new("Encryption", encryption),
                DetailRow::new("MAC Address", view.mac.as_str()),
            ],
            vec![
                DetailRow::new("IP Address", placeholders.ip_address.as_str()),
                DetailRow::new("Subnet Mask", placeholders.subnet_mask.as_str()),
                DetailRow::new("Gateway", placeholders.gateway.as_str()),
            ],
        ],
        is_connected,
    }
}
