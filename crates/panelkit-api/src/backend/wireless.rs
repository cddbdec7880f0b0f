// Wireless commands
//
// Scanning, saved networks, radio power and association.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::backend::Backend;
use crate::error::Error;
use crate::models::{KnownNetworkListResponse, WirelessInfoResponse, WirelessScanListResponse};

impl Backend {
    /// Run a radio scan.
    ///
    /// `wifi_scanning` → `{ wireless_network: [...] }`
    pub async fn wifi_scan(&self) -> Result<WirelessScanListResponse, Error> {
        self.call("wifi_scanning", None).await
    }

    /// List saved network credentials.
    ///
    /// `get_known_networks` → `{ known_network: [...] }`
    pub async fn known_networks(&self) -> Result<KnownNetworkListResponse, Error> {
        self.call("get_known_networks", None).await
    }

    /// Whether the Wi-Fi radio is powered.
    pub async fn wifi_status(&self) -> Result<bool, Error> {
        self.call("get_wifi_status", None).await
    }

    /// The network the radio is currently associated with.
    pub async fn connected_wifi_info(&self) -> Result<WirelessInfoResponse, Error> {
        self.call("get_connected_wifi_info", None).await
    }

    pub async fn enable_wifi(&self) -> Result<bool, Error> {
        self.call("enable_wifi", None).await
    }

    pub async fn disable_wifi(&self) -> Result<bool, Error> {
        self.call("disable_wifi", None).await
    }

    /// Join a network by SSID with a passphrase.
    pub async fn connect_to_network(
        &self,
        ssid: &str,
        password: &SecretString,
    ) -> Result<(), Error> {
        self.call_unit(
            "connect_to_network",
            Some(json!({
                "ssid": ssid,
                "password": password.expose_secret(),
            })),
        )
        .await
    }

    /// Join a saved network by its backend id.
    pub async fn connect_to_known_network(&self, network_id: &str) -> Result<(), Error> {
        self.call_unit(
            "connect_to_known_network",
            Some(json!({ "network_id": network_id })),
        )
        .await
    }

    /// Disconnect from (and forget) a network by SSID.
    pub async fn disconnect_network(&self, ssid: &str) -> Result<(), Error> {
        self.call_unit("disconnect_network", Some(json!({ "ssid": ssid })))
            .await
    }
}
