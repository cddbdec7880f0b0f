// ── Wi-Fi service ──
//
// Scans are classified before they reach the store or the caller.

use secrecy::SecretString;
use tracing::{debug, info};

use super::{check_not_blank, remote_failure};
use crate::classify::{classify_all, classify_in_place};
use crate::error::CoreError;
use crate::model::{KnownNetwork, ScannedNetwork};
use crate::settings::Settings;

impl Settings {
    // ── Fetches ──────────────────────────────────────────────────────

    /// Scan for networks in range. Order follows the scan.
    pub async fn fetch_available_networks(&self) -> Result<Vec<ScannedNetwork>, CoreError> {
        let reply = self
            .backend()
            .wifi_scan()
            .await
            .map_err(remote_failure("fetch_available_networks"))?;

        let mut networks: Vec<ScannedNetwork> =
            reply.wireless_network.into_iter().map(Into::into).collect();
        classify_all(&mut networks);
        debug!(count = networks.len(), "wifi scan classified");

        self.publish_available_networks(networks.clone());
        Ok(networks)
    }

    pub async fn fetch_known_networks(&self) -> Result<Vec<KnownNetwork>, CoreError> {
        let reply = self
            .backend()
            .known_networks()
            .await
            .map_err(remote_failure("fetch_known_networks"))?;

        let networks: Vec<KnownNetwork> =
            reply.known_network.into_iter().map(Into::into).collect();
        self.publish_known_networks(networks.clone());
        Ok(networks)
    }

    /// Whether the Wi-Fi radio is on.
    pub async fn fetch_wifi_status(&self) -> Result<bool, CoreError> {
        let enabled = self
            .backend()
            .wifi_status()
            .await
            .map_err(remote_failure("fetch_wifi_status"))?;
        self.publish_wifi_status(enabled);
        Ok(enabled)
    }

    /// The network currently joined. `None` when the backend reports an
    /// empty record.
    pub async fn fetch_connected_wifi_info(&self) -> Result<Option<ScannedNetwork>, CoreError> {
        let raw = self
            .backend()
            .connected_wifi_info()
            .await
            .map_err(remote_failure("fetch_connected_wifi_info"))?;

        let connected = if raw.name.is_empty() {
            None
        } else {
            let mut network = ScannedNetwork::from(raw);
            classify_in_place(&mut network);
            Some(network)
        };
        self.publish_connected_network(connected.clone());
        Ok(connected)
    }

    // ── Actions ──────────────────────────────────────────────────────
    // The radio toggles don't publish: callers refetch the status.

    pub async fn enable_wifi(&self) -> Result<bool, CoreError> {
        self.backend()
            .enable_wifi()
            .await
            .map_err(remote_failure("enable_wifi"))
    }

    pub async fn disable_wifi(&self) -> Result<bool, CoreError> {
        self.backend()
            .disable_wifi()
            .await
            .map_err(remote_failure("disable_wifi"))
    }

    pub async fn connect_to_network(
        &self,
        ssid: &str,
        password: &SecretString,
    ) -> Result<(), CoreError> {
        check_not_blank("ssid", ssid)?;
        self.backend()
            .connect_to_network(ssid, password)
            .await
            .map_err(remote_failure("connect_to_network"))?;
        info!(ssid, "joined network");
        Ok(())
    }

    pub async fn connect_to_known_network(&self, network_id: &str) -> Result<(), CoreError> {
        check_not_blank("network_id", network_id)?;
        self.backend()
            .connect_to_known_network(network_id)
            .await
            .map_err(remote_failure("connect_to_known_network"))?;
        info!(network_id, "joined saved network");
        Ok(())
    }

    /// Disconnect from a network and drop its saved credentials.
    pub async fn disconnect_network(&self, ssid: &str) -> Result<(), CoreError> {
        check_not_blank("ssid", ssid)?;
        self.backend()
            .disconnect_network(ssid)
            .await
            .map_err(remote_failure("disconnect_network"))?;
        info!(ssid, "forgot network");
        Ok(())
    }

    // ── Writers ──────────────────────────────────────────────────────

    fn publish_available_networks(&self, networks: Vec<ScannedNetwork>) {
        self.store().available_networks.set(networks);
    }

    fn publish_known_networks(&self, networks: Vec<KnownNetwork>) {
        self.store().known_networks.set(networks);
    }

    fn publish_wifi_status(&self, enabled: bool) {
        self.store().wifi_status.set(enabled);
    }

    fn publish_connected_network(&self, network: Option<ScannedNetwork>) {
        self.store().connected_network.set(network);
    }
}
