// ── Bluetooth service ──

use tracing::info;

use super::{check_not_blank, remote_failure};
use crate::error::CoreError;
use crate::model::{BluetoothDevice, BluetoothDeviceLists};
use crate::settings::Settings;

/// Adapter status value the backend reports when powered on.
const POWERED_ON: i8 = 1;

impl Settings {
    pub async fn fetch_bluetooth_status(&self) -> Result<bool, CoreError> {
        let raw = self
            .backend()
            .bluetooth_status()
            .await
            .map_err(remote_failure("fetch_bluetooth_status"))?;
        let enabled = raw == POWERED_ON;
        self.publish_bluetooth_status(enabled);
        Ok(enabled)
    }

    /// Scan and split into paired-or-trusted and other devices.
    pub async fn fetch_bluetooth_devices(&self) -> Result<BluetoothDeviceLists, CoreError> {
        let reply = self
            .backend()
            .bluetooth_scan()
            .await
            .map_err(remote_failure("fetch_bluetooth_devices"))?;

        let lists = BluetoothDeviceLists::split(
            reply
                .bluetooth_devices
                .into_iter()
                .map(BluetoothDevice::from),
        );
        self.publish_device_lists(lists.clone());
        Ok(lists)
    }

    pub async fn enable_bluetooth(&self) -> Result<(), CoreError> {
        self.backend()
            .enable_bluetooth()
            .await
            .map_err(remote_failure("enable_bluetooth"))?;
        self.publish_bluetooth_status(true);
        Ok(())
    }

    /// Power the adapter off. Both device lists are cleared on success.
    pub async fn disable_bluetooth(&self) -> Result<(), CoreError> {
        self.backend()
            .disable_bluetooth()
            .await
            .map_err(remote_failure("disable_bluetooth"))?;
        self.publish_bluetooth_status(false);
        self.publish_device_lists(BluetoothDeviceLists::default());
        Ok(())
    }

    pub async fn connect_bluetooth_device(&self, address: &str) -> Result<(), CoreError> {
        check_not_blank("address", address)?;
        self.backend()
            .connect_bluetooth_device(address)
            .await
            .map_err(remote_failure("connect_bluetooth_device"))?;
        info!(address, "bluetooth device connected");
        Ok(())
    }

    pub async fn forget_bluetooth_device(&self, address: &str) -> Result<(), CoreError> {
        check_not_blank("address", address)?;
        self.backend()
            .disconnect_bluetooth_device(address)
            .await
            .map_err(remote_failure("forget_bluetooth_device"))?;
        info!(address, "bluetooth device forgotten");
        Ok(())
    }

    // ── Writers ──────────────────────────────────────────────────────

    fn publish_bluetooth_status(&self, enabled: bool) {
        self.store().bluetooth_status.set(enabled);
    }

    fn publish_device_lists(&self, lists: BluetoothDeviceLists) {
        self.store().paired_devices.set(lists.paired);
        self.store().other_devices.set(lists.other);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use crate::service::testing::settings;

    fn scan_reply() -> serde_json::Value {
        json!({
            "bluetooth_devices": [
                { "address": "01:01", "address_type": "public", "name": "Headphones", "is_paired": true, "is_trusted": false },
                { "address": "02:02", "address_type": "random", "is_paired": false, "is_trusted": false },
                { "address": "03:03", "address_type": "public", "name": "Keyboard", "is_paired": false, "is_trusted": true }
            ]
        })
    }

    #[tokio::test]
    async fn status_one_means_on() {
        let (settings, gw) = settings();
        gw.reply("get_bluetooth_status", json!(1));
        assert!(settings.fetch_bluetooth_status().await.unwrap());

        gw.reply("get_bluetooth_status", json!(0));
        assert!(!settings.fetch_bluetooth_status().await.unwrap());
        assert!(!settings.store().bluetooth_status());
    }

    #[tokio::test]
    async fn scan_splits_known_devices() {
        let (settings, gw) = settings();
        gw.reply("scan_bluetooth", scan_reply());

        let lists = settings.fetch_bluetooth_devices().await.unwrap();
        assert_eq!(lists.paired.len(), 2);
        let other: Vec<&str> = lists.other.iter().map(|d| d.address.as_str()).collect();
        assert_eq!(other, vec!["02:02", "03:03"]);
        assert_eq!(settings.store().other_devices().len(), 2);
        assert_eq!(settings.store().paired_devices()[1].display_name(), "Keyboard");
    }

    #[tokio::test]
    async fn disable_clears_device_lists() {
        let (settings, gw) = settings();
        gw.reply("scan_bluetooth", scan_reply())
            .reply("enable_bluetooth", json!(null))
            .reply("disable_bluetooth", json!(null));

        settings.enable_bluetooth().await.unwrap();
        settings.fetch_bluetooth_devices().await.unwrap();
        settings.disable_bluetooth().await.unwrap();

        assert!(!settings.store().bluetooth_status());
        assert!(settings.store().paired_devices().is_empty());
        assert!(settings.store().other_devices().is_empty());
    }

    #[tokio::test]
    async fn failed_disable_keeps_lists() {
        let (settings, gw) = settings();
        gw.reply("scan_bluetooth", scan_reply())
            .reject("disable_bluetooth", "adapter busy");

        settings.fetch_bluetooth_devices().await.unwrap();
        assert!(settings.disable_bluetooth().await.is_err());
        assert_eq!(settings.store().paired_devices().len(), 2);
    }
}
