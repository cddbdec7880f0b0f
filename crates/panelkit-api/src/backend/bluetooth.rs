// Bluetooth commands

use serde_json::json;

use crate::backend::Backend;
use crate::error::Error;
use crate::models::BluetoothScanListResponse;

impl Backend {
    /// Adapter power state. The daemon answers `1` for on, `0` for off.
    pub async fn bluetooth_status(&self) -> Result<i8, Error> {
        self.call("get_bluetooth_status", None).await
    }

    /// Discover nearby and paired devices.
    pub async fn bluetooth_scan(&self) -> Result<BluetoothScanListResponse, Error> {
        self.call("scan_bluetooth", None).await
    }

    pub async fn enable_bluetooth(&self) -> Result<(), Error> {
        self.call_unit("enable_bluetooth", None).await
    }

    pub async fn disable_bluetooth(&self) -> Result<(), Error> {
        self.call_unit("disable_bluetooth", None).await
    }

    /// Pair and connect a device by address.
    pub async fn connect_bluetooth_device(&self, address: &str) -> Result<(), Error> {
        self.call_unit(
            "connect_bluetooth_device",
            Some(json!({ "address": address })),
        )
        .await
    }

    /// Disconnect and forget a device by address.
    pub async fn disconnect_bluetooth_device(&self, address: &str) -> Result<(), Error> {
        self.call_unit(
            "disconnect_bluetooth_device",
            Some(json!({ "address": address })),
        )
        .await
    }
}
