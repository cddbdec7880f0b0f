// Backend reply types
//
// Raw shapes returned by the settings daemon. Fields are kept exactly as
// the daemon names them; `panelkit-core` converts these into domain types.
// Missing fields default so a partially-populated record still decodes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ── Wireless ────────────────────────────────────────────────────────

/// One access point from a scan, or the currently connected network.
///
/// `flags` is the vendor capability descriptor, e.g. `[WPA2-PSK-CCMP][ESS]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WirelessInfoResponse {
    pub mac: String,
    pub frequency: String,
    pub signal: String,
    pub flags: String,
    pub name: String,
}

/// Reply to `wifi_scanning`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WirelessScanListResponse {
    pub wireless_network: Vec<WirelessInfoResponse>,
}

/// A saved network credential record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnownNetworkResponse {
    pub network_id: String,
    pub ssid: String,
    pub flags: String,
}

/// Reply to `get_known_networks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnownNetworkListResponse {
    pub known_network: Vec<KnownNetworkResponse>,
}

// ── Bluetooth ───────────────────────────────────────────────────────

/// One device from a Bluetooth discovery scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BluetoothScanResponse {
    pub address: String,
    pub address_type: String,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub class: Option<u32>,
    pub rssi: Option<i16>,
    pub tx_power: Option<i16>,
    pub is_paired: bool,
    pub is_trusted: bool,
}

/// Reply to `scan_bluetooth`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BluetoothScanListResponse {
    pub bluetooth_devices: Vec<BluetoothScanResponse>,
}

// ── Sound ───────────────────────────────────────────────────────────

/// An audio sink or source as reported by the sound service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundDeviceResponse {
    pub name: String,
    pub description: String,
    pub prop_list: HashMap<String, String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scan_reply_decodes_with_missing_fields() {
        let reply: WirelessScanListResponse = serde_json::from_value(json!({
            "wireless_network": [
                { "name": "Office5G", "mac": "AA:BB", "flags": "[WPA2-PSK-CCMP][ESS]" }
            ]
        }))
        .unwrap();

        let ap = &reply.wireless_network[0];
        assert_eq!(ap.name, "Office5G");
        assert_eq!(ap.signal, "");
        assert_eq!(ap.frequency, "");
    }

    #[test]
    fn empty_object_is_an_empty_known_list() {
        let reply: KnownNetworkListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(reply.known_network.is_empty());
    }

    #[test]
    fn bluetooth_optional_fields_accept_null() {
        let dev: BluetoothScanResponse = serde_json::from_value(json!({
            "address": "00:11:22:33:44:55",
            "address_type": "public",
            "name": null,
            "rssi": -61,
            "is_paired": true
        }))
        .unwrap();
        assert_eq!(dev.name, None);
        assert_eq!(dev.rssi, Some(-61));
        assert!(dev.is_paired);
        assert!(!dev.is_trusted);
    }
}
