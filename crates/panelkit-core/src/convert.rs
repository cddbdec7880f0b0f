// ── Backend-to-domain conversions ──
//
// Bridges raw `panelkit_api::models` replies into `crate::model` types.
// Classification is NOT applied here: a converted `ScannedNetwork` is
// unannotated until the network service runs the classifier over it.

use panelkit_api::models::{
    BluetoothScanResponse, KnownNetworkResponse, SoundDeviceResponse, WirelessInfoResponse,
};

use crate::model::{BluetoothDevice, KnownNetwork, ScannedNetwork, SoundDevice, SoundDirection};

impl From<WirelessInfoResponse> for ScannedNetwork {
    fn from(raw: WirelessInfoResponse) -> Self {
        Self {
            name: raw.name,
            mac: raw.mac,
            frequency: raw.frequency,
            signal: raw.signal,
            flags: raw.flags,
            security: None,
            encryption: None,
            is_secured: None,
        }
    }
}

impl From<KnownNetworkResponse> for KnownNetwork {
    fn from(raw: KnownNetworkResponse) -> Self {
        Self {
            network_id: raw.network_id,
            ssid: raw.ssid,
            flags: raw.flags,
        }
    }
}

impl From<BluetoothScanResponse> for BluetoothDevice {
    fn from(raw: BluetoothScanResponse) -> Self {
        Self {
            address: raw.address,
            address_type: raw.address_type,
            name: raw.name,
            icon: raw.icon,
            class: raw.class,
            rssi: raw.rssi,
            tx_power: raw.tx_power,
            is_paired: raw.is_paired,
            is_trusted: raw.is_trusted,
        }
    }
}

pub(crate) fn sound_device(raw: SoundDeviceResponse, direction: SoundDirection) -> SoundDevice {
    SoundDevice {
        name: raw.name,
        description: raw.description,
        direction,
        properties: raw.prop_list.into_iter().collect(),
        volume: None,
        is_muted: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanned_network_starts_unclassified() {
        let net = ScannedNetwork::from(WirelessInfoResponse {
            mac: "AA:BB".into(),
            frequency: "5180".into(),
            signal: "72".into(),
            flags: "[WPA2-PSK-CCMP][ESS]".into(),
            name: "Office5G".into(),
        });
        assert_eq!(net.name, "Office5G");
        assert_eq!(net.flags, "[WPA2-PSK-CCMP][ESS]");
        assert!(!net.is_classified());
    }

    #[test]
    fn sound_device_sorts_properties() {
        let raw = SoundDeviceResponse {
            name: "alsa_input.mic".into(),
            description: "Built-in Mic".into(),
            prop_list: [("b".to_owned(), "2".to_owned()), ("a".to_owned(), "1".to_owned())]
                .into_iter()
                .collect(),
        };
        let dev = sound_device(raw, SoundDirection::Input);
        let keys: Vec<&str> = dev.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(dev.label(), "Built-in Mic");
    }
}
