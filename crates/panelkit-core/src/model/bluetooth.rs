// ── Bluetooth domain types ──

use serde::{Deserialize, Serialize};

/// A device seen by the Bluetooth adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BluetoothDevice {
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

impl BluetoothDevice {
    /// Name to show, falling back to the address for anonymous devices.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.address)
    }

    /// Paired or trusted devices go in the "my devices" list.
    pub fn is_known(&self) -> bool {
        self.is_paired || self.is_trusted
    }
}

/// One Bluetooth scan split the way the settings page lists it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BluetoothDeviceLists {
    /// Paired or trusted.
    pub paired: Vec<BluetoothDevice>,
    /// Not paired. A trusted but unpaired device shows up in both lists.
    pub other: Vec<BluetoothDevice>,
}

impl BluetoothDeviceLists {
    /// Split a scan, keeping scan order within each list.
    pub fn split(devices: impl IntoIterator<Item = BluetoothDevice>) -> Self {
        let devices: Vec<BluetoothDevice> = devices.into_iter().collect();
        let other = devices.iter().filter(|d| !d.is_paired).cloned().collect();
        let paired = devices.into_iter().filter(BluetoothDevice::is_known).collect();
        Self { paired, other }
    }
}
