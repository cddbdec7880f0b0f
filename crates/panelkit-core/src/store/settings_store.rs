// ── Settings state store ──
//
// One reactive cell per domain fact. Each cell has exactly one writer:
// a private `publish_*` helper in the owning `service` module. Everything
// outside the crate reads through snapshots and subscriptions.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::cell::Cell;
use crate::model::{BluetoothDevice, KnownNetwork, ScannedNetwork, SoundDevice};
use crate::stream::CellStream;

/// Process-wide settings state, owned by a [`crate::Settings`] context.
#[derive(Default)]
pub struct SettingsStore {
    // network
    pub(crate) wifi_status: Cell<bool>,
    pub(crate) connected_network: Cell<Option<ScannedNetwork>>,
    pub(crate) available_networks: Cell<Vec<ScannedNetwork>>,
    pub(crate) known_networks: Cell<Vec<KnownNetwork>>,
    // bluetooth
    pub(crate) bluetooth_status: Cell<bool>,
    pub(crate) paired_devices: Cell<Vec<BluetoothDevice>>,
    pub(crate) other_devices: Cell<Vec<BluetoothDevice>>,
    // battery
    pub(crate) battery_percentage: Cell<Option<f64>>,
    pub(crate) performance_modes: Cell<Vec<String>>,
    pub(crate) performance_mode: Cell<Option<String>>,
    // display
    pub(crate) brightness: Cell<Option<u8>>,
    // sound
    pub(crate) input_devices: Cell<Vec<SoundDevice>>,
    pub(crate) output_devices: Cell<Vec<SoundDevice>>,
    pub(crate) input_volume: Cell<Option<u8>>,
    pub(crate) output_volume: Cell<Option<u8>>,
    // security
    pub(crate) pin_enabled: Cell<bool>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn wifi_status(&self) -> bool {
        *self.wifi_status.get()
    }

    pub fn connected_network(&self) -> Arc<Option<ScannedNetwork>> {
        self.connected_network.get()
    }

    pub fn available_networks(&self) -> Arc<Vec<ScannedNetwork>> {
        self.available_networks.get()
    }

    pub fn known_networks(&self) -> Arc<Vec<KnownNetwork>> {
        self.known_networks.get()
    }

    pub fn bluetooth_status(&self) -> bool {
        *self.bluetooth_status.get()
    }

    pub fn paired_devices(&self) -> Arc<Vec<BluetoothDevice>> {
        self.paired_devices.get()
    }

    pub fn other_devices(&self) -> Arc<Vec<BluetoothDevice>> {
        self.other_devices.get()
    }

    pub fn battery_percentage(&self) -> Option<f64> {
        *self.battery_percentage.get()
    }

    pub fn performance_modes(&self) -> Arc<Vec<String>> {
        self.performance_modes.get()
    }

    pub fn performance_mode(&self) -> Arc<Option<String>> {
        self.performance_mode.get()
    }

    pub fn brightness(&self) -> Option<u8> {
        *self.brightness.get()
    }

    pub fn input_devices(&self) -> Arc<Vec<SoundDevice>> {
        self.input_devices.get()
    }

    pub fn output_devices(&self) -> Arc<Vec<SoundDevice>> {
        self.output_devices.get()
    }

    pub fn input_volume(&self) -> Option<u8> {
        *self.input_volume.get()
    }

    pub fn output_volume(&self) -> Option<u8> {
        *self.output_volume.get()
    }

    pub fn pin_enabled(&self) -> bool {
        *self.pin_enabled.get()
    }

    // ── Freshness ────────────────────────────────────────────────────

    /// When the scan list was last replaced, if ever.
    pub fn available_networks_updated_at(&self) -> Option<DateTime<Utc>> {
        self.available_networks.updated_at()
    }

    /// Number of successful scans published so far.
    pub fn scan_count(&self) -> u64 {
        self.available_networks.version()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_wifi_status(&self) -> CellStream<bool> {
        self.wifi_status.subscribe()
    }

    pub fn subscribe_connected_network(&self) -> CellStream<Option<ScannedNetwork>> {
        self.connected_network.subscribe()
    }

    pub fn subscribe_available_networks(&self) -> CellStream<Vec<ScannedNetwork>> {
        self.available_networks.subscribe()
    }

    pub fn subscribe_known_networks(&self) -> CellStream<Vec<KnownNetwork>> {
        self.known_networks.subscribe()
    }

    pub fn subscribe_bluetooth_status(&self) -> CellStream<bool> {
        self.bluetooth_status.subscribe()
    }

    pub fn subscribe_paired_devices(&self) -> CellStream<Vec<BluetoothDevice>> {
        self.paired_devices.subscribe()
    }

    pub fn subscribe_other_devices(&self) -> CellStream<Vec<BluetoothDevice>> {
        self.other_devices.subscribe()
    }

    pub fn subscribe_battery_percentage(&self) -> CellStream<Option<f64>> {
        self.battery_percentage.subscribe()
    }

    pub fn subscribe_performance_mode(&self) -> CellStream<Option<String>> {
        self.performance_mode.subscribe()
    }

    pub fn subscribe_brightness(&self) -> CellStream<Option<u8>> {
        self.brightness.subscribe()
    }

    pub fn subscribe_input_volume(&self) -> CellStream<Option<u8>> {
        self.input_volume.subscribe()
    }

    pub fn subscribe_output_volume(&self) -> CellStream<Option<u8>> {
        self.output_volume.subscribe()
    }

    pub fn subscribe_pin_enabled(&self) -> CellStream<bool> {
        self.pin_enabled.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_is_empty() {
        let store = SettingsStore::new();
        assert!(!store.wifi_status());
        assert!(store.available_networks().is_empty());
        assert!(store.connected_network().is_none());
        assert_eq!(store.brightness(), None);
        assert_eq!(store.scan_count(), 0);
        assert!(store.available_networks_updated_at().is_none());
    }
}
