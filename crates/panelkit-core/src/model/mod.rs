// ── Domain model ──
//
// Canonical types consumers depend on. Raw backend replies are converted
// into these by `crate::convert`.

pub mod bluetooth;
pub mod sound;
pub mod wireless;

pub use bluetooth::{BluetoothDevice, BluetoothDeviceLists};
pub use sound::{SoundDevice, SoundDirection};
pub use wireless::{
    Encryption, KnownNetwork, ReconciledNetworkView, SUPPORTED_PROTOCOLS, ScannedNetwork,
    SecurityClassification, SecurityProtocol, SignalStrength, WirelessStatus,
};
