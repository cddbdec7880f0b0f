// panelkit-core: Wi-Fi classification, reconciliation and reactive settings state.

pub mod classify;
pub mod config;
pub mod convert;
pub mod error;
pub mod loader;
pub mod model;
pub mod reconcile;
mod service;
pub mod settings;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use classify::{classify, classify_all, classify_in_place};
pub use config::{NetworkPlaceholders, SettingsConfig};
pub use error::CoreError;
pub use loader::{DetailRow, NetworkDetailPage, SettingsPage, WirelessOverview};
pub use reconcile::{reconcile, reconcile_by_name};
pub use settings::Settings;
pub use store::SettingsStore;
pub use stream::{CellStream, CellWatchStream};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Wireless
    Encryption, KnownNetwork, ReconciledNetworkView, ScannedNetwork, SecurityClassification,
    SecurityProtocol, SignalStrength, WirelessStatus,
    // Bluetooth
    BluetoothDevice, BluetoothDeviceLists,
    // Sound
    SoundDevice, SoundDirection,
};

// Transport knobs embedders need to build a `SettingsConfig`.
pub use panelkit_api::TlsMode;
