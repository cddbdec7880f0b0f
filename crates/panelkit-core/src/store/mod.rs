// ── Reactive store layer ──

pub(crate) mod cell;
mod settings_store;

pub use settings_store::SettingsStore;
