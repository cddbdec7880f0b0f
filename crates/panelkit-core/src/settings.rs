// ── Settings context ──
//
// Explicit application-state object handed to services and loaders.
// Holds the typed backend, the reactive store and the session config.

use std::sync::Arc;

use panelkit_api::{Backend, Gateway, HttpGateway, TransportConfig};
use tracing::debug;

use crate::config::SettingsConfig;
use crate::error::CoreError;
use crate::store::SettingsStore;

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<SettingsInner>`. Domain operations live in
/// `crate::service` as inherent methods, page builders in `crate::loader`.
#[derive(Clone)]
pub struct Settings {
    inner: Arc<SettingsInner>,
}

struct SettingsInner {
    config: SettingsConfig,
    backend: Backend,
    store: SettingsStore,
}

impl Settings {
    /// Build a context talking to the HTTP command bridge in `config`.
    pub fn new(config: SettingsConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: config.tls.clone(),
            timeout: config.timeout,
        };
        let gateway = HttpGateway::new(config.gateway_url.clone(), &transport)?;
        debug!(url = %config.gateway_url, "settings context created");
        Ok(Self::with_gateway(config, Arc::new(gateway)))
    }

    /// Build a context over any gateway implementation.
    pub fn with_gateway(config: SettingsConfig, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            inner: Arc::new(SettingsInner {
                config,
                backend: Backend::new(gateway),
                store: SettingsStore::new(),
            }),
        }
    }

    pub fn config(&self) -> &SettingsConfig {
        &self.inner.config
    }

    /// Read-only view of the reactive state.
    pub fn store(&self) -> &SettingsStore {
        &self.inner.store
    }

    pub(crate) fn backend(&self) -> &Backend {
        &self.inner.backend
    }
}
