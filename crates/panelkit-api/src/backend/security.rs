// Security / PIN lock commands

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::backend::Backend;
use crate::error::Error;

impl Backend {
    /// Whether a PIN lock is configured.
    pub async fn lock_status(&self) -> Result<bool, Error> {
        self.call("get_lock_status", None).await
    }

    /// Set or change the PIN. `old_pin` is empty when no PIN exists yet.
    pub async fn change_pin(
        &self,
        old_pin: &SecretString,
        new_pin: &SecretString,
    ) -> Result<bool, Error> {
        self.call(
            "change_pin",
            Some(json!({
                "old_pin": old_pin.expose_secret(),
                "new_pin": new_pin.expose_secret(),
            })),
        )
        .await
    }

    pub async fn remove_pin_lock(&self, pin: &SecretString) -> Result<bool, Error> {
        self.call(
            "remove_pin_lock",
            Some(json!({ "pin": pin.expose_secret() })),
        )
        .await
    }

    pub async fn authenticate_pin(&self, pin: &SecretString) -> Result<bool, Error> {
        self.call(
            "authenticate_pin",
            Some(json!({ "pin": pin.expose_secret() })),
        )
        .await
    }
}
