// ── Security / PIN service ──
//
// PINs stay wrapped in `SecretString` and are never logged.

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use super::{check_pin, remote_failure};
use crate::error::CoreError;
use crate::settings::Settings;

impl Settings {
    /// Whether a PIN lock is configured.
    pub async fn fetch_lock_status(&self) -> Result<bool, CoreError> {
        let enabled = self
            .backend()
            .lock_status()
            .await
            .map_err(remote_failure("fetch_lock_status"))?;
        self.publish_pin_enabled(enabled);
        Ok(enabled)
    }

    /// Set or change the PIN. Pass an empty `old_pin` when none is set.
    ///
    /// Returns whether the backend accepted the change.
    pub async fn change_pin(
        &self,
        old_pin: &SecretString,
        new_pin: &SecretString,
    ) -> Result<bool, CoreError> {
        if !old_pin.expose_secret().is_empty() {
            check_pin("current PIN", old_pin)?;
        }
        check_pin("new PIN", new_pin)?;

        let accepted = self
            .backend()
            .change_pin(old_pin, new_pin)
            .await
            .map_err(remote_failure("change_pin"))?;
        if accepted {
            info!("PIN changed");
            self.publish_pin_enabled(true);
        } else {
            warn!("PIN change refused by backend");
        }
        Ok(accepted)
    }

    /// Remove the PIN lock. Returns whether the backend accepted `pin`.
    pub async fn remove_pin(&self, pin: &SecretString) -> Result<bool, CoreError> {
        check_pin("PIN", pin)?;
        let accepted = self
            .backend()
            .remove_pin_lock(pin)
            .await
            .map_err(remote_failure("remove_pin"))?;
        if accepted {
            info!("PIN lock removed");
            self.publish_pin_enabled(false);
        }
        Ok(accepted)
    }

    pub async fn authenticate_pin(&self, pin: &SecretString) -> Result<bool, CoreError> {
        check_pin("PIN", pin)?;
        self.backend()
            .authenticate_pin(pin)
            .await
            .map_err(remote_failure("authenticate_pin"))
    }

    fn publish_pin_enabled(&self, enabled: bool) {
        self.store().pin_enabled.set(enabled);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use serde_json::json;

    use crate::error::CoreError;
    use crate::service::testing::settings;

    fn pin(raw: &str) -> SecretString {
        SecretString::from(raw.to_owned())
    }

    #[tokio::test]
    async fn first_pin_needs_no_old_pin() {
        let (settings, gw) = settings();
        gw.reply("change_pin", json!(true));

        assert!(settings.change_pin(&pin(""), &pin("2468")).await.unwrap());
        assert!(settings.store().pin_enabled());
        assert_eq!(
            gw.calls()[0].1,
            Some(json!({ "old_pin": "", "new_pin": "2468" }))
        );
    }

    #[tokio::test]
    async fn refused_change_leaves_status() {
        let (settings, gw) = settings();
        gw.reply("change_pin", json!(false));

        assert!(!settings.change_pin(&pin("1111"), &pin("2222")).await.unwrap());
        assert!(!settings.store().pin_enabled());
    }

    #[tokio::test]
    async fn malformed_pins_are_rejected_locally() {
        let (settings, gw) = settings();
        for bad in ["", "12ab", "12 34"] {
            let err = settings.authenticate_pin(&pin(bad)).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation { .. }), "{bad:?}");
        }
        assert!(settings.change_pin(&pin("1234"), &pin("")).await.is_err());
        assert!(gw.calls().is_empty());
    }

    #[tokio::test]
    async fn remove_pin_clears_status() {
        let (settings, gw) = settings();
        gw.reply("get_lock_status", json!(true))
            .reply("remove_pin_lock", json!(true));

        assert!(settings.fetch_lock_status().await.unwrap());
        assert!(settings.remove_pin(&pin("2468")).await.unwrap());
        assert!(!settings.store().pin_enabled());
    }
}
