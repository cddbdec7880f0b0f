// ── Display service ──

use super::{check_percent, remote_failure};
use crate::error::CoreError;
use crate::settings::Settings;

impl Settings {
    pub async fn fetch_brightness(&self) -> Result<u8, CoreError> {
        let level = self
            .backend()
            .brightness()
            .await
            .map_err(remote_failure("fetch_brightness"))?;
        self.publish_brightness(level);
        Ok(level)
    }

    pub async fn set_brightness(&self, value: u8) -> Result<(), CoreError> {
        let value = check_percent("brightness", value)?;
        self.backend()
            .set_brightness(value)
            .await
            .map_err(remote_failure("set_brightness"))?;
        self.publish_brightness(value);
        Ok(())
    }

    fn publish_brightness(&self, level: u8) {
        self.store().brightness.set(Some(level));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use crate::error::CoreError;
    use crate::service::testing::settings;

    #[tokio::test]
    async fn out_of_range_never_reaches_backend() {
        let (settings, gw) = settings();
        let err = settings.set_brightness(140).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));
        assert!(gw.calls().is_empty());
        assert_eq!(settings.store().brightness(), None);
    }

    #[tokio::test]
    async fn set_then_read_back() {
        let (settings, gw) = settings();
        gw.reply("set_brightness", json!(null))
            .reply("get_brightness", json!(55));

        settings.set_brightness(70).await.unwrap();
        assert_eq!(settings.store().brightness(), Some(70));
        assert_eq!(settings.fetch_brightness().await.unwrap(), 55);
        assert_eq!(settings.store().brightness(), Some(55));
    }
}
