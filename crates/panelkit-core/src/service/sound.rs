// ── Sound service ──
//
// Device lists are published with each device's level already read. A
// list fetch fails as a whole if any per-device read fails.

use futures_util::future::try_join_all;
use panelkit_api::Error as ApiError;
use panelkit_api::models::SoundDeviceResponse;
use tracing::debug;

use super::{check_percent, remote_failure};
use crate::convert::sound_device;
use crate::error::CoreError;
use crate::model::{SoundDevice, SoundDirection};
use crate::settings::Settings;

impl Settings {
    // ── Device lists ─────────────────────────────────────────────────

    pub async fn fetch_input_devices(&self) -> Result<Vec<SoundDevice>, CoreError> {
        self.fetch_sound_devices(SoundDirection::Input).await
    }

    pub async fn fetch_output_devices(&self) -> Result<Vec<SoundDevice>, CoreError> {
        self.fetch_sound_devices(SoundDirection::Output).await
    }

    /// Re-read the level of every listed input device.
    pub async fn refresh_input_device_volumes(&self) -> Result<Vec<SoundDevice>, CoreError> {
        let current = self.store().input_devices();
        self.refresh_device_volumes(SoundDirection::Input, current.to_vec())
            .await
    }

    /// Re-read the level of every listed output device.
    pub async fn refresh_output_device_volumes(&self) -> Result<Vec<SoundDevice>, CoreError> {
        let current = self.store().output_devices();
        self.refresh_device_volumes(SoundDirection::Output, current.to_vec())
            .await
    }

    // ── Levels ───────────────────────────────────────────────────────
    // An empty device name addresses the default device.

    pub async fn fetch_input_volume(&self, device: &str) -> Result<u8, CoreError> {
        let level = self
            .read_volume(SoundDirection::Input, device)
            .await
            .map_err(remote_failure("fetch_input_volume"))?;
        self.publish_volume(SoundDirection::Input, level);
        Ok(level)
    }

    pub async fn fetch_output_volume(&self, device: &str) -> Result<u8, CoreError> {
        let level = self
            .read_volume(SoundDirection::Output, device)
            .await
            .map_err(remote_failure("fetch_output_volume"))?;
        self.publish_volume(SoundDirection::Output, level);
        Ok(level)
    }

    pub async fn set_input_volume(&self, value: u8, device: &str) -> Result<(), CoreError> {
        let value = check_percent("input volume", value)?;
        self.backend()
            .set_input_volume(value, device)
            .await
            .map_err(remote_failure("set_input_volume"))?;
        self.publish_volume(SoundDirection::Input, value);
        Ok(())
    }

    pub async fn set_output_volume(&self, value: u8, device: &str) -> Result<(), CoreError> {
        let value = check_percent("output volume", value)?;
        self.backend()
            .set_output_volume(value, device)
            .await
            .map_err(remote_failure("set_output_volume"))?;
        self.publish_volume(SoundDirection::Output, value);
        Ok(())
    }

    pub async fn toggle_input_mute(&self, device: &str) -> Result<(), CoreError> {
        self.backend()
            .toggle_input_mute(device)
            .await
            .map_err(remote_failure("toggle_input_mute"))
    }

    pub async fn toggle_output_mute(&self, device: &str) -> Result<(), CoreError> {
        self.backend()
            .toggle_output_mute(device)
            .await
            .map_err(remote_failure("toggle_output_mute"))
    }

    // ── Internals ────────────────────────────────────────────────────

    async fn fetch_sound_devices(
        &self,
        direction: SoundDirection,
    ) -> Result<Vec<SoundDevice>, CoreError> {
        let raw: Vec<SoundDeviceResponse> = match direction {
            SoundDirection::Input => self.backend().input_devices().await,
            SoundDirection::Output => self.backend().output_devices().await,
        }
        .map_err(remote_failure("fetch_sound_devices"))?;

        let devices = raw
            .into_iter()
            .map(|r| sound_device(r, direction))
            .collect();
        self.refresh_device_volumes(direction, devices).await
    }

    async fn refresh_device_volumes(
        &self,
        direction: SoundDirection,
        devices: Vec<SoundDevice>,
    ) -> Result<Vec<SoundDevice>, CoreError> {
        let levels = try_join_all(
            devices
                .iter()
                .map(|d| self.read_volume(direction, &d.name)),
        )
        .await
        .map_err(remote_failure("refresh_device_volumes"))?;

        let devices: Vec<SoundDevice> = devices
            .into_iter()
            .zip(levels)
            .map(|(device, level)| device.with_volume(level))
            .collect();
        debug!(%direction, count = devices.len(), "sound devices refreshed");

        self.publish_devices(direction, devices.clone());
        Ok(devices)
    }

    async fn read_volume(&self, direction: SoundDirection, device: &str) -> Result<u8, ApiError> {
        match direction {
            SoundDirection::Input => self.backend().input_volume(device).await,
            SoundDirection::Output => self.backend().output_volume(device).await,
        }
    }

    // ── Writers ──────────────────────────────────────────────────────

    fn publish_devices(&self, direction: SoundDirection, devices: Vec<SoundDevice>) {
        match direction {
            SoundDirection::Input => self.store().input_devices.set(devices),
            SoundDirection::Output => self.store().output_devices.set(devices),
        }
    }

    fn publish_volume(&self, direction: SoundDirection, level: u8) {
        match direction {
            SoundDirection::Input => self.store().input_volume.set(Some(level)),
            SoundDirection::Output => self.store().output_volume.set(Some(level)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use crate::error::CoreError;
    use crate::service::testing::settings;

    #[tokio::test]
    async fn devices_come_back_with_levels() {
        let (settings, gw) = settings();
        gw.reply(
            "get_output_devices",
            json!([
                { "name": "alsa_output.speaker", "description": "Speaker", "prop_list": {} },
                { "name": "alsa_output.hdmi", "description": "HDMI", "prop_list": { "device.bus": "pci" } }
            ]),
        )
        .reply("get_output_sound_value", json!(0));

        let devices = settings.fetch_output_devices().await.unwrap();
        assert_eq!(devices.len(), 2);
        assert!(devices.iter().all(|d| d.is_muted && d.volume == Some(0)));
        assert_eq!(settings.store().output_devices()[1].properties["device.bus"], "pci");

        // one list call plus one level read per device
        assert_eq!(gw.calls().len(), 3);
    }

    #[tokio::test]
    async fn level_failure_fails_the_list() {
        let (settings, gw) = settings();
        gw.reply(
            "get_input_devices",
            json!([{ "name": "alsa_input.mic", "description": "Mic", "prop_list": {} }]),
        )
        .reject("get_input_sound_value", "pulse not running");

        let err = settings.fetch_input_devices().await.unwrap_err();
        assert!(matches!(err, CoreError::RemoteCall { .. }));
        assert!(settings.store().input_devices().is_empty());
    }

    #[tokio::test]
    async fn refresh_rereads_stored_devices() {
        let (settings, gw) = settings();
        gw.reply(
            "get_input_devices",
            json!([{ "name": "alsa_input.mic", "description": "Mic", "prop_list": {} }]),
        )
        .reply("get_input_sound_value", json!(40));
        settings.fetch_input_devices().await.unwrap();

        gw.reply("get_input_sound_value", json!(0));
        let devices = settings.refresh_input_device_volumes().await.unwrap();
        assert!(devices[0].is_muted);
        assert!(settings.store().input_devices()[0].is_muted);
    }

    #[tokio::test]
    async fn set_volume_validates_and_publishes() {
        let (settings, gw) = settings();
        gw.reply("set_input_sound_value", json!(null));

        assert!(settings.set_input_volume(101, "").await.is_err());
        settings.set_input_volume(35, "").await.unwrap();
        assert_eq!(settings.store().input_volume(), Some(35));
        assert_eq!(
            gw.calls()[0].1,
            Some(json!({ "value": 35, "device": "" }))
        );
    }
}
