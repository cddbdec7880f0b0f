// Sound commands
//
// Inputs are sources (microphones), outputs are sinks (speakers). An
// empty device name addresses the daemon's default device.

use serde_json::json;

use crate::backend::Backend;
use crate::error::Error;
use crate::models::SoundDeviceResponse;

impl Backend {
    pub async fn input_devices(&self) -> Result<Vec<SoundDeviceResponse>, Error> {
        self.call("get_input_devices", None).await
    }

    pub async fn output_devices(&self) -> Result<Vec<SoundDeviceResponse>, Error> {
        self.call("get_output_devices", None).await
    }

    pub async fn input_volume(&self, device: &str) -> Result<u8, Error> {
        self.call("get_input_sound_value", Some(json!({ "device": device })))
            .await
    }

    pub async fn output_volume(&self, device: &str) -> Result<u8, Error> {
        self.call("get_output_sound_value", Some(json!({ "device": device })))
            .await
    }

    pub async fn set_input_volume(&self, value: u8, device: &str) -> Result<(), Error> {
        self.call_unit(
            "set_input_sound_value",
            Some(json!({ "value": value, "device": device })),
        )
        .await
    }

    pub async fn set_output_volume(&self, value: u8, device: &str) -> Result<(), Error> {
        self.call_unit(
            "set_output_sound_value",
            Some(json!({ "value": value, "device": device })),
        )
        .await
    }

    pub async fn toggle_input_mute(&self, device: &str) -> Result<(), Error> {
        self.call_unit("input_device_toggle_mute", Some(json!({ "device": device })))
            .await
    }

    pub async fn toggle_output_mute(&self, device: &str) -> Result<(), Error> {
        self.call_unit(
            "output_device_toggle_mute",
            Some(json!({ "device": device })),
        )
        .await
    }
}
