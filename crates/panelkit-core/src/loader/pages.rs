// Plain settings pages: one fetch round, then label/value sections.

use serde_json::Value;

use super::{DetailRow, SettingsPage, or_stale};
use crate::model::{BluetoothDevice, BluetoothDeviceLists, SoundDevice};
use crate::settings::Settings;

fn on_off(enabled: bool) -> &'static str {
    if enabled { "On" } else { "Off" }
}

fn percent(level: Option<u8>) -> Value {
    level.map_or(Value::Null, |l| Value::from(format!("{l}%")))
}

pub async fn bluetooth_page(settings: &Settings) -> SettingsPage {
    let (enabled, devices) = tokio::join!(
        settings.fetch_bluetooth_status(),
        settings.fetch_bluetooth_devices(),
    );
    let store = settings.store();
    let enabled = or_stale("bluetooth", enabled, || store.bluetooth_status());
    let devices = or_stale("bluetooth", devices, || BluetoothDeviceLists {
        paired: store.paired_devices().to_vec(),
        other: store.other_devices().to_vec(),
    });

    let device_row = |d: &BluetoothDevice| {
        let state = match (d.is_paired, d.is_trusted) {
            (true, _) => "Paired",
            (false, true) => "Trusted",
            (false, false) => "Available",
        };
        DetailRow::new(d.display_name(), state)
    };

    SettingsPage {
        title: "Bluetooth".into(),
        sections: vec![
            vec![DetailRow::new("Bluetooth", on_off(enabled))],
            devices.paired.iter().map(device_row).collect(),
            devices.other.iter().map(device_row).collect(),
        ],
    }
}

pub async fn battery_page(settings: &Settings) -> SettingsPage {
    let (percentage, modes, mode) = tokio::join!(
        settings.fetch_battery_percentage(),
        settings.fetch_performance_modes(),
        settings.fetch_performance_mode(),
    );
    let store = settings.store();
    let percentage = or_stale("battery", percentage.map(Some), || {
        store.battery_percentage()
    });
    let modes = or_stale("battery", modes, || store.performance_modes().to_vec());
    let mode = or_stale("battery", mode.map(Some), || {
        (*store.performance_mode()).clone()
    });

    let charge = percentage.map_or(Value::Null, |p| Value::from(format!("{p:.0}%")));
    SettingsPage {
        title: "Battery".into(),
        sections: vec![
            vec![DetailRow::new("Battery", charge)],
            vec![
                DetailRow::new("Performance Mode", mode.map_or(Value::Null, Value::from)),
                DetailRow::new("Available Modes", modes.join(", ")),
            ],
        ],
    }
}

pub async fn display_page(settings: &Settings) -> SettingsPage {
    let brightness = or_stale(
        "display",
        settings.fetch_brightness().await.map(Some),
        || settings.store().brightness(),
    );
    SettingsPage {
        title: "Display".into(),
        sections: vec![vec![DetailRow::new("Brightness", percent(brightness))]],
    }
}

pub async fn sound_page(settings: &Settings) -> SettingsPage {
    let (outputs, inputs, output_volume, input_volume) = tokio::join!(
        settings.fetch_output_devices(),
        settings.fetch_input_devices(),
        settings.fetch_output_volume(""),
        settings.fetch_input_volume(""),
    );
    let store = settings.store();
    let outputs = or_stale("sound", outputs, || store.output_devices().to_vec());
    let inputs = or_stale("sound", inputs, || store.input_devices().to_vec());
    let output_volume = or_stale("sound", output_volume.map(Some), || store.output_volume());
    let input_volume = or_stale("sound", input_volume.map(Some), || store.input_volume());

    let device_row = |d: &SoundDevice| {
        let level = if d.is_muted {
            Value::from("Muted")
        } else {
            percent(d.volume)
        };
        DetailRow::new(d.label(), level)
    };

    SettingsPage {
        title: "Sound".into(),
        sections: vec![
            vec![
                DetailRow::new("Output Volume", percent(output_volume)),
                DetailRow::new("Input Volume", percent(input_volume)),
            ],
            outputs.iter().map(device_row).collect(),
            inputs.iter().map(device_row).collect(),
        ],
    }
}

pub async fn security_page(settings: &Settings) -> SettingsPage {
    let enabled = or_stale(
        "security",
        settings.fetch_lock_status().await,
        || settings.store().pin_enabled(),
    );
    SettingsPage {
        title: "Security".into(),
        sections: vec![vec![DetailRow::new(
            "PIN Lock",
            if enabled { "Enabled" } else { "Disabled" },
        )]],
    }
}
