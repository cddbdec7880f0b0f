//! Bluetooth command handlers.

use tabled::Tabled;

use panelkit_core::loader::bluetooth_page;
use panelkit_core::{BluetoothDevice, BluetoothDeviceLists, Settings};

use crate::cli::{BluetoothArgs, BluetoothCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "State")]
    state: &'static str,
    #[tabled(rename = "RSSI")]
    rssi: String,
}

impl From<&BluetoothDevice> for DeviceRow {
    fn from(d: &BluetoothDevice) -> Self {
        let state = match (d.is_paired, d.is_trusted) {
            (true, _) => "paired",
            (false, true) => "trusted",
            (false, false) => "available",
        };
        Self {
            name: d.display_name().to_owned(),
            address: d.address.clone(),
            state,
            rssi: d.rssi.map(|r| r.to_string()).unwrap_or_default(),
        }
    }
}

/// Every device once. Trusted unpaired devices sit in both lists.
fn all_devices(lists: &BluetoothDeviceLists) -> impl Iterator<Item = &BluetoothDevice> {
    lists
        .paired
        .iter()
        .chain(lists.other.iter().filter(|d| !d.is_known()))
}

fn devices_table(lists: &BluetoothDeviceLists) -> String {
    let rows: Vec<DeviceRow> = all_devices(lists).map(DeviceRow::from).collect();
    output::render_table(&rows)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    settings: &Settings,
    args: BluetoothArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        BluetoothCommand::Show => {
            let page = bluetooth_page(settings).await;
            output::print_output(&output::render_page(&format, &page), global.quiet);
            Ok(())
        }

        BluetoothCommand::Devices => {
            let lists = settings.fetch_bluetooth_devices().await?;
            let out = output::render_single(&format, &lists, devices_table, |l| {
                all_devices(l)
                    .map(|d| d.address.clone())
                    .collect::<Vec<_>>()
                    .join("\n")
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BluetoothCommand::On => {
            settings.enable_bluetooth().await?;
            output::print_done(global, "Bluetooth is on");
            Ok(())
        }

        BluetoothCommand::Off => {
            settings.disable_bluetooth().await?;
            output::print_done(global, "Bluetooth is off");
            Ok(())
        }

        BluetoothCommand::Connect { address } => {
            settings.connect_bluetooth_device(&address).await?;
            output::print_done(global, &format!("Connected to {address}"));
            Ok(())
        }

        BluetoothCommand::Forget { address } => {
            if !util::confirm(&format!("Forget device {address}?"), global.yes)? {
                return Ok(());
            }
            settings.forget_bluetooth_device(&address).await?;
            output::print_done(global, &format!("Forgot {address}"));
            Ok(())
        }
    }
}
