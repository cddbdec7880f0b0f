//! Sound command handlers.

use tabled::Tabled;

use panelkit_core::loader::sound_page;
use panelkit_core::{Settings, SoundDevice};

use crate::cli::{GlobalOpts, SoundArgs, SoundCommand, SoundTarget};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Device")]
    label: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Volume")]
    volume: String,
}

impl From<&SoundDevice> for DeviceRow {
    fn from(d: &SoundDevice) -> Self {
        let volume = match (d.is_muted, d.volume) {
            (true, _) => "muted".into(),
            (false, Some(v)) => format!("{v}%"),
            (false, None) => "-".into(),
        };
        Self {
            label: d.label().to_owned(),
            name: d.name.clone(),
            volume,
        }
    }
}

fn side(input: bool) -> &'static str {
    if input { "Input" } else { "Output" }
}

/// Name used in messages: the device, or the side's default.
fn target_label(target: &SoundTarget) -> String {
    if target.device.is_empty() {
        format!("{} (default)", side(target.input).to_lowercase())
    } else {
        target.device.clone()
    }
}

pub async fn handle(
    settings: &Settings,
    args: SoundArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        SoundCommand::Show => {
            let page = sound_page(settings).await;
            output::print_output(&output::render_page(&format, &page), global.quiet);
            Ok(())
        }

        SoundCommand::Devices { input } => {
            let devices = if input {
                settings.fetch_input_devices().await?
            } else {
                settings.fetch_output_devices().await?
            };
            let out = output::render_list(
                &format,
                &devices,
                |d| DeviceRow::from(d),
                |d| d.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SoundCommand::Volume {
            value: None,
            target,
        } => {
            let level = if target.input {
                settings.fetch_input_volume(&target.device).await?
            } else {
                settings.fetch_output_volume(&target.device).await?
            };
            let out =
                output::render_single(&format, &level, |l| format!("{l}%"), ToString::to_string);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SoundCommand::Volume {
            value: Some(level),
            target,
        } => {
            if target.input {
                settings.set_input_volume(level, &target.device).await?;
            } else {
                settings.set_output_volume(level, &target.device).await?;
            }
            output::print_done(
                global,
                &format!("{} volume set to {level}%", target_label(&target)),
            );
            Ok(())
        }

        SoundCommand::Mute { target } => {
            if target.input {
                settings.toggle_input_mute(&target.device).await?;
            } else {
                settings.toggle_output_mute(&target.device).await?;
            }
            output::print_done(global, &format!("Toggled mute on {}", target_label(&target)));
            Ok(())
        }
    }
}
