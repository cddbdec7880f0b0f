//! Wi-Fi command handlers.

use secrecy::SecretString;
use tabled::Tabled;

use panelkit_core::loader::{available_network_detail, known_network_detail, wireless_overview};
use panelkit_core::{KnownNetwork, ScannedNetwork, Settings, WirelessOverview, WirelessStatus};

use crate::cli::{GlobalOpts, OutputFormat, WifiArgs, WifiCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct NetworkRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Signal")]
    signal: String,
    #[tabled(rename = "Band")]
    frequency: String,
    #[tabled(rename = "Security")]
    security: String,
    #[tabled(rename = "Cipher")]
    encryption: String,
    #[tabled(rename = "MAC")]
    mac: String,
}

impl From<&ScannedNetwork> for NetworkRow {
    fn from(n: &ScannedNetwork) -> Self {
        let security = n.security.map_or_else(|| "Open".into(), |p| p.to_string());
        Self {
            name: n.name.clone(),
            signal: format!("{} ({})", n.signal_strength(), n.signal),
            frequency: n.frequency.clone(),
            security,
            encryption: n.encryption.map(|e| e.to_string()).unwrap_or_default(),
            mac: n.mac.clone(),
        }
    }
}

#[derive(Tabled)]
struct KnownRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Flags")]
    flags: String,
}

impl From<&KnownNetwork> for KnownRow {
    fn from(k: &KnownNetwork) -> Self {
        Self {
            id: k.network_id.clone(),
            ssid: k.ssid.clone(),
            flags: k.flags.clone(),
        }
    }
}

// ── Detail blocks ───────────────────────────────────────────────────

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn status_detail(s: &WirelessStatus) -> String {
    let connected = s.connected.as_ref().map_or("-", |n| n.name.as_str());
    format!("Wi-Fi:     {}\nConnected: {connected}", on_off(s.enabled))
}

fn overview_detail(o: &WirelessOverview) -> String {
    let connected = o.connected.as_ref().map_or("-", |n| n.name.as_str());
    let networks = output::render_list(
        &OutputFormat::Table,
        &o.available,
        |n| NetworkRow::from(n),
        |n| n.name.clone(),
    );
    format!(
        "Wi-Fi:     {}\nConnected: {connected}\nSaved:     {}\n{networks}",
        on_off(o.enabled),
        o.known.len(),
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    settings: &Settings,
    args: WifiArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        WifiCommand::Status => {
            let (enabled, connected) = tokio::try_join!(
                settings.fetch_wifi_status(),
                settings.fetch_connected_wifi_info(),
            )?;
            let status = WirelessStatus { enabled, connected };
            let out = output::render_single(&format, &status, status_detail, |s| {
                on_off(s.enabled).into()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WifiCommand::Overview => {
            let overview = wireless_overview(settings).await;
            let out = output::render_single(&format, &overview, overview_detail, |o| {
                o.available
                    .iter()
                    .map(|n| n.name.clone())
                    .collect::<Vec<_>>()
                    .join("\n")
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WifiCommand::Scan => {
            let networks = settings.fetch_available_networks().await?;
            let out = output::render_list(
                &format,
                &networks,
                |n| NetworkRow::from(n),
                |n| n.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WifiCommand::Known => {
            let known = settings.fetch_known_networks().await?;
            let out = output::render_list(
                &format,
                &known,
                |k| KnownRow::from(k),
                |k| k.network_id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WifiCommand::Show { network_id } => {
            let page = known_network_detail(settings, &network_id).await?;
            output::print_output(&output::render_network_detail(&format, &page), global.quiet);
            Ok(())
        }

        WifiCommand::Inspect { name, connected } => {
            let page =
                available_network_detail(settings, &name, connected.then_some("true")).await?;
            output::print_output(&output::render_network_detail(&format, &page), global.quiet);
            Ok(())
        }

        WifiCommand::Connect {
            ssid,
            password,
            open,
        } => {
            let password = match password {
                Some(p) => SecretString::from(p),
                None if open => SecretString::from(String::new()),
                None => util::prompt_secret(&format!("Passphrase for {ssid}: "))?,
            };
            settings.connect_to_network(&ssid, &password).await?;
            output::print_done(global, &format!("Connected to {ssid}"));
            Ok(())
        }

        WifiCommand::Join { network_id } => {
            settings.connect_to_known_network(&network_id).await?;
            output::print_done(global, &format!("Joined saved network {network_id}"));
            Ok(())
        }

        WifiCommand::Forget { ssid } => {
            if !util::confirm(
                &format!("Forget '{ssid}'? Its saved passphrase will be removed."),
                global.yes,
            )? {
                return Ok(());
            }
            settings.disconnect_network(&ssid).await?;
            output::print_done(global, &format!("Forgot {ssid}"));
            Ok(())
        }

        WifiCommand::On => toggle_radio(settings, global, true).await,
        WifiCommand::Off => toggle_radio(settings, global, false).await,
    }
}

/// Flip the radio, then refetch the status the backend now reports.
async fn toggle_radio(
    settings: &Settings,
    global: &GlobalOpts,
    enable: bool,
) -> Result<(), CliError> {
    let (command, ok) = if enable {
        ("enable_wifi", settings.enable_wifi().await?)
    } else {
        ("disable_wifi", settings.disable_wifi().await?)
    };
    if !ok {
        return Err(CliError::Backend {
            command: command.into(),
            message: "the backend reported failure".into(),
        });
    }
    let enabled = settings.fetch_wifi_status().await?;
    output::print_done(global, &format!("Wi-Fi is {}", on_off(enabled)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use panelkit_core::classify_in_place;

    use super::*;

    fn row(flags: &str) -> NetworkRow {
        let mut network = ScannedNetwork {
            name: "Lab".into(),
            signal: "40".into(),
            flags: flags.into(),
            ..ScannedNetwork::default()
        };
        classify_in_place(&mut network);
        NetworkRow::from(&network)
    }

    #[test]
    fn security_column_names_the_protocol() {
        let r = row("[WPA2-PSK-CCMP][ESS]");
        assert_eq!(r.security, "WPA2-PSK");
        assert_eq!(r.encryption, "CCMP");
    }

    #[test]
    fn unrecognised_flags_read_as_open() {
        assert_eq!(row("[WEP][ESS]").security, "Open");
        assert_eq!(row("").encryption, "");
    }
}
