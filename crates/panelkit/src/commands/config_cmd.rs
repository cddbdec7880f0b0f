//! Config subcommand handlers.

use clap::ValueEnum;
use dialoguer::{Input, Select};

use crate::cli::{ColorMode, ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

// ── Helpers ─────────────────────────────────────────────────────────

fn format_config(cfg: &Config) -> String {
    toml::to_string_pretty(cfg).unwrap_or_else(|e| format!("# unable to render config: {e}"))
}

/// Reject the edit before it reaches disk.
fn validated(cfg: Config) -> Result<Config, CliError> {
    panelkit_config::to_settings_config(&cfg)?;
    Ok(cfg)
}

fn parse_bool(field: &str, value: &str) -> Result<bool, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: "must be 'true' or 'false'".into(),
    })
}

fn check_choice<E: ValueEnum>(field: &str, value: &str) -> Result<(), CliError> {
    E::from_str(value, true).map(|_| ()).map_err(|_| {
        let names: Vec<String> = E::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value().map(|p| p.get_name().to_owned()))
            .collect();
        CliError::Validation {
            field: field.into(),
            reason: format!("expected one of: {}", names.join(", ")),
        }
    })
}

/// Apply `key = value` to a config. Keys are `section.field`.
fn set_key(cfg: &mut Config, key: &str, value: String) -> Result<(), CliError> {
    match key {
        "gateway.url" => cfg.gateway.url = value,
        "gateway.timeout_secs" | "gateway.timeout" => {
            cfg.gateway.timeout_secs = value.parse().map_err(|_| CliError::Validation {
                field: key.into(),
                reason: "must be a number (seconds)".into(),
            })?;
        }
        "gateway.ca_cert" => {
            cfg.gateway.ca_cert = (!value.is_empty()).then(|| value.into());
        }
        "gateway.insecure" => cfg.gateway.insecure = parse_bool(key, &value)?,
        "network.ip_address" => cfg.network.ip_address = value,
        "network.subnet_mask" => cfg.network.subnet_mask = value,
        "network.gateway" => cfg.network.gateway = value,
        "defaults.output" => {
            check_choice::<OutputFormat>(key, &value)?;
            cfg.defaults.output = value;
        }
        "defaults.color" => {
            check_choice::<ColorMode>(key, &value)?;
            cfg.defaults.color = value;
        }
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: format!(
                    "unknown config key '{other}'. Valid keys: gateway.url, \
                     gateway.timeout_secs, gateway.ca_cert, gateway.insecure, \
                     network.ip_address, network.subnet_mask, network.gateway, \
                     defaults.output, defaults.color"
                ),
            });
        }
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("panelkit configuration");
            eprintln!("   Config path: {}\n", config_path.display());

            let mut cfg = config::load_config_or_default();

            cfg.gateway.url = Input::new()
                .with_prompt("Settings bridge URL")
                .default(cfg.gateway.url.clone())
                .interact_text()
                .map_err(prompt_err)?;

            cfg.gateway.timeout_secs = Input::new()
                .with_prompt("Request timeout (seconds)")
                .default(cfg.gateway.timeout_secs)
                .interact_text()
                .map_err(prompt_err)?;

            let formats = ["table", "json", "yaml", "plain"];
            let current = formats
                .iter()
                .position(|f| *f == cfg.defaults.output)
                .unwrap_or(0);
            let selection = Select::new()
                .with_prompt("Default output format")
                .items(&formats)
                .default(current)
                .interact()
                .map_err(prompt_err)?;
            cfg.defaults.output = formats.get(selection).copied().unwrap_or("table").into();

            let path = config::save_config(&validated(cfg)?)?;
            output::print_done(global, &format!("Configuration written to {}", path.display()));
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = output::render_single(&global.output_format(), &cfg, format_config, |c| {
                c.gateway.url.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            set_key(&mut cfg, &key, value)?;
            config::save_config(&validated(cfg)?)?;
            output::print_done(global, &format!("Set {key}"));
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn set_known_keys() {
        let mut cfg = Config::default();
        set_key(&mut cfg, "gateway.url", "http://10.0.0.2:7878".into()).unwrap();
        set_key(&mut cfg, "gateway.timeout_secs", "3".into()).unwrap();
        set_key(&mut cfg, "defaults.output", "JSON".into()).unwrap();
        set_key(&mut cfg, "network.gateway", "10.0.0.1".into()).unwrap();

        assert_eq!(cfg.gateway.url, "http://10.0.0.2:7878");
        assert_eq!(cfg.gateway.timeout_secs, 3);
        assert_eq!(cfg.defaults.output, "JSON");
        assert_eq!(cfg.network.gateway, "10.0.0.1");
    }

    #[test]
    fn unknown_key_and_bad_choice_are_rejected() {
        let mut cfg = Config::default();
        assert!(set_key(&mut cfg, "gateway.port", "1".into()).is_err());
        let err = set_key(&mut cfg, "defaults.color", "sometimes".into()).unwrap_err();
        assert!(err.to_string().contains("defaults.color"));
    }

    #[test]
    fn empty_ca_cert_clears_it() {
        let mut cfg = Config::default();
        set_key(&mut cfg, "gateway.ca_cert", "/etc/ca.pem".into()).unwrap();
        assert!(cfg.gateway.ca_cert.is_some());
        set_key(&mut cfg, "gateway.ca_cert", String::new()).unwrap();
        assert!(cfg.gateway.ca_cert.is_none());
    }

    #[test]
    fn invalid_url_fails_validation() {
        let mut cfg = Config::default();
        set_key(&mut cfg, "gateway.url", "not a url".into()).unwrap();
        assert!(validated(cfg).is_err());
    }
}
