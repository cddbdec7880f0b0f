#![allow(clippy::unwrap_used)]
// File and environment layering for panelkit-config.

use figment::Jail;
use pretty_assertions::assert_eq;

use panelkit_config::{Config, load_config_from, save_config_to, to_settings_config};

#[test]
fn test_missing_file_yields_defaults() {
    Jail::expect_with(|_jail| {
        let cfg = load_config_from(std::path::Path::new("absent.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        Ok(())
    });
}

#[test]
fn test_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
                [gateway]
                url = "http://10.0.0.5:9000"
                timeout_secs = 3

                [network]
                ip_address = "10.0.0.42"
            "#,
        )?;

        let cfg = load_config_from(std::path::Path::new("config.toml")).unwrap();
        assert_eq!(cfg.gateway.url, "http://10.0.0.5:9000");
        assert_eq!(cfg.gateway.timeout_secs, 3);
        assert_eq!(cfg.network.ip_address, "10.0.0.42");
        assert_eq!(cfg.network.subnet_mask, "255.255.255.0");
        assert_eq!(cfg.defaults.output, "table");
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[gateway]\nurl = \"http://10.0.0.5:9000\"\n")?;
        jail.set_env("PANELKIT_GATEWAY__URL", "http://192.168.7.1:7878");
        jail.set_env("PANELKIT_DEFAULTS__OUTPUT", "json");

        let cfg = load_config_from(std::path::Path::new("config.toml")).unwrap();
        assert_eq!(cfg.gateway.url, "http://192.168.7.1:7878");
        assert_eq!(cfg.defaults.output, "json");

        let settings = to_settings_config(&cfg).unwrap();
        assert_eq!(settings.gateway_url.host_str(), Some("192.168.7.1"));
        Ok(())
    });
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.gateway.timeout_secs = 25;
    cfg.defaults.color = "never".into();
    save_config_to(&cfg, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("timeout_secs = 25"));

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.gateway.timeout_secs, 25);
    assert_eq!(loaded.defaults.color, "never");
}
