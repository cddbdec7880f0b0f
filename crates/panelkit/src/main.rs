mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use panelkit_core::Settings;

use crate::cli::{Cli, Command, LogFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose, cli.global.log_format);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Logs go to stderr so `-o json` output stays parseable.
fn init_tracing(verbosity: u8, format: LogFormat) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        mut global,
        command,
    } = cli;

    match command {
        // Config commands must work even when the file is broken
        Command::Config(args) => {
            config::apply_defaults(&mut global, &config::load_config_or_default());
            commands::config_cmd::handle(args, &global)
        }

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "panelkit", &mut std::io::stdout());
            Ok(())
        }

        // Everything else talks to the bridge
        cmd => {
            let cfg = config::load_config()?;
            config::apply_defaults(&mut global, &cfg);
            let settings = Settings::new(config::resolve(&global, &cfg)?)?;

            tracing::debug!(command = ?cmd, gateway = %settings.config().gateway_url, "dispatching command");
            commands::dispatch(cmd, &settings, &global).await
        }
    }
}
