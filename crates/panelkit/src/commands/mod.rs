//! Command dispatch: bridges CLI args -> `Settings` calls -> output formatting.

pub mod battery;
pub mod bluetooth;
pub mod config_cmd;
pub mod display;
pub mod security;
pub mod sound;
pub mod util;
pub mod wifi;

use panelkit_core::Settings;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a bridge-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    settings: &Settings,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Wifi(args) => wifi::handle(settings, args, global).await,
        Command::Bluetooth(args) => bluetooth::handle(settings, args, global).await,
        Command::Battery(args) => battery::handle(settings, args, global).await,
        Command::Display(args) => display::handle(settings, args, global).await,
        Command::Sound(args) => sound::handle(settings, args, global).await,
        Command::Security(args) => security::handle(settings, args, global).await,
        // Handled before a session is built
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions are not bridge commands".into(),
        )),
    }
}
