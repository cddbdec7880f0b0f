//! PIN lock handlers. PINs are always read from the terminal.

use panelkit_core::Settings;
use panelkit_core::loader::security_page;
use secrecy::{ExposeSecret, SecretString};

use crate::cli::{GlobalOpts, SecurityArgs, SecurityCommand};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    settings: &Settings,
    args: SecurityArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        SecurityCommand::Show => {
            let page = security_page(settings).await;
            output::print_output(&output::render_page(&format, &page), global.quiet);
            Ok(())
        }

        SecurityCommand::SetPin => {
            // Empty when no PIN is set yet
            let old = util::prompt_secret("Current PIN (blank if none): ")?;
            let new = util::prompt_secret("New PIN: ")?;
            let again = util::prompt_secret("Repeat new PIN: ")?;
            if !same(&new, &again) {
                return Err(CliError::Validation {
                    field: "new PIN".into(),
                    reason: "entries do not match".into(),
                });
            }
            util::accepted(settings.change_pin(&old, &new).await?, "PIN change")?;
            output::print_done(global, "PIN lock enabled");
            Ok(())
        }

        SecurityCommand::RemovePin => {
            let pin = util::prompt_secret("Current PIN: ")?;
            util::accepted(settings.remove_pin(&pin).await?, "PIN removal")?;
            output::print_done(global, "PIN lock removed");
            Ok(())
        }

        SecurityCommand::Verify => {
            let pin = util::prompt_secret("PIN: ")?;
            util::accepted(settings.authenticate_pin(&pin).await?, "PIN check")?;
            output::print_done(global, "PIN accepted");
            Ok(())
        }
    }
}

fn same(a: &SecretString, b: &SecretString) -> bool {
    a.expose_secret() == b.expose_secret()
}
