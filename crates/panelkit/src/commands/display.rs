//! Display handlers.

use panelkit_core::Settings;
use panelkit_core::loader::display_page;

use crate::cli::{DisplayArgs, DisplayCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    settings: &Settings,
    args: DisplayArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        DisplayCommand::Show => {
            let page = display_page(settings).await;
            output::print_output(&output::render_page(&format, &page), global.quiet);
            Ok(())
        }

        DisplayCommand::Brightness { value: None } => {
            let level = settings.fetch_brightness().await?;
            let out =
                output::render_single(&format, &level, |l| format!("{l}%"), ToString::to_string);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DisplayCommand::Brightness { value: Some(level) } => {
            settings.set_brightness(level).await?;
            output::print_done(global, &format!("Brightness set to {level}%"));
            Ok(())
        }
    }
}
