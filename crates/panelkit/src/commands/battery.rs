//! Battery and performance mode handlers.

use tabled::Tabled;

use panelkit_core::Settings;
use panelkit_core::loader::battery_page;

use crate::cli::{BatteryArgs, BatteryCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ModeRow {
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

pub async fn handle(
    settings: &Settings,
    args: BatteryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        BatteryCommand::Show => {
            let page = battery_page(settings).await;
            output::print_output(&output::render_page(&format, &page), global.quiet);
            Ok(())
        }

        BatteryCommand::Modes => {
            let (modes, current) = tokio::try_join!(
                settings.fetch_performance_modes(),
                settings.fetch_performance_mode(),
            )?;
            let out = output::render_list(
                &format,
                &modes,
                |m| ModeRow {
                    mode: m.clone(),
                    active: if *m == current { "*" } else { "" },
                },
                String::clone,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BatteryCommand::Mode { value: None } => {
            let mode = settings.fetch_performance_mode().await?;
            let out = output::render_single(&format, &mode, String::clone, String::clone);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BatteryCommand::Mode { value: Some(mode) } => {
            settings.set_performance_mode(&mode).await?;
            output::print_done(global, &format!("Performance mode set to {mode}"));
            Ok(())
        }
    }
}
