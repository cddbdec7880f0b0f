//! Shared helpers for command handlers.

use std::io::IsTerminal;

use secrecy::SecretString;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    Ok(confirmed)
}

/// Read a secret from the terminal without echo.
pub fn prompt_secret(label: &str) -> Result<SecretString, CliError> {
    let value = rpassword::prompt_password(label).map_err(prompt_err)?;
    Ok(SecretString::from(value))
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Turn a backend `false` into an error for the named action.
pub fn accepted(ok: bool, action: &str) -> Result<(), CliError> {
    if ok {
        Ok(())
    } else {
        Err(CliError::Rejected {
            action: action.into(),
        })
    }
}
