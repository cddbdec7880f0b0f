//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use panelkit_config::ConfigError;
use panelkit_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the settings bridge at {url}")]
    #[diagnostic(
        code(panelkit::connection_failed),
        help(
            "Check that the bridge is running and listening.\n\
             Reason: {reason}\n\
             Override the address with --gateway or `panelkit config set gateway.url <URL>`."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("'{command}' timed out after {seconds}s")]
    #[diagnostic(
        code(panelkit::timeout),
        help("Increase the timeout with --timeout or check bridge responsiveness.")
    )]
    Timeout { command: String, seconds: u64 },

    // ── Backend ──────────────────────────────────────────────────────
    #[error("Backend call '{command}' failed: {message}")]
    #[diagnostic(code(panelkit::backend))]
    Backend { command: String, message: String },

    #[error("The bridge refused '{command}'")]
    #[diagnostic(
        code(panelkit::permission_denied),
        help("The bridge requires authorization for this command.")
    )]
    PermissionDenied { command: String },

    #[error("The bridge does not support '{command}'")]
    #[diagnostic(
        code(panelkit::unsupported),
        help("The settings backend on this machine has no handler for this command.")
    )]
    Unsupported { command: String },

    #[error("{action} was rejected")]
    #[diagnostic(code(panelkit::rejected), help("Check the PIN and try again."))]
    Rejected { action: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(panelkit::not_found),
        help("Run: panelkit {list_command} to see what is available")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(panelkit::validation))]
    Validation { field: String, reason: String },

    #[error("'{action}' requires confirmation")]
    #[diagnostic(
        code(panelkit::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(panelkit::config),
        help("Inspect the file with: panelkit config show")
    )]
    Config { message: String },

    // ── IO / Internal ────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(panelkit::internal))]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Rejected { .. } => exit_code::AUTH,
            Self::PermissionDenied { .. } => exit_code::PERMISSION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Unreachable { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::Timeout {
                command,
                timeout_secs,
            } => CliError::Timeout {
                command,
                seconds: timeout_secs,
            },
            CoreError::RemoteCall { command, message }
            | CoreError::MalformedReply { command, message } => {
                CliError::Backend { command, message }
            }
            CoreError::PermissionDenied { command } => CliError::PermissionDenied { command },
            CoreError::Unsupported { command } => CliError::Unsupported { command },
            CoreError::NotFound {
                entity_type,
                identifier,
            } => {
                let list_command = list_command_for(&entity_type).into();
                CliError::NotFound {
                    resource_type: entity_type,
                    identifier,
                    list_command,
                }
            }
            CoreError::Validation { field, reason } => CliError::Validation { field, reason },
            CoreError::Config { message } => CliError::Config { message },
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

fn list_command_for(entity_type: &str) -> &'static str {
    if entity_type.starts_with("Known") {
        "wifi known"
    } else if entity_type.starts_with("Network") {
        "wifi scan"
    } else {
        "--help"
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_exits_with_connection_code() {
        let err = CliError::from(CoreError::Unreachable {
            url: "http://127.0.0.1:1/".into(),
            reason: "connection refused".into(),
        });
        assert_eq!(err.exit_code(), exit_code::CONNECTION);
    }

    #[test]
    fn missing_known_network_points_at_known_list() {
        let err = CliError::from(CoreError::NotFound {
            entity_type: "Known network".into(),
            identifier: "9".into(),
        });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        match err {
            CliError::NotFound { list_command, .. } => assert_eq!(list_command, "wifi known"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn validation_is_a_usage_error() {
        let err = CliError::from(CoreError::Validation {
            field: "brightness".into(),
            reason: "must be at most 100".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
        assert_eq!(err.to_string(), "Invalid value for brightness: must be at most 100");
    }

    #[test]
    fn rejected_pin_is_an_auth_failure() {
        let err = CliError::Rejected {
            action: "PIN check".into(),
        };
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }
}
