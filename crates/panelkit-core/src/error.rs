// ── Core error types ──
//
// User-facing errors from panelkit-core. Consumers never see HTTP status
// codes or JSON decode failures directly: the `From<panelkit_api::Error>`
// impl translates gateway errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Remote call failures ─────────────────────────────────────────
    #[error("Cannot reach settings backend at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("Backend call '{command}' timed out after {timeout_secs}s")]
    Timeout { command: String, timeout_secs: u64 },

    #[error("Backend call '{command}' failed: {message}")]
    RemoteCall { command: String, message: String },

    #[error("Backend refused '{command}': permission denied")]
    PermissionDenied { command: String },

    #[error("Backend does not support '{command}'")]
    Unsupported { command: String },

    #[error("Backend reply to '{command}' was malformed: {message}")]
    MalformedReply { command: String, message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Returns `true` if the failure happened on the remote side of the
    /// gateway (as opposed to local validation or lookup).
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Unreachable { .. }
                | Self::Timeout { .. }
                | Self::RemoteCall { .. }
                | Self::PermissionDenied { .. }
                | Self::Unsupported { .. }
                | Self::MalformedReply { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn not_found(entity_type: &str, identifier: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_owned(),
            identifier: identifier.to_owned(),
        }
    }

    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}

// ── Conversion from gateway errors ───────────────────────────────────

impl From<panelkit_api::Error> for CoreError {
    fn from(err: panelkit_api::Error) -> Self {
        match err {
            panelkit_api::Error::Transport { command, source } => {
                if source.is_connect() {
                    CoreError::Unreachable {
                        url: source
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: source.to_string(),
                    }
                } else if source.is_timeout() {
                    CoreError::Timeout {
                        command,
                        timeout_secs: 0,
                    }
                } else {
                    CoreError::RemoteCall {
                        command,
                        message: source.to_string(),
                    }
                }
            }
            panelkit_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid gateway URL: {e}"),
            },
            panelkit_api::Error::Timeout {
                command,
                timeout_secs,
            } => CoreError::Timeout {
                command,
                timeout_secs,
            },
            panelkit_api::Error::Tls(reason) => CoreError::Unreachable {
                url: String::new(),
                reason: format!("TLS error: {reason}"),
            },
            panelkit_api::Error::Unauthorized { command } => {
                CoreError::PermissionDenied { command }
            }
            panelkit_api::Error::UnknownCommand { command } => CoreError::Unsupported { command },
            panelkit_api::Error::Rejected {
                command, message, ..
            } => CoreError::RemoteCall { command, message },
            panelkit_api::Error::Deserialization {
                command, message, ..
            } => CoreError::MalformedReply { command, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_becomes_remote_call() {
        let err = CoreError::from(panelkit_api::Error::Rejected {
            command: "scan_bluetooth".into(),
            status: Some(500),
            message: "adapter busy".into(),
        });
        assert!(err.is_remote());
        assert_eq!(
            err.to_string(),
            "Backend call 'scan_bluetooth' failed: adapter busy"
        );
    }

    #[test]
    fn unknown_command_is_unsupported_not_not_found() {
        let err = CoreError::from(panelkit_api::Error::UnknownCommand {
            command: "get_lock_status".into(),
        });
        assert!(matches!(err, CoreError::Unsupported { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_local() {
        let err = CoreError::not_found("known network", "9");
        assert!(err.is_not_found());
        assert!(!err.is_remote());
        assert_eq!(err.to_string(), "known network not found: 9");
    }
}
