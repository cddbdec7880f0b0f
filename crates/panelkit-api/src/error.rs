use thiserror::Error;

/// Top-level error type for the `panelkit-api` crate.
///
/// Every variant carries the backend command that failed so callers can
/// log and report without threading the command name separately.
/// `panelkit-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("transport error while invoking '{command}': {source}")]
    Transport {
        command: String,
        #[source]
        source: reqwest::Error,
    },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("'{command}' timed out after {timeout_secs}s")]
    Timeout { command: String, timeout_secs: u64 },

    /// TLS or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Backend replies ─────────────────────────────────────────────
    /// The backend refused the caller (HTTP 401/403).
    #[error("backend refused '{command}': not authorized")]
    Unauthorized { command: String },

    /// The backend does not expose this command (HTTP 404).
    #[error("backend does not know command '{command}'")]
    UnknownCommand { command: String },

    /// The backend reported a failure for this command.
    #[error("backend rejected '{command}': {message}")]
    Rejected {
        command: String,
        /// HTTP status code (if the gateway is HTTP based).
        status: Option<u16>,
        message: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// The reply could not be decoded into the expected shape.
    #[error("malformed reply to '{command}': {message}")]
    Deserialization {
        command: String,
        message: String,
        body: String,
    },
}

impl Error {
    /// The backend command this error belongs to, when known.
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::Transport { command, .. }
            | Self::Timeout { command, .. }
            | Self::Unauthorized { command }
            | Self::UnknownCommand { command }
            | Self::Rejected { command, .. }
            | Self::Deserialization { command, .. } => Some(command),
            Self::InvalidUrl(_) | Self::Tls(_) => None,
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout() || source.is_connect(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if the backend does not know the command.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownCommand { .. })
    }
}
