// Remote command gateway
//
// The single call primitive every backend capability goes through:
// `invoke(command, args) -> value`. `HttpGateway` speaks the JSON bridge
// exposed by the native settings daemon; tests and embedders can supply
// their own `Gateway` implementation.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// One request/response exchange with the native backend.
///
/// `args` is a JSON object of named arguments, or `None` for commands
/// that take no parameters. A successful reply is any JSON value; a
/// failed one is an [`Error`] carrying the command name.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn invoke(&self, command: &str, args: Option<Value>) -> Result<Value, Error>;
}

/// Error body the bridge sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Gateway over the JSON-over-HTTP bridge.
///
/// Every command is `POST {base}/invoke/{command}` with the argument
/// object as body (`{}` when there are none). The reply body of a 2xx
/// response is the command's value.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
}

impl HttpGateway {
    /// Create a gateway from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            timeout_secs: transport.timeout_secs(),
        })
    }

    /// Create a gateway with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            timeout_secs: 0,
        }
    }

    /// The bridge base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/invoke/{command}`, tolerating a trailing slash on the base.
    pub(crate) fn command_url(&self, command: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/invoke/{}",
            self.base_url.as_str().trim_end_matches('/'),
            command
        );
        Ok(Url::parse(&full)?)
    }

    /// Map a bridge reply to the command's value or a typed error.
    async fn parse_reply(command: &str, resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(|source| Error::Transport {
            command: command.to_owned(),
            source,
        })?;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                command: command.to_owned(),
                message: e.to_string(),
                body,
            });
        }

        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(Error::Unauthorized {
                    command: command.to_owned(),
                })
            }
            reqwest::StatusCode::NOT_FOUND => Err(Error::UnknownCommand {
                command: command.to_owned(),
            }),
            _ => {
                let message = serde_json::from_str::<ErrorBody>(&body).map_or_else(
                    |_| {
                        if body.trim().is_empty() {
                            format!("HTTP {status}")
                        } else {
                            body.trim().to_owned()
                        }
                    },
                    |b| b.error,
                );
                Err(Error::Rejected {
                    command: command.to_owned(),
                    status: Some(status.as_u16()),
                    message,
                })
            }
        }
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn invoke(&self, command: &str, args: Option<Value>) -> Result<Value, Error> {
        let url = self.command_url(command)?;
        debug!(command, "POST {}", url);

        let body = args.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|source| {
                if source.is_timeout() {
                    Error::Timeout {
                        command: command.to_owned(),
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    Error::Transport {
                        command: command.to_owned(),
                        source,
                    }
                }
            })?;

        Self::parse_reply(command, resp).await
    }
}
