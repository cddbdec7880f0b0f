// Typed backend client
//
// Wraps a `Gateway` with command-name constants, argument marshaling and
// reply decoding. Each capability domain lives in its own file as
// inherent methods so this module stays focused on the call mechanics.

mod bluetooth;
mod display;
mod power;
mod security;
mod sound;
mod wireless;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::gateway::Gateway;

/// Typed handle over the settings backend.
///
/// Cheap to clone: it only holds an `Arc` to the underlying gateway.
#[derive(Clone)]
pub struct Backend {
    gateway: Arc<dyn Gateway>,
}

impl Backend {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// The underlying gateway (for callers issuing untyped commands).
    pub fn gateway(&self) -> &Arc<dyn Gateway> {
        &self.gateway
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Invoke a command and decode its reply into `T`.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        command: &'static str,
        args: Option<Value>,
    ) -> Result<T, Error> {
        debug!(command, "invoking backend command");
        let value = self.gateway.invoke(command, args).await?;
        serde_json::from_value(value.clone()).map_err(|e| Error::Deserialization {
            command: command.to_owned(),
            message: e.to_string(),
            body: value.to_string(),
        })
    }

    /// Invoke a command whose reply carries no information.
    pub(crate) async fn call_unit(
        &self,
        command: &'static str,
        args: Option<Value>,
    ) -> Result<(), Error> {
        debug!(command, "invoking backend command");
        self.gateway.invoke(command, args).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing {
    // In-memory gateway recording every call and replaying canned replies.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::error::Error;
    use crate::gateway::Gateway;

    #[derive(Default)]
    pub(crate) struct RecordingGateway {
        replies: HashMap<&'static str, Value>,
        pub(crate) calls: Mutex<Vec<(String, Option<Value>)>>,
    }

    impl RecordingGateway {
        pub(crate) fn reply(mut self, command: &'static str, value: Value) -> Self {
            self.replies.insert(command, value);
            self
        }

        pub(crate) fn last_call(&self) -> (String, Option<Value>) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Gateway for RecordingGateway {
        async fn invoke(&self, command: &str, args: Option<Value>) -> Result<Value, Error> {
            self.calls
                .lock()
                .unwrap()
                .push((command.to_owned(), args));
            self.replies
                .get(command)
                .cloned()
                .ok_or_else(|| Error::UnknownCommand {
                    command: command.to_owned(),
                })
        }
    }
}
