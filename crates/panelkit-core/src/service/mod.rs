// ── Domain services ──
//
// Each submodule adds inherent methods to `Settings` for one domain.
// A fetch is one backend call, an optional pure transform, and a write
// through the module's private `publish_*` helper. That helper is the
// only writer of its store cell. On failure the store is left untouched
// and the caller gets the error.

mod battery;
mod bluetooth;
mod display;
mod network;
mod security;
mod sound;

use secrecy::{ExposeSecret, SecretString};
use tracing::error;

use crate::error::CoreError;

/// Log a failed backend call and convert it for the caller.
pub(crate) fn remote_failure(
    operation: &'static str,
) -> impl FnOnce(panelkit_api::Error) -> CoreError {
    move |err| {
        error!(operation, command = err.command(), error = %err, "backend call failed");
        CoreError::from(err)
    }
}

// ── Argument validation ──────────────────────────────────────────────

pub(crate) fn check_percent(field: &str, value: u8) -> Result<u8, CoreError> {
    if value > 100 {
        return Err(CoreError::validation(field, format!("{value} is above 100")));
    }
    Ok(value)
}

pub(crate) fn check_pin(field: &str, pin: &SecretString) -> Result<(), CoreError> {
    let pin = pin.expose_secret();
    if pin.is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    if !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::validation(field, "must contain digits only"));
    }
    Ok(())
}

pub(crate) fn check_not_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing {
    // Scripted gateway: canned replies or rejections per command, every
    // call recorded for assertions. Queued delayed replies are served
    // first, one per call.

    use std::collections::{HashMap, VecDeque};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use panelkit_api::{Error, Gateway};
    use serde_json::Value;

    use crate::config::SettingsConfig;
    use crate::settings::Settings;

    enum Reply {
        Value(Value),
        Reject(String),
    }

    #[derive(Default)]
    pub(crate) struct ScriptedGateway {
        replies: Mutex<HashMap<String, Reply>>,
        delayed: Mutex<HashMap<String, VecDeque<(Duration, Value)>>>,
        calls: Mutex<Vec<(String, Option<Value>)>>,
    }

    impl ScriptedGateway {
        pub(crate) fn reply(&self, command: &str, value: Value) -> &Self {
            self.replies
                .lock()
                .unwrap()
                .insert(command.to_owned(), Reply::Value(value));
            self
        }

        pub(crate) fn reject(&self, command: &str, message: &str) -> &Self {
            self.replies
                .lock()
                .unwrap()
                .insert(command.to_owned(), Reply::Reject(message.to_owned()));
            self
        }

        /// Queue a reply that resolves only after `delay`.
        pub(crate) fn reply_after(&self, command: &str, delay: Duration, value: Value) -> &Self {
            self.delayed
                .lock()
                .unwrap()
                .entry(command.to_owned())
                .or_default()
                .push_back((delay, value));
            self
        }

        pub(crate) fn calls(&self) -> Vec<(String, Option<Value>)> {
            self.calls.lock().unwrap().clone()
        }

        pub(crate) fn commands(&self) -> Vec<String> {
            self.calls().into_iter().map(|(c, _)| c).collect()
        }
    }

    #[async_trait]
    impl Gateway for ScriptedGateway {
        async fn invoke(&self, command: &str, args: Option<Value>) -> Result<Value, Error> {
            self.calls
                .lock()
                .unwrap()
                .push((command.to_owned(), args));
            let queued = self
                .delayed
                .lock()
                .unwrap()
                .get_mut(command)
                .and_then(VecDeque::pop_front);
            if let Some((delay, value)) = queued {
                tokio::time::sleep(delay).await;
                return Ok(value);
            }
            match self.replies.lock().unwrap().get(command) {
                Some(Reply::Value(v)) => Ok(v.clone()),
                Some(Reply::Reject(message)) => Err(Error::Rejected {
                    command: command.to_owned(),
                    status: Some(500),
                    message: message.clone(),
                }),
                None => Err(Error::UnknownCommand {
                    command: command.to_owned(),
                }),
            }
        }
    }

    pub(crate) fn settings() -> (Settings, Arc<ScriptedGateway>) {
        let gateway = Arc::new(ScriptedGateway::default());
        let config = SettingsConfig::new("http://127.0.0.1:7878".parse().unwrap());
        (Settings::with_gateway(config, gateway.clone()), gateway)
    }
}
