// Battery and power profile commands

use serde_json::json;

use crate::backend::Backend;
use crate::error::Error;

impl Backend {
    /// Remaining charge, 0-100.
    pub async fn battery_percentage(&self) -> Result<f64, Error> {
        self.call("get_battery_percentage", None).await
    }

    /// Performance modes the power daemon supports.
    ///
    /// The command name is misspelled on the daemon side and must stay so.
    pub async fn performance_modes(&self) -> Result<Vec<String>, Error> {
        self.call("get_avilable_performance_modes", None).await
    }

    pub async fn current_performance_mode(&self) -> Result<String, Error> {
        self.call("get_current_performance_mode", None).await
    }

    pub async fn set_performance_mode(&self, mode: &str) -> Result<(), Error> {
        self.call_unit("set_performance_mode", Some(json!({ "value": mode })))
            .await
    }
}
