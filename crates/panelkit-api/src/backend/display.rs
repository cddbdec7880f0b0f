// Display commands

use serde_json::json;

use crate::backend::Backend;
use crate::error::Error;

impl Backend {
    /// Backlight level, 0-100.
    pub async fn brightness(&self) -> Result<u8, Error> {
        self.call("get_brightness", None).await
    }

    pub async fn set_brightness(&self, value: u8) -> Result<(), Error> {
        self.call_unit("set_brightness", Some(json!({ "value": value })))
            .await
    }
}
