// ── Battery and power profile service ──

use super::{check_not_blank, remote_failure};
use crate::error::CoreError;
use crate::settings::Settings;

impl Settings {
    /// Remaining charge, 0-100.
    pub async fn fetch_battery_percentage(&self) -> Result<f64, CoreError> {
        let percentage = self
            .backend()
            .battery_percentage()
            .await
            .map_err(remote_failure("fetch_battery_percentage"))?;
        self.publish_battery_percentage(percentage);
        Ok(percentage)
    }

    pub async fn fetch_performance_modes(&self) -> Result<Vec<String>, CoreError> {
        let modes = self
            .backend()
            .performance_modes()
            .await
            .map_err(remote_failure("fetch_performance_modes"))?;
        self.publish_performance_modes(modes.clone());
        Ok(modes)
    }

    pub async fn fetch_performance_mode(&self) -> Result<String, CoreError> {
        let mode = self
            .backend()
            .current_performance_mode()
            .await
            .map_err(remote_failure("fetch_performance_mode"))?;
        self.publish_performance_mode(mode.clone());
        Ok(mode)
    }

    pub async fn set_performance_mode(&self, mode: &str) -> Result<(), CoreError> {
        check_not_blank("performance mode", mode)?;
        self.backend()
            .set_performance_mode(mode)
            .await
            .map_err(remote_failure("set_performance_mode"))?;
        self.publish_performance_mode(mode.to_owned());
        Ok(())
    }

    // ── Writers ──────────────────────────────────────────────────────

    fn publish_battery_percentage(&self, percentage: f64) {
        self.store().battery_percentage.set(Some(percentage));
    }

    fn publish_performance_modes(&self, modes: Vec<String>) {
        self.store().performance_modes.set(modes);
    }

    fn publish_performance_mode(&self, mode: String) {
        self.store().performance_mode.set(Some(mode));
    }
}
