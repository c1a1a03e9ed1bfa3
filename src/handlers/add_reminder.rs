//! Add-reminder handler.

use crate::AppHandler;
use anyhow::{Result, bail};

impl AppHandler {
    /// Attach a reminder message to an existing event.
    pub fn handle_add_reminder(&mut self, event_name: &str, message: &str) -> Result<String> {
        if message.trim().is_empty() {
            bail!("Reminder message must not be empty");
        }

        let count = self.model.add_reminder(event_name, message)?;
        self.save_data()?;

        Ok(format!(
            "Reminder added to '{}' ({} reminder(s) total)",
            event_name, count
        ))
    }
}
