//! Delete-event handler.

use crate::AppHandler;
use anyhow::{Result, bail};
use log::info;

impl AppHandler {
    /// Delete the event with the given name, reminders included.
    pub fn handle_delete_event(&mut self, name: &str) -> Result<String> {
        let Some(event) = self.model.book().find_event_by_name(name).cloned() else {
            bail!("Event '{}' not found in the address book", name);
        };

        self.model.delete_event(&event)?;
        self.save_data()?;

        info!("deleted event {}", event.name);
        Ok(format!("Deleted event: {}", event))
    }
}
