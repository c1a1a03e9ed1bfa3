//! Delete-person handler.

use crate::AppHandler;
use anyhow::{Result, bail};
use log::info;

impl AppHandler {
    /// Delete the person with the given name.
    pub fn handle_delete_person(&mut self, name: &str) -> Result<String> {
        let Some(person) = self.model.book().find_person_by_name(name).cloned() else {
            bail!("Person '{}' not found in the address book", name);
        };

        self.model.delete_person(&person)?;
        self.save_data()?;

        info!("deleted person {}", person.name);
        Ok(format!("Deleted person: {}", person))
    }
}
