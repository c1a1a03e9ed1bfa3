//! Add-event handler.

use crate::AppHandler;
use crate::model::Event;
use crate::validation;
use anyhow::Result;
use log::info;

impl AppHandler {
    /// Schedule a new event on the given `YYYY-MM-DD` date.
    pub fn handle_add_event(&mut self, name: &str, date: &str) -> Result<String> {
        let date = validation::parse_date(date)?;
        let event = Event::new(name, date);
        let display = event.to_string();

        self.model.add_event(event)?;
        self.save_data()?;

        info!("added event {}", display);
        Ok(format!("New event added: {}", display))
    }
}
