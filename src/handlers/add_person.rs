//! Add-person handler.

use crate::AppHandler;
use crate::model::{Person, Tag, dedup_preserving_order};
use anyhow::Result;
use log::info;

impl AppHandler {
    /// Add a new person to the address book.
    ///
    /// Tag names are validated up front so a partially tagged person is
    /// never constructed; duplicate persons are rejected.
    pub fn handle_add_person(
        &mut self,
        name: String,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        tags: Vec<String>,
    ) -> Result<String> {
        let mut tags = tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<Result<Vec<Tag>>>()?;
        // A person's tags are a set; repeated inputs collapse to one.
        dedup_preserving_order(&mut tags);

        let person = Person {
            name,
            phone,
            email,
            address,
            tags,
        };
        let display = person.to_string();

        self.model.add_person(person)?;
        self.save_data()?;

        info!("added person {}", display);
        Ok(format!("New person added: {}", display))
    }
}
