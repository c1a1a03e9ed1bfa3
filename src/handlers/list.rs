//! Listing and filtering handlers.
//!
//! These replace the active filter on the model and render the resulting
//! view; the underlying book is never touched, so nothing is saved.

use crate::AppHandler;
use crate::formatting;
use crate::model::{EventFilter, PersonFilter, Tag};
use crate::validation;
use anyhow::{Result, bail};

impl AppHandler {
    /// Narrow the person view to names containing `keyword`
    /// (case-insensitive) and render it.
    pub fn handle_find_persons(&mut self, keyword: &str) -> Result<String> {
        if keyword.trim().is_empty() {
            bail!("Find keyword must not be empty");
        }
        self.model
            .update_person_filter(PersonFilter::NameContains(keyword.trim().to_string()));
        Ok(self.render_person_view())
    }

    /// Show all persons, or only those carrying the given tag.
    pub fn handle_list_persons(&mut self, tag_name: Option<&str>) -> Result<String> {
        let filter = match tag_name {
            None => PersonFilter::All,
            Some(name) => {
                let tag = Tag::new(name)?;
                if !self.model.has_tag(&tag) {
                    bail!(
                        "{}",
                        validation::format_unknown_tag_error(name, self.model.book())
                    );
                }
                PersonFilter::HasTag(tag)
            }
        };
        self.model.update_person_filter(filter);
        Ok(self.render_person_view())
    }

    /// Show all events, or only those on or before a `YYYY-MM-DD` date.
    pub fn handle_list_events(&mut self, on_or_before: Option<&str>) -> Result<String> {
        let filter = match on_or_before {
            None => EventFilter::All,
            Some(date_str) => EventFilter::OnOrBefore(validation::parse_date(date_str)?),
        };
        self.model.update_event_filter(filter);

        let events = self.model.filtered_events();
        let mut out = formatting::format_event_list_summary(events.len());
        for event in events {
            out.push('\n');
            out.push_str(&formatting::format_event_line(event));
        }
        Ok(out)
    }

    fn render_person_view(&self) -> String {
        let persons = self.model.filtered_persons();
        let mut out = formatting::format_person_list_summary(persons.len());
        for person in persons {
            out.push('\n');
            out.push_str(&formatting::format_person_line(person));
        }
        out
    }
}
