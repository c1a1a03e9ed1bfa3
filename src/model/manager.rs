//! Facade over the in-memory address book.
//!
//! `ModelManager` wraps the [`AddressBook`] together with the tag color
//! registry, user preferences and one filter per list. Filtered views are
//! computed on read from the live book and the current filter, so they
//! always reflect both. Mutations change the book by exactly one element
//! and re-register colors for any tags they introduce.

use crate::model::{AddressBook, Event, Person, Tag, TagColorRegistry};
use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cosmetic, non-content user preferences. Never part of model equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    pub address_book_name: String,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            address_book_name: "MyAddressBook".to_string(),
        }
    }
}

/// Predicate over persons, as a closed set of filter kinds.
///
/// A closed enum instead of boxed closures keeps filters cloneable and
/// debuggable, and lets tests state exactly which filter is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PersonFilter {
    #[default]
    All,
    NameContains(String),
    HasTag(Tag),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::NameContains(keyword) => person
                .name
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
            PersonFilter::HasTag(tag) => person.has_tag(tag),
        }
    }
}

/// Predicate over events, as a closed set of filter kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EventFilter {
    #[default]
    All,
    NameContains(String),
    OnOrBefore(NaiveDate),
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::NameContains(keyword) => {
                event.name.to_lowercase().contains(&keyword.to_lowercase())
            }
            EventFilter::OnOrBefore(date) => event.date <= *date,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    book: AddressBook,
    colors: TagColorRegistry,
    prefs: UserPrefs,
    person_filter: PersonFilter,
    event_filter: EventFilter,
}

impl ModelManager {
    /// Build a manager over an existing book, registry and preferences.
    ///
    /// Every tag reachable from the book is guaranteed a color entry from
    /// here on; filters start at show-all.
    pub fn new(book: AddressBook, colors: TagColorRegistry, prefs: UserPrefs) -> Self {
        let mut manager = Self {
            book,
            colors,
            prefs,
            person_filter: PersonFilter::All,
            event_filter: EventFilter::All,
        };
        manager.ensure_book_colors();
        manager
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn colors(&self) -> &TagColorRegistry {
        &self.colors
    }

    pub fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    /// Membership check by tag value equality.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.book.has_tag(tag)
    }

    pub fn add_person(&mut self, person: Person) -> Result<()> {
        let name = person.name.clone();
        if !self.book.add_person(person) {
            bail!("Person '{}' already exists in the address book", name);
        }
        self.ensure_book_colors();
        Ok(())
    }

    pub fn delete_person(&mut self, person: &Person) -> Result<()> {
        if self.book.remove_person(person).is_none() {
            bail!("Person '{}' not found in the address book", person.name);
        }
        Ok(())
    }

    pub fn add_event(&mut self, event: Event) -> Result<()> {
        let name = event.name.clone();
        if !self.book.add_event(event) {
            bail!("Event '{}' already exists in the address book", name);
        }
        Ok(())
    }

    pub fn delete_event(&mut self, event: &Event) -> Result<()> {
        if self.book.remove_event(event).is_none() {
            bail!("Event '{}' not found in the address book", event.name);
        }
        Ok(())
    }

    /// Attach a reminder to the named event. Returns the event's new
    /// reminder count.
    pub fn add_reminder(&mut self, event_name: &str, message: &str) -> Result<usize> {
        let Some(event) = self.book.find_event_by_name_mut(event_name) else {
            bail!("Event '{}' not found in the address book", event_name);
        };
        event.add_reminder(message);
        Ok(event.reminders().len())
    }

    pub fn add_tag(&mut self, tag: Tag) -> Result<()> {
        let display = tag.to_string();
        if !self.book.add_tag(tag) {
            bail!("Tag {} already exists in the address book", display);
        }
        self.ensure_book_colors();
        Ok(())
    }

    /// Remove a tag from the book and from every person carrying it.
    /// The color registry entry is deliberately left in place.
    pub fn remove_tag(&mut self, tag: &Tag) -> Result<()> {
        if !self.book.remove_tag(tag) {
            bail!("Tag {} not found in the address book", tag);
        }
        Ok(())
    }

    /// Set an explicit display color for a tag. Delegates straight to the
    /// registry; the tag need not be in the book.
    pub fn set_tag_color(&mut self, tag: &Tag, color: &str) -> Result<()> {
        self.colors.set_color(tag, color)
    }

    pub fn tag_color(&self, tag: &Tag) -> Option<&str> {
        self.colors.color(tag)
    }

    /// The persons currently selected by the active person filter, in
    /// book order. The borrow makes the view read-only by construction.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.book
            .persons()
            .iter()
            .filter(|p| self.person_filter.matches(p))
            .collect()
    }

    /// The events currently selected by the active event filter, in
    /// canonical order.
    pub fn filtered_events(&self) -> Vec<&Event> {
        self.book
            .events()
            .iter()
            .filter(|e| self.event_filter.matches(e))
            .collect()
    }

    /// Replace the active person filter. Affects subsequent reads only.
    pub fn update_person_filter(&mut self, filter: PersonFilter) {
        self.person_filter = filter;
    }

    /// Replace the active event filter. Affects subsequent reads only.
    pub fn update_event_filter(&mut self, filter: EventFilter) {
        self.event_filter = filter;
    }

    /// Register a default color for every tag reachable from the book:
    /// the master tag list plus each person's tags.
    fn ensure_book_colors(&mut self) {
        for tag in self.book.tags() {
            self.colors.ensure_color(tag);
        }
        // Person tags are registered into the master list on insertion,
        // but a deserialized book may carry tags only on persons.
        let person_tags: Vec<Tag> = self
            .book
            .persons()
            .iter()
            .flat_map(|p| p.tags.iter().cloned())
            .collect();
        for tag in &person_tags {
            self.colors.ensure_color(tag);
        }
    }
}

/// Two managers are equal iff their books are equal and their current
/// filters select the same elements. Preferences and registry contents
/// are cosmetic and excluded.
impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.book == other.book
            && self.filtered_persons() == other.filtered_persons()
            && self.filtered_events() == other.filtered_events()
    }
}
