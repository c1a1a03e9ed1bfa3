use crate::model::{Event, Person, Tag};
use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate store of persons, events and tags for one user session.
///
/// Persons and tags keep insertion order; events are kept sorted by their
/// canonical `(date, name)` key at all times. Vec is the primary storage:
/// it preserves order for display and produces stable TOML diffs, and at
/// address-book scale linear scans are cheaper than maintaining an index.
///
/// Duplicates (by equality) are rejected on insertion, so equality of two
/// books is plain element-wise equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddressBook {
    // Serialized first: TOML wants plain values ahead of the person and
    // event tables.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    persons: Vec<Person>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<Event>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Add a person and register any new tags it carries.
    ///
    /// Returns false when an equal person is already present.
    pub fn add_person(&mut self, person: Person) -> bool {
        if self.persons.contains(&person) {
            return false;
        }
        for tag in &person.tags {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
        self.persons.push(person);
        true
    }

    /// Remove the first person equal to `person`. Returns the removed
    /// person if found.
    pub fn remove_person(&mut self, person: &Person) -> Option<Person> {
        let pos = self.persons.iter().position(|p| p == person)?;
        Some(self.persons.remove(pos))
    }

    pub fn find_person_by_name(&self, name: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.name == name)
    }

    /// Insert an event at its canonical position.
    ///
    /// Returns false when an equal event is already present.
    pub fn add_event(&mut self, event: Event) -> bool {
        if self.events.contains(&event) {
            return false;
        }
        let pos = self
            .events
            .partition_point(|e| e.sort_key() <= event.sort_key());
        self.events.insert(pos, event);
        true
    }

    pub fn remove_event(&mut self, event: &Event) -> Option<Event> {
        let pos = self.events.iter().position(|e| e == event)?;
        Some(self.events.remove(pos))
    }

    pub fn find_event_by_name(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.name == name)
    }

    pub fn find_event_by_name_mut(&mut self, name: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.name == name)
    }

    /// Register a tag in the master list. Returns false when already known.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a tag from the master list and from every person carrying it.
    ///
    /// Returns false when the master list never held the tag.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        let Some(pos) = self.tags.iter().position(|t| t == tag) else {
            return false;
        };
        self.tags.remove(pos);
        for person in &mut self.persons {
            person.tags.retain(|t| t != tag);
        }
        true
    }

    /// Restore invariants after deserialization: canonical event order and
    /// no duplicates anywhere.
    fn canonicalize(&mut self) {
        self.events.sort();
        dedup_preserving_order(&mut self.persons);
        dedup_preserving_order(&mut self.events);
        dedup_preserving_order(&mut self.tags);
    }
}

pub(crate) fn dedup_preserving_order<T: PartialEq>(items: &mut Vec<T>) {
    let mut kept: Vec<T> = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    *items = kept;
}

// Deserialization goes through a plain helper struct and then rebuilds the
// derived state, the same way the data container re-indexes itself on load.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct Repr {
            tags: Vec<Tag>,
            persons: Vec<Person>,
            events: Vec<Event>,
        }

        let repr = Repr::deserialize(deserializer)?;
        let mut book = AddressBook {
            tags: repr.tags,
            persons: repr.persons,
            events: repr.events,
        };
        book.canonicalize();
        Ok(book)
    }
}
