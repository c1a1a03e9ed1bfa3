use crate::model::Reminder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A scheduled event with an ordered list of reminders.
///
/// Events have a canonical order of `(date, name)`; the address book keeps
/// its event collection sorted by it so that two books built by adding the
/// same events in different orders compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub name: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reminders: Vec<Reminder>,
}

impl Event {
    pub fn new(name: &str, date: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            date,
            reminders: Vec::new(),
        }
    }

    /// Append a reminder owned by this event.
    pub fn add_reminder(&mut self, message: &str) {
        self.reminders.push(Reminder::new(&self.name, message));
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// The canonical sort key used by the address book.
    pub fn sort_key(&self) -> (NaiveDate, &str) {
        (self.date, &self.name)
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date)
    }
}
