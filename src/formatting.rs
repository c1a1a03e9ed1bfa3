//! Formatting helpers for command feedback strings.

use crate::model::{Event, Person};

/// One line per person: name, contact details, tags.
pub fn format_person_line(person: &Person) -> String {
    let mut line = format!("- {}", person.name);
    if let Some(ref phone) = person.phone {
        line.push_str(&format!(" | phone: {}", phone));
    }
    if let Some(ref email) = person.email {
        line.push_str(&format!(" | email: {}", email));
    }
    if let Some(ref address) = person.address {
        line.push_str(&format!(" | address: {}", address));
    }
    if !person.tags.is_empty() {
        let tags: Vec<String> = person.tags.iter().map(|t| t.to_string()).collect();
        line.push_str(&format!(" | tags: {}", tags.join(" ")));
    }
    line
}

/// One line per event: name, date, reminder count.
pub fn format_event_line(event: &Event) -> String {
    let mut line = format!("- {} ({})", event.name, event.date);
    match event.reminders().len() {
        0 => {}
        1 => line.push_str(" | 1 reminder"),
        n => line.push_str(&format!(" | {} reminders", n)),
    }
    line
}

/// Summary for a person listing, matching the listed count.
pub fn format_person_list_summary(display_size: usize) -> String {
    format!("{} person(s) listed", display_size)
}

/// Summary for an event listing, matching the listed count.
pub fn format_event_list_summary(display_size: usize) -> String {
    format!("{} event(s) listed", display_size)
}
