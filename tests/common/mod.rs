//! Common test utilities for integration tests.

use chrono::NaiveDate;
use rolodex::{AddressBook, AppHandler, Event, Person, Tag};
use tempfile::NamedTempFile;

/// Create a test handler backed by temporary storage.
pub fn get_test_handler() -> (AppHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = AppHandler::new(temp_file.path()).unwrap();
    (handler, temp_file)
}

pub fn tag(name: &str) -> Tag {
    Tag::new(name).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a test person with contact details and tags.
pub fn person(name: &str, tags: &[&str]) -> Person {
    Person {
        name: name.to_string(),
        phone: Some("95352563".to_string()),
        email: Some(format!(
            "{}@example.com",
            name.split_whitespace().next().unwrap().to_lowercase()
        )),
        address: Some("311, Clementi Ave 2".to_string()),
        tags: tags.iter().map(|t| tag(t)).collect(),
    }
}

pub fn event(name: &str, y: i32, m: u32, d: u32) -> Event {
    Event::new(name, date(y, m, d))
}

/// The typical six-person seed book used by scenario tests.
pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_person(person("Alice Pauline", &["friends"]));
    book.add_person(person("Benson Meier", &["owesMoney", "friends"]));
    book.add_person(person("Carl Kurz", &[]));
    book.add_person(person("Daniel Meier", &[]));
    book.add_person(person("Elle Meyer", &[]));
    book.add_person(person("Fiona Kunz", &[]));
    book
}
