//! Domain models and business logic.
//!
//! Split into submodules:
//! - `tag`: validated immutable tag value object
//! - `colors`: tag display color registry
//! - `person`, `event`, `reminder`: the record types
//! - `address_book`: the aggregate root
//! - `manager`: the model facade with filtered views

mod address_book;
mod colors;
mod event;
mod manager;
mod person;
mod reminder;
mod tag;

pub use address_book::AddressBook;
pub(crate) use address_book::dedup_preserving_order;
pub use colors::TagColorRegistry;
pub use event::Event;
pub use manager::{EventFilter, ModelManager, PersonFilter, UserPrefs};
pub use person::Person;
pub use reminder::Reminder;
pub use tag::{Tag, is_valid_tag_name};
