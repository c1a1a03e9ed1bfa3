//! Contact and event management core.
//!
//! This library implements the model layer of an address book application:
//! persons, scheduled events with reminders, validated tags with display
//! colors, and a command layer that executes one user operation at a time.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Command layer**: [`Command`] + `AppHandler` - one executed operation
//!   per command, returning a feedback string for the UI to display
//! - **Domain layer**: `model` module - the address book aggregate and the
//!   [`ModelManager`](model::ModelManager) facade with filtered views
//! - **Persistence layer**: `storage` module - TOML snapshots on disk
//!
//! # Example
//!
//! ```no_run
//! use rolodex::{AppHandler, Command};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut handler = AppHandler::new("addressbook.toml")?;
//!     let result = Command::AddPerson {
//!         name: "Alice Pauline".to_string(),
//!         phone: None,
//!         email: None,
//!         address: None,
//!         tags: vec!["friends".to_string()],
//!     }
//!     .execute(&mut handler)?;
//!     println!("{}", result.feedback);
//!     Ok(())
//! }
//! ```

mod command;
pub mod formatting;
mod handlers;
pub mod model;
mod storage;
pub mod validation;

use anyhow::Result;

pub use command::{Command, CommandResult};
pub use model::{
    AddressBook, Event, EventFilter, ModelManager, Person, PersonFilter, Reminder, Tag,
    TagColorRegistry, UserPrefs,
};
pub use storage::{AddressBookFile, Storage};

/// Application handler owning the model and its persistence.
///
/// Commands execute against this: each `handle_*` method (one per command
/// kind, under `handlers/`) validates its input, mutates the model, saves
/// a snapshot and returns the feedback message.
pub struct AppHandler {
    pub(crate) model: ModelManager,
    pub(crate) storage: Storage,
}

impl AppHandler {
    /// Load the snapshot at `storage_path` (or start empty) and build the
    /// handler around it.
    pub fn new(storage_path: impl AsRef<std::path::Path>) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let file = storage.load()?;
        let model = ModelManager::new(file.book, file.tag_colors, UserPrefs::default());
        Ok(Self { model, storage })
    }

    /// The model facade, for read access by callers and tests.
    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    /// Persist the current model state to disk.
    pub(crate) fn save_data(&self) -> Result<()> {
        self.storage
            .save(self.model.book(), self.model.colors())
    }
}
