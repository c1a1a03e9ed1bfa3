//! Command dispatch.
//!
//! One user-requested operation is one [`Command`] value. Each variant
//! carries exactly the data its execution needs; there is no late
//! dependency injection. `execute` consumes the command, so a command
//! value runs at most once by construction.

use crate::AppHandler;
use anyhow::Result;

/// The state a finished command hands back for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Human-readable summary of what the command did.
    pub feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

/// One user-requested operation, already parsed and validated in shape.
///
/// The surrounding UI (or the CLI in `main.rs`) is responsible for turning
/// raw input into one of these; syntax errors never reach `execute`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddPerson {
        name: String,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        tags: Vec<String>,
    },
    DeletePerson {
        name: String,
    },
    AddEvent {
        name: String,
        date: String,
    },
    DeleteEvent {
        name: String,
    },
    AddReminder {
        event: String,
        message: String,
    },
    RemoveTag {
        tag: String,
    },
    SetTagColor {
        tag: String,
        color: String,
    },
    /// Narrow the person view to names containing a keyword.
    FindPersons {
        keyword: String,
    },
    /// Show all persons, or only those carrying a tag.
    ListPersons {
        tag: Option<String>,
    },
    /// Show all events, or only those on or before a date.
    ListEvents {
        on_or_before: Option<String>,
    },
}

impl Command {
    /// Execute the command against the handler exactly once.
    ///
    /// Returns the feedback for display, or a descriptive error when the
    /// operation cannot be carried out (unknown name, duplicate entry,
    /// invalid date or color).
    pub fn execute(self, handler: &mut AppHandler) -> Result<CommandResult> {
        let feedback = match self {
            Command::AddPerson {
                name,
                phone,
                email,
                address,
                tags,
            } => handler.handle_add_person(name, phone, email, address, tags)?,
            Command::DeletePerson { name } => handler.handle_delete_person(&name)?,
            Command::AddEvent { name, date } => handler.handle_add_event(&name, &date)?,
            Command::DeleteEvent { name } => handler.handle_delete_event(&name)?,
            Command::AddReminder { event, message } => {
                handler.handle_add_reminder(&event, &message)?
            }
            Command::RemoveTag { tag } => handler.handle_remove_tag(&tag)?,
            Command::SetTagColor { tag, color } => handler.handle_set_tag_color(&tag, &color)?,
            Command::FindPersons { keyword } => handler.handle_find_persons(&keyword)?,
            Command::ListPersons { tag } => handler.handle_list_persons(tag.as_deref())?,
            Command::ListEvents { on_or_before } => {
                handler.handle_list_events(on_or_before.as_deref())?
            }
        };
        Ok(CommandResult::new(feedback))
    }
}
