use serde::{Deserialize, Serialize};
use std::fmt;

/// A reminder message attached to an event.
///
/// The event exclusively owns its reminders; `event_name` is kept as plain
/// data so a reminder can name its owner when rendered on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub event_name: String,
    pub message: String,
}

impl Reminder {
    pub fn new(event_name: &str, message: &str) -> Self {
        Self {
            event_name: event_name.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.event_name, self.message)
    }
}
