//! Validation helpers shared by the command handlers.
//!
//! Date parsing and the richer "unknown tag" error message that lists
//! the tags currently known to the book.

use crate::model::AddressBook;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        anyhow!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2026-03-15')",
            date_str
        )
    })
}

/// Error message for a tag name the book does not know, including the
/// list of available tags so the user can correct the command.
pub fn format_unknown_tag_error(tag_name: &str, book: &AddressBook) -> String {
    if book.tags().is_empty() {
        format!(
            "Tag '{}' does not exist. No tags have been created yet.",
            tag_name
        )
    } else {
        let names: Vec<&str> = book.tags().iter().map(|t| t.name()).collect();
        format!(
            "Tag '{}' does not exist.\nAvailable tags: {}",
            tag_name,
            names.join(", ")
        )
    }
}
