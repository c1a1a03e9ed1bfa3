//! Command handlers.
//!
//! One file per command kind; each contributes an `impl AppHandler` block
//! with a `handle_*` method following the same shape: validate input,
//! mutate the model, save a snapshot, return the feedback message.

pub mod add_event;
pub mod add_person;
pub mod add_reminder;
pub mod delete_event;
pub mod delete_person;
pub mod list;
pub mod remove_tag;
pub mod set_tag_color;
