use anyhow::{Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TAG_NAME_CONSTRAINT: &str = "Tag names should be alphanumeric";

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag name regex"));

/// An immutable named label attachable to a person or event.
///
/// The name is trimmed and validated at construction and never changes
/// afterwards. Equality and hashing depend solely on the name; display
/// colors live in [`TagColorRegistry`](crate::model::TagColorRegistry),
/// not in the tag itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Validate `name` (after trimming) and build the tag.
    pub fn new(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if !is_valid_tag_name(trimmed) {
            bail!("{}: got '{}'", TAG_NAME_CONSTRAINT, name);
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Returns true if the given string is a valid tag name.
pub fn is_valid_tag_name(name: &str) -> bool {
    TAG_NAME_RE.is_match(name)
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

impl TryFrom<String> for Tag {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Tag::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.name
    }
}
