use crate::model::Tag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact entry: a name, optional contact details and a set of tags.
///
/// Only tag names carry a validation rule in this slice; the contact
/// fields are free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: None,
            email: None,
            address: None,
            tags: Vec::new(),
        }
    }
}

impl Person {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_tags(name: &str, tags: Vec<Tag>) -> Self {
        Self {
            name: name.to_string(),
            tags,
            ..Default::default()
        }
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for tag in &self.tags {
            write!(f, " {}", tag)?;
        }
        Ok(())
    }
}
