//! Set-tag-color handler.

use crate::AppHandler;
use crate::model::Tag;
use crate::validation;
use anyhow::{Result, bail};

impl AppHandler {
    /// Set an explicit display color for a tag known to the book.
    ///
    /// Any CSS color syntax is accepted; the stored value is normalized
    /// to `#rrggbb` form.
    pub fn handle_set_tag_color(&mut self, tag_name: &str, color: &str) -> Result<String> {
        let tag = Tag::new(tag_name)?;
        if !self.model.has_tag(&tag) {
            bail!(
                "{}",
                validation::format_unknown_tag_error(tag_name, self.model.book())
            );
        }

        self.model.set_tag_color(&tag, color)?;
        self.save_data()?;

        // set_tag_color just stored a normalized entry for this tag.
        let stored = self.model.tag_color(&tag).unwrap_or_default().to_string();
        Ok(format!("Color of tag {} set to {}", tag, stored))
    }
}
