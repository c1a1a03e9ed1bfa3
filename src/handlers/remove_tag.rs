//! Remove-tag handler.

use crate::AppHandler;
use crate::model::Tag;
use crate::validation;
use anyhow::{Result, bail};
use log::info;

impl AppHandler {
    /// Remove a tag from the book and from every person carrying it.
    ///
    /// The tag's color entry stays in the registry so re-adding the tag
    /// later restores its color.
    pub fn handle_remove_tag(&mut self, tag_name: &str) -> Result<String> {
        let tag = Tag::new(tag_name)?;
        if !self.model.has_tag(&tag) {
            bail!(
                "{}",
                validation::format_unknown_tag_error(tag_name, self.model.book())
            );
        }

        self.model.remove_tag(&tag)?;
        self.save_data()?;

        info!("removed tag {}", tag);
        Ok(format!("Removed tag {} from the address book", tag))
    }
}
