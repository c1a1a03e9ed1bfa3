use crate::model::{AddressBook, TagColorRegistry};
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk snapshot: the address book plus the tag color registry, so
/// explicit colors survive restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressBookFile {
    #[serde(flatten)]
    pub book: AddressBook,
    #[serde(skip_serializing_if = "TagColorRegistry::is_empty")]
    pub tag_colors: TagColorRegistry,
}

/// TOML file persistence for address book snapshots.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the snapshot; a missing file yields an empty book.
    pub fn load(&self) -> Result<AddressBookFile> {
        if !self.file_path.exists() {
            debug!("{} does not exist, starting empty", self.file_path.display());
            return Ok(AddressBookFile::default());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("reading {}", self.file_path.display()))?;
        let file: AddressBookFile = toml::from_str(&content)
            .with_context(|| format!("parsing {}", self.file_path.display()))?;
        debug!(
            "loaded {} person(s), {} event(s) from {}",
            file.book.persons().len(),
            file.book.events().len(),
            self.file_path.display()
        );
        Ok(file)
    }

    /// Write the full snapshot, replacing the previous file.
    pub fn save(&self, book: &AddressBook, tag_colors: &TagColorRegistry) -> Result<()> {
        let file = AddressBookFile {
            book: book.clone(),
            tag_colors: tag_colors.clone(),
        };
        let content = toml::to_string_pretty(&file).context("serializing address book")?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("writing {}", self.file_path.display()))?;
        debug!("saved snapshot to {}", self.file_path.display());
        Ok(())
    }
}
