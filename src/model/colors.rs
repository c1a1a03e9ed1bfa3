//! Display colors for tags.
//!
//! The registry is an explicit service owned by the model, not a process
//! global: anything that needs to assign or look up a tag color goes
//! through a `TagColorRegistry` handed to it. Default colors are derived
//! deterministically from the tag name, so two registries that saw the
//! same tags hold identical entries.

use crate::model::Tag;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Mapping from tag name to a `#rrggbb` display color.
///
/// Entries are created lazily and never pruned: removing a tag from the
/// address book leaves its color behind, so re-adding the tag restores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagColorRegistry {
    colors: BTreeMap<String, String>,
}

impl TagColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presence check by tag name.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.colors.contains_key(tag.name())
    }

    /// Assign the deterministic default color when the tag has no entry
    /// yet. An existing entry, default or explicit, is left untouched.
    pub fn ensure_color(&mut self, tag: &Tag) {
        if !self.colors.contains_key(tag.name()) {
            self.colors
                .insert(tag.name().to_string(), default_color(tag.name()));
        }
    }

    /// Set an explicit color, overwriting any previous entry.
    ///
    /// The color string is validated and normalized to `#rrggbb` form;
    /// any CSS color syntax is accepted (named colors, hex, rgb()).
    pub fn set_color(&mut self, tag: &Tag, color: &str) -> Result<()> {
        let parsed = csscolorparser::parse(color)
            .with_context(|| format!("Invalid color '{}' for tag {}", color, tag))?;
        self.colors
            .insert(tag.name().to_string(), parsed.to_hex_string());
        Ok(())
    }

    /// Look up the color for a tag, if one has been registered.
    pub fn color(&self, tag: &Tag) -> Option<&str> {
        self.colors.get(tag.name()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Derive a stable, reasonably saturated color from a tag name.
fn default_color(name: &str) -> String {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    name.hash(&mut hasher);
    let hash = hasher.finish();

    // Hue 0-360, saturation 40-90%, lightness 65-90%.
    let h = (hash % 360) as f32;
    let s = 0.40 + (((hash >> 16) % 51) as f32 / 100.0);
    let l = 0.65 + (((hash >> 32) % 26) as f32 / 100.0);

    let (r, g, b) = hsl_to_rgb(h, s, l);
    format!(
        "#{:02x}{:02x}{:02x}",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8
    )
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r1 + m, g1 + m, b1 + m)
}
