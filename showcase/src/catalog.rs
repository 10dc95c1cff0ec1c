//! Video entries and the ordered catalog the hero banner presents.
//!
//! A [`Catalog`] is only constructed through [`Catalog::new`], which enforces
//! the invariants every consumer relies on: at least one entry, unique ids,
//! a playable media url per entry, and a selectable first entry (the default
//! current entry).

#[cfg(test)]
#[path = "catalog_test.rs"]
pub(crate) mod catalog_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One promotable video.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: EntryId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Playable video resource.
    pub media_url: String,
    /// Static preview image. Carried for completeness; cards render the
    /// looping video itself.
    pub thumbnail_url: String,
    /// Display string such as `"1.2M"`.
    pub view_count: String,
    #[serde(default)]
    pub badge: Option<String>,
    /// Restricted entries are listed as "coming soon" and cannot be selected.
    #[serde(default)]
    pub restricted: bool,
}

impl VideoEntry {
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.restricted
    }
}

/// Errors produced while validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no entries")]
    Empty,

    #[error("duplicate catalog id: {0}")]
    DuplicateId(EntryId),

    #[error("catalog entry {0} has no media url")]
    MissingMediaUrl(EntryId),

    /// The first entry becomes the current entry on mount, so it must be selectable.
    #[error("default catalog entry {0} is restricted")]
    RestrictedDefault(EntryId),
}

/// Ordered, validated collection of video entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    entries: Vec<VideoEntry>,
}

impl Catalog {
    /// Validate `entries` and build a catalog preserving their order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the list is empty, an id repeats, an
    /// entry lacks a media url, or the first entry is restricted.
    pub fn new(entries: Vec<VideoEntry>) -> Result<Self, CatalogError> {
        let Some(first) = entries.first() else {
            return Err(CatalogError::Empty);
        };
        if first.restricted {
            return Err(CatalogError::RestrictedDefault(first.id.clone()));
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(&entry.id) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
            if entry.media_url.trim().is_empty() {
                return Err(CatalogError::MissingMediaUrl(entry.id.clone()));
            }
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry bound to the primary player on mount.
    #[must_use]
    pub fn default_entry(&self) -> &VideoEntry {
        &self.entries[0]
    }

    #[must_use]
    pub fn get(&self, id: &EntryId) -> Option<&VideoEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }
}
