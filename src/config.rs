//! Synchronization configuration: source language and the per-category
//! forced-translation registry.
//!
//! The engine never reads ambient state; everything mode-dependent is looked
//! up through a [`SyncConfig`] passed in by the caller.

use crate::error::SyncResult;
use crate::types::TranslationMode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Category entry under the `"*"` key acts as the wildcard default.
pub const WILDCARD_CATEGORY: &str = "*";

fn default_source_language() -> String {
    "en-US".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// The language whose text is the canonical row identity in
    /// source-keyed mode.
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Per-category settings, keyed by category name or `"*"`.
    #[serde(default)]
    pub categories: IndexMap<String, CategoryConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// `None` falls through to the wildcard entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_translation: Option<bool>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            categories: IndexMap::new(),
        }
    }
}

impl SyncConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> SyncResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Option<SyncConfig> = serde_yaml::from_str(&content)?;
        Ok(config.unwrap_or_default())
    }

    /// Whether a category uses forced translation.
    ///
    /// Lookup chain: the category's own entry, then the `"*"` wildcard
    /// entry, then `false`. An entry without a `force_translation` key falls
    /// through to the wildcard.
    pub fn is_forced(&self, category: &str) -> bool {
        self.categories
            .get(category)
            .and_then(|c| c.force_translation)
            .or_else(|| {
                self.categories
                    .get(WILDCARD_CATEGORY)
                    .and_then(|c| c.force_translation)
            })
            .unwrap_or(false)
    }

    pub fn mode_for(&self, category: &str) -> TranslationMode {
        TranslationMode::from_forced(self.is_forced(category))
    }
}
