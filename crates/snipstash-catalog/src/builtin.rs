//! The built-in snippet catalog shipped with SnipStash

use crate::error::{CatalogError, Result};
use snipstash_templates::Snippet;
use std::collections::HashSet;
use tracing::debug;

/// Built-in snippets, embedded at compile time
const BUILTIN_SNIPPETS: &str = include_str!("../builtin/snippets.json");

/// Fixed, ordered, read-only set of snippets
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalog {
    snippets: Vec<Snippet>,
}

impl BuiltinCatalog {
    /// Load the embedded catalog
    pub fn load() -> Result<Self> {
        let snippets: Vec<Snippet> = serde_json::from_str(BUILTIN_SNIPPETS)?;
        let catalog = Self::from_snippets(snippets)?;
        debug!("Loaded {} built-in snippets", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from explicit snippets; names must be unique since
    /// they are the built-in identity
    pub fn from_snippets(snippets: Vec<Snippet>) -> Result<Self> {
        let mut names = HashSet::new();
        for snippet in &snippets {
            if !names.insert(snippet.name.as_str()) {
                return Err(CatalogError::DuplicateBuiltin(snippet.name.clone()));
            }
        }
        Ok(Self { snippets })
    }

    /// Catalog with no snippets
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snippets in catalog order
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Get a snippet by name
    pub fn get(&self, name: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}
