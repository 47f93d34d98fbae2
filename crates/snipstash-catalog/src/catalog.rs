//! Merged view over built-in snippets and user templates

use crate::builtin::BuiltinCatalog;
use crate::entry::CatalogEntry;
use crate::error::Result;
use crate::query::TemplateView;
use snipstash_templates::{StoreConfig, TemplateStore};
use std::collections::BTreeSet;
use tracing::debug;

/// Built-in snippets plus the user's template store.
///
/// Every lookup lists built-ins first, in catalog order, followed by user
/// templates in store order. Results are fresh copies.
#[derive(Debug)]
pub struct TemplateCatalog {
    builtins: BuiltinCatalog,
    store: TemplateStore,
}

impl TemplateCatalog {
    pub fn new(builtins: BuiltinCatalog, store: TemplateStore) -> Self {
        Self { builtins, store }
    }

    /// Load the embedded built-ins and open the user store
    pub async fn open(config: StoreConfig) -> Result<Self> {
        let builtins = BuiltinCatalog::load()?;
        let store = TemplateStore::open(config).await;
        Ok(Self::new(builtins, store))
    }

    pub fn builtins(&self) -> &BuiltinCatalog {
        &self.builtins
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TemplateStore {
        &mut self.store
    }

    /// Every template, built-ins first
    pub fn all_templates(&self) -> Vec<CatalogEntry> {
        self.select(|_| true)
    }

    /// Templates for `language`, including language-agnostic ones
    pub fn by_language(&self, language: &str) -> Vec<CatalogEntry> {
        self.select(|t| t.matches_language(language))
    }

    pub fn by_category(&self, category: &str) -> Vec<CatalogEntry> {
        self.select(|t| t.matches_category(category))
    }

    /// Case-insensitive search over name, description, category and prefix
    pub fn search(&self, query: &str) -> Vec<CatalogEntry> {
        let query = query.to_lowercase();
        let results = self.select(|t| t.matches_query(&query));
        debug!("Search '{}' matched {} templates", query, results.len());
        results
    }

    /// First template with exactly this name, built-ins taking precedence
    pub fn by_name(&self, name: &str) -> Option<CatalogEntry> {
        self.builtins
            .get(name)
            .cloned()
            .map(CatalogEntry::Builtin)
            .or_else(|| {
                self.store
                    .find_by_name(name)
                    .cloned()
                    .map(CatalogEntry::User)
            })
    }

    /// Distinct categories in use, sorted
    pub fn all_categories(&self) -> Vec<String> {
        let categories: BTreeSet<&str> = self.views().map(|t| t.category()).collect();
        categories.into_iter().map(str::to_string).collect()
    }

    /// Distinct declared languages, sorted; templates without one add nothing
    pub fn all_languages(&self) -> Vec<String> {
        let languages: BTreeSet<&str> = self.views().filter_map(|t| t.language()).collect();
        languages.into_iter().map(str::to_string).collect()
    }

    fn views(&self) -> impl Iterator<Item = &dyn TemplateView> {
        let builtins = self.builtins.snippets().iter().map(|s| s as &dyn TemplateView);
        let user = self.store.templates().iter().map(|t| t as &dyn TemplateView);
        builtins.chain(user)
    }

    fn select<F>(&self, predicate: F) -> Vec<CatalogEntry>
    where
        F: Fn(&dyn TemplateView) -> bool,
    {
        let builtins = self
            .builtins
            .snippets()
            .iter()
            .filter(|s| predicate(*s as &dyn TemplateView))
            .cloned()
            .map(CatalogEntry::Builtin);
        let user = self
            .store
            .templates()
            .iter()
            .filter(|t| predicate(*t as &dyn TemplateView))
            .cloned()
            .map(CatalogEntry::User);
        builtins.chain(user).collect()
    }
}
