//! SnipStash Template Catalog
//!
//! Combines the read-only built-in snippets with the user's template store
//! and answers lookups over the union: by language, by category, and by
//! free-text search.
//!
//! # Examples
//!
//! ```ignore
//! use snipstash_catalog::TemplateCatalog;
//! use snipstash_templates::StoreConfig;
//!
//! let catalog = TemplateCatalog::open(StoreConfig::new("/tmp/snipstash")).await?;
//!
//! for entry in catalog.by_language("python") {
//!     println!("{} [{}]", entry.name(), entry.category());
//! }
//! ```

pub mod builtin;
pub mod catalog;
pub mod entry;
pub mod error;
pub mod query;

pub use builtin::BuiltinCatalog;
pub use catalog::TemplateCatalog;
pub use entry::{CatalogEntry, TemplateSource};
pub use error::{CatalogError, Result};
pub use query::TemplateView;
