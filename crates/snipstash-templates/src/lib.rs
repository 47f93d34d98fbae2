//! SnipStash User Template Store
//!
//! This crate owns the collection of user-authored templates: it loads the
//! collection file from the storage directory, validates and applies
//! mutations (create, edit, delete, import), and rewrites the file after
//! every change.
//!
//! # Examples
//!
//! ```ignore
//! use snipstash_templates::{StoreConfig, TemplateFields, TemplateStore};
//!
//! let mut store = TemplateStore::open(StoreConfig::new("/tmp/snipstash")).await;
//!
//! let template = store
//!     .create(
//!         TemplateFields::new("log-value", "println!(\"{:?}\", ${1:value});", "Debug")
//!             .with_language("rust")
//!             .with_prefix("lv"),
//!     )
//!     .await?;
//!
//! store.delete(&template.id).await?;
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod id;
pub mod import;
pub mod store;
pub mod types;

pub use config::{StoreConfig, DEFAULT_AUTHOR, DEFAULT_TEMPLATES_FILE};
pub use error::{IoOperation, IoTarget, Result, TemplateError};
pub use id::generate_template_id;
pub use store::TemplateStore;
pub use types::{
    CollectionFile, CollectionMetadata, ExportSummary, ImportSummary, LoadOutcome, Snippet,
    TemplateFields, TemplateStats, UserTemplate, COLLECTION_FORMAT_VERSION, SUGGESTED_CATEGORIES,
    SUGGESTED_LANGUAGES, UNSPECIFIED_LANGUAGE,
};
