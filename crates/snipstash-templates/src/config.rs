use std::path::PathBuf;

/// File name of the user collection inside the storage directory
pub const DEFAULT_TEMPLATES_FILE: &str = "user-templates.json";

/// Author recorded on templates created through the store
pub const DEFAULT_AUTHOR: &str = "User";

const DEFAULT_COLLECTION_NAME: &str = "Custom Templates";
const DEFAULT_COLLECTION_DESCRIPTION: &str = "User-defined snippets";
const DEFAULT_EXPORT_NAME: &str = "Exported Templates";
const DEFAULT_EXPORT_DESCRIPTION: &str = "Exported user-defined snippets";

/// Configuration for a [`TemplateStore`](crate::TemplateStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the collection file
    pub storage_dir: PathBuf,

    /// Collection file name inside `storage_dir`
    pub file_name: String,

    /// Author stamped on newly created templates
    pub author: String,

    /// Metadata name written to the store's own file
    pub collection_name: String,

    /// Metadata description written to the store's own file
    pub collection_description: Option<String>,

    /// Metadata name written to exported files
    pub export_name: String,

    /// Metadata description written to exported files
    pub export_description: Option<String>,
}

impl StoreConfig {
    /// Create a configuration rooted at `storage_dir` with default settings
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            file_name: DEFAULT_TEMPLATES_FILE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            collection_description: Some(DEFAULT_COLLECTION_DESCRIPTION.to_string()),
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            export_description: Some(DEFAULT_EXPORT_DESCRIPTION.to_string()),
        }
    }

    /// Set the collection file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Set the author for new templates
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the collection metadata name
    pub fn with_collection_name(mut self, name: impl Into<String>) -> Self {
        self.collection_name = name.into();
        self
    }

    /// Set the collection metadata description
    pub fn with_collection_description(mut self, description: impl Into<String>) -> Self {
        self.collection_description = Some(description.into());
        self
    }

    /// Full path of the collection file
    pub fn templates_path(&self) -> PathBuf {
        self.storage_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::new("/data/snipstash");
        assert_eq!(config.file_name, "user-templates.json");
        assert_eq!(config.author, "User");
        assert_eq!(
            config.templates_path(),
            PathBuf::from("/data/snipstash/user-templates.json")
        );
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new("/data")
            .with_file_name("mine.json")
            .with_author("ada")
            .with_collection_name("Ada's snippets")
            .with_collection_description("personal");

        assert_eq!(config.templates_path(), PathBuf::from("/data/mine.json"));
        assert_eq!(config.author, "ada");
        assert_eq!(config.collection_name, "Ada's snippets");
        assert_eq!(config.collection_description.as_deref(), Some("personal"));
    }
}
