use crate::error::{Result, TemplateError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Version string written into every collection file
pub const COLLECTION_FORMAT_VERSION: &str = "1.0.0";

/// Stats bucket for templates without a language
pub const UNSPECIFIED_LANGUAGE: &str = "unspecified";

/// Categories offered by pickers; any other string is also accepted
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Custom",
    "Functions",
    "Classes",
    "Debug",
    "Loops",
    "Conditionals",
    "Other",
];

/// Languages offered by pickers; any other string is also accepted
pub const SUGGESTED_LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "html",
    "css",
    "python",
    "java",
    "csharp",
];

/// A read-only template as shipped in the built-in catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Display name, also the identity within the catalog
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Template body, placeholder markup included
    pub content: String,

    /// Language tag; `None` applies to every language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Open-vocabulary category
    pub category: String,

    /// Autocomplete trigger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// A user-authored template owned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTemplate {
    /// Store-assigned identifier
    pub id: String,

    /// Display name, unique within the user collection
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Template body, placeholder markup included
    pub content: String,

    /// Language tag; `None` applies to every language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Open-vocabulary category
    pub category: String,

    /// Autocomplete trigger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Who created the template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Last modification time, never earlier than `created_at`
    pub updated_at: DateTime<Utc>,
}

impl UserTemplate {
    /// Build a template from validated fields
    pub(crate) fn from_fields(
        id: String,
        fields: TemplateFields,
        author: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            content: fields.content,
            language: fields.language,
            category: fields.category,
            prefix: fields.prefix,
            author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields and refresh `updated_at`
    pub(crate) fn apply(&mut self, fields: TemplateFields, now: DateTime<Utc>) {
        self.name = fields.name;
        self.description = fields.description;
        self.content = fields.content;
        self.language = fields.language;
        self.category = fields.category;
        self.prefix = fields.prefix;
        self.updated_at = now.max(self.created_at);
    }

    /// The editable fields of this template
    pub fn fields(&self) -> TemplateFields {
        TemplateFields {
            name: self.name.clone(),
            description: self.description.clone(),
            content: self.content.clone(),
            language: self.language.clone(),
            category: self.category.clone(),
            prefix: self.prefix.clone(),
        }
    }

    /// View this template in the catalog's snippet shape
    pub fn to_snippet(&self) -> Snippet {
        Snippet {
            name: self.name.clone(),
            description: self.description.clone(),
            content: self.content.clone(),
            language: self.language.clone(),
            category: self.category.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

/// Caller-supplied fields for create and edit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFields {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub language: Option<String>,
    pub category: String,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl TemplateFields {
    /// Create a field set with the required values
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            content: content.into(),
            language: None,
            category: category.into(),
            prefix: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the language tag
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the autocomplete prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Trim and validate the fields.
    ///
    /// Name and category must be non-empty after trimming; blank language and
    /// prefix values become `None`.
    pub fn normalized(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(TemplateError::invalid_field("name", "name is required"));
        }

        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(TemplateError::invalid_field(
                "category",
                "category is required",
            ));
        }

        Ok(Self {
            name,
            description: self.description.trim().to_string(),
            content: self.content,
            language: non_blank(self.language),
            category,
            prefix: non_blank(self.prefix),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Metadata block of a collection file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The versioned envelope used to persist and exchange templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionFile {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub templates: Vec<UserTemplate>,

    /// Always written; tolerated as absent when reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CollectionMetadata>,
}

fn default_version() -> String {
    COLLECTION_FORMAT_VERSION.to_string()
}

impl CollectionFile {
    /// Wrap templates in a current-version envelope
    pub fn new(templates: Vec<UserTemplate>, metadata: CollectionMetadata) -> Self {
        Self {
            version: default_version(),
            templates,
            metadata: Some(metadata),
        }
    }
}

/// Counts of user templates by language and category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStats {
    pub total: usize,
    pub by_language: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
}

impl TemplateStats {
    /// Compute stats over a set of templates
    pub fn from_templates(templates: &[UserTemplate]) -> Self {
        let mut stats = TemplateStats {
            total: templates.len(),
            ..Default::default()
        };

        for template in templates {
            let language = template
                .language
                .clone()
                .unwrap_or_else(|| UNSPECIFIED_LANGUAGE.to_string());
            *stats.by_language.entry(language).or_insert(0) += 1;
            *stats
                .by_category
                .entry(template.category.clone())
                .or_insert(0) += 1;
        }

        stats
    }
}

/// Result of importing a collection file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Templates appended to the collection
    pub imported: usize,

    /// Templates left out because of a name collision or unreadable entry
    pub skipped: usize,
}

impl ImportSummary {
    /// Number of entries in the imported batch
    pub fn total(&self) -> usize {
        self.imported + self.skipped
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} imported, {} skipped (duplicate or invalid)",
            self.imported, self.skipped
        )
    }
}

/// Result of exporting the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
    pub path: PathBuf,
}

/// How the last load of the collection file went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read
    Loaded { count: usize },

    /// No file existed; an empty one was written
    Created,

    /// The file could not be read or parsed; the session starts empty
    Recovered { reason: String },

    /// Storage could not be prepared; the session starts empty and unsaved
    Unavailable { reason: String },
}

impl LoadOutcome {
    /// Warning to surface to the user, if any
    pub fn warning(&self) -> Option<&str> {
        match self {
            LoadOutcome::Recovered { reason } | LoadOutcome::Unavailable { reason } => {
                Some(reason)
            }
            LoadOutcome::Loaded { .. } | LoadOutcome::Created => None,
        }
    }
}
