use crate::query::TemplateView;
use serde::Serialize;
use snipstash_templates::{Snippet, UserTemplate};
use std::fmt;

/// Where a catalog entry comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    User,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Builtin => write!(f, "built-in"),
            TemplateSource::User => write!(f, "user"),
        }
    }
}

/// A template in the merged catalog, built-in or user-authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum CatalogEntry {
    Builtin(Snippet),
    User(UserTemplate),
}

impl CatalogEntry {
    /// Stable identity: the store id for user templates, the name for built-ins
    pub fn id(&self) -> &str {
        match self {
            CatalogEntry::Builtin(s) => &s.name,
            CatalogEntry::User(t) => &t.id,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            CatalogEntry::Builtin(s) => &s.content,
            CatalogEntry::User(t) => &t.content,
        }
    }

    pub fn source(&self) -> TemplateSource {
        match self {
            CatalogEntry::Builtin(_) => TemplateSource::Builtin,
            CatalogEntry::User(_) => TemplateSource::User,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, CatalogEntry::Builtin(_))
    }

    /// The user template, if this entry is one
    pub fn as_user(&self) -> Option<&UserTemplate> {
        match self {
            CatalogEntry::User(t) => Some(t),
            CatalogEntry::Builtin(_) => None,
        }
    }

    fn view(&self) -> &dyn TemplateView {
        match self {
            CatalogEntry::Builtin(s) => s,
            CatalogEntry::User(t) => t,
        }
    }
}

impl TemplateView for CatalogEntry {
    fn name(&self) -> &str {
        self.view().name()
    }

    fn description(&self) -> &str {
        self.view().description()
    }

    fn category(&self) -> &str {
        self.view().category()
    }

    fn language(&self) -> Option<&str> {
        self.view().language()
    }

    fn prefix(&self) -> Option<&str> {
        self.view().prefix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_entry() -> CatalogEntry {
        let now = Utc::now();
        CatalogEntry::User(UserTemplate {
            id: "template_1_abc".to_string(),
            name: "hello".to_string(),
            description: "greeting".to_string(),
            content: "hi".to_string(),
            language: None,
            category: "Custom".to_string(),
            prefix: Some("hl".to_string()),
            author: Some("User".to_string()),
            created_at: now,
            updated_at: now,
        })
    }

    #[test]
    fn test_builtin_identity_is_name() {
        let entry = CatalogEntry::Builtin(Snippet {
            name: "for-of".to_string(),
            description: String::new(),
            content: "for".to_string(),
            language: Some("javascript".to_string()),
            category: "Loops".to_string(),
            prefix: None,
        });
        assert_eq!(entry.id(), "for-of");
        assert!(entry.is_builtin());
        assert_eq!(entry.source(), TemplateSource::Builtin);
        assert_eq!(entry.language(), Some("javascript"));
        assert!(entry.as_user().is_none());
    }

    #[test]
    fn test_user_accessors() {
        let entry = user_entry();
        assert_eq!(entry.id(), "template_1_abc");
        assert_eq!(entry.name(), "hello");
        assert_eq!(entry.prefix(), Some("hl"));
        assert_eq!(entry.source().to_string(), "user");
        assert!(entry.as_user().is_some());
    }

    #[test]
    fn test_serializes_with_source_tag() {
        let json = serde_json::to_value(user_entry()).unwrap();
        assert_eq!(json["source"], "user");
        assert_eq!(json["name"], "hello");
        assert_eq!(json["createdAt"].is_string(), true);
    }
}
