//! Matching rules shared by every catalog lookup

use snipstash_templates::{Snippet, UserTemplate};

/// Read access to the fields catalog lookups match on
pub trait TemplateView {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;
    fn language(&self) -> Option<&str>;
    fn prefix(&self) -> Option<&str>;

    /// Exact language match; templates without a language match every language
    fn matches_language(&self, language: &str) -> bool {
        self.language().map_or(true, |l| l == language)
    }

    /// Exact category match
    fn matches_category(&self, category: &str) -> bool {
        self.category() == category
    }

    /// Substring match against name, description, category and prefix.
    ///
    /// `lowered_query` must already be lowercase.
    fn matches_query(&self, lowered_query: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(lowered_query);

        contains(self.name())
            || contains(self.description())
            || contains(self.category())
            || self.prefix().map_or(false, contains)
    }
}

impl TemplateView for Snippet {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl TemplateView for UserTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}
