// Read-only views over the merged catalog

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;
use snipstash_catalog::{CatalogEntry, TemplateCatalog, TemplateView};
use snipstash_templates::{SUGGESTED_CATEGORIES, SUGGESTED_LANGUAGES};

/// Action for the browse handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// List templates, optionally filtered
    List {
        language: Option<String>,
        category: Option<String>,
    },
    /// Free-text search
    Search(String),
    /// Show one template by name
    Show(String),
    /// Distinct categories
    Categories,
    /// Distinct languages
    Languages,
}

/// Handler for catalog browsing
pub struct BrowseCommand {
    action: BrowseAction,
    style: OutputStyle,
}

impl BrowseCommand {
    pub fn new(action: BrowseAction) -> Self {
        Self {
            action,
            style: OutputStyle::default(),
        }
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }
}

#[async_trait::async_trait]
impl Command for BrowseCommand {
    async fn execute(&self, catalog: &mut TemplateCatalog) -> CliResult<()> {
        match &self.action {
            BrowseAction::List { language, category } => {
                self.handle_list(catalog, language.as_deref(), category.as_deref())
            }
            BrowseAction::Search(query) => self.handle_search(catalog, query),
            BrowseAction::Show(name) => self.handle_show(catalog, name),
            BrowseAction::Categories => {
                self.print_names("Categories", &catalog.all_categories(), SUGGESTED_CATEGORIES);
                Ok(())
            }
            BrowseAction::Languages => {
                self.print_names("Languages", &catalog.all_languages(), SUGGESTED_LANGUAGES);
                Ok(())
            }
        }
    }
}

impl BrowseCommand {
    fn handle_list(
        &self,
        catalog: &TemplateCatalog,
        language: Option<&str>,
        category: Option<&str>,
    ) -> CliResult<()> {
        let entries = filter_entries(catalog, language, category);

        if entries.is_empty() {
            println!("No templates match.");
            return Ok(());
        }

        for entry in &entries {
            println!("{}", self.format_entry(entry));
        }
        Ok(())
    }

    fn handle_search(&self, catalog: &TemplateCatalog, query: &str) -> CliResult<()> {
        let results = catalog.search(query);

        if results.is_empty() {
            println!("No templates found matching '{}'", query);
            return Ok(());
        }

        println!("Search results for '{}':", query);
        for entry in &results {
            println!("{}", self.format_entry(entry));
        }
        Ok(())
    }

    fn handle_show(&self, catalog: &TemplateCatalog, name: &str) -> CliResult<()> {
        let entry = catalog
            .by_name(name)
            .ok_or_else(|| CliError::UnknownTemplate(name.to_string()))?;

        println!("{}", self.style.section(entry.name()));
        for (key, value) in describe(&entry) {
            println!("{}", self.style.key_value(key, &value));
        }
        println!();
        println!("{}", self.style.code_block(entry.content(), entry.language()));
        Ok(())
    }

    fn print_names(&self, title: &str, names: &[String], suggested: &[&str]) {
        println!("{}", self.style.section(title));
        for name in names {
            println!("{}", self.style.list_item(name));
        }

        let unused = unused_suggestions(names, suggested);
        if !unused.is_empty() {
            println!();
            println!("{}", self.style.muted(&format!("Also suggested: {}", unused.join(", "))));
        }
    }

    /// One listing line: name, category, language and source
    pub fn format_entry(&self, entry: &CatalogEntry) -> String {
        let tag = match entry.as_user() {
            Some(template) => format!("[{}]", template.id),
            None => "[built-in]".to_string(),
        };
        format!(
            "{:<24} {:<16} {:<12} {}",
            entry.name(),
            entry.category(),
            entry.language().unwrap_or("-"),
            self.style.muted(&tag)
        )
    }
}

/// Apply the optional language and category filters, language first
pub fn filter_entries(
    catalog: &TemplateCatalog,
    language: Option<&str>,
    category: Option<&str>,
) -> Vec<CatalogEntry> {
    let entries = match language {
        Some(language) => catalog.by_language(language),
        None => catalog.all_templates(),
    };
    match category {
        Some(category) => entries
            .into_iter()
            .filter(|e| e.matches_category(category))
            .collect(),
        None => entries,
    }
}

/// Suggested values not already in use; "other" stands for "none" and is left out
pub fn unused_suggestions<'a>(in_use: &[String], suggested: &[&'a str]) -> Vec<&'a str> {
    suggested
        .iter()
        .copied()
        .filter(|s| *s != "other" && !in_use.iter().any(|u| u == s))
        .collect()
}

fn describe(entry: &CatalogEntry) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("Source", entry.source().to_string()),
        ("Category", entry.category().to_string()),
        ("Language", entry.language().unwrap_or("any").to_string()),
    ];
    if !entry.description().is_empty() {
        fields.push(("Description", entry.description().to_string()));
    }
    if let Some(prefix) = entry.prefix() {
        fields.push(("Prefix", prefix.to_string()));
    }
    if let Some(template) = entry.as_user() {
        fields.push(("Id", template.id.clone()));
        if let Some(author) = &template.author {
            fields.push(("Author", author.clone()));
        }
        fields.push(("Updated", template.updated_at.to_rfc3339()));
    }
    fields
}
