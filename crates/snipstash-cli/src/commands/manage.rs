// Create, edit and delete user templates

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputStyle};
use snipstash_catalog::TemplateCatalog;
use snipstash_templates::{TemplateFields, UserTemplate};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Language choice that stands for "no language"
const NO_LANGUAGE_CHOICE: &str = "other";

/// Where a template body comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl ContentSource {
    /// Pick the source from `--content` / `--from-file`, falling back to stdin
    pub fn from_args(content: Option<String>, from_file: Option<PathBuf>) -> Self {
        match (content, from_file) {
            (Some(content), _) => ContentSource::Inline(content),
            (None, Some(path)) => ContentSource::File(path),
            (None, None) => ContentSource::Stdin,
        }
    }

    async fn read(&self) -> CliResult<String> {
        match self {
            ContentSource::Inline(content) => Ok(content.clone()),
            ContentSource::File(path) => {
                debug!("Reading template body from {:?}", path);
                tokio::fs::read_to_string(path).await.map_err(CliError::Io)
            }
            ContentSource::Stdin => {
                let mut content = String::new();
                tokio::io::stdin().read_to_string(&mut content).await?;
                Ok(content)
            }
        }
    }
}

/// Fields for a new template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInput {
    pub name: String,
    pub category: String,
    pub description: String,
    pub language: Option<String>,
    pub prefix: Option<String>,
    pub content: ContentSource,
}

/// Field changes for an existing template; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub prefix: Option<String>,
    pub content: Option<ContentSource>,
}

/// Action for the manage handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManageAction {
    Create(TemplateInput),
    Edit { id: String, changes: TemplateChanges },
    Delete { id: String, confirmed: bool },
}

/// Handler for user template mutations
pub struct ManageCommand {
    action: ManageAction,
}

impl ManageCommand {
    pub fn new(action: ManageAction) -> Self {
        Self { action }
    }
}

#[async_trait::async_trait]
impl Command for ManageCommand {
    async fn execute(&self, catalog: &mut TemplateCatalog) -> CliResult<()> {
        match &self.action {
            ManageAction::Create(input) => self.handle_create(catalog, input).await,
            ManageAction::Edit { id, changes } => self.handle_edit(catalog, id, changes).await,
            ManageAction::Delete { id, confirmed } => {
                self.handle_delete(catalog, id, *confirmed).await
            }
        }
    }
}

impl ManageCommand {
    async fn handle_create(
        &self,
        catalog: &mut TemplateCatalog,
        input: &TemplateInput,
    ) -> CliResult<()> {
        let content = input.content.read().await?;
        let mut fields = TemplateFields::new(input.name.clone(), content, input.category.clone())
            .with_description(input.description.clone());
        fields.language = language_choice(input.language.as_deref());
        fields.prefix = input.prefix.clone();

        let created = catalog
            .store_mut()
            .create(fields)
            .await
            .map_err(|e| CliError::template("create template", e))?;

        output::print_success(&format!("Created template '{}' ({})", created.name, created.id));
        Ok(())
    }

    async fn handle_edit(
        &self,
        catalog: &mut TemplateCatalog,
        id: &str,
        changes: &TemplateChanges,
    ) -> CliResult<()> {
        let current = catalog.store().get(id).cloned().ok_or_else(|| {
            CliError::template(
                "edit template",
                snipstash_templates::TemplateError::NotFound(id.to_string()),
            )
        })?;

        let content = match &changes.content {
            Some(source) => Some(source.read().await?),
            None => None,
        };
        let fields = apply_changes(&current, changes, content);

        let updated = catalog
            .store_mut()
            .edit(id, fields)
            .await
            .map_err(|e| CliError::template("edit template", e))?;

        output::print_success(&format!("Updated template '{}'", updated.name));
        Ok(())
    }

    async fn handle_delete(
        &self,
        catalog: &mut TemplateCatalog,
        id: &str,
        confirmed: bool,
    ) -> CliResult<()> {
        let name = match catalog.store().get(id) {
            Some(template) => template.name.clone(),
            None => {
                return Err(CliError::template(
                    "delete template",
                    snipstash_templates::TemplateError::NotFound(id.to_string()),
                ))
            }
        };

        if !confirmed && !output::confirm(&format!("Delete template '{}'?", name))? {
            println!("{}", OutputStyle::default().info("Nothing deleted."));
            return Ok(());
        }

        let removed = catalog
            .store_mut()
            .delete(id)
            .await
            .map_err(|e| CliError::template("delete template", e))?;

        output::print_success(&format!("Deleted template '{}'", removed.name));
        Ok(())
    }
}

/// Map a language argument to a tag; "other" and blank mean none
pub fn language_choice(language: Option<&str>) -> Option<String> {
    language
        .map(str::trim)
        .filter(|l| !l.is_empty() && *l != NO_LANGUAGE_CHOICE)
        .map(str::to_string)
}

/// Overlay `changes` onto the current fields of `template`
pub fn apply_changes(
    template: &UserTemplate,
    changes: &TemplateChanges,
    content: Option<String>,
) -> TemplateFields {
    let mut fields = template.fields();
    if let Some(name) = &changes.name {
        fields.name = name.clone();
    }
    if let Some(category) = &changes.category {
        fields.category = category.clone();
    }
    if let Some(description) = &changes.description {
        fields.description = description.clone();
    }
    if let Some(language) = &changes.language {
        fields.language = language_choice(Some(language));
    }
    if let Some(prefix) = &changes.prefix {
        fields.prefix = Some(prefix.clone());
    }
    if let Some(content) = content {
        fields.content = content;
    }
    fields
}
