//! The user template store

use crate::config::StoreConfig;
use crate::error::{IoOperation, IoTarget, Result, TemplateError};
use crate::file;
use crate::id::generate_template_id;
use crate::import::merge_batch;
use crate::types::{
    CollectionFile, CollectionMetadata, ExportSummary, ImportSummary, LoadOutcome, Snippet,
    TemplateFields, TemplateStats, UserTemplate,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info, warn};

/// Owns the user template collection and its backing file.
///
/// The in-memory collection is the source of truth for the session. Every
/// successful mutation rewrites the whole file before returning. If that
/// write fails the mutation is kept in memory, the error is returned as
/// [`TemplateError::Persist`], and the next mutation (or [`save`]) retries.
///
/// [`save`]: TemplateStore::save
#[derive(Debug)]
pub struct TemplateStore {
    config: StoreConfig,
    path: PathBuf,
    templates: Vec<UserTemplate>,
    metadata_created_at: Option<DateTime<Utc>>,
    load_outcome: LoadOutcome,
    dirty: bool,
    preserve_on_write: bool,
}

impl TemplateStore {
    /// Open the store described by `config`.
    ///
    /// Never fails: directory or file problems are logged and reflected in
    /// [`load_outcome`](TemplateStore::load_outcome), and the store starts
    /// with an empty collection.
    pub async fn open(config: StoreConfig) -> Self {
        let path = config.templates_path();
        let mut store = Self {
            config,
            path,
            templates: Vec::new(),
            metadata_created_at: None,
            load_outcome: LoadOutcome::Created,
            dirty: false,
            preserve_on_write: false,
        };

        let outcome = match store.ensure_storage_dir().await {
            Ok(()) => store.load().await,
            Err(e) => {
                error!("Templates directory unavailable: {}", e);
                LoadOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        store.load_outcome = outcome;
        store
    }

    async fn ensure_storage_dir(&self) -> Result<()> {
        let dir = &self.config.storage_dir;
        fs::create_dir_all(dir).await.map_err(|e| {
            TemplateError::io_error(IoTarget::StorageDir(dir.clone()), IoOperation::Create, e)
        })
    }

    async fn load(&mut self) -> LoadOutcome {
        self.templates.clear();
        self.metadata_created_at = None;
        self.dirty = false;
        self.preserve_on_write = false;

        match file::read_collection(&self.path).await {
            Ok(Some(collection)) => {
                self.metadata_created_at = collection.metadata.map(|m| m.created_at);
                self.templates = collection.templates;
                self.repair_loaded();
                info!("Loaded {} user templates", self.templates.len());
                LoadOutcome::Loaded {
                    count: self.templates.len(),
                }
            }
            Ok(None) => match self.persist().await {
                Ok(()) => {
                    info!("Created empty templates file at {:?}", self.path);
                    LoadOutcome::Created
                }
                Err(e) => {
                    error!("Failed to create templates file: {}", e);
                    LoadOutcome::Unavailable {
                        reason: e.to_string(),
                    }
                }
            },
            Err(e) => {
                warn!("Starting with no user templates: {}", e);
                self.preserve_on_write = true;
                LoadOutcome::Recovered {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Fix up hand-edited files: blank ids and reversed timestamps
    fn repair_loaded(&mut self) {
        let mut ids: HashSet<String> = HashSet::new();
        for index in 0..self.templates.len() {
            let needs_id = {
                let id = &self.templates[index].id;
                id.is_empty() || ids.contains(id)
            };
            if needs_id {
                let id = fresh_id(&ids);
                warn!(
                    "Template '{}' had a missing or repeated id; assigned {}",
                    self.templates[index].name, id
                );
                self.templates[index].id = id;
                self.dirty = true;
            }
            ids.insert(self.templates[index].id.clone());

            let template = &mut self.templates[index];
            if template.updated_at < template.created_at {
                template.updated_at = template.created_at;
                self.dirty = true;
            }
        }
    }

    /// Re-read the collection file, replacing the in-memory collection
    pub async fn reload(&mut self) -> LoadOutcome {
        let outcome = self.load().await;
        self.load_outcome = outcome.clone();
        outcome
    }

    /// How the most recent load went
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Path of the collection file
    pub fn templates_path(&self) -> &Path {
        &self.path
    }

    /// Store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Whether the in-memory collection has changes the file lacks
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Copy of the current collection
    pub fn list(&self) -> Vec<UserTemplate> {
        self.templates.clone()
    }

    /// Borrow the current collection
    pub fn templates(&self) -> &[UserTemplate] {
        &self.templates
    }

    /// The collection in the catalog's snippet shape
    pub fn user_snippets(&self) -> Vec<Snippet> {
        self.templates.iter().map(UserTemplate::to_snippet).collect()
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&UserTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Get a template by exact name
    pub fn find_by_name(&self, name: &str) -> Option<&UserTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Number of user templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Counts by language and category
    pub fn stats(&self) -> TemplateStats {
        TemplateStats::from_templates(&self.templates)
    }

    /// Create a template from `fields`
    pub async fn create(&mut self, fields: TemplateFields) -> Result<UserTemplate> {
        let fields = fields.normalized()?;
        self.ensure_unique_name(&fields.name, None)?;

        let id = self.fresh_id();
        let template = UserTemplate::from_fields(
            id,
            fields,
            Some(self.config.author.clone()),
            Utc::now(),
        );
        self.templates.push(template.clone());
        self.commit().await?;

        info!("Created template '{}' ({})", template.name, template.id);
        Ok(template)
    }

    /// Replace the editable fields of the template with `id`
    pub async fn edit(&mut self, id: &str, fields: TemplateFields) -> Result<UserTemplate> {
        let index = self.index_of(id)?;
        let fields = fields.normalized()?;
        self.ensure_unique_name(&fields.name, Some(id))?;

        let template = &mut self.templates[index];
        template.apply(fields, Utc::now());
        let updated = template.clone();
        self.commit().await?;

        info!("Updated template '{}' ({})", updated.name, updated.id);
        Ok(updated)
    }

    /// Remove the template with `id`
    pub async fn delete(&mut self, id: &str) -> Result<UserTemplate> {
        let index = self.index_of(id)?;
        let removed = self.templates.remove(index);
        self.commit().await?;

        info!("Deleted template '{}' ({})", removed.name, removed.id);
        Ok(removed)
    }

    /// Import templates from an external collection file.
    ///
    /// Templates whose name already exists are skipped, never overwritten.
    /// The file is rewritten once, and only if something was imported.
    pub async fn import_from(&mut self, path: impl AsRef<Path>) -> Result<ImportSummary> {
        let path = path.as_ref();
        let batch = file::read_import_source(path).await?;

        let summary = merge_batch(&mut self.templates, batch, Utc::now(), fresh_id);
        if summary.imported > 0 {
            self.commit().await?;
        }

        info!("Imported templates from {:?}: {}", path, summary);
        Ok(summary)
    }

    /// Write the whole collection to `path` in a fresh envelope
    pub async fn export_to(&self, path: impl AsRef<Path>) -> Result<ExportSummary> {
        let path = path.as_ref().to_path_buf();
        let now = Utc::now();
        let collection = CollectionFile::new(
            self.templates.clone(),
            CollectionMetadata {
                name: self.config.export_name.clone(),
                description: self.config.export_description.clone(),
                author: Some(self.config.author.clone()),
                created_at: now,
                updated_at: now,
            },
        );

        file::write_collection(IoTarget::External(path.clone()), &collection).await?;

        info!("Exported {} templates to {:?}", self.templates.len(), path);
        Ok(ExportSummary {
            exported: self.templates.len(),
            path,
        })
    }

    /// Write the collection file now, retrying a previously failed write
    pub async fn save(&mut self) -> Result<()> {
        self.persist().await
    }

    async fn commit(&mut self) -> Result<()> {
        self.dirty = true;
        self.persist().await.map_err(TemplateError::persist)
    }

    async fn persist(&mut self) -> Result<()> {
        if self.preserve_on_write {
            file::preserve_unreadable(&self.path).await?;
            self.preserve_on_write = false;
        }

        let now = Utc::now();
        let created_at = *self.metadata_created_at.get_or_insert(now);
        let collection = CollectionFile::new(
            self.templates.clone(),
            CollectionMetadata {
                name: self.config.collection_name.clone(),
                description: self.config.collection_description.clone(),
                author: Some(self.config.author.clone()),
                created_at,
                updated_at: now,
            },
        );

        match file::write_collection(IoTarget::StoreFile(self.path.clone()), &collection).await {
            Ok(()) => {
                self.dirty = false;
                debug!("Saved {} user templates", self.templates.len());
                Ok(())
            }
            Err(e) => {
                error!("Failed to save user templates: {}", e);
                Err(e)
            }
        }
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    fn ensure_unique_name(&self, name: &str, editing: Option<&str>) -> Result<()> {
        let taken = self
            .templates
            .iter()
            .any(|t| t.name == name && Some(t.id.as_str()) != editing);

        if taken {
            return Err(TemplateError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn fresh_id(&self) -> String {
        let ids: HashSet<String> = self.templates.iter().map(|t| t.id.clone()).collect();
        fresh_id(&ids)
    }
}

fn fresh_id(taken: &HashSet<String>) -> String {
    loop {
        let id = generate_template_id();
        if !taken.contains(&id) {
            return id;
        }
    }
}
