//! Merging an imported batch into the user collection

use crate::types::{ImportSummary, TemplateFields, UserTemplate};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// A template as it may appear in a file written by another installation
/// or by hand: only `name` and `category` are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncomingTemplate {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    language: Option<String>,
    category: String,
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// Append every entry of `batch` whose name is not taken yet.
///
/// Names and categories are trimmed first. Entries that are unreadable,
/// unnamed, uncategorized, or whose name is already present (including earlier entries of the same batch) are
/// skipped. Missing or colliding ids are replaced using `fresh_id`.
pub fn merge_batch<F>(
    templates: &mut Vec<UserTemplate>,
    batch: Vec<Value>,
    now: DateTime<Utc>,
    mut fresh_id: F,
) -> ImportSummary
where
    F: FnMut(&HashSet<String>) -> String,
{
    let mut names: HashSet<String> = templates.iter().map(|t| t.name.clone()).collect();
    let mut ids: HashSet<String> = templates.iter().map(|t| t.id.clone()).collect();
    let mut summary = ImportSummary::default();

    for (index, entry) in batch.into_iter().enumerate() {
        let incoming: IncomingTemplate = match serde_json::from_value(entry) {
            Ok(incoming) => incoming,
            Err(e) => {
                warn!("Skipping unreadable template #{} in import: {}", index, e);
                summary.skipped += 1;
                continue;
            }
        };

        let fields = TemplateFields {
            name: incoming.name,
            description: incoming.description,
            content: incoming.content,
            language: incoming.language,
            category: incoming.category,
            prefix: incoming.prefix,
        };
        let fields = match fields.normalized() {
            Ok(fields) => fields,
            Err(e) => {
                warn!("Skipping template #{} in import: {}", index, e);
                summary.skipped += 1;
                continue;
            }
        };

        if names.contains(&fields.name) {
            debug!("Skipping imported template '{}': name exists", fields.name);
            summary.skipped += 1;
            continue;
        }

        let id = match incoming.id {
            Some(id) if !id.is_empty() && !ids.contains(&id) => id,
            _ => fresh_id(&ids),
        };

        let created_at = incoming.created_at.unwrap_or(now);
        let updated_at = incoming.updated_at.unwrap_or(created_at).max(created_at);

        names.insert(fields.name.clone());
        ids.insert(id.clone());
        templates.push(UserTemplate {
            id,
            name: fields.name,
            description: fields.description,
            content: fields.content,
            language: fields.language,
            category: fields.category,
            prefix: fields.prefix,
            author: incoming.author,
            created_at,
            updated_at,
        });
        summary.imported += 1;
    }

    summary
}
