//! Reading and writing collection files

use crate::error::{IoOperation, IoTarget, Result, TemplateError};
use crate::types::CollectionFile;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Read the store's collection file.
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn read_collection(path: &Path) -> Result<Option<CollectionFile>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(TemplateError::io_error(
                IoTarget::StoreFile(path.to_path_buf()),
                IoOperation::Read,
                e,
            ))
        }
    };

    let file: CollectionFile = serde_json::from_str(&content).map_err(TemplateError::Parse)?;
    debug!("Read {} templates from {:?}", file.templates.len(), path);
    Ok(Some(file))
}

/// Write a collection file by staging it next to `target` and renaming it
/// into place, so a failed write never truncates the previous file.
pub async fn write_collection(target: IoTarget, file: &CollectionFile) -> Result<()> {
    let content = serde_json::to_string_pretty(file).map_err(TemplateError::Serialization)?;
    let path = target.path().to_path_buf();
    let staging = staging_path(&path);

    if let Err(e) = fs::write(&staging, content).await {
        return Err(TemplateError::io_error(target, IoOperation::Write, e));
    }

    if let Err(e) = fs::rename(&staging, &path).await {
        if let Err(cleanup) = fs::remove_file(&staging).await {
            warn!("Failed to remove staging file {:?}: {}", staging, cleanup);
        }
        return Err(TemplateError::io_error(target, IoOperation::Rename, e));
    }

    debug!("Wrote {} templates to {:?}", file.templates.len(), path);
    Ok(())
}

/// Read the `templates` array of an external collection file.
///
/// The entries are returned untyped so one malformed template does not
/// reject the whole batch.
pub async fn read_import_source(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path).await.map_err(|e| {
        TemplateError::io_error(IoTarget::External(path.to_path_buf()), IoOperation::Read, e)
    })?;

    let root: Value = serde_json::from_str(&content)
        .map_err(|e| TemplateError::invalid_format(format!("not valid JSON: {}", e)))?;

    match root.get("templates") {
        Some(Value::Array(entries)) => Ok(entries.clone()),
        Some(_) => Err(TemplateError::invalid_format(
            "'templates' must be an array",
        )),
        None => Err(TemplateError::invalid_format("missing 'templates' array")),
    }
}

/// Copy an unreadable store file aside before it gets overwritten
pub async fn preserve_unreadable(path: &Path) -> Result<Option<PathBuf>> {
    let backup = suffixed(path, "corrupt");
    match fs::copy(path, &backup).await {
        Ok(_) => {
            warn!("Preserved unreadable templates file as {:?}", backup);
            Ok(Some(backup))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(TemplateError::io_error(
            IoTarget::StoreFile(path.to_path_buf()),
            IoOperation::Backup,
            e,
        )),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    suffixed(path, "tmp")
}

fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CollectionMetadata;
    use chrono::Utc;
    use tempfile::TempDir;

    fn empty_file() -> CollectionFile {
        let now = Utc::now();
        CollectionFile::new(
            Vec::new(),
            CollectionMetadata {
                name: "Custom Templates".to_string(),
                description: None,
                author: None,
                created_at: now,
                updated_at: now,
            },
        )
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_collection(&dir.path().join("absent.json")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("user-templates.json");
        let file = empty_file();

        write_collection(IoTarget::StoreFile(path.clone()), &file)
            .await
            .unwrap();

        assert!(!staging_path(&path).exists());
        let read = read_collection(&path).await.unwrap().unwrap();
        assert_eq!(read, file);
    }

    #[tokio::test]
    async fn test_read_corrupt_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("user-templates.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = read_collection(&path).await.unwrap_err();
        assert!(matches!(err, TemplateError::Parse(_)));
    }

    #[tokio::test]
    async fn test_failed_rename_keeps_target_and_cleans_staging() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("user-templates.json");
        tokio::fs::create_dir(&path).await.unwrap();

        let err = write_collection(IoTarget::StoreFile(path.clone()), &empty_file())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TemplateError::Io {
                operation: IoOperation::Rename,
                ..
            }
        ));
        assert!(path.is_dir());
        assert!(!staging_path(&path).exists());
    }

    #[tokio::test]
    async fn test_import_source_requires_templates_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("import.json");

        tokio::fs::write(&path, r#"{"version": "1.0.0"}"#).await.unwrap();
        let err = read_import_source(&path).await.unwrap_err();
        assert!(matches!(err, TemplateError::InvalidFormat(_)));

        tokio::fs::write(&path, r#"{"templates": {"a": 1}}"#)
            .await
            .unwrap();
        let err = read_import_source(&path).await.unwrap_err();
        assert!(matches!(err, TemplateError::InvalidFormat(_)));

        tokio::fs::write(&path, r#"{"templates": [{"name": "x"}]}"#)
            .await
            .unwrap();
        let entries = read_import_source(&path).await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_import_source_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_import_source(&dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, TemplateError::Io { .. }));
    }

    #[tokio::test]
    async fn test_preserve_unreadable_copies_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("user-templates.json");
        tokio::fs::write(&path, "garbage").await.unwrap();

        let backup = preserve_unreadable(&path).await.unwrap().unwrap();
        assert_eq!(tokio::fs::read_to_string(&backup).await.unwrap(), "garbage");
        assert!(backup.ends_with("user-templates.json.corrupt"));
    }
}
