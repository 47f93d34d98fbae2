use snipstash_cli::config::{HOME_ENV, PathResolver};
use snipstash_cli::HostConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Environment variables are process-wide, so both cases run in one test
#[test]
fn test_storage_dir_resolution_order() {
    std::env::set_var(HOME_ENV, "/tmp/snipstash-home");
    let from_env = PathResolver::resolve_storage_dir(None).unwrap();
    assert_eq!(from_env, PathBuf::from("/tmp/snipstash-home"));

    let explicit = PathResolver::resolve_storage_dir(Some(Path::new("/tmp/explicit"))).unwrap();
    assert_eq!(explicit, PathBuf::from("/tmp/explicit"));

    std::env::remove_var(HOME_ENV);
    let fallback = PathResolver::resolve_storage_dir(None).unwrap();
    assert!(fallback.to_string_lossy().contains("snipstash"));
}

#[test]
fn test_host_config_file_applies_to_store() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.yaml"),
        "author: Grace\ncollection_name: Team Templates\ncollection_description: Shared\n",
    )
    .unwrap();

    let (host, warning) = HostConfig::load(dir.path());
    assert!(warning.is_none());

    let config = host.store_config(dir.path().to_path_buf());
    assert_eq!(config.author, "Grace");
    assert_eq!(config.collection_name, "Team Templates");
    assert_eq!(config.collection_description.as_deref(), Some("Shared"));
    assert_eq!(config.storage_dir, dir.path());
}
