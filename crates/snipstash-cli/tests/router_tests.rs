use clap::Parser;
use snipstash_cli::*;
use std::fs;
use tempfile::TempDir;

fn cli(dir: &TempDir, args: &[&str]) -> Cli {
    let storage = dir.path().to_string_lossy().to_string();
    let mut argv = vec!["snip", "--storage-dir", storage.as_str()];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

async fn run(dir: &TempDir, args: &[&str]) -> CliResult<()> {
    let cli = cli(dir, args);
    let mut catalog = CommandRouter::open_catalog(&cli).await?;
    CommandRouter::execute(&cli, &mut catalog).await
}

#[tokio::test]
async fn test_create_persists_to_storage_dir() {
    let dir = TempDir::new().unwrap();
    run(
        &dir,
        &["create", "--name", "hello", "--content", "print('hi')", "--language", "python"],
    )
    .await
    .unwrap();

    let written = fs::read_to_string(dir.path().join("user-templates.json")).unwrap();
    assert!(written.contains("\"hello\""));
    assert!(written.contains("\"python\""));
}

#[tokio::test]
async fn test_duplicate_create_fails() {
    let dir = TempDir::new().unwrap();
    let args = ["create", "--name", "hello", "--content", "x"];
    run(&dir, &args).await.unwrap();

    let err = run(&dir, &args).await.unwrap_err();
    assert!(matches!(err, CliError::Template { .. }));
}

#[tokio::test]
async fn test_config_yaml_sets_author() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.yaml"), "author: Ada\n").unwrap();

    let cli = cli(&dir, &["create", "--name", "hello", "--content", "x"]);
    let mut catalog = CommandRouter::open_catalog(&cli).await.unwrap();
    CommandRouter::execute(&cli, &mut catalog).await.unwrap();

    let created = catalog.store().find_by_name("hello").unwrap();
    assert_eq!(created.author.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn test_malformed_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.yaml"), "author: [").unwrap();

    let cli = cli(&dir, &["create", "--name", "hello", "--content", "x"]);
    let mut catalog = CommandRouter::open_catalog(&cli).await.unwrap();
    CommandRouter::execute(&cli, &mut catalog).await.unwrap();

    let created = catalog.store().find_by_name("hello").unwrap();
    assert_eq!(created.author.as_deref(), Some("User"));
}

#[tokio::test]
async fn test_corrupt_store_still_lists() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("user-templates.json"), "{ not json").unwrap();

    run(&dir, &["list"]).await.unwrap();
    run(&dir, &["list", "--language", "python", "--category", "Debug"])
        .await
        .unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("user-templates.json")).unwrap(),
        "{ not json"
    );
}

#[tokio::test]
async fn test_read_only_commands_succeed() {
    let dir = TempDir::new().unwrap();
    for args in [
        vec![],
        vec!["search", "deb"],
        vec!["show", "console.log"],
        vec!["categories"],
        vec!["languages"],
        vec!["stats"],
        vec!["path"],
    ] {
        run(&dir, &args).await.unwrap();
    }
}

#[tokio::test]
async fn test_edit_and_delete_by_id() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["create", "--name", "hello", "--content", "x"])
        .await
        .unwrap();

    let cli = cli(&dir, &["path"]);
    let catalog = CommandRouter::open_catalog(&cli).await.unwrap();
    let id = catalog.store().find_by_name("hello").unwrap().id.clone();

    run(&dir, &["edit", id.as_str(), "--name", "renamed", "--category", "Debug"])
        .await
        .unwrap();
    run(&dir, &["show", "renamed"]).await.unwrap();

    run(&dir, &["delete", id.as_str(), "--yes"]).await.unwrap();
    let err = run(&dir, &["show", "renamed"]).await.unwrap_err();
    assert!(matches!(err, CliError::UnknownTemplate(_)));
}

#[tokio::test]
async fn test_export_empty_collection_writes_file() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let target = out.path().join("empty.json");

    let target_arg = target.to_string_lossy().to_string();
    run(&dir, &["export", target_arg.as_str()])
        .await
        .unwrap();

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("\"templates\": []"));
}
