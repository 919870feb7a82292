use std::sync::Arc;
use serde_json::json;
use tempfile::tempdir;

use crate::kernel::error::Result;
use crate::storage::config::StoreConfig;
use crate::storage::local::LocalStorageProvider;
use crate::storage::manager::SaveManager;
use crate::storage::provider::StorageProvider;

fn create_test_manager(compress: bool) -> (SaveManager, tempfile::TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = StoreConfig::default()
        .with_base_dir(temp_dir.path().join("saves"))
        .with_compress(compress);
    let manager = SaveManager::new(config).expect("Failed to create manager");
    (manager, temp_dir)
}

#[test]
fn test_new_creates_default_directory() {
    let (manager, temp_dir) = create_test_manager(false);

    assert!(temp_dir.path().join("saves").is_dir());
    assert_eq!(manager.base_dir(), temp_dir.path().join("saves"));
}

#[test]
fn test_save_uses_config_compress() -> Result<()> {
    let (plain, _plain_dir) = create_test_manager(false);
    let path = plain.save(json!({"k": 1}), "cfg")?;
    assert_eq!(path, plain.base_dir().join("cfg.json"));

    let (zipped, _zipped_dir) = create_test_manager(true);
    let path = zipped.save(json!({"k": 1}), "cfg")?;
    assert_eq!(path, zipped.base_dir().join("cfg.json.zip"));
    assert_eq!(zipped.list_entries()?, vec!["cfg.json.zip".to_string()]);

    // Explicit flag wins over the config
    let path = zipped.save_with_compression("plain", "note.txt", false)?;
    assert_eq!(path, zipped.base_dir().join("note.txt"));

    Ok(())
}

#[test]
fn test_save_in_other_directory() -> Result<()> {
    let (manager, temp_dir) = create_test_manager(false);
    let other = temp_dir.path().join("elsewhere");

    manager.save_in("x", "x.txt", &other, false)?;
    assert_eq!(manager.list_entries_in(&other)?, vec!["x.txt".to_string()]);
    assert!(manager.list_entries()?.is_empty());

    Ok(())
}

#[test]
fn test_list_and_delete() -> Result<()> {
    let (manager, _temp_dir) = create_test_manager(false);

    manager.save("one", "one.txt")?;
    assert_eq!(manager.list_entries()?, vec!["one.txt".to_string()]);

    assert!(manager.delete_entry("one.txt")?.is_deleted());
    assert!(!manager.delete_entry("one.txt")?.is_deleted());
    assert!(manager.list_entries()?.is_empty());

    Ok(())
}

#[test]
fn test_with_provider_rooted_provider() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let provider = Arc::new(LocalStorageProvider::new(temp_dir.path().to_path_buf())) as Arc<dyn StorageProvider>;
    let config = StoreConfig::default().with_base_dir("rooted");

    let manager = SaveManager::with_provider(provider, config)?;
    assert!(temp_dir.path().join("rooted").is_dir());

    manager.save("inside", "inside.txt")?;
    assert!(temp_dir.path().join("rooted").join("inside.txt").is_file());
    assert_eq!(manager.list_entries()?, vec!["inside.txt".to_string()]);

    Ok(())
}

#[test]
fn test_debug_shows_provider_name() {
    let (manager, _temp_dir) = create_test_manager(false);
    let debug = format!("{:?}", manager);

    assert!(debug.contains("SaveManager"));
    assert!(debug.contains(manager.provider().name()));
}
