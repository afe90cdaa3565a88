//! Integration tests for loading and saving the library as a JSON file.

mod helpers;

use std::sync::Arc;

use serde_json::{Value, json};

use promptdeck_core::config::storage::{StorageConfig, StorageProviderKind};
use promptdeck_core::traits::{SequentialIdGenerator, StateStore};
use promptdeck_core::types::FolderId;
use promptdeck_entity::{LibraryState, PromptDraft};
use promptdeck_service::{Library, StoreError};
use promptdeck_service::view::{self, ViewQuery};
use promptdeck_storage::{JsonFileStateStore, StateStoreManager};

use helpers::{TestApp, contents};

const KEY: &str = "promptManagerState";

async fn load(store: &JsonFileStateStore) -> Library {
    Library::load(Arc::new(store.clone()), Arc::new(SequentialIdGenerator::new()))
        .await
        .expect("Failed to load library")
}

async fn read_json(path: &std::path::Path) -> Value {
    let raw = tokio::fs::read_to_string(path).await.expect("read");
    serde_json::from_str(&raw).expect("json")
}

#[tokio::test]
async fn test_first_run_seeds_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStateStore::new(dir.path().join("nested/state.json"), KEY);

    let library = load(&store).await;
    library.flush().await;

    let doc = read_json(store.path()).await;
    let folders = doc[KEY]["folders"].as_array().expect("folders");
    assert_eq!(folders.len(), 2);
    assert_eq!(folders[0]["id"], "all");
    assert_eq!(folders[0]["locked"], true);
    assert_eq!(folders[1]["name"], "My Prompts");
    assert_eq!(doc[KEY]["prompts"], json!([]));
}

#[tokio::test]
async fn test_state_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStateStore::new(dir.path().join("state.json"), KEY);

    let mut library = load(&store).await;
    let work = library.create_folder("Work").expect("folder");
    for content in ["one", "two", "three"] {
        library
            .create_prompt(&PromptDraft::new("", content, Some(work.id.to_string())))
            .expect("prompt");
    }
    let visible = view::visible_ids(library.state(), &ViewQuery::all());
    let reversed: Vec<_> = visible.iter().rev().cloned().collect();
    library.reorder_prompts(&visible, &reversed).expect("reorder");
    library.flush().await;
    let before = library.state().clone();
    drop(library);

    let reloaded = load(&store).await;
    assert_eq!(reloaded.state(), &before);
    let shown = view::visible_prompts(reloaded.state(), &ViewQuery::in_folder(work.id));
    assert_eq!(contents(&shown), ["three", "two", "one"]);
}

#[tokio::test]
async fn test_legacy_document_is_repaired_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    let legacy = json!({
        "theme": "dark",
        KEY: {
            "folders": [{ "id": "work", "name": "Work" }],
            "prompts": [
                { "id": "p1", "content": "first" },
                { "id": "p2", "title": "Second", "content": "second", "folderId": "work" }
            ]
        }
    });
    tokio::fs::write(&path, legacy.to_string()).await.expect("write");
    let store = JsonFileStateStore::new(&path, KEY);

    let library = load(&store).await;
    library.flush().await;

    let state = library.state();
    assert_eq!(state.folders[0].id, FolderId::all());
    assert_eq!(state.folders[1].order, Some(0));
    assert!(state.folder(&FolderId::default_folder()).is_none());
    let orders: Vec<Option<i64>> = state.prompts.iter().map(|p| p.order).collect();
    assert_eq!(orders, [Some(0), Some(1)]);

    let doc = read_json(&path).await;
    assert_eq!(doc["theme"], "dark");
    assert_eq!(doc[KEY]["prompts"][1]["folderId"], "work");
    assert_eq!(doc[KEY]["prompts"][0]["order"], 0);
}

#[tokio::test]
async fn test_unlocked_sentinel_is_relocked_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    let stored = json!({
        KEY: {
            "folders": [
                { "id": "all", "name": "All Prompts" },
                { "id": "default", "name": "My Prompts", "order": 0 }
            ],
            "prompts": []
        }
    });
    tokio::fs::write(&path, stored.to_string()).await.expect("write");
    let store = JsonFileStateStore::new(&path, KEY);

    let mut library = load(&store).await;
    assert!(library.state().folders[0].locked);
    let err = library
        .rename_folder(&FolderId::all(), "Hijacked")
        .expect_err("sentinel rename");
    assert!(matches!(err, StoreError::Locked { .. }));

    library.flush().await;
    let doc = read_json(&path).await;
    assert_eq!(doc[KEY]["folders"][0]["locked"], true);
    assert_eq!(doc[KEY]["folders"][0]["name"], "All Prompts");
}

#[tokio::test]
async fn test_clean_document_is_not_rewritten() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStateStore::new(dir.path().join("state.json"), KEY);
    store.set(&LibraryState::seed()).await.expect("seed");
    let written = tokio::fs::metadata(store.path()).await.expect("meta").modified().expect("mtime");

    let library = load(&store).await;
    library.flush().await;

    let after = tokio::fs::metadata(store.path()).await.expect("meta").modified().expect("mtime");
    assert_eq!(written, after);
}

#[tokio::test]
async fn test_manager_selects_provider() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = StateStoreManager::from_config(&StorageConfig {
        provider: StorageProviderKind::File,
        path: dir.path().join("s.json").to_string_lossy().into_owned(),
        key: KEY.to_string(),
    });
    assert_eq!(file.provider_type(), "file");

    let memory = StateStoreManager::from_config(&StorageConfig {
        provider: StorageProviderKind::Memory,
        ..StorageConfig::default()
    });
    assert_eq!(memory.provider_type(), "memory");
    assert_eq!(memory.store().get().await.expect("get"), None);
}

#[tokio::test]
async fn test_memory_store_round_trip_through_library() {
    let app = TestApp::new();
    let mut library = app.library().await;
    library.create_folder("Ideas").expect("folder");
    library.flush().await;

    let reloaded = app.library().await;
    assert_eq!(reloaded.state(), &app.stored().await);
    assert_eq!(view::folder_summaries(reloaded.state()).len(), 3);
}
