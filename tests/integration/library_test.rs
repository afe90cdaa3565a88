//! Integration tests for library mutations and filtered reordering.

mod helpers;

use promptdeck_core::events::{EventPayload, PromptEvent};
use promptdeck_core::types::FolderId;
use promptdeck_entity::PromptDraft;
use promptdeck_service::StoreError;
use promptdeck_service::view::{self, ViewQuery};

use helpers::{TestApp, add_prompts, contents};

#[tokio::test]
async fn test_reorder_in_folder_keeps_other_slots() {
    let app = TestApp::new();
    let mut library = app.library().await;
    let work = library.create_folder("Work").expect("folder");
    let ids = add_prompts(&mut library, &["A", "B", "C", "D", "E"]);
    for id in [&ids[1], &ids[3]] {
        let prompt = library.state().prompt(id).cloned().expect("prompt");
        let mut draft = PromptDraft::from_prompt(&prompt);
        draft.folder_id = Some(work.id.to_string());
        library.update_prompt(id, &draft).expect("file into Work");
    }

    let in_work = ViewQuery::in_folder(work.id.clone());
    let visible = view::visible_ids(library.state(), &in_work);
    assert_eq!(visible, [ids[1].clone(), ids[3].clone()]);

    library
        .reorder_prompts(&visible, &[ids[3].clone(), ids[1].clone()])
        .expect("reorder");

    let all = view::visible_prompts(library.state(), &ViewQuery::all());
    assert_eq!(contents(&all), ["A", "D", "C", "B", "E"]);
    let orders: Vec<i64> = all.iter().map(|p| p.order.unwrap_or_default()).collect();
    assert_eq!(orders, [0, 1, 2, 3, 4]);

    library.flush().await;
    assert_eq!(&app.stored().await, library.state());
}

#[tokio::test]
async fn test_reorder_under_search_filter() {
    let app = TestApp::new();
    let mut library = app.library().await;
    add_prompts(&mut library, &["alpha one", "beta", "alpha two", "gamma", "alpha three"]);

    let query = ViewQuery::all().with_search("  ALPHA ");
    let visible = view::visible_ids(library.state(), &query);
    assert_eq!(visible.len(), 3);

    let reversed: Vec<_> = visible.iter().rev().cloned().collect();
    library.reorder_prompts(&visible, &reversed).expect("reorder");

    let all = view::visible_prompts(library.state(), &ViewQuery::all());
    assert_eq!(
        contents(&all),
        ["alpha three", "beta", "alpha two", "gamma", "alpha one"]
    );
}

#[tokio::test]
async fn test_reorder_length_mismatch_is_rejected() {
    let app = TestApp::new();
    let mut library = app.library().await;
    let ids = add_prompts(&mut library, &["A", "B", "C"]);
    library.flush().await;
    let writes = app.store.write_count();
    let mut events = library.subscribe();

    let err = library
        .reorder_prompts(&ids, &ids[..2])
        .expect_err("mismatch must fail");
    assert!(matches!(err, StoreError::Reconcile(_)));

    library.flush().await;
    assert_eq!(app.store.write_count(), writes);
    assert!(events.try_recv().is_err());
    let all = view::visible_prompts(library.state(), &ViewQuery::all());
    assert_eq!(contents(&all), ["A", "B", "C"]);
}

#[tokio::test]
async fn test_identity_reorder_is_silent() {
    let app = TestApp::new();
    let mut library = app.library().await;
    let ids = add_prompts(&mut library, &["A", "B"]);
    library.flush().await;
    let writes = app.store.write_count();

    library.reorder_prompts(&ids, &ids).expect("identity");
    library.flush().await;
    assert_eq!(app.store.write_count(), writes);
}

#[tokio::test]
async fn test_delete_folder_unfiles_prompts() {
    let app = TestApp::new();
    let mut library = app.library().await;
    let work = library.create_folder("Work").expect("folder");
    let prompt = library
        .create_prompt(&PromptDraft::new("", "Filed", Some(work.id.to_string())))
        .expect("prompt");
    assert_eq!(library.state().prompt_count(&work.id), 1);

    let deletion = library.delete_folder(&work.id).expect("deleted");
    assert_eq!(deletion.detached, [prompt.id.clone()]);
    assert!(library.state().folder(&work.id).is_none());
    assert_eq!(library.state().prompt(&prompt.id).and_then(|p| p.folder_id.clone()), None);

    // Still visible under the sentinel.
    let all = view::visible_ids(library.state(), &ViewQuery::all());
    assert_eq!(all, [prompt.id]);
}

#[tokio::test]
async fn test_sentinel_cannot_be_deleted_or_renamed() {
    let app = TestApp::new();
    let mut library = app.library().await;

    assert!(library.delete_folder(&FolderId::all()).is_none());
    let err = library
        .rename_folder(&FolderId::all(), "Everything")
        .expect_err("locked");
    assert!(matches!(err, StoreError::Locked { .. }));
}

#[tokio::test]
async fn test_folder_reorder_skips_sentinel() {
    let app = TestApp::new();
    let mut library = app.library().await;
    let a = library.create_folder("Alpha").expect("a");
    let b = library.create_folder("Beta").expect("b");

    library
        .reorder_folders(&[FolderId::all(), b.id.clone(), FolderId::default_folder(), a.id.clone()])
        .expect("reorder");

    let names: Vec<String> = view::folder_summaries(library.state())
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, ["All Prompts", "Beta", "My Prompts", "Alpha"]);
}

#[tokio::test]
async fn test_update_emits_event_and_keeps_order() {
    let app = TestApp::new();
    let mut library = app.library().await;
    let ids = add_prompts(&mut library, &["A", "B", "C"]);
    let mut events = library.subscribe();

    let updated = library
        .update_prompt(&ids[1], &PromptDraft::new("Named", "B2", None::<String>))
        .expect("update");
    assert_eq!(updated.order, Some(1));
    assert_eq!(updated.display_title(), "Named");

    let event = events.recv().await.expect("event");
    assert_eq!(
        event.payload,
        EventPayload::Prompt(PromptEvent::Updated {
            prompt_id: ids[1].clone(),
        })
    );
}
