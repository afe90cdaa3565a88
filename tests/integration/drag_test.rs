//! Integration tests for pointer gestures routed through a workspace.

mod helpers;

use promptdeck_core::types::{FolderId, Point};
use promptdeck_entity::PromptDraft;
use promptdeck_service::drag::{DragOutcome, DragSurface, PointerPress, PressDisposition};
use promptdeck_service::view::{self, ViewQuery};

use helpers::{TestApp, add_prompts, card_grid, contents, tab_list};

#[tokio::test]
async fn test_grid_drop_before_card_in_top_band() {
    let app = TestApp::new();
    let mut ws = app.workspace().await;
    let ids = ws.apply(|lib| add_prompts(lib, &["P", "Q", "R", "X"]));
    let mut surface = card_grid(&ws.port().prompts);

    let start = surface.cell_center(3);
    let press = PointerPress::primary(7, ids[3].clone(), start);
    assert_eq!(ws.prompt_press(&surface, press), PressDisposition::Armed);

    ws.prompt_motion(&mut surface, 7, Point::new(start.x, start.y - 20.0));
    assert!(ws.is_dragging());

    // Top quarter of Q's card.
    let q = surface.bounds_of(&ids[1]).expect("Q bounds");
    ws.prompt_motion(&mut surface, 7, Point::new(q.center_x() + 30.0, q.top + 10.0));
    assert_eq!(surface.placeholder_index(), Some(1));
    assert!(!surface.flips().is_empty());

    let outcome = ws.prompt_release(&mut surface, 7).expect("outcome");
    assert!(matches!(outcome, DragOutcome::Reorder { .. }));
    assert!(!ws.is_dragging());

    let shown = view::visible_prompts(ws.library().state(), ws.query());
    assert_eq!(contents(&shown), ["P", "X", "Q", "R"]);
    assert_eq!(ws.port().prompts, ws.visible_ids());

    ws.library().flush().await;
    assert_eq!(&app.stored().await, ws.library().state());
}

#[tokio::test]
async fn test_small_wiggle_opens_editor() {
    let app = TestApp::new();
    let mut ws = app.workspace().await;
    let ids = ws.apply(|lib| add_prompts(lib, &["P", "Q"]));
    let mut surface = card_grid(&ws.port().prompts);
    let start = surface.cell_center(0);

    ws.prompt_press(&surface, PointerPress::primary(1, ids[0].clone(), start));
    ws.prompt_motion(&mut surface, 1, Point::new(start.x + 4.0, start.y + 4.0));
    let outcome = ws.prompt_release(&mut surface, 1);

    assert_eq!(outcome, Some(DragOutcome::Click(ids[0].clone())));
    assert_eq!(ws.port().opened, [ids[0].clone()]);
    assert!(surface.placeholder_index().is_none());
}

#[tokio::test]
async fn test_press_on_delete_control_passes_through() {
    let app = TestApp::new();
    let mut ws = app.workspace().await;
    let ids = ws.apply(|lib| add_prompts(lib, &["P"]));
    let mut surface = card_grid(&ws.port().prompts);
    let start = surface.cell_center(0);

    let press = PointerPress::primary(1, ids[0].clone(), start).on_control();
    assert_eq!(ws.prompt_press(&surface, press), PressDisposition::PassThrough);
    assert_eq!(ws.prompt_release(&mut surface, 1), None);
    assert!(ws.port().opened.is_empty());
}

#[tokio::test]
async fn test_drag_in_filtered_view_preserves_hidden_slots() {
    let app = TestApp::new();
    let mut ws = app.workspace().await;
    let ids = ws.apply(|lib| {
        let work = lib.create_folder("Work").expect("folder");
        let filed = Some(work.id.to_string());
        let mut ids = Vec::new();
        for content in ["A", "B", "C", "D", "E"] {
            let folder = matches!(content, "B" | "D").then(|| filed.clone()).flatten();
            let prompt = lib
                .create_prompt(&PromptDraft::new("", content, folder))
                .expect("prompt");
            ids.push(prompt.id);
        }
        (work.id, ids)
    });
    let (work, ids) = ids;
    ws.activate_folder(work);
    assert_eq!(ws.port().prompts, [ids[1].clone(), ids[3].clone()]);
    assert_eq!(ws.port().title, "WORK");

    let mut surface = card_grid(&ws.port().prompts);
    let start = surface.cell_center(1);
    ws.prompt_press(&surface, PointerPress::primary(2, ids[3].clone(), start));
    ws.prompt_motion(&mut surface, 2, Point::new(start.x - 10.0, start.y));
    // Left half of B, outside the top and bottom bands.
    let b = surface.bounds_of(&ids[1]).expect("B bounds");
    ws.prompt_motion(&mut surface, 2, Point::new(b.left + 20.0, b.center_y()));
    ws.prompt_release(&mut surface, 2);

    assert_eq!(ws.port().prompts, [ids[3].clone(), ids[1].clone()]);
    let all = view::visible_prompts(ws.library().state(), &ViewQuery::all());
    assert_eq!(contents(&all), ["A", "D", "C", "B", "E"]);
}

#[tokio::test]
async fn test_folder_tab_drag_reorders_folders() {
    let app = TestApp::new();
    let mut ws = app.workspace().await;
    let work = ws.apply(|lib| lib.create_folder("Work")).expect("folder");
    let tabs = ws.port().folders.clone();
    assert_eq!(tabs, [FolderId::all(), FolderId::default_folder(), work.id.clone()]);

    let mut surface = tab_list(&tabs);
    let start = surface.cell_center(2);
    ws.folder_press(&surface, PointerPress::primary(3, work.id.clone(), start));
    ws.folder_motion(&mut surface, 3, Point::new(start.x, start.y - 8.0));
    // Upper half of "My Prompts".
    let mine = surface.bounds_of(&FolderId::default_folder()).expect("bounds");
    ws.folder_motion(&mut surface, 3, Point::new(mine.center_x(), mine.top + 4.0));

    let outcome = ws.folder_release(&mut surface, 3).expect("outcome");
    assert!(matches!(outcome, DragOutcome::Reorder { .. }));
    assert_eq!(ws.port().folders, [FolderId::all(), work.id, FolderId::default_folder()]);
}

#[tokio::test]
async fn test_drop_before_sentinel_keeps_it_first() {
    let app = TestApp::new();
    let mut ws = app.workspace().await;
    let work = ws.apply(|lib| lib.create_folder("Work")).expect("folder");
    let mut surface = tab_list(&ws.port().folders);

    let start = surface.cell_center(2);
    ws.folder_press(&surface, PointerPress::primary(1, work.id.clone(), start));
    ws.folder_motion(&mut surface, 1, Point::new(start.x, start.y - 10.0));
    let all = surface.bounds_of(&FolderId::all()).expect("bounds");
    ws.folder_motion(&mut surface, 1, Point::new(all.center_x(), all.top + 2.0));
    ws.folder_release(&mut surface, 1);

    assert_eq!(ws.port().folders, [FolderId::all(), work.id, FolderId::default_folder()]);
}
