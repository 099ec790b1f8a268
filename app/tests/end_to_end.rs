//! End-to-end tests driving a live store through the presentational
//! components.

use todoflow_app::components::{CreateForm, ItemControls, ListView};
use todoflow_app::{TodoApp, TodoId, TodoListState};
use todoflow_core::environment::IdAllocator as _;

#[tokio::test]
async fn seeded_session_create_toggle_remove() {
    let app = TodoApp::new();
    let store = app.store();
    let ids = app.ids();
    let mut form = CreateForm::new(app.store(), app.ids());
    let controls = ItemControls::new(app.store());

    // Fresh session: four seed items, allocator one past them
    assert_eq!(store.state(TodoListState::len), 4);
    assert_eq!(ids.current(), 5);

    // Create
    form.set_input("X");
    let id = form.submit().await;

    assert_eq!(id, TodoId::new(5));
    assert_eq!(form.input(), "");
    assert_eq!(store.state(TodoListState::len), 5);
    store.state(|s| {
        let item = s.get(TodoId::new(5)).unwrap();
        assert_eq!(item.text, "X");
        assert!(!item.done);
        assert_eq!(s.todos.last().map(|t| t.id), Some(TodoId::new(5)));
    });
    assert_eq!(ids.current(), 6);

    // Toggle item 3; everything else keeps its flag
    controls.toggle(TodoId::new(3)).await;
    store.state(|s| {
        assert!(s.get(TodoId::new(3)).unwrap().done);
        assert!(s.get(TodoId::new(1)).unwrap().done);
        assert!(!s.get(TodoId::new(4)).unwrap().done);
    });

    // Remove item 1
    controls.remove(TodoId::new(1)).await;
    assert_eq!(store.state(TodoListState::len), 4);
    assert!(!store.state(|s| s.contains(TodoId::new(1))));

    // Toggle/remove never touch the allocator
    assert_eq!(ids.current(), 6);
}

#[tokio::test]
async fn allocator_mutation_does_not_wake_the_list_channel() {
    let app = TodoApp::new();
    let mut rx = app.subscribe();
    let ids = app.ids();

    ids.next();
    assert!(!rx.has_changed().unwrap());

    // A dispatch does wake it
    ItemControls::new(app.store()).toggle(TodoId::new(3)).await;
    assert!(rx.has_changed().unwrap());
}

#[tokio::test]
async fn no_match_dispatch_still_republishes_the_list() {
    let app = TodoApp::new();
    let mut rx = app.subscribe();
    let controls = ItemControls::new(app.store());

    controls.toggle(TodoId::new(99)).await;

    // The value is unchanged but its publication is observable
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), TodoListState::seeded());
}

#[tokio::test]
async fn empty_submit_creates_an_empty_text_item() {
    let app = TodoApp::new();
    let store = app.store();
    let mut form = CreateForm::new(app.store(), app.ids());

    let id = form.submit().await;

    store.state(|s| {
        let item = s.get(id).unwrap();
        assert_eq!(item.text, "");
        assert!(!item.done);
    });
}

#[tokio::test]
async fn list_view_renders_in_insertion_order() {
    let app = TodoApp::new();
    let mut form = CreateForm::new(app.store(), app.ids());
    let mut view = ListView::new(app.subscribe());

    form.set_input("Ship it");
    form.submit().await;
    assert!(view.changed().await);

    let rendered = view.render();
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("[x] #1"));
    assert!(lines[2].contains("[ ] #3"));
    assert!(lines[4].contains("#5 Ship it"));
}

#[tokio::test]
async fn consecutive_creates_get_consecutive_ids() {
    let app = TodoApp::new();
    let store = app.store();
    let mut form = CreateForm::new(app.store(), app.ids());

    form.set_input("first");
    let first = form.submit().await;
    form.set_input("second");
    let second = form.submit().await;

    assert_eq!(first, TodoId::new(5));
    assert_eq!(second, TodoId::new(6));
    assert_eq!(store.state(TodoListState::len), 6);
}
