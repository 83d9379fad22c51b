//! End-to-end store lifecycle over real adapters

use pretty_assertions::assert_eq;
use trellis_persist::{DirStore, KeyValueStore, MemoryStore};
use trellis_store::prelude::*;
use trellis_test_utils::{draft, seeded_tree, shared_adapter, tree_on, TEST_KEY};

#[test]
fn mutations_write_through_to_adapter() {
    let adapter = shared_adapter();
    let mut store = tree_on(adapter.clone());

    assert!(!adapter.contains_key(TEST_KEY));
    store.add_task(draft("a")).unwrap();
    assert!(adapter.contains_key(TEST_KEY));
}

#[test]
fn tree_survives_reopen() {
    let adapter = shared_adapter();
    {
        let mut store = tree_on(adapter.clone());
        let root = store.add_task(draft("root")).unwrap();
        store.add_subtask(root, draft("child")).unwrap();
        store.set_status(root, Status::InProgress);
    }

    let store = tree_on(adapter);
    assert_eq!(store.len(), 1);
    assert_eq!(store.total_count(), 2);
    assert_eq!(store.tasks()[0].title, "root");
    assert_eq!(store.tasks()[0].status, Status::InProgress);
    assert_eq!(store.tasks()[0].subtasks[0].title, "child");
}

#[test]
fn rejected_mutations_do_not_touch_storage() {
    let adapter = shared_adapter();
    let mut store = tree_on(adapter.clone());

    store.add_task(draft("  "));
    store.delete_task(TaskId::new());
    store.edit_task(TaskId::new(), TaskEdit::new().title("x"));

    assert!(!adapter.contains_key(TEST_KEY));
}

#[test]
fn malformed_snapshot_degrades_to_empty_tree() {
    let adapter = shared_adapter();
    adapter.save(TEST_KEY, "{ not json ").unwrap();

    let store = tree_on(adapter);
    assert!(store.is_empty());
}

#[test]
fn reload_picks_up_external_writes() {
    let adapter = shared_adapter();
    let mut store = tree_on(adapter.clone());
    store.add_task(draft("mine")).unwrap();

    // Another writer replaces the record wholesale.
    adapter
        .save(
            TEST_KEY,
            r#"[{"id":"01ARZ3NDEKTSV4RRFFQ69G5FAV","title":"theirs","subtasks":[]}]"#,
        )
        .unwrap();

    let restored = store.reload().unwrap();
    assert_eq!(restored, 1);
    assert_eq!(store.tasks()[0].title, "theirs");
}

#[test]
fn full_crud_cycle() {
    let (mut store, ids) = seeded_tree();
    assert_eq!(store.len(), 3);
    assert_eq!(store.total_count(), 4);

    assert!(store.edit_task(ids[1], TaskEdit::new().title("write the docs")));
    assert!(store.delete_task(ids[0])); // takes its subtask with it
    assert_eq!(store.total_count(), 2);

    let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["write the docs", "tidy backlog"]);
}

#[test]
fn filters_and_sorts_are_views() {
    let (store, _ids) = seeded_tree();

    let high = store.filter_tasks(&TaskFilter::all().with_priority(Priority::High));
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].title, "design homepage");

    let by_priority = store.sorted_tasks(SortField::Priority, SortOrder::Desc);
    assert_eq!(by_priority[0].priority, Priority::High);
    assert_eq!(by_priority[2].priority, Priority::Low);

    // Underlying sequence is untouched by either view.
    assert_eq!(store.len(), 3);
    assert_eq!(store.tasks()[0].title, "design homepage");
}

#[test]
fn registry_round_trips_projects_and_trees_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let (website, campaign) = {
        let adapter = DirStore::open(dir.path()).unwrap();
        let mut reg = ProjectRegistry::open(adapter, StoreConfig::new());
        let website = reg.create_project("Website Redesign").unwrap();
        let campaign = reg.create_project("Marketing Campaign").unwrap();
        reg.set_active(website);

        let mut tree = reg.tree(website).unwrap();
        tree.add_task(draft("design homepage")).unwrap();
        tree.add_task(draft("set up analytics")).unwrap();
        (website, campaign)
    };

    let adapter = DirStore::open(dir.path()).unwrap();
    let reg = ProjectRegistry::open(adapter, StoreConfig::new());

    assert_eq!(reg.len(), 2);
    assert_eq!(reg.active().unwrap().id, website);
    assert_eq!(reg.task_count(website), 2);
    assert_eq!(reg.task_count(campaign), 0);
}

#[test]
fn single_axis_config_applies_through_registry_trees() {
    let config = StoreConfig::new().with_axis_mode(AxisMode::Single);
    let mut reg = ProjectRegistry::open(MemoryStore::new(), config);
    let id = reg.create_project("p").unwrap();

    let mut tree = reg.tree(id).unwrap();
    let task = tree
        .add_task(TaskDraft::new("t").with_importance(Importance::High))
        .unwrap();

    assert_eq!(tree.find(task).unwrap().importance, None);
}
