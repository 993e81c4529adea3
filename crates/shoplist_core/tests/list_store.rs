use rusqlite::Connection;
use shoplist_core::db::open_db_in_memory;
use shoplist_core::{EntryId, Filter, ListStore, SqliteSnapshotRepository};
use std::collections::HashSet;
use uuid::Uuid;

fn fresh_store(conn: &Connection) -> ListStore<SqliteSnapshotRepository<'_>> {
    let repo = SqliteSnapshotRepository::try_new(conn).unwrap();
    ListStore::load(repo).unwrap()
}

fn completion_pattern<R: shoplist_core::SnapshotRepository>(store: &ListStore<R>) -> Vec<bool> {
    store.items().iter().map(|entry| entry.completed).collect()
}

#[test]
fn add_appends_in_insertion_order_with_unique_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.add("milk").unwrap();
    store.add("bread").unwrap();
    store.add("eggs").unwrap();

    let titles: Vec<_> = store
        .items()
        .iter()
        .map(|entry| entry.title.as_str())
        .collect();
    assert_eq!(titles, ["milk", "bread", "eggs"]);

    let ids: HashSet<EntryId> = store.items().iter().map(|entry| entry.id).collect();
    assert_eq!(ids.len(), 3);
    assert!(store.items().iter().all(|entry| !entry.completed));
}

#[test]
fn toggle_one_flips_only_the_target() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.add("milk").unwrap();
    let target = store.add("bread").unwrap();
    store.add("eggs").unwrap();

    store.toggle_one(target).unwrap();
    assert_eq!(completion_pattern(&store), [false, true, false]);

    store.toggle_one(target).unwrap();
    assert_eq!(completion_pattern(&store), [false, false, false]);
}

#[test]
fn toggle_one_unknown_id_leaves_list_identical() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.add("milk").unwrap();
    store.add("bread").unwrap();
    let before = store.items().to_vec();

    store.toggle_one(Uuid::new_v4()).unwrap();
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn toggle_all_completes_unless_already_complete() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.add("milk").unwrap();
    let second = store.add("bread").unwrap();
    store.toggle_one(second).unwrap();
    assert_eq!(completion_pattern(&store), [false, true]);

    // Mixed state: not every entry is complete, so everything completes.
    store.toggle_all().unwrap();
    assert_eq!(completion_pattern(&store), [true, true]);

    // Fully complete state: everything uncompletes. Not an involution.
    store.toggle_all().unwrap();
    assert_eq!(completion_pattern(&store), [false, false]);
}

#[test]
fn toggle_all_on_empty_list_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.toggle_all().unwrap();
    assert!(store.items().is_empty());
}

#[test]
fn edit_title_changes_only_the_title() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let target = store.add("oliv oil").unwrap();
    let other = store.add("sugar").unwrap();
    store.toggle_one(target).unwrap();

    store.edit_title(target, "olive oil").unwrap();

    let edited = &store.items()[0];
    assert_eq!(edited.id, target);
    assert_eq!(edited.title, "olive oil");
    assert!(edited.completed);

    let untouched = &store.items()[1];
    assert_eq!(untouched.id, other);
    assert_eq!(untouched.title, "sugar");
}

#[test]
fn edit_title_with_empty_string_keeps_the_old_title() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let target = store.add("milk").unwrap();
    store.edit_title(target, "").unwrap();

    assert_eq!(store.items()[0].title, "milk");
}

#[test]
fn edit_title_unknown_id_leaves_list_identical() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.add("milk").unwrap();
    let before = store.items().to_vec();

    store.edit_title(Uuid::new_v4(), "butter").unwrap();
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn delete_removes_only_the_target() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let first = store.add("milk").unwrap();
    let second = store.add("bread").unwrap();
    let third = store.add("eggs").unwrap();

    store.delete(second).unwrap();

    let remaining: Vec<_> = store.items().iter().map(|entry| entry.id).collect();
    assert_eq!(remaining, [first, third]);
}

#[test]
fn delete_unknown_id_leaves_list_identical() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.add("milk").unwrap();
    store.add("bread").unwrap();
    let before = store.items().to_vec();

    store.delete(Uuid::new_v4()).unwrap();
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn clear_completed_keeps_survivors_in_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let first = store.add("milk").unwrap();
    let second = store.add("bread").unwrap();
    let third = store.add("eggs").unwrap();
    store.toggle_one(first).unwrap();
    store.toggle_one(third).unwrap();

    store.clear_completed().unwrap();

    assert_eq!(store.total_count(), 1);
    assert_eq!(store.items()[0].id, second);
    assert_eq!(store.items()[0].title, "bread");
}

#[test]
fn visible_entries_follow_the_session_filter() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let first = store.add("milk").unwrap();
    let second = store.add("bread").unwrap();
    let third = store.add("eggs").unwrap();
    store.toggle_one(second).unwrap();

    assert_eq!(store.filter(), Filter::All);
    assert_eq!(store.visible_entries().len(), 3);

    store.set_filter(Filter::Active);
    let active: Vec<_> = store
        .visible_entries()
        .iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(active, [first, third]);

    store.set_filter(Filter::Completed);
    let completed: Vec<_> = store
        .visible_entries()
        .iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(completed, [second]);
}

#[test]
fn set_filter_reaches_every_state_and_never_touches_the_list() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.add("milk").unwrap();
    let before = store.items().to_vec();

    for filter in [
        Filter::Active,
        Filter::Completed,
        Filter::All,
        Filter::Completed,
        Filter::Active,
    ] {
        store.set_filter(filter);
        assert_eq!(store.filter(), filter);
        assert_eq!(store.items(), before.as_slice());
    }
}

#[test]
fn snapshot_reports_counts_and_filter() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.add("milk").unwrap();
    let second = store.add("bread").unwrap();
    store.add("eggs").unwrap();
    store.toggle_one(second).unwrap();
    store.set_filter(Filter::Active);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.total, 3);
    assert_eq!(snapshot.active, 2);
    assert_eq!(snapshot.completed, 1);
    assert_eq!(snapshot.filter, Filter::Active);
    assert_eq!(snapshot.visible.len(), 2);
    assert!(snapshot.visible.iter().all(|entry| !entry.completed));
}

#[test]
fn ids_stay_unique_across_operation_sequences() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let first = store.add("milk").unwrap();
    store.add("bread").unwrap();
    store.toggle_one(first).unwrap();
    store.toggle_all().unwrap();
    store.clear_completed().unwrap();
    store.add("eggs").unwrap();
    store.add("flour").unwrap();
    store.delete(first).unwrap();
    store.add("salt").unwrap();

    let ids: HashSet<EntryId> = store.items().iter().map(|entry| entry.id).collect();
    assert_eq!(ids.len(), store.total_count());
}
