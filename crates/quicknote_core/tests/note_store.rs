use quicknote_core::{
    sort_for_display, KeyValueSlot, MemorySlot, NotePersistence, NoteStore, NoteUpdate,
    SqliteSlot,
};
use uuid::Uuid;

fn memory_store() -> NoteStore<MemorySlot> {
    NoteStore::open(NotePersistence::new(MemorySlot::new()))
}

fn assert_persisted<S: KeyValueSlot>(store: &NoteStore<S>) {
    assert_eq!(store.persistence().load(), store.notes());
}

#[test]
fn every_mutation_round_trips_through_storage() {
    let mut store = memory_store();
    assert_persisted(&store);

    let first = store.create();
    assert_persisted(&store);
    let second = store.create();
    assert_persisted(&store);

    store.update(first, NoteUpdate::Title("Title".into()));
    assert_persisted(&store);
    store.update(second, NoteUpdate::Body("multi\nline \"body\"".into()));
    assert_persisted(&store);
    store.update(first, NoteUpdate::Tags(vec!["a".into(), "a".into(), "b".into()]));
    assert_persisted(&store);
    store.update(second, NoteUpdate::TogglePin);
    assert_persisted(&store);
    store.update(second, NoteUpdate::SetPinned(false));
    assert_persisted(&store);

    store.delete(first);
    assert_persisted(&store);
    store.delete(Uuid::new_v4());
    assert_persisted(&store);
}

#[test]
fn update_with_unknown_id_leaves_collection_unchanged() {
    let mut store = memory_store();
    let id = store.create();
    store.update(id, NoteUpdate::Title("kept".into()));
    store.create();
    let before = store.notes().to_vec();

    assert!(!store.update(Uuid::new_v4(), NoteUpdate::Title("lost".into())));
    assert!(!store.update(Uuid::new_v4(), NoteUpdate::TogglePin));

    assert_eq!(store.notes(), before.as_slice());
}

#[test]
fn delete_with_unknown_id_is_a_no_op() {
    let mut store = memory_store();
    store.create();
    let before = store.notes().to_vec();

    store.delete(Uuid::new_v4());
    assert_eq!(store.notes(), before.as_slice());
}

#[test]
fn updated_at_never_precedes_created_at() {
    let mut store = memory_store();
    let id = store.create();
    store.update(id, NoteUpdate::Body("x".into()));

    let note = store.get(id).unwrap();
    assert!(note.updated_at >= note.created_at);
}

#[test]
fn end_to_end_note_lifecycle() {
    let mut store = memory_store();
    let existing = store.create();
    store.update(existing, NoteUpdate::Body("unrelated".into()));

    let before = store.len();
    let id = store.create();
    assert_eq!(store.len(), before + 1);
    assert_eq!(store.notes()[0].id, id);

    store.update(id, NoteUpdate::Title("Groceries".into()));
    assert!(store.filter("group").is_empty());
    let hits = store.filter("grocer");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, id);

    store.update(id, NoteUpdate::TogglePin);
    let newer = store.create();
    store.update(newer, NoteUpdate::Title("later".into()));
    let ordered = sort_for_display(&store.filter(""));
    assert_eq!(ordered[0].id, id);

    let before_delete = store.len();
    store.delete(id);
    assert_eq!(store.len(), before_delete - 1);
    for query in ["", "grocer", "Groceries", "later"] {
        assert!(store.filter(query).iter().all(|note| note.id != id));
    }
}

#[test]
fn sqlite_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");

    let id = {
        let mut store = NoteStore::open(NotePersistence::new(SqliteSlot::open(&path).unwrap()));
        let id = store.create();
        store.update(id, NoteUpdate::Title("Persisted".into()));
        store.update(id, NoteUpdate::Tags(vec!["home".into()]));
        id
    };

    let store = NoteStore::open(NotePersistence::new(SqliteSlot::open(&path).unwrap()));
    assert_eq!(store.len(), 1);
    let note = store.get(id).unwrap();
    assert_eq!(note.title, "Persisted");
    assert_eq!(note.tags, vec!["home".to_string()]);
}

#[test]
fn stored_blob_uses_versioned_key_and_camel_case_fields() {
    let mut store = memory_store();
    let id = store.create();
    store.update(id, NoteUpdate::Tags(vec!["t".into()]));

    let raw = store.persistence().slot().read("notes.v2").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], id.to_string());
    assert_eq!(records[0]["pinned"], false);
    assert_eq!(records[0]["tags"], serde_json::json!(["t"]));
    assert!(records[0]["createdAt"].is_string());
    assert!(records[0]["updatedAt"].is_string());
}

#[test]
fn loads_blob_written_by_earlier_sessions() {
    let raw = r#"[
        {"id":"8f14e45f-ceea-467f-a9f5-7a1b2c3d4e5f","title":"Old","body":"",
         "createdAt":"2024-03-01T10:00:00.000Z","updatedAt":"2024-03-02T10:00:00.000Z",
         "pinned":true,"tags":["x"]}
    ]"#;
    let store = NoteStore::open(NotePersistence::new(
        MemorySlot::new().with_entry("notes.v2", raw),
    ));

    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].title, "Old");
    assert!(store.notes()[0].pinned);
}
