use contactbook_core::{Contact, ContactDraft, ContactStore, RepoError, SqliteContactStore};
use tempfile::TempDir;

fn temp_store() -> (TempDir, SqliteContactStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteContactStore::new(dir.path().join("phonebook.sqlite3"));
    store.initialize().unwrap();
    (dir, store)
}

fn draft(name: &str, phone_number: &str, email: &str) -> ContactDraft {
    ContactDraft::new(name, phone_number, email)
}

#[test]
fn create_then_list_all_roundtrip() {
    let (_dir, store) = temp_store();

    let id = store.create(&draft("Alice", "555-1111", "a@x.com")).unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(
        all,
        vec![Contact {
            id,
            name: "Alice".to_string(),
            phone_number: "555-1111".to_string(),
            email: "a@x.com".to_string(),
        }]
    );
}

#[test]
fn initialize_is_idempotent_and_keeps_rows() {
    let (_dir, store) = temp_store();
    store.create(&draft("Alice", "555-1111", "")).unwrap();
    let before = store.list_all().unwrap();

    store.initialize().unwrap();
    store.initialize().unwrap();

    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn initialize_creates_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteContactStore::new(dir.path().join("fresh.sqlite3"));
    assert!(!store.db_path().exists());

    store.initialize().unwrap();

    assert!(store.db_path().exists());
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn list_all_orders_by_name_and_keeps_insertion_order_on_ties() {
    let (_dir, store) = temp_store();
    let carol = store.create(&draft("Carol", "3", "")).unwrap();
    let alice_first = store.create(&draft("Alice", "1", "first")).unwrap();
    let bob = store.create(&draft("Bob", "2", "")).unwrap();
    let alice_second = store.create(&draft("Alice", "1", "second")).unwrap();

    let ids: Vec<_> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|contact| contact.id)
        .collect();
    assert_eq!(ids, vec![alice_first, alice_second, bob, carol]);
}

#[test]
fn search_returns_case_insensitive_substring_matches_in_insertion_order() {
    let (_dir, store) = temp_store();
    let zalia = store.create(&draft("Zalia", "1", "")).unwrap();
    store.create(&draft("Bob", "2", "")).unwrap();
    let alice = store.create(&draft("ALICE", "3", "")).unwrap();

    let ids: Vec<_> = store
        .search("ali")
        .unwrap()
        .into_iter()
        .map(|contact| contact.id)
        .collect();
    assert_eq!(ids, vec![zalia, alice]);

    assert!(store.search("nobody").unwrap().is_empty());
    assert_eq!(store.search("").unwrap().len(), 3);
}

#[test]
fn delete_removes_only_the_target() {
    let (_dir, store) = temp_store();
    let alice = store.create(&draft("Alice", "1", "")).unwrap();
    store.create(&draft("Bob", "2", "")).unwrap();
    store.create(&draft("Carol", "3", "")).unwrap();
    let before = store.list_all().unwrap();

    assert!(store.delete(alice).unwrap());

    let after = store.list_all().unwrap();
    let expected: Vec<_> = before.into_iter().filter(|c| c.id != alice).collect();
    assert_eq!(after, expected);
}

#[test]
fn delete_of_missing_id_is_a_reported_no_op() {
    let (_dir, store) = temp_store();
    store.create(&draft("Alice", "1", "")).unwrap();

    assert!(!store.delete(999).unwrap());
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn update_changes_only_the_target_row() {
    let (_dir, store) = temp_store();
    let alice = store.create(&draft("Alice", "1", "a@x.com")).unwrap();
    let bob = store.create(&draft("Bob", "2", "")).unwrap();
    let bob_before = store.get(bob).unwrap().unwrap();

    store
        .update(alice, &draft("Alicia", "111", "alicia@x.com"))
        .unwrap();

    let alice_after = store.get(alice).unwrap().unwrap();
    assert_eq!(alice_after.id, alice);
    assert_eq!(alice_after.name, "Alicia");
    assert_eq!(alice_after.phone_number, "111");
    assert_eq!(alice_after.email, "alicia@x.com");
    assert_eq!(store.get(bob).unwrap().unwrap(), bob_before);
}

#[test]
fn update_of_missing_id_fails_with_not_found() {
    let (_dir, store) = temp_store();

    let err = store.update(7, &draft("Ghost", "0", "")).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(7)));
}

#[test]
fn ids_are_not_reused_after_deleting_the_newest_contact() {
    let (_dir, store) = temp_store();
    store.create(&draft("Alice", "1", "")).unwrap();
    let bob = store.create(&draft("Bob", "2", "")).unwrap();
    store.delete(bob).unwrap();

    let carol = store.create(&draft("Carol", "3", "")).unwrap();
    assert!(carol > bob);
}

#[test]
fn create_rejects_missing_required_fields() {
    let (_dir, store) = temp_store();

    let err = store.create(&draft("Alice", "", "")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn alice_and_bob_end_to_end() {
    let (_dir, store) = temp_store();
    let alice = store.create(&draft("Alice", "555-1111", "a@x.com")).unwrap();
    let bob = store.create(&draft("Bob", "555-2222", "")).unwrap();

    let listed: Vec<_> = store.list_all().unwrap().into_iter().map(|c| c.id).collect();
    assert_eq!(listed, vec![alice, bob]);

    let found = store.search("ali").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, alice);

    store.delete(alice).unwrap();
    let remaining = store.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, bob);
    assert_eq!(remaining[0].email, "");
}
