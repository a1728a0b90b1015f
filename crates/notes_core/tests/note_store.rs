use notes_core::{IdPolicy, InMemoryNoteStore, NoteStore};

fn snapshot(store: &InMemoryNoteStore) -> Vec<(u32, String, String, bool)> {
    store
        .notes()
        .iter()
        .map(|note| {
            (
                note.id,
                note.title.clone(),
                note.subtitle.clone(),
                note.checked,
            )
        })
        .collect()
}

#[test]
fn groceries_gym_scenario_with_collection_size_ids() {
    let mut store = InMemoryNoteStore::with_id_policy(IdPolicy::CollectionSize);

    let groceries = store.add("Groceries", "Milk, eggs");
    assert_eq!(
        snapshot(&store),
        vec![(0, "Groceries".to_string(), "Milk, eggs".to_string(), false)]
    );

    store.add("Gym", "Leg day");
    let ids: Vec<u32> = store.notes().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![0, 1]);

    store.remove(groceries.key);
    assert_eq!(
        snapshot(&store),
        vec![(1, "Gym".to_string(), "Leg day".to_string(), false)]
    );

    // Size-based ids collide after a delete.
    let reused = store.add("Read", "Chapter 3");
    assert_eq!(reused.id, 1);
    let ids: Vec<u32> = store.notes().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![1, 1]);
}

#[test]
fn groceries_gym_scenario_with_monotonic_ids() {
    let mut store = InMemoryNoteStore::new();
    let groceries = store.add("Groceries", "Milk, eggs");
    store.add("Gym", "Leg day");
    store.remove(groceries.key);

    let next = store.add("Read", "Chapter 3");
    assert_eq!(next.id, 2);
    let ids: Vec<u32> = store.notes().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn find_returns_first_of_colliding_ids() {
    let mut store = InMemoryNoteStore::with_id_policy(IdPolicy::CollectionSize);
    let first = store.add("first", "a");
    store.add("second", "b");
    store.remove(first.key);
    let third = store.add("third", "c");

    let found = store.find(1).expect("id 1 should resolve");
    assert_eq!(found.title, "second");
    assert_ne!(found.key, third.key);
    assert!(store.find(0).is_none());
}

#[test]
fn toggle_twice_restores_and_leaves_others_alone() {
    let mut store = InMemoryNoteStore::new();
    let first = store.add("first", "a");
    let second = store.add("second", "b");

    assert!(store.toggle_checked(first.key).unwrap());
    assert!(!store.get(second.key).unwrap().checked);
    assert!(!store.toggle_checked(first.key).unwrap());

    assert!(store.notes().iter().all(|note| !note.checked));
}

#[test]
fn remove_by_identity_keeps_order_of_the_rest() {
    let mut store = InMemoryNoteStore::with_id_policy(IdPolicy::CollectionSize);
    let a = store.add("alpha", "1");
    let b = store.add("bravo", "2");
    store.remove(a.key);
    let c = store.add("charlie", "3");
    let d = store.add("delta", "4");
    // b and c share id 1; removing c must leave b.
    assert_eq!(b.id, c.id);

    let removed = store.remove(c.key).expect("c should be removed");
    assert_eq!(removed.title, "charlie");

    let titles: Vec<&str> = store.notes().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["bravo", "delta"]);
    assert_eq!(store.get(d.key).unwrap().id, d.id);
}

#[test]
fn update_overwrites_text_only() {
    let mut store = InMemoryNoteStore::new();
    store.add("first", "a");
    let target = store.add("second", "b");
    store.add("third", "c");
    store.toggle_checked(target.key).unwrap();

    store.update(target.key, "second v2", "b v2").unwrap();

    let updated = &store.notes()[1];
    assert_eq!(updated.key, target.key);
    assert_eq!(updated.id, target.id);
    assert_eq!(updated.title, "second v2");
    assert_eq!(updated.subtitle, "b v2");
    assert!(updated.checked);
    assert_eq!(store.len(), 3);
}
