//! Tests for list store ordering, filtering and notifications

mod common;

use common::{dir, file, ChangeLog};
use icy_browse::{BrowserError, Entry, ListChange, ListStore, MediaEntry, MediaKind, SeparatorEntry};
use pretty_assertions::assert_eq;

fn titles(store: &ListStore) -> Vec<String> {
    store.iter().map(|entry| entry.label().to_string()).collect()
}

fn assert_sorted(store: &ListStore) {
    let media: Vec<&MediaEntry> = store.iter().filter_map(Entry::as_media).collect();
    for pair in media.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.is_directory() == b.is_directory() {
            assert!(a.title.to_lowercase() <= b.title.to_lowercase(), "{} sorted after {}", a.title, b.title);
        } else {
            assert!(a.is_directory() && !b.is_directory(), "file {} before directory {}", a.title, b.title);
        }
    }
}

#[test]
fn append_keeps_insertion_order() {
    let mut store = ListStore::new();
    for title in ["one", ".two", "three", "four", ".five"] {
        store.add_item(file(title), false, false);
    }
    assert_eq!(titles(&store), vec!["one", "three", "four"]);
}

#[test]
fn hidden_titles_never_change_the_count() {
    let mut store = ListStore::new();
    store.add_item(file("visible"), false, false);
    for title in [".", "..", ".nomedia", ".Trash-1000"] {
        let before = store.get_item_count();
        assert!(!store.add_item(file(title), true, false));
        assert!(!store.add_item(dir(title), true, true));
        assert_eq!(store.get_item_count(), before);
    }
}

#[test]
fn sort_scenario() {
    let mut store = ListStore::new();
    store.add_item(file("Zebra"), false, false);
    store.add_item(file(".hidden"), false, false);
    store.add_item(dir("Apps"), false, false);
    store.add_item(file("banana"), false, false);

    store.sort_list();

    assert_eq!(titles(&store), vec!["Apps", "banana", "Zebra"]);
}

#[test]
fn sort_puts_directories_first_and_is_idempotent() {
    let mut store = ListStore::new();
    for entry in [file("b.mkv"), dir("music"), file("A.mp3"), dir("Movies"), file("c.srt"), dir("alpha"), file("a.txt")] {
        store.add_item(entry, false, false);
    }
    store.sort_list();
    assert_sorted(&store);
    let once = titles(&store);
    assert_eq!(once, vec!["alpha", "Movies", "music", "A.mp3", "a.txt", "b.mkv", "c.srt"]);

    store.sort_list();
    assert_eq!(titles(&store), once);
}

#[test]
fn sort_keeps_insertion_order_for_equal_names() {
    let mut store = ListStore::new();
    for entry in [
        MediaEntry::new("Readme", MediaKind::Other, "/first"),
        MediaEntry::new("readme", MediaKind::Other, "/second"),
        file("a"),
        MediaEntry::new("README", MediaKind::Other, "/third"),
    ] {
        store.add_item(entry, false, false);
    }
    store.sort_list();
    let locations: Vec<&str> = store.iter().filter_map(Entry::as_media).map(|m| m.location.as_str()).collect();
    assert_eq!(locations, vec!["/media/a", "/first", "/second", "/third"]);
}

#[test]
fn sort_emits_full_reset() {
    let log = ChangeLog::default();
    let mut store = ListStore::with_observer(Box::new(log.clone()));
    store.add_item(file("b"), false, false);
    store.add_item(SeparatorEntry::new("Section"), false, false);
    store.sort_list();
    assert_eq!(log.changes(), vec![ListChange::FullReset]);
    assert_eq!(titles(&store), vec!["b"]);
}

#[test]
fn remove_then_get_fails_out_of_range() {
    let mut store = ListStore::new();
    store.add_item(file("a"), false, false);
    store.add_item(file("b"), false, false);

    let removed = store.remove_item(1, false).unwrap();
    assert_eq!(removed.label(), "b");
    assert!(matches!(store.get_item(1), Err(BrowserError::OutOfRange { index: 1, len: 1 })));
    assert!(matches!(store.remove_item(5, true), Err(BrowserError::OutOfRange { index: 5, len: 1 })));
}

#[test]
fn insert_at_front_shifts_rows() {
    let log = ChangeLog::default();
    let mut store = ListStore::with_observer(Box::new(log.clone()));
    store.add_item(file("first"), false, false);
    store.add_item(file("second"), false, false);

    assert!(store.add_item(file("new"), true, true));

    assert_eq!(log.changes(), vec![ListChange::InsertedAt(0)]);
    assert_eq!(titles(&store), vec!["new", "first", "second"]);
    assert_eq!(store.get_item(1).unwrap().label(), "first");
}

#[test]
fn append_notifies_last_index() {
    let log = ChangeLog::default();
    let mut store = ListStore::new();
    store.set_observer(Box::new(log.clone()));
    store.add_item(file("a"), true, false);
    store.add_item(file("b"), true, false);
    store.remove_item(0, true).unwrap();
    store.remove_item(0, false).unwrap();
    assert_eq!(log.changes(), vec![ListChange::InsertedAt(0), ListChange::InsertedAt(1), ListChange::RemovedAt(0)]);
    assert!(store.is_empty());
}

#[test]
fn clear_resets() {
    let log = ChangeLog::default();
    let mut store = ListStore::with_observer(Box::new(log.clone()));
    store.add_item(file("a"), false, false);
    store.clear();
    assert!(store.is_empty());
    assert_eq!(log.changes(), vec![ListChange::FullReset]);
}

#[test]
fn silent_batch_needs_explicit_refresh() {
    let log = ChangeLog::default();
    let mut store = ListStore::with_observer(Box::new(log.clone()));
    store.add_item(file("a"), false, false);
    store.add_item(dir("b"), false, false);
    store.add_all(vec![file("x"), file("y"), file("z")]);
    assert!(log.changes().is_empty());

    store.refresh();

    assert_eq!(log.changes(), vec![ListChange::FullReset]);
    assert_eq!(titles(&store), vec!["x", "y", "z"]);
}

#[test]
fn add_all_is_not_additive() {
    let mut store = ListStore::new();
    store.add_item(SeparatorEntry::new("Old"), false, false);
    store.add_all(vec![file("x"), dir("y")]);
    assert_eq!(titles(&store), vec!["x", "y"]);
    assert_eq!(store.get_item(1).unwrap().as_media().map(|m| m.kind), Some(MediaKind::Directory));
}
