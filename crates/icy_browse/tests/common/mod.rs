//! Test doubles for the list collaborators

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use icy_browse::{AnchorKind, BrowserError, BrowserHost, ListChange, ListObserver, MediaEntry, MediaKind, MediaMetadata, MediaSource, MetadataProvider, Result};

/// Records every notification the store sends
#[derive(Clone, Default)]
pub struct ChangeLog(pub Rc<RefCell<Vec<ListChange>>>);

impl ChangeLog {
    pub fn changes(&self) -> Vec<ListChange> {
        self.0.borrow().clone()
    }
}

impl ListObserver for ChangeLog {
    fn inserted_at(&mut self, index: usize) {
        self.0.borrow_mut().push(ListChange::InsertedAt(index));
    }

    fn removed_at(&mut self, index: usize) {
        self.0.borrow_mut().push(ListChange::RemovedAt(index));
    }

    fn changed_at(&mut self, index: usize) {
        self.0.borrow_mut().push(ListChange::ChangedAt(index));
    }

    fn full_reset(&mut self) {
        self.0.borrow_mut().push(ListChange::FullReset);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Browse(String, usize),
    Open(String),
    ContextMenu(AnchorKind, usize),
}

#[derive(Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl BrowserHost for RecordingHost {
    fn browse(&mut self, entry: &MediaEntry, index: usize) {
        self.calls.push(HostCall::Browse(entry.title.clone(), index));
    }

    fn open_media(&mut self, entry: &MediaEntry) {
        self.calls.push(HostCall::Open(entry.title.clone()));
    }

    fn show_context_menu(&mut self, anchor: AnchorKind, index: usize) {
        self.calls.push(HostCall::ContextMenu(anchor, index));
    }
}

/// Provider with a fixed set of writable locations. Sources whose location
/// contains "broken" fail to resolve.
#[derive(Default)]
pub struct FakeMetadata {
    pub writable: HashSet<String>,
}

impl FakeMetadata {
    pub fn writable(locations: &[&str]) -> Self {
        Self {
            writable: locations.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl MetadataProvider for FakeMetadata {
    fn resolve(&self, source: &MediaSource) -> Result<MediaMetadata> {
        if source.location.contains("broken") {
            return Err(BrowserError::metadata_unavailable(&source.location, "no parser"));
        }
        let mut meta = MediaMetadata::fallback(source);
        if let Some(title) = &source.title {
            meta.title = title.clone();
        }
        meta.description = source.description.clone();
        meta.kind = if source.is_directory { MediaKind::Directory } else { icy_browse::metadata::kind_from_extension(&meta.location) };
        Ok(meta)
    }

    fn can_write(&self, location: &str) -> bool {
        self.writable.contains(location)
    }
}

pub fn file(title: &str) -> MediaEntry {
    MediaEntry::new(title, MediaKind::Other, format!("/media/{title}"))
}

pub fn dir(title: &str) -> MediaEntry {
    MediaEntry::new(title, MediaKind::Directory, format!("/media/{title}"))
}
