//! Ordered list of browser rows
//!
//! The store owns the rows of one browsing context. Every mutation that is
//! asked to notify reports the affected position to the attached
//! [`ListObserver`], which is how the rendering host learns what to re-query.

use std::fmt;

use crate::entry::{name_key, Entry, MediaEntry, SeparatorEntry};
use crate::error::{BrowserError, Result};
use crate::metadata::{MediaMetadata, MediaSource, MetadataProvider};

/// Change notification for the rendering host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    InsertedAt(usize),
    RemovedAt(usize),
    ChangedAt(usize),
    FullReset,
}

/// Rendering side of the list. Receives positional change notifications.
pub trait ListObserver {
    fn inserted_at(&mut self, index: usize);
    fn removed_at(&mut self, index: usize);
    fn changed_at(&mut self, index: usize);
    fn full_reset(&mut self);

    fn on_change(&mut self, change: ListChange) {
        match change {
            ListChange::InsertedAt(index) => self.inserted_at(index),
            ListChange::RemovedAt(index) => self.removed_at(index),
            ListChange::ChangedAt(index) => self.changed_at(index),
            ListChange::FullReset => self.full_reset(),
        }
    }
}

/// Item accepted by [`ListStore::add_item`] style calls: a ready entry or a raw handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewItem {
    Entry(Entry),
    Source(MediaSource),
}

impl From<Entry> for NewItem {
    fn from(entry: Entry) -> Self {
        NewItem::Entry(entry)
    }
}

impl From<MediaEntry> for NewItem {
    fn from(media: MediaEntry) -> Self {
        NewItem::Entry(Entry::Media(media))
    }
}

impl From<SeparatorEntry> for NewItem {
    fn from(separator: SeparatorEntry) -> Self {
        NewItem::Entry(Entry::Separator(separator))
    }
}

impl From<MediaSource> for NewItem {
    fn from(source: MediaSource) -> Self {
        NewItem::Source(source)
    }
}

#[derive(Default)]
pub struct ListStore {
    entries: Vec<Entry>,
    observer: Option<Box<dyn ListObserver>>,
}

impl fmt::Debug for ListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStore")
            .field("entries", &self.entries)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Box<dyn ListObserver>) -> Self {
        Self {
            entries: Vec::new(),
            observer: Some(observer),
        }
    }

    /// Attach the rendering host. Replaces a previously attached observer.
    pub fn set_observer(&mut self, observer: Box<dyn ListObserver>) {
        self.observer = Some(observer);
    }

    fn notify(&mut self, change: ListChange) {
        log::debug!("list change: {:?}", change);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_change(change);
        }
    }

    /// Tell the observer to re-query every row.
    ///
    /// Call after a batch of `notify = false` insertions or after [`ListStore::add_all`].
    pub fn refresh(&mut self) {
        self.notify(ListChange::FullReset);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.notify(ListChange::FullReset);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry at the front or the end.
    ///
    /// Media entries with a dot-prefixed title are dropped silently.
    /// Returns whether the entry was inserted.
    pub fn add_item(&mut self, entry: impl Into<Entry>, notify: bool, at_front: bool) -> bool {
        let entry = entry.into();
        if entry.is_hidden() {
            return false;
        }
        let position = if at_front { 0 } else { self.entries.len() };
        self.entries.insert(position, entry);
        if notify {
            self.notify(ListChange::InsertedAt(position));
        }
        true
    }

    /// Wrap a raw handle into a media entry and insert it.
    ///
    /// If the provider can't resolve the handle the entry is still listed,
    /// as [`crate::MediaKind::Other`] without description.
    pub fn add_source(&mut self, source: &MediaSource, metadata: &dyn MetadataProvider, notify: bool, at_front: bool) -> bool {
        let meta = metadata.resolve(source).unwrap_or_else(|err| {
            log::warn!("{}", err);
            MediaMetadata::fallback(source)
        });
        self.add_item(MediaEntry::from(meta), notify, at_front)
    }

    /// Replace the whole content. No notification is sent, callers refresh the view themselves.
    pub fn add_all(&mut self, items: impl IntoIterator<Item = MediaEntry>) {
        self.entries.clear();
        self.entries.extend(items.into_iter().filter(|media| !media.is_hidden()).map(Entry::Media));
    }

    pub fn remove_item(&mut self, position: usize, notify: bool) -> Result<Entry> {
        self.check_bounds(position)?;
        let entry = self.entries.remove(position);
        if notify {
            self.notify(ListChange::RemovedAt(position));
        }
        Ok(entry)
    }

    /// Swap the entry at `position`. Hidden media entries are refused and leave the row untouched.
    pub fn replace_item(&mut self, position: usize, entry: impl Into<Entry>, notify: bool) -> Result<bool> {
        self.check_bounds(position)?;
        let entry = entry.into();
        if entry.is_hidden() {
            return Ok(false);
        }
        self.entries[position] = entry;
        if notify {
            self.notify(ListChange::ChangedAt(position));
        }
        Ok(true)
    }

    pub fn get_item(&self, position: usize) -> Result<&Entry> {
        self.entries.get(position).ok_or(BrowserError::OutOfRange {
            index: position,
            len: self.entries.len(),
        })
    }

    pub fn get_item_count(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Row index of the media entry with the given location
    pub fn position_of(&self, location: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| matches!(entry, Entry::Media(media) if media.location == location))
    }

    /// Directories first, then everything else, both by case-insensitive title.
    ///
    /// Separators do not survive the sort.
    pub fn sort_list(&mut self) {
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        let mut dropped_separators = 0;
        for entry in self.entries.drain(..) {
            match entry {
                Entry::Media(media) if media.is_directory() => dirs.push(media),
                Entry::Media(media) => files.push(media),
                Entry::Separator(_) => dropped_separators += 1,
            }
        }
        if dropped_separators > 0 {
            log::warn!("sort dropped {} separator row(s)", dropped_separators);
        }
        dirs.sort_by_cached_key(name_key);
        files.sort_by_cached_key(name_key);
        self.entries.extend(dirs.into_iter().chain(files).map(Entry::Media));
        self.notify(ListChange::FullReset);
    }

    fn check_bounds(&self, position: usize) -> Result<()> {
        if position < self.entries.len() {
            Ok(())
        } else {
            Err(BrowserError::OutOfRange {
                index: position,
                len: self.entries.len(),
            })
        }
    }
}
