//! Browser list adapter
//!
//! Owns the [`ListStore`] of a browsing context together with the presenter
//! and the metadata provider, and answers the row queries of a rendering host.

use crate::entry::{Entry, MediaEntry, RowKind};
use crate::error::Result;
use crate::metadata::MetadataProvider;
use crate::presenter::{FileIcon, Presenter, RowBinding};
use crate::router::{BrowserHost, InputKind, InteractionRouter, RouteOutcome};
use crate::store::{ListObserver, ListStore, NewItem};

pub struct BrowserAdapter {
    store: ListStore,
    presenter: Presenter,
    metadata: Box<dyn MetadataProvider>,
}

impl BrowserAdapter {
    pub fn new(metadata: Box<dyn MetadataProvider>) -> Self {
        Self {
            store: ListStore::new(),
            presenter: Presenter::new(),
            metadata,
        }
    }

    pub fn with_folder_icon(mut self, folder_icon: FileIcon) -> Self {
        self.presenter.set_folder_icon(folder_icon);
        self
    }

    pub fn set_observer(&mut self, observer: Box<dyn ListObserver>) {
        self.store.set_observer(observer);
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ListStore {
        &mut self.store
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Insert an entry or a raw media handle. Returns whether a row was added.
    pub fn add_item(&mut self, item: impl Into<NewItem>, notify: bool, at_front: bool) -> bool {
        match item.into() {
            NewItem::Entry(entry) => self.store.add_item(entry, notify, at_front),
            NewItem::Source(source) => self.store.add_source(&source, self.metadata.as_ref(), notify, at_front),
        }
    }

    pub fn add_all(&mut self, items: impl IntoIterator<Item = MediaEntry>) {
        self.store.add_all(items);
    }

    pub fn remove_item(&mut self, position: usize, notify: bool) -> Result<Entry> {
        self.store.remove_item(position, notify)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Full reset notification after silent batch loads
    pub fn refresh(&mut self) {
        self.store.refresh();
    }

    pub fn sort_list(&mut self) {
        self.store.sort_list();
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.store.get_item_count()
    }

    pub fn row_kind(&self, index: usize) -> Result<RowKind> {
        self.store.get_item(index).map(Presenter::classify)
    }

    pub fn bind_row(&self, index: usize) -> Result<RowBinding<'_>> {
        let entry = self.store.get_item(index)?;
        Ok(self.presenter.bind(entry, self.metadata.as_ref()))
    }

    pub fn handle_input(&self, index: usize, input: InputKind, host: &mut dyn BrowserHost) -> RouteOutcome {
        InteractionRouter::new(&self.store, self.metadata.as_ref()).dispatch(index, input, host)
    }
}
