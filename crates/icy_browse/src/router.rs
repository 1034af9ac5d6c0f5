//! Input routing
//!
//! Translates raw row input into host actions. The row is resolved against the
//! live store at the moment of the event.

use crate::entry::{Entry, MediaEntry};
use crate::metadata::MetadataProvider;
use crate::presenter::Presenter;
use crate::store::ListStore;

/// Raw input bound to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Tap,
    LongPress,
    /// Tap on the context affordance control of the row
    ContextAffordanceTap,
}

/// Where the host should anchor the context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    Title,
    Affordance,
}

/// Screen controller that owns the list
pub trait BrowserHost {
    /// Navigate into a directory row
    fn browse(&mut self, entry: &MediaEntry, index: usize);

    /// Open or play a non-directory row
    fn open_media(&mut self, entry: &MediaEntry);

    fn show_context_menu(&mut self, anchor: AnchorKind, index: usize);
}

/// What a dispatch did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Browse,
    Open,
    ContextMenu(AnchorKind),
    Ignored,
}

impl RouteOutcome {
    /// Whether the input was handled and default handling must not run
    pub fn is_consumed(&self) -> bool {
        !matches!(self, RouteOutcome::Ignored)
    }
}

/// Dispatch layer between row input and the host. Never mutates the store.
pub struct InteractionRouter<'a> {
    store: &'a ListStore,
    metadata: &'a dyn MetadataProvider,
}

impl<'a> InteractionRouter<'a> {
    pub fn new(store: &'a ListStore, metadata: &'a dyn MetadataProvider) -> Self {
        Self { store, metadata }
    }

    pub fn dispatch(&self, index: usize, input: InputKind, host: &mut dyn BrowserHost) -> RouteOutcome {
        let media = match self.store.get_item(index) {
            Ok(Entry::Media(media)) => media,
            Ok(Entry::Separator(_)) => return RouteOutcome::Ignored,
            Err(err) => {
                log::debug!("ignoring {:?}: {}", input, err);
                return RouteOutcome::Ignored;
            }
        };

        match input {
            InputKind::Tap if media.is_directory() => {
                host.browse(media, index);
                RouteOutcome::Browse
            }
            InputKind::Tap => {
                host.open_media(media);
                RouteOutcome::Open
            }
            InputKind::LongPress | InputKind::ContextAffordanceTap => {
                if !Presenter::has_context_affordance(media, self.metadata) {
                    return RouteOutcome::Ignored;
                }
                let anchor = if input == InputKind::LongPress { AnchorKind::Title } else { AnchorKind::Affordance };
                host.show_context_menu(anchor, index);
                RouteOutcome::ContextMenu(anchor)
            }
        }
    }
}
